/// Splits a big-endian opcode into its four nibbles, most significant first.
pub fn nibble_split(opcode: u16) -> (u8, u8, u8, u8) {
    (
        ((opcode & 0xF000) >> 12) as u8,
        ((opcode & 0x0F00) >> 8) as u8,
        ((opcode & 0x00F0) >> 4) as u8,
        (opcode & 0x000F) as u8,
    )
}

pub fn wrap(coord: usize, extent: usize) -> usize {
    coord % extent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble_split() {
        assert_eq!(nibble_split(0xD12F), (0xD, 0x1, 0x2, 0xF));
        assert_eq!(nibble_split(0x00E0), (0, 0, 0xE, 0));
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(63, 64), 63);
        assert_eq!(wrap(64, 64), 0);
        assert_eq!(wrap(70, 64), 6);
        assert_eq!(wrap(33, 32), 1);
    }
}
