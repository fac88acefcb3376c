use crate::consts;
use crate::core::error::Chip8Error;
use crate::utils;

#[derive(Debug)]
pub struct Ram {
    buffer: [u8; consts::RAM_BYTES],
}

impl Default for Ram {
    fn default() -> Self {
        Ram {
            buffer: [0; consts::RAM_BYTES],
        }
    }
}

impl Ram {
    /// Copies `data` in at `offset`, truncating whatever does not fit.
    /// Returns the number of bytes written.
    pub fn load(&mut self, offset: usize, data: &[u8]) -> usize {
        let start = offset.min(consts::RAM_BYTES);
        let len = data.len().min(consts::RAM_BYTES - start);
        self.buffer[start..start + len].copy_from_slice(&data[..len]);
        len
    }

    pub fn read(&self, address: usize) -> Result<u8, Chip8Error> {
        self.buffer
            .get(address)
            .copied()
            .ok_or(Chip8Error::MemoryFault { address })
    }

    pub fn write(&mut self, address: usize, value: u8) -> Result<(), Chip8Error> {
        let cell = self
            .buffer
            .get_mut(address)
            .ok_or(Chip8Error::MemoryFault { address })?;
        *cell = value;
        Ok(())
    }

    /// Big-endian word at `address`.
    pub fn read_word(&self, address: usize) -> Result<u16, Chip8Error> {
        let high = self.read(address)? as u16;
        let low = self.read(address + 1)? as u16;
        Ok((high << 8) | low)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }
}

/// The 64x32 monochrome screen, row-major (`buffer[y][x]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    buffer: [[bool; consts::DISPLAY_WIDTH]; consts::DISPLAY_HEIGHT],
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        DisplayBuffer {
            buffer: [[false; consts::DISPLAY_WIDTH]; consts::DISPLAY_HEIGHT],
        }
    }
}

impl DisplayBuffer {
    /// Pixel state; coordinates wrap around both edges.
    pub fn get(&self, x: usize, y: usize) -> bool {
        let x = utils::wrap(x, consts::DISPLAY_WIDTH);
        let y = utils::wrap(y, consts::DISPLAY_HEIGHT);
        self.buffer[y][x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool; consts::DISPLAY_WIDTH]> {
        self.buffer.iter()
    }

    pub fn lit_count(&self) -> usize {
        self.buffer
            .iter()
            .map(|row| row.iter().filter(|&&px| px).count())
            .sum()
    }

    pub(crate) fn clear(&mut self) {
        self.buffer
            .iter_mut()
            .for_each(|row| *row = [false; consts::DISPLAY_WIDTH]);
    }

    /// XORs one pixel on. Returns true when a lit pixel was erased.
    pub(crate) fn flip(&mut self, x: usize, y: usize) -> bool {
        let x = utils::wrap(x, consts::DISPLAY_WIDTH);
        let y = utils::wrap(y, consts::DISPLAY_HEIGHT);
        let pixel = &mut self.buffer[y][x];
        let erased = *pixel;
        *pixel = !*pixel;
        erased
    }
}

/// Snapshot of the sixteen hex keys; bit `k` set while key `k` is held.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardBuffer {
    pub bits: u16,
}

impl KeyboardBuffer {
    pub fn is_pressed(&self, key: u8) -> bool {
        (key as usize) < consts::KEYBOARD_SIZE && self.bits & (1 << key) != 0
    }

    /// Lowest-numbered key currently held.
    pub fn first_pressed(&self) -> Option<u8> {
        (0..consts::KEYBOARD_SIZE as u8).find(|&key| self.is_pressed(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ram_load_truncates() {
        let mut ram = Ram::default();
        let written = ram.load(consts::RAM_BYTES - 2, &[1, 2, 3, 4]);
        assert_eq!(written, 2);
        assert_eq!(ram.as_slice()[consts::RAM_BYTES - 2..], [1, 2]);
    }

    #[test]
    fn test_ram_read_word_big_endian() -> Result<(), Chip8Error> {
        let mut ram = Ram::default();
        ram.load(4, &[0x04, 0x05]);
        assert_eq!(ram.read_word(4)?, 0x0405);
        Ok(())
    }

    #[test]
    fn test_ram_out_of_bounds() {
        let mut ram = Ram::default();
        assert!(matches!(
            ram.read(consts::RAM_BYTES),
            Err(Chip8Error::MemoryFault { address: 4096 })
        ));
        assert!(matches!(
            ram.read_word(consts::RAM_BYTES - 1),
            Err(Chip8Error::MemoryFault { address: 4096 })
        ));
        assert!(ram.write(0xFFFF, 1).is_err());
    }

    #[test]
    fn test_display_flip_reports_erase() {
        let mut display = DisplayBuffer::default();
        assert!(!display.flip(3, 4));
        assert!(display.get(3, 4));
        assert!(display.flip(3, 4));
        assert!(!display.get(3, 4));
    }

    #[test]
    fn test_display_flip_wraps() {
        let mut display = DisplayBuffer::default();
        display.flip(65, 33);
        assert!(display.get(1, 1));
        assert_eq!(display.lit_count(), 1);
        display.clear();
        assert_eq!(display.lit_count(), 0);
    }

    #[test]
    fn test_keyboard_buffer() {
        let keys = KeyboardBuffer { bits: 0b1000_0000_0001_1000 };
        assert!(keys.is_pressed(3));
        assert!(keys.is_pressed(15));
        assert!(!keys.is_pressed(0));
        assert!(!keys.is_pressed(16));
        assert!(!keys.is_pressed(0xFF));
        assert_eq!(keys.first_pressed(), Some(3));
        assert_eq!(KeyboardBuffer::default().first_pressed(), None);
    }
}
