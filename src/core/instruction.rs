use crate::utils;

/// One decoded CHIP-8 instruction. `x`/`y` are register indices, `nn` an
/// immediate byte, `nnn` a 12-bit address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    ClearScreen,
    Return,
    Jump { nnn: u16 },
    JumpOffset { nnn: u16 },
    Call { nnn: u16 },
    SkipEqImm { x: usize, nn: u8 },
    SkipNeImm { x: usize, nn: u8 },
    SkipEqReg { x: usize, y: usize },
    SkipNeReg { x: usize, y: usize },
    SetImm { x: usize, nn: u8 },
    AddImm { x: usize, nn: u8 },
    Copy { x: usize, y: usize },
    Or { x: usize, y: usize },
    And { x: usize, y: usize },
    Xor { x: usize, y: usize },
    Add { x: usize, y: usize },
    Sub { x: usize, y: usize },
    ShiftRight { x: usize, y: usize },
    SubReverse { x: usize, y: usize },
    ShiftLeft { x: usize, y: usize },
    SetIndex { nnn: u16 },
    Random { x: usize, nn: u8 },
    Draw { x: usize, y: usize, n: u8 },
    SkipKeyPressed { x: usize },
    SkipKeyReleased { x: usize },
    ReadDelay { x: usize },
    WaitKey { x: usize },
    SetDelay { x: usize },
    SetSound { x: usize },
    AddIndex { x: usize },
    FontGlyph { x: usize },
    StoreBcd { x: usize },
    StoreRegs { x: usize },
    LoadRegs { x: usize },
    /// Encoding outside the instruction set; executes as a no-op.
    Unknown(u16),
}

impl Instruction {
    pub fn decode(opcode: u16) -> Self {
        let (op, x, y, n) = utils::nibble_split(opcode);
        let nn = (opcode & 0x00FF) as u8;
        let nnn = opcode & 0x0FFF;
        let (x, y) = (x as usize, y as usize);

        match (op, x, y, n) {
            (0, 0, 0xE, 0) => Instruction::ClearScreen,
            (0, 0, 0xE, 0xE) => Instruction::Return,
            (1, _, _, _) => Instruction::Jump { nnn },
            (2, _, _, _) => Instruction::Call { nnn },
            (3, _, _, _) => Instruction::SkipEqImm { x, nn },
            (4, _, _, _) => Instruction::SkipNeImm { x, nn },
            (5, _, _, 0) => Instruction::SkipEqReg { x, y },
            (6, _, _, _) => Instruction::SetImm { x, nn },
            (7, _, _, _) => Instruction::AddImm { x, nn },
            (8, _, _, 0) => Instruction::Copy { x, y },
            (8, _, _, 1) => Instruction::Or { x, y },
            (8, _, _, 2) => Instruction::And { x, y },
            (8, _, _, 3) => Instruction::Xor { x, y },
            (8, _, _, 4) => Instruction::Add { x, y },
            (8, _, _, 5) => Instruction::Sub { x, y },
            (8, _, _, 6) => Instruction::ShiftRight { x, y },
            (8, _, _, 7) => Instruction::SubReverse { x, y },
            (8, _, _, 0xE) => Instruction::ShiftLeft { x, y },
            (9, _, _, 0) => Instruction::SkipNeReg { x, y },
            (0xA, _, _, _) => Instruction::SetIndex { nnn },
            (0xB, _, _, _) => Instruction::JumpOffset { nnn },
            (0xC, _, _, _) => Instruction::Random { x, nn },
            (0xD, _, _, _) => Instruction::Draw { x, y, n },
            (0xE, _, 9, 0xE) => Instruction::SkipKeyPressed { x },
            (0xE, _, 0xA, 1) => Instruction::SkipKeyReleased { x },
            (0xF, _, 0, 7) => Instruction::ReadDelay { x },
            (0xF, _, 0, 0xA) => Instruction::WaitKey { x },
            (0xF, _, 1, 5) => Instruction::SetDelay { x },
            (0xF, _, 1, 8) => Instruction::SetSound { x },
            (0xF, _, 1, 0xE) => Instruction::AddIndex { x },
            (0xF, _, 2, 9) => Instruction::FontGlyph { x },
            (0xF, _, 3, 3) => Instruction::StoreBcd { x },
            (0xF, _, 5, 5) => Instruction::StoreRegs { x },
            (0xF, _, 6, 5) => Instruction::LoadRegs { x },
            _ => Instruction::Unknown(opcode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Instruction::*;
    use super::*;

    #[test]
    fn test_decode_full_set() {
        let cases = [
            (0x00E0, ClearScreen),
            (0x00EE, Return),
            (0x1234, Jump { nnn: 0x234 }),
            (0x2456, Call { nnn: 0x456 }),
            (0x342A, SkipEqImm { x: 4, nn: 0x2A }),
            (0x4A75, SkipNeImm { x: 0xA, nn: 0x75 }),
            (0x5AE0, SkipEqReg { x: 0xA, y: 0xE }),
            (0x63F5, SetImm { x: 3, nn: 0xF5 }),
            (0x7B12, AddImm { x: 0xB, nn: 0x12 }),
            (0x8590, Copy { x: 5, y: 9 }),
            (0x8101, Or { x: 1, y: 0 }),
            (0x8642, And { x: 6, y: 4 }),
            (0x87F3, Xor { x: 7, y: 0xF }),
            (0x8264, Add { x: 2, y: 6 }),
            (0x8C45, Sub { x: 0xC, y: 4 }),
            (0x8126, ShiftRight { x: 1, y: 2 }),
            (0x86D7, SubReverse { x: 6, y: 0xD }),
            (0x8E3E, ShiftLeft { x: 0xE, y: 3 }),
            (0x9990, SkipNeReg { x: 9, y: 9 }),
            (0xA568, SetIndex { nnn: 0x568 }),
            (0xBABC, JumpOffset { nnn: 0xABC }),
            (0xC5AF, Random { x: 5, nn: 0xAF }),
            (0xD7B3, Draw { x: 7, y: 0xB, n: 3 }),
            (0xE49E, SkipKeyPressed { x: 4 }),
            (0xECA1, SkipKeyReleased { x: 0xC }),
            (0xF907, ReadDelay { x: 9 }),
            (0xFD0A, WaitKey { x: 0xD }),
            (0xF315, SetDelay { x: 3 }),
            (0xF718, SetSound { x: 7 }),
            (0xF91E, AddIndex { x: 9 }),
            (0xFF29, FontGlyph { x: 0xF }),
            (0xF533, StoreBcd { x: 5 }),
            (0xF655, StoreRegs { x: 6 }),
            (0xF265, LoadRegs { x: 2 }),
        ];
        for (opcode, expected) in cases {
            assert_eq!(Instruction::decode(opcode), expected, "{:#06X}", opcode);
        }
    }

    #[test]
    fn test_decode_unknown_encodings() {
        for opcode in [
            0x0000, 0x0123, 0x01E0, 0x5121, 0x912F, 0x8128, 0x812F, 0xE19F, 0xE1A2, 0xF1FF,
        ] {
            assert_eq!(Instruction::decode(opcode), Unknown(opcode), "{:#06X}", opcode);
        }
    }
}
