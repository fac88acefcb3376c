pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;
pub const OP_CODE_BYTES: u16 = 2;
pub const RAM_BYTES: usize = 4096;
pub const REG_COUNT: usize = 16;
pub const FLAG_REG: usize = 0xF;
pub const KEYBOARD_SIZE: usize = 16;

/// Call stack slots counting the live PC, so one fewer return address fits.
pub const STACK_SIZE: usize = 255;
pub const MAX_CALL_DEPTH: usize = STACK_SIZE - 1;

pub const PROG_OFFSET: usize = 0x200;
pub const MAX_ROM_BYTES: usize = RAM_BYTES - PROG_OFFSET;
pub const MAX_FONT_BYTES: usize = PROG_OFFSET;
pub const GLYPH_BYTES: u16 = 5;
pub const FONT_SET_SIZE: usize = 80;

pub const TIMER_HZ: u64 = 60;
pub const MILLIS_PER_SECOND: u64 = 1000;

pub const SCALE_FACTOR: u32 = 10;
pub const STEP_INTERVAL_MS: u128 = 1000 / 500;

pub const FONT_SET: [u8; FONT_SET_SIZE] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
