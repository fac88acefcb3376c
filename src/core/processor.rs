use crate::consts;
use crate::core::error::Chip8Error;
use crate::core::instruction::Instruction;
use crate::core::ram::{DisplayBuffer, KeyboardBuffer, Ram};
use crate::core::stack::CallStack;
use crate::core::timer::Timers;
use rand::rngs::ThreadRng;
use rand::Rng;

/// Legacy behaviours that ROMs disagree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compat {
    /// `FX55`/`FX65` leave the index register where it was.
    LoadStore,
    /// `8XY6`/`8XYE` shift VX in place instead of reading VY.
    Shift,
}

#[derive(Default, Debug, Clone, Copy)]
struct CompatFlags {
    load_store: bool,
    shift: bool,
}

#[derive(Default, Debug)]
pub struct Processor {
    registers: [u8; consts::REG_COUNT],
    idx_register: u16,
    pc: u16,
    stack: CallStack,
    timers: Timers,
    ram: Ram,
    display_buffer: DisplayBuffer,
    keyboard_buffer: KeyboardBuffer,
    compat: CompatFlags,
    font_offset: u16,
    waiting_reg: Option<usize>,
    beep: bool,
    rng: ThreadRng,
}

impl Processor {
    /// Font at address 0, program at 0x200.
    pub fn new(program: &[u8], font: &[u8]) -> Self {
        Self::with_font_offset(program, font, 0)
    }

    pub fn with_font_offset(program: &[u8], font: &[u8], font_offset: u16) -> Self {
        let mut processor = Processor {
            pc: consts::PROG_OFFSET as u16,
            font_offset,
            rng: rand::thread_rng(),
            ..Default::default()
        };
        let written = processor.ram.load(font_offset as usize, font);
        if written < font.len() {
            log::warn!("Font truncated to {} of {} bytes", written, font.len());
        }
        let written = processor.ram.load(consts::PROG_OFFSET, program);
        if written < program.len() {
            log::warn!("Program truncated to {} of {} bytes", written, program.len());
        }
        processor
    }

    /// Turns a compatibility behaviour on for the rest of the session.
    pub fn enable_compat(&mut self, setting: Compat) {
        match setting {
            Compat::LoadStore => self.compat.load_store = true,
            Compat::Shift => self.compat.shift = true,
        }
        log::debug!("Enabled compatibility setting {:?}", setting);
    }

    /// Runs one instruction.
    ///
    /// `input` is the keypad bitmask (bit `k` set while key `k` is held) and
    /// `elapsed_ms` the wall-clock time since the previous call. While an
    /// `FX0A` is waiting and no key is held this returns immediately without
    /// touching the timers. Returns `Ok(true)` once the program counter has
    /// left addressable memory.
    pub fn step(&mut self, input: u16, elapsed_ms: u32) -> Result<bool, Chip8Error> {
        self.keyboard_buffer.bits = input;
        self.beep = false;

        if let Some(reg) = self.waiting_reg {
            match self.keyboard_buffer.first_pressed() {
                Some(key) => {
                    log::debug!("Key {:X} pressed, stored in V{:X}", key, reg);
                    self.registers[reg] = key;
                    self.waiting_reg = None;
                }
                None => return Ok(false),
            }
        }

        self.beep = self.timers.advance(elapsed_ms);

        let address = self.pc;
        let opcode = self.fetch()?;
        let instruction = Instruction::decode(opcode);
        log::trace!("{:#05X}: {:04X} {:?}", address, opcode, instruction);
        self.execute(instruction)?;

        Ok(self.is_halted())
    }

    fn fetch(&mut self) -> Result<u16, Chip8Error> {
        let opcode = self.ram.read_word(self.pc as usize)?;
        self.pc = self.pc.wrapping_add(consts::OP_CODE_BYTES);
        Ok(opcode)
    }

    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.pc = self.pc.wrapping_add(consts::OP_CODE_BYTES);
        }
    }

    fn shift_source(&self, x: usize, y: usize) -> usize {
        if self.compat.shift {
            x
        } else {
            y
        }
    }

    fn advance_index_after_bulk(&mut self, x: usize) {
        if !self.compat.load_store {
            self.idx_register = self.idx_register.wrapping_add(x as u16 + 1);
        }
    }

    fn execute(&mut self, instruction: Instruction) -> Result<(), Chip8Error> {
        match instruction {
            Instruction::ClearScreen => {
                self.display_buffer.clear();
                log::debug!("Cleared screen");
            }
            Instruction::Return => match self.stack.pop() {
                Some(return_addr) => self.pc = return_addr,
                None => log::debug!("Return with empty call stack ignored"),
            },

            // Jumps and subroutines
            Instruction::Jump { nnn } => {
                self.pc = nnn;
            }
            Instruction::JumpOffset { nnn } => {
                self.pc = nnn.wrapping_add(self.registers[0] as u16);
            }
            Instruction::Call { nnn } => {
                self.stack.push(self.pc)?;
                self.pc = nnn;
                log::debug!(
                    "Called subroutine at {:#05X} (depth {})",
                    nnn,
                    self.stack.depth()
                );
            }

            // Conditional skips
            Instruction::SkipEqImm { x, nn } => self.skip_if(self.registers[x] == nn),
            Instruction::SkipNeImm { x, nn } => self.skip_if(self.registers[x] != nn),
            Instruction::SkipEqReg { x, y } => {
                self.skip_if(self.registers[x] == self.registers[y])
            }
            Instruction::SkipNeReg { x, y } => {
                self.skip_if(self.registers[x] != self.registers[y])
            }
            Instruction::SkipKeyPressed { x } => {
                self.skip_if(self.keyboard_buffer.is_pressed(self.registers[x]))
            }
            Instruction::SkipKeyReleased { x } => {
                self.skip_if(!self.keyboard_buffer.is_pressed(self.registers[x]))
            }

            // Set register
            Instruction::SetImm { x, nn } => {
                self.registers[x] = nn;
            }
            Instruction::AddImm { x, nn } => {
                self.registers[x] = self.registers[x].wrapping_add(nn);
            }
            Instruction::Copy { x, y } => {
                self.registers[x] = self.registers[y];
            }

            // Logical instructions
            Instruction::Or { x, y } => {
                self.registers[x] |= self.registers[y];
            }
            Instruction::And { x, y } => {
                self.registers[x] &= self.registers[y];
            }
            Instruction::Xor { x, y } => {
                self.registers[x] ^= self.registers[y];
            }

            // Add/subtract instructions. VF is written first, so a result
            // targeting VF overwrites the flag.
            Instruction::Add { x, y } => {
                let (vx, vy) = (self.registers[x], self.registers[y]);
                self.registers[consts::FLAG_REG] = ((vx as u16 + vy as u16) > 255) as u8;
                self.registers[x] = vx.wrapping_add(vy);
            }
            Instruction::Sub { x, y } => {
                let (vx, vy) = (self.registers[x], self.registers[y]);
                self.registers[consts::FLAG_REG] = (vx >= vy) as u8;
                self.registers[x] = vx.wrapping_sub(vy);
            }
            Instruction::SubReverse { x, y } => {
                let (vx, vy) = (self.registers[x], self.registers[y]);
                self.registers[consts::FLAG_REG] = (vx < vy) as u8;
                self.registers[x] = vy.wrapping_sub(vx);
            }

            // Shifting instructions
            Instruction::ShiftRight { x, y } => {
                let value = self.registers[self.shift_source(x, y)];
                self.registers[consts::FLAG_REG] = value & 0b0000_0001;
                self.registers[x] = value >> 1;
            }
            Instruction::ShiftLeft { x, y } => {
                let value = self.registers[self.shift_source(x, y)];
                self.registers[consts::FLAG_REG] = (value & 0b1000_0000) >> 7;
                self.registers[x] = value << 1;
            }

            Instruction::SetIndex { nnn } => {
                self.idx_register = nnn;
            }

            // Generate randomness
            Instruction::Random { x, nn } => {
                let rand_val: u8 = self.rng.gen();
                self.registers[x] = nn & rand_val;
            }

            Instruction::Draw { x, y, n } => self.draw(x, y, n)?,

            // Timers and keypad
            Instruction::ReadDelay { x } => {
                self.registers[x] = self.timers.delay;
            }
            Instruction::SetDelay { x } => {
                self.timers.delay = self.registers[x];
            }
            Instruction::SetSound { x } => {
                self.timers.sound = self.registers[x];
            }
            Instruction::WaitKey { x } => {
                self.waiting_reg = Some(x);
                log::debug!("Waiting for key into V{:X}", x);
            }

            // Update index register
            Instruction::AddIndex { x } => {
                self.idx_register = self.idx_register.wrapping_add(self.registers[x] as u16);
            }
            Instruction::FontGlyph { x } => {
                let glyph = (self.registers[x] & 0x0F) as u16;
                self.idx_register = self
                    .font_offset
                    .wrapping_add(glyph * consts::GLYPH_BYTES);
            }

            // Binary byte to decimal digits, hundreds first
            Instruction::StoreBcd { x } => {
                let num = self.registers[x];
                let base = self.idx_register as usize;
                self.ram.write(base, num / 100)?;
                self.ram.write(base + 1, (num % 100) / 10)?;
                self.ram.write(base + 2, num % 10)?;
            }

            // Store and load memory
            Instruction::StoreRegs { x } => {
                let base = self.idx_register as usize;
                for i in 0..=x {
                    self.ram.write(base + i, self.registers[i])?;
                }
                self.advance_index_after_bulk(x);
            }
            Instruction::LoadRegs { x } => {
                let base = self.idx_register as usize;
                for i in 0..=x {
                    self.registers[i] = self.ram.read(base + i)?;
                }
                self.advance_index_after_bulk(x);
            }

            Instruction::Unknown(opcode) => {
                log::warn!(
                    "Unimplemented or invalid opcode {:04X} at {:#05X}, ignoring",
                    opcode,
                    self.pc.wrapping_sub(consts::OP_CODE_BYTES)
                );
            }
        }
        Ok(())
    }

    /// XORs an 8-pixel-wide, `n`-row sprite from I onto the screen at
    /// (VX, VY), wrapping on both axes. VF ends up 1 if any lit pixel was
    /// erased.
    fn draw(&mut self, x: usize, y: usize, n: u8) -> Result<(), Chip8Error> {
        let x_coord = self.registers[x] as usize % consts::DISPLAY_WIDTH;
        let y_coord = self.registers[y] as usize % consts::DISPLAY_HEIGHT;
        self.registers[consts::FLAG_REG] = 0;

        for row in 0..n as usize {
            let sprite_row = self.ram.read(self.idx_register as usize + row)?;
            for shift_pos in 0..8 {
                if sprite_row & (0x80 >> shift_pos) == 0 {
                    continue;
                }
                if self.display_buffer.flip(x_coord + shift_pos, y_coord + row) {
                    self.registers[consts::FLAG_REG] = 1;
                }
            }
        }
        log::trace!(
            "Drew {} row sprite at ({}, {})",
            n,
            x_coord,
            y_coord
        );
        Ok(())
    }

    pub fn display(&self) -> &DisplayBuffer {
        &self.display_buffer
    }

    /// True for the step on which the sound timer ran out.
    pub fn beep(&self) -> bool {
        self.beep
    }

    pub fn is_halted(&self) -> bool {
        self.pc as usize >= consts::RAM_BYTES
    }

    pub fn is_waiting_for_key(&self) -> bool {
        self.waiting_reg.is_some()
    }

    pub fn registers(&self) -> &[u8; consts::REG_COUNT] {
        &self.registers
    }

    pub fn idx_register(&self) -> u16 {
        self.idx_register
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn call_depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn delay_timer(&self) -> u8 {
        self.timers.delay
    }

    pub fn sound_timer(&self) -> u8 {
        self.timers.sound
    }

    pub fn memory(&self) -> &[u8] {
        self.ram.as_slice()
    }
}
