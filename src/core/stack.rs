use crate::consts;
use crate::core::error::Chip8Error;

/// Return addresses of the active subroutine calls, innermost last.
#[derive(Debug)]
pub struct CallStack {
    frames: [u16; consts::MAX_CALL_DEPTH],
    depth: usize,
}

impl Default for CallStack {
    fn default() -> Self {
        CallStack {
            frames: [0; consts::MAX_CALL_DEPTH],
            depth: 0,
        }
    }
}

impl CallStack {
    pub fn push(&mut self, return_addr: u16) -> Result<(), Chip8Error> {
        let slot = self
            .frames
            .get_mut(self.depth)
            .ok_or(Chip8Error::StackOverflow { depth: self.depth })?;
        *slot = return_addr;
        self.depth += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Option<u16> {
        if self.depth == 0 {
            return None;
        }
        self.depth -= 1;
        Some(self.frames[self.depth])
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}
