/// Errors that stop the machine. Malformed opcodes are not errors; they
/// decode to [`crate::Instruction::Unknown`] and execute as no-ops.
#[derive(Debug, thiserror::Error)]
pub enum Chip8Error {
    #[error("Stack overflow: subroutine call at maximum depth {depth}")]
    StackOverflow { depth: usize },

    #[error("Memory access out of bounds at address {address:#06X}")]
    MemoryFault { address: usize },

    #[error("Image is too large ({size} bytes), max size is {max_size} bytes")]
    ImageTooLarge { size: usize, max_size: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
