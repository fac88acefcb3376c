//! A CHIP-8 virtual machine core.
//!
//! The [`Processor`] owns every piece of machine state and is advanced one
//! instruction per [`Processor::step`]. Rendering, keyboard mapping, audio and
//! file loading belong to the caller; see the `frontend` feature for an SDL2
//! host.

pub mod consts;
pub mod core;
mod utils;

pub use crate::core::error::Chip8Error;
pub use crate::core::instruction::Instruction;
pub use crate::core::processor::{Compat, Processor};
pub use crate::core::ram::DisplayBuffer;
