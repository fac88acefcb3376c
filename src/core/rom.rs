use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::consts;
use crate::core::error::Chip8Error;

/// A raw machine-code image, loaded at the program offset.
#[derive(Debug, Default, Clone)]
pub struct Rom {
    pub buffer: Vec<u8>,
}

impl Rom {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, Chip8Error> {
        Ok(Rom {
            buffer: read_image(path, consts::MAX_ROM_BYTES)?,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Chip8Error> {
        check_size(bytes.len(), consts::MAX_ROM_BYTES)?;
        Ok(Rom {
            buffer: bytes.to_vec(),
        })
    }
}

/// Reads a font table (16 glyphs of 5 bytes for the standard set). It has
/// to fit in the interpreter area below the program offset.
pub fn load_font(path: impl AsRef<Path>) -> Result<Vec<u8>, Chip8Error> {
    read_image(path, consts::MAX_FONT_BYTES)
}

fn read_image(path: impl AsRef<Path>, max_size: usize) -> Result<Vec<u8>, Chip8Error> {
    let mut file = File::open(path.as_ref())?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    check_size(buffer.len(), max_size)?;
    log::debug!(
        "Read {} byte image from {}",
        buffer.len(),
        path.as_ref().display()
    );
    Ok(buffer)
}

fn check_size(size: usize, max_size: usize) -> Result<(), Chip8Error> {
    if size > max_size {
        return Err(Chip8Error::ImageTooLarge { size, max_size });
    }
    Ok(())
}
