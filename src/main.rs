mod external;

use chip8vm::core::rom;
use chip8vm::{consts, Compat, Processor};
use clap::Parser;
use external::audio::Beeper;
use external::input::{KeyboardDriver, Poll};
use external::output::DisplayDriver;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

/// Runs a CHIP-8 program in an SDL2 window.
///
/// Some ROMs need compatibility flags to behave.
#[derive(Parser, Debug)]
#[command(name = "chip8vm", version)]
struct Args {
    /// Program image, loaded at 0x200
    program: PathBuf,

    /// FX55/FX65 leave the index register unchanged
    #[arg(long = "load_store")]
    load_store: bool,

    /// 8XY6/8XYE shift VX in place instead of VY
    #[arg(long)]
    shift: bool,

    /// Font image to use instead of the built-in hex font
    #[arg(long)]
    font: Option<PathBuf>,

    /// Address the font is loaded at
    #[arg(long, default_value_t = 0, value_parser = parse_addr)]
    font_offset: u16,
}

fn parse_addr(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    match parsed {
        Ok(addr) if (addr as usize) < consts::PROG_OFFSET => Ok(addr),
        Ok(addr) => Err(format!(
            "font offset {:#05X} overlaps the program area",
            addr
        )),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let prog = rom::Rom::new(&args.program)?;
    let font = match &args.font {
        Some(path) => rom::load_font(path)?,
        None => consts::FONT_SET.to_vec(),
    };

    let mut chip8 = Processor::with_font_offset(&prog.buffer, &font, args.font_offset);
    if args.load_store {
        chip8.enable_compat(Compat::LoadStore);
        log::info!("Enabled --load_store");
    }
    if args.shift {
        chip8.enable_compat(Compat::Shift);
        log::info!("Enabled --shift");
    }

    let context = sdl2::init()?;
    let mut display = DisplayDriver::new(&context)?;
    let mut keyboard = KeyboardDriver::new(&context)?;
    let mut beeper = Beeper::new(&context)?;

    let mut done = false;
    let mut last_step = Instant::now();
    loop {
        let keys = match keyboard.poll() {
            Poll::Keys(bits) => bits,
            Poll::Quit => break,
        };

        let elapsed = last_step.elapsed().as_millis();
        if !done && elapsed > consts::STEP_INTERVAL_MS {
            done = chip8.step(keys, u32::try_from(elapsed).unwrap_or(u32::MAX))?;
            if done {
                log::info!("Program counter left memory, halting");
            }
            if chip8.beep() {
                beeper.beep();
            }
            last_step = Instant::now();
        }
        beeper.update();

        display.draw(chip8.display())?;
        thread::sleep(Duration::from_millis(1));
    }
    Ok(())
}
