use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};
use std::time::{Duration, Instant};

const BEEP_LENGTH: Duration = Duration::from_millis(120);
const BEEP_PITCH: f32 = 440.0;

struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for x in out.iter_mut() {
            *x = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// Plays a short tone each time the interpreter signals a beep.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
    started: Option<Instant>,
}

impl Beeper {
    pub fn new(context: &sdl2::Sdl) -> Result<Self, String> {
        let audio_subsystem = context.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let device = audio_subsystem.open_playback(None, &desired, |spec| SquareWave {
            phase_inc: BEEP_PITCH / spec.freq as f32,
            phase: 0.0,
            volume: 0.2,
        })?;
        Ok(Beeper {
            device,
            started: None,
        })
    }

    pub fn beep(&mut self) {
        self.device.resume();
        self.started = Some(Instant::now());
    }

    /// Silences the tone once it has played for long enough.
    pub fn update(&mut self) {
        if let Some(started) = self.started {
            if started.elapsed() >= BEEP_LENGTH {
                self.device.pause();
                self.started = None;
            }
        }
    }
}
