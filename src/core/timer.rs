use crate::consts;

/// Delay and sound timers, decremented at 60 Hz of caller-reported time.
#[derive(Default, Debug)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
    elapsed_ms: u64,
}

impl Timers {
    /// Adds `elapsed_ms` to the accumulator and performs at most one tick
    /// once a 60 Hz period has passed. Surplus time is discarded, not carried.
    /// Returns true when the sound timer ran out on this tick.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms as u64);
        if self.elapsed_ms.saturating_mul(consts::TIMER_HZ) <= consts::MILLIS_PER_SECOND {
            return false;
        }
        self.elapsed_ms = 0;

        if self.delay > 0 {
            self.delay -= 1;
        }
        if self.sound > 0 {
            self.sound -= 1;
            return self.sound == 0;
        }
        false
    }
}
