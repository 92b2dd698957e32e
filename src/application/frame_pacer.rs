use std::time::{Duration, Instant};

/// Caps the frame loop at a fixed tick rate by sleeping out the rest
/// of each tick.
pub struct FramePacer {
    interval: Duration,
    last_tick: Instant,
}

impl FramePacer {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / ticks_per_second.max(1),
            last_tick: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left in the current tick as of `now`
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval.saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Block until the current tick is over, then start the next one
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last_tick = Instant::now();
    }
}
