//! Start/stop/reset elapsed-time accumulator for the timer sketches.
//!
//! Time is passed in explicitly as milliseconds since the sketch started, so
//! a stopwatch never reads a clock of its own and renders are reproducible.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stopwatch {
    running: bool,
    started_at_ms: u64,
    accumulated_ms: u64,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin a run at `now_ms`. Starting a running stopwatch does nothing.
    pub fn start(&mut self, now_ms: u64) {
        if !self.running {
            self.running = true;
            self.started_at_ms = now_ms;
        }
    }

    /// End the current run and bank its time. Stopping a stopped stopwatch
    /// does nothing.
    pub fn stop(&mut self, now_ms: u64) {
        if self.running {
            self.accumulated_ms += now_ms.saturating_sub(self.started_at_ms);
            self.running = false;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total banked time plus the current run, if any.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        if self.running {
            self.accumulated_ms + now_ms.saturating_sub(self.started_at_ms)
        } else {
            self.accumulated_ms
        }
    }

    /// Elapsed time in hours.
    pub fn elapsed_hours(&self, now_ms: u64) -> f64 {
        self.elapsed_ms(now_ms) as f64 / 3_600_000.0
    }
}
