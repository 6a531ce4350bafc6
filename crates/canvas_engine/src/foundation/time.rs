//! Time management utilities

use std::time::{Duration, Instant};

/// Measures how long each animation tick takes
///
/// The loop budget is one tick interval; anything slower shows up as stutter.
pub struct TickTimer {
    budget: Duration,
    started: Option<Instant>,
    last: Duration,
    total: Duration,
    tick_count: u64,
    overruns: u64,
}

impl TickTimer {
    /// Create a timer with the given per-tick budget
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            started: None,
            last: Duration::ZERO,
            total: Duration::ZERO,
            tick_count: 0,
            overruns: 0,
        }
    }

    /// Mark the start of a tick
    pub fn begin(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Mark the end of a tick and return its duration
    ///
    /// Ticks that exceed the budget are counted and logged.
    pub fn end(&mut self) -> Duration {
        let elapsed = self.started.take().map_or(Duration::ZERO, |start| start.elapsed());
        self.record(elapsed);
        elapsed
    }

    fn record(&mut self, elapsed: Duration) {
        self.last = elapsed;
        self.total += elapsed;
        self.tick_count += 1;
        if elapsed > self.budget {
            self.overruns += 1;
            log::warn!(
                "Tick {} took {:?}, over the {:?} budget",
                self.tick_count, elapsed, self.budget
            );
        }
    }

    /// Duration of the most recent tick
    pub fn last(&self) -> Duration {
        self.last
    }

    /// Number of completed ticks
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Number of ticks that ran over budget
    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// Average tick duration
    pub fn average(&self) -> Duration {
        if self.tick_count == 0 {
            Duration::ZERO
        } else {
            self.total / u32::try_from(self.tick_count).unwrap_or(u32::MAX)
        }
    }
}
