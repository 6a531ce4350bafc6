//! Clocks driving the [`super::EventLoop`]

use super::HostEvent;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

/// Time source for the event loop
pub trait Clock {
    /// Current time
    fn now(&self) -> Instant;

    /// Wait until `deadline`, returning early with any event that arrives on `inbox`
    fn park(&mut self, deadline: Instant, inbox: &Receiver<HostEvent>) -> Option<HostEvent>;
}

/// Wall clock; parking blocks the thread
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn park(&mut self, deadline: Instant, inbox: &Receiver<HostEvent>) -> Option<HostEvent> {
        let timeout = deadline.saturating_duration_since(Instant::now());
        match inbox.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
                None
            }
        }
    }
}

/// Simulated clock; parking jumps straight to the deadline
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    origin: Instant,
    offset: Duration,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// Create a clock starting at zero elapsed time
    pub fn new() -> Self {
        Self { origin: Instant::now(), offset: Duration::ZERO }
    }

    /// Simulated time since the clock was created
    pub fn elapsed(&self) -> Duration {
        self.offset
    }

    /// Move the clock forward
    pub fn advance(&mut self, by: Duration) {
        self.offset += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset
    }

    fn park(&mut self, deadline: Instant, _inbox: &Receiver<HostEvent>) -> Option<HostEvent> {
        let target = deadline.saturating_duration_since(self.origin);
        if target > self.offset {
            self.offset = target;
        }
        None
    }
}
