//! Cooperative single-threaded event loop

use super::{Clock, Host, HostEvent, SystemClock};
use crate::input::KeyEvent;
use crate::surface::{MemorySurface, Surface};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

/// Headless [`Host`] backed by a timer queue and an input channel
///
/// Input events take priority over due ticks. Surfaces are [`MemorySurface`]s.
pub struct EventLoop<C: Clock = SystemClock> {
    clock: C,
    timers: BinaryHeap<Reverse<(Instant, u64)>>,
    sequence: u64,
    inbox: Receiver<HostEvent>,
    outbox: Sender<HostEvent>,
}

impl EventLoop<SystemClock> {
    /// Event loop running on wall-clock time
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for EventLoop<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> EventLoop<C> {
    /// Event loop running on the given clock
    pub fn with_clock(clock: C) -> Self {
        let (outbox, inbox) = mpsc::channel();
        Self {
            clock,
            timers: BinaryHeap::new(),
            sequence: 0,
            inbox,
            outbox,
        }
    }

    /// Handle for injecting input, usable from any thread
    pub fn sender(&self) -> EventSender {
        EventSender { outbox: self.outbox.clone() }
    }

    /// The loop's clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of ticks waiting to fire
    pub fn pending_ticks(&self) -> usize {
        self.timers.len()
    }
}

impl<C: Clock> Host for EventLoop<C> {
    fn create_surface(&mut self, width: u32, height: u32) -> Box<dyn Surface> {
        Box::new(MemorySurface::new(width, height))
    }

    fn schedule_tick(&mut self, delay: Duration) {
        let deadline = self.clock.now() + delay;
        self.sequence += 1;
        self.timers.push(Reverse((deadline, self.sequence)));
        log::trace!("Tick scheduled in {:?}", delay);
    }

    fn next_event(&mut self) -> Option<HostEvent> {
        loop {
            if let Ok(event) = self.inbox.try_recv() {
                return Some(event);
            }

            let Reverse((deadline, _)) = *self.timers.peek()?;
            if deadline <= self.clock.now() {
                self.timers.pop();
                return Some(HostEvent::Tick);
            }

            if let Some(event) = self.clock.park(deadline, &self.inbox) {
                return Some(event);
            }
        }
    }
}

/// Cloneable input injector for an [`EventLoop`]
#[derive(Debug, Clone)]
pub struct EventSender {
    outbox: Sender<HostEvent>,
}

impl EventSender {
    /// Queue a raw event. Returns `false` if the loop is gone.
    pub fn send(&self, event: HostEvent) -> bool {
        self.outbox.send(event).is_ok()
    }

    /// Queue a key press
    pub fn press(&self, key: impl Into<KeyEvent>) -> bool {
        self.send(HostEvent::KeyPressed(key.into()))
    }

    /// Queue a key release
    pub fn release(&self, key: impl Into<KeyEvent>) -> bool {
        self.send(HostEvent::KeyReleased(key.into()))
    }

    /// Queue a press followed by a release
    pub fn tap(&self, key: impl Into<KeyEvent>) -> bool {
        let key = key.into();
        self.press(key) && self.release(key)
    }

    /// Ask the window to close
    pub fn close(&self) -> bool {
        self.send(HostEvent::CloseRequested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ManualClock;
    use crate::input::KeyCode;

    #[test]
    fn test_dry_loop_returns_none() {
        let mut host = EventLoop::with_clock(ManualClock::new());
        assert_eq!(host.next_event(), None);
    }

    #[test]
    fn test_ticks_fire_in_deadline_order() {
        let mut host = EventLoop::with_clock(ManualClock::new());
        host.schedule_tick(Duration::from_millis(50));
        host.schedule_tick(Duration::ZERO);
        assert_eq!(host.pending_ticks(), 2);

        assert_eq!(host.next_event(), Some(HostEvent::Tick));
        assert_eq!(host.clock().elapsed(), Duration::ZERO);
        assert_eq!(host.next_event(), Some(HostEvent::Tick));
        assert_eq!(host.clock().elapsed(), Duration::from_millis(50));
        assert_eq!(host.next_event(), None);
    }

    #[test]
    fn test_input_before_due_tick() {
        let mut host = EventLoop::with_clock(ManualClock::new());
        host.schedule_tick(Duration::ZERO);
        let sender = host.sender();
        assert!(sender.tap(KeyCode::Space));

        assert_eq!(host.next_event(), Some(HostEvent::KeyPressed(KeyEvent::new(KeyCode::Space))));
        assert_eq!(host.next_event(), Some(HostEvent::KeyReleased(KeyEvent::new(KeyCode::Space))));
        assert_eq!(host.next_event(), Some(HostEvent::Tick));
    }

    #[test]
    fn test_surface_has_requested_size() {
        let mut host = EventLoop::with_clock(ManualClock::new());
        let surface = host.create_surface(320, 200);
        assert_eq!(surface.size(), (320, 200));
        assert_eq!(surface.item_count(), 0);
    }
}
