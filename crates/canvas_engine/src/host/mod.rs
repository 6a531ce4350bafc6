//! Host (windowing system) abstraction
//!
//! The host owns the cooperative event loop. It creates the rendering surface, fires a tick
//! once after each requested delay and delivers key events, one at a time, on the same
//! thread that runs the [`crate::Application`].

pub mod clock;
pub mod event_loop;

pub use clock::{Clock, ManualClock, SystemClock};
pub use event_loop::{EventLoop, EventSender};

use crate::input::KeyEvent;
use crate::surface::Surface;
use std::time::Duration;

/// Events delivered by a [`Host`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// A scheduled tick is due
    Tick,
    /// Key was pressed
    KeyPressed(KeyEvent),
    /// Key was released
    KeyReleased(KeyEvent),
    /// The window was asked to close
    CloseRequested,
}

/// Windowing-system collaborator
pub trait Host {
    /// Create the drawing surface for an application
    fn create_surface(&mut self, width: u32, height: u32) -> Box<dyn Surface>;

    /// Deliver one [`HostEvent::Tick`] after `delay`
    fn schedule_tick(&mut self, delay: Duration);

    /// Wait for the next event. `None` means the host has nothing left to deliver.
    fn next_event(&mut self) -> Option<HostEvent>;
}
