//! Canvas elements
//!
//! An [`Element`] is anything drawn on the canvas: it has a position, a visibility flag and
//! the [`SurfaceHandle`] of its primitive. The handle is created exactly once, when the
//! element is constructed, by the payload's [`CanvasObject::init_canvas_object`]; the element
//! never owns the primitive itself, the surface does.
//!
//! Game objects are usually a struct wrapping a [`Text`] or [`Sprite`] that forwards
//! [`Element::state`] to it and overrides [`Element::update`]:
//!
//! ```rust,no_run
//! use canvas_engine::prelude::*;
//!
//! struct Ball {
//!     sprite: Sprite,
//!     velocity: Vec2,
//! }
//!
//! impl Element for Ball {
//!     fn state(&self) -> &ElementState { self.sprite.state() }
//!     fn state_mut(&mut self) -> &mut ElementState { self.sprite.state_mut() }
//!
//!     fn update(&mut self, _frame: &Frame) {
//!         let velocity = self.velocity;
//!         self.state_mut().translate(velocity);
//!     }
//! }
//! ```

pub mod sprite;
pub mod text;

pub use sprite::Sprite;
pub use text::Text;

pub use crate::foundation::any::AsAny;
use crate::foundation::math::{Point2, Rect, Vec2};
use crate::surface::{Surface, SurfaceError, SurfaceHandle};
use std::time::Duration;

/// Payload that knows how to put itself on a surface
pub trait CanvasObject {
    /// Create the primitive for this payload centered on `position`
    fn init_canvas_object(
        &self,
        surface: &mut dyn Surface,
        position: Point2,
    ) -> Result<SurfaceHandle, SurfaceError>;
}

/// Read-only information about the tick being processed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Tick number, starting at 1
    pub tick: u64,
    /// Canvas area
    pub bounds: Rect,
    /// Configured delay between ticks
    pub delay: Duration,
}

/// State shared by every element
#[derive(Debug, Clone, PartialEq)]
pub struct ElementState {
    position: Point2,
    visible: bool,
    handle: SurfaceHandle,
    pub(crate) initialized: bool,
}

impl ElementState {
    /// Create the element's primitive on `surface` at `(x, y)`
    pub fn new<O: CanvasObject + ?Sized>(
        surface: &mut dyn Surface,
        object: &O,
        x: f32,
        y: f32,
    ) -> Result<Self, SurfaceError> {
        let position = Point2::new(x, y);
        let handle = object.init_canvas_object(surface, position)?;
        Ok(Self {
            position,
            visible: true,
            handle,
            initialized: false,
        })
    }

    /// Current position
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// X coordinate
    pub fn x(&self) -> f32 {
        self.position.x
    }

    /// Y coordinate
    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Move to `(x, y)`; the surface sees it on the next render
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Point2::new(x, y);
    }

    /// Move by `offset`
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }

    /// Visibility flag
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Handle of the primitive on the surface
    pub fn handle(&self) -> SurfaceHandle {
        self.handle
    }
}

/// Something drawn on the canvas
///
/// Only [`Element::state`] and [`Element::state_mut`] are required; every hook has a default.
pub trait Element: AsAny {
    /// Shared element state
    fn state(&self) -> &ElementState;

    /// Mutable shared element state
    fn state_mut(&mut self) -> &mut ElementState;

    /// Runs once, when the element joins an application
    fn init_element(&mut self, _surface: &mut dyn Surface) {}

    /// Advance to the next frame. Must not block.
    fn update(&mut self, _frame: &Frame) {}

    /// Make the element visible
    fn show(&mut self, surface: &mut dyn Surface) {
        let state = self.state_mut();
        state.visible = true;
        surface.set_visible(state.handle, true);
    }

    /// Hide the element
    fn hide(&mut self, surface: &mut dyn Surface) {
        let state = self.state_mut();
        state.visible = false;
        surface.set_visible(state.handle, false);
    }

    /// Push the current position to the surface. Hidden elements are left alone.
    fn render(&self, surface: &mut dyn Surface) {
        let state = self.state();
        if state.visible {
            surface.set_position(state.handle, state.position);
        }
    }
}
