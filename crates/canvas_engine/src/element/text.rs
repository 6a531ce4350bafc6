//! Text element

use super::{CanvasObject, Element, ElementState};
use crate::foundation::math::Point2;
use crate::surface::{Surface, SurfaceError, SurfaceHandle};

impl CanvasObject for str {
    fn init_canvas_object(
        &self,
        surface: &mut dyn Surface,
        position: Point2,
    ) -> Result<SurfaceHandle, SurfaceError> {
        surface.create_text(position, self)
    }
}

/// A text label on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    state: ElementState,
    text: String,
}

impl Text {
    /// Create a label at `(x, y)`
    pub fn new(
        surface: &mut dyn Surface,
        text: impl Into<String>,
        x: f32,
        y: f32,
    ) -> Result<Self, SurfaceError> {
        let text = text.into();
        let state = ElementState::new(surface, text.as_str(), x, y)?;
        Ok(Self { state, text })
    }

    /// Current string
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the string, on the element and on the surface
    pub fn set_text(&mut self, surface: &mut dyn Surface, text: impl Into<String>) {
        self.text = text.into();
        surface.set_text(self.state.handle(), &self.text);
    }
}

impl Element for Text {
    fn state(&self) -> &ElementState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ElementState {
        &mut self.state
    }
}
