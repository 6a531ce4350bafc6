//! Image element
//!
//! The image is decoded once when the sprite is built. There is no way to swap it afterwards.

use super::{CanvasObject, Element, ElementState};
use crate::assets::ImageData;
use crate::foundation::math::Point2;
use crate::surface::{Surface, SurfaceError, SurfaceHandle};
use std::path::Path;

impl CanvasObject for ImageData {
    fn init_canvas_object(
        &self,
        surface: &mut dyn Surface,
        position: Point2,
    ) -> Result<SurfaceHandle, SurfaceError> {
        surface.create_image(position, self)
    }
}

/// An image on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    state: ElementState,
    image: ImageData,
}

impl Sprite {
    /// Place an already decoded image at `(x, y)`
    pub fn new(
        surface: &mut dyn Surface,
        image: ImageData,
        x: f32,
        y: f32,
    ) -> Result<Self, SurfaceError> {
        let state = ElementState::new(surface, &image, x, y)?;
        Ok(Self { state, image })
    }

    /// Load an image file and place it at `(x, y)`
    pub fn load(
        surface: &mut dyn Surface,
        path: impl AsRef<Path>,
        x: f32,
        y: f32,
    ) -> Result<Self, SurfaceError> {
        let image = ImageData::from_file(path)?;
        Self::new(surface, image, x, y)
    }

    /// The decoded image
    pub fn image(&self) -> &ImageData {
        &self.image
    }
}

impl Element for Sprite {
    fn state(&self) -> &ElementState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ElementState {
        &mut self.state
    }
}
