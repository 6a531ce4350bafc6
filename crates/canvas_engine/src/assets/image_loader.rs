//! Image loading utilities for sprite data
//!
//! Provides PNG loading for images placed on the canvas.

use std::path::{Path, PathBuf};
use crate::assets::AssetError;

/// Decoded RGBA image ready to hand to a surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Where the image came from, if it was read from disk
    pub source: Option<PathBuf>,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path_ref.display(), e)))?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::info!("Loaded image {}x{} from {:?}", width, height, path_ref);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
            source: Some(path_ref.to_path_buf()),
        })
    }

    /// Load image from memory (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image from bytes: {}", e)))?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::debug!("Loaded image {}x{} from memory", width, height);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
            source: None,
        })
    }

    /// Create a solid color image (useful for testing and placeholder sprites)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            data: color.repeat(pixel_count(width, height)),
            width,
            height,
            source: None,
        }
    }

    /// Check that the pixel buffer matches the dimensions
    pub fn validate(&self) -> Result<(), AssetError> {
        let expected = pixel_count(self.width, self.height) * 4;
        if self.data.len() == expected {
            Ok(())
        } else {
            Err(AssetError::InvalidData(format!(
                "expected {} bytes for {}x{} RGBA, got {}",
                expected, self.width, self.height, self.data.len()
            )))
        }
    }
}

/// Number of pixels in a `width` x `height` image, computed without `u32` overflow
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}
