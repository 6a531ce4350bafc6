//! Asset loading
//!
//! Sprites decode their image exactly once, when they are constructed. There is no cache and no
//! hot reload.

pub mod image_loader;

pub use image_loader::ImageData;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Loading or decoding failed
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// The decoded data is unusable
    #[error("Invalid asset data: {0}")]
    InvalidData(String),
}
