//! Rendering surface abstraction
//!
//! A [`Surface`] is the drawing area owned by the host toolkit. It hands out a
//! [`SurfaceHandle`] for every primitive it creates; elements keep the handle and use it for
//! every later mutation. A handle pairs the [`SurfaceId`] of the surface that issued it with a
//! checked slotmap key, so a handle that outlived its item, or one issued by another surface,
//! is detected instead of touching some other primitive.

pub mod memory;

pub use memory::MemorySurface;

use crate::assets::{AssetError, ImageData};
use crate::foundation::any::AsAny;
use crate::foundation::math::Point2;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

slotmap::new_key_type! {
    /// Slot of a primitive inside the surface that created it
    pub struct ItemKey;
}

/// Process-unique identity of a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Allocate a fresh id; every call returns a different value
    pub fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Opaque identifier of a primitive on a [`Surface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle {
    surface: SurfaceId,
    key: ItemKey,
}

impl SurfaceHandle {
    /// Stamp a slot key with the surface that owns it
    pub const fn new(surface: SurfaceId, key: ItemKey) -> Self {
        Self { surface, key }
    }

    /// Surface that issued the handle
    pub const fn surface(self) -> SurfaceId {
        self.surface
    }

    /// Slot key on that surface
    pub const fn key(self) -> ItemKey {
        self.key
    }
}

/// Errors raised when the surface cannot create a primitive
#[derive(Error, Debug)]
pub enum SurfaceError {
    /// The surface refused to create the primitive
    #[error("Surface rejected primitive: {0}")]
    Rejected(String),

    /// The image payload is unusable
    #[error("Image error: {0}")]
    Image(#[from] AssetError),

    /// The handle was issued by a different surface
    #[error("Handle {0:?} belongs to another surface")]
    ForeignHandle(SurfaceHandle),
}

/// Rendering-surface collaborator
///
/// Mutations on a handle that has been destroyed, or that another surface issued, are
/// ignored; implementations are expected to log them. The concrete surface can be recovered
/// with [`AsAny::as_any`].
pub trait Surface: AsAny {
    /// Identity stamped into every handle this surface issues
    fn id(&self) -> SurfaceId;

    /// Whether `handle` was issued by this surface
    fn owns(&self, handle: SurfaceHandle) -> bool {
        handle.surface() == self.id()
    }

    /// Surface size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    /// Create a text primitive centered on `position`
    fn create_text(&mut self, position: Point2, text: &str) -> Result<SurfaceHandle, SurfaceError>;

    /// Create an image primitive centered on `position`
    fn create_image(&mut self, position: Point2, image: &ImageData) -> Result<SurfaceHandle, SurfaceError>;

    /// Move a primitive
    fn set_position(&mut self, handle: SurfaceHandle, position: Point2);

    /// Show or hide a primitive
    fn set_visible(&mut self, handle: SurfaceHandle, visible: bool);

    /// Replace the string of a text primitive
    fn set_text(&mut self, handle: SurfaceHandle, text: &str);

    /// Remove a primitive. Returns `false` if the handle was already gone.
    fn destroy(&mut self, handle: SurfaceHandle) -> bool;

    /// Current position of a primitive
    fn coords(&self, handle: SurfaceHandle) -> Option<Point2>;

    /// Whether a primitive is currently displayed
    fn is_shown(&self, handle: SurfaceHandle) -> Option<bool>;

    /// String of a text primitive
    fn text(&self, handle: SurfaceHandle) -> Option<&str>;

    /// Number of live primitives
    fn item_count(&self) -> usize;
}
