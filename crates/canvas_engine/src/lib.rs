//! # Canvas Engine
//!
//! A small 2D animation scaffold: elements on a canvas, a cooperative tick loop that updates
//! and renders them in order, and key events forwarded to game hooks.
//!
//! The drawing surface and the windowing system are collaborators behind the
//! [`surface::Surface`] and [`host::Host`] traits. A headless [`surface::MemorySurface`] and
//! [`host::EventLoop`] are included, so a game runs (and is tested) without any GUI toolkit.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use canvas_engine::prelude::*;
//!
//! struct Hello;
//!
//! impl Game for Hello {
//!     fn init_game(&mut self, scene: &mut Scene) -> Result<(), AppError> {
//!         let text = scene.create_text("Hello", 400.0, 250.0)?;
//!         scene.add_element(text)?;
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), AppError> {
//!     let mut host = EventLoop::new();
//!     let mut app = Application::new(&mut host, AppConfig::default(), Hello)?;
//!     app.run(&mut host)
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod assets;
pub mod input;
pub mod surface;
pub mod host;
pub mod element;
pub mod scene;

mod application;

pub use application::{Application, AppError, Game, LoopState};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError, Game, LoopState,
        assets::{AssetError, ImageData},
        config::{AppConfig, Config, ConfigError},
        element::{Element, ElementState, Frame, Sprite, Text},
        foundation::{any::AsAny, math::{Point2, Rect, Vec2}},
        host::{EventLoop, EventSender, Host, HostEvent, ManualClock, SystemClock},
        input::{KeyCode, KeyEvent, Modifiers},
        scene::{ElementId, Scene},
        surface::{MemorySurface, Surface, SurfaceError, SurfaceHandle, SurfaceId},
    };
}
