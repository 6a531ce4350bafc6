//! Configuration system
//!
//! [`AppConfig`] carries the canvas size and the tick interval. It is read once, handed to
//! [`crate::Application::new`] and never changed afterwards.

pub use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

/// Default canvas width in pixels
pub const CANVAS_WIDTH: u32 = 800;

/// Default canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 500;

/// Default delay between animation ticks in milliseconds
pub const TIMER_DELAY_MS: u64 = 33;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        // Pick the format from the extension
        match Format::of(path)? {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::of(path)? {
            Format::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

enum Format {
    Toml,
    Ron,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Canvas size and tick interval of an [`crate::Application`]
///
/// Missing fields in a config file fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Delay between animation ticks in milliseconds
    pub update_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            update_delay_ms: TIMER_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Create a configuration with an explicit size and delay
    pub fn new(canvas_width: u32, canvas_height: u32, update_delay: Duration) -> Self {
        Self {
            canvas_width,
            canvas_height,
            update_delay_ms: u64::try_from(update_delay.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Delay between animation ticks
    pub fn update_delay(&self) -> Duration {
        Duration::from_millis(self.update_delay_ms)
    }
}

impl Config for AppConfig {}
