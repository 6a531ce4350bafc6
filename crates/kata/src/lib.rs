//! # Kata
//!
//! Two small refactoring exercises that live next to the canvas engine:
//!
//! - [`recipe`]: a drink recipe value and a creational function that replaces repeated
//!   field-by-field setup.
//! - [`timestamp`]: turning an `hh:mm:ss` string into a time of day, failing loudly on bad
//!   input.

#![warn(missing_docs)]

pub mod recipe;
pub mod timestamp;

pub use recipe::{create_recipe, Menu, Recipe};
pub use timestamp::{create_time_from_timestamp, is_valid_time, TimestampError};
