//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Downcasting helpers for trait objects
//! - Math types for canvas coordinates
//! - Tick timing
//! - Logging utilities

pub mod any;
pub mod math;
pub mod time;
pub mod logging;
