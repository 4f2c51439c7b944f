//! Platform abstraction layer
//!
//! Handles device differences for:
//! - Input events (keyboard codes, touch-hold buttons)

pub mod input;

pub use input::{InputAdapter, Key};
