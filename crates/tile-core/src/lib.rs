//! Core value types for the tile layout engine.
//!
//! This crate provides the types shared by the layout crate and its callers:
//! - Tiles and positioned tiles
//! - Pixel rectangles
//! - Named tile size and density presets
//! - Error types

pub mod errors;
pub mod presets;
pub mod types;

pub use errors::*;
pub use presets::*;
pub use types::*;
