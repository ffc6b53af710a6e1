//! Procedural 2D pattern generation: geometric tilings, dot fields, and noise textures
//!
//! Patterns are described by a typed configuration model, rendered
//! deterministically into caller-owned pixel surfaces, exported as PNG byte
//! streams or SVG markup, and shared as URL-safe encoded tokens. An undo/redo
//! history engine treats the named configuration as versioned state.

#![forbid(unsafe_code)]

/// Raster (PNG) and vector (SVG) export of rendered patterns
pub mod export;
/// Input/output operations, CLI, and error handling
pub mod io;
/// Typed pattern configuration model, preset catalogs, and color palettes
pub mod model;
/// Pixel surface and the three pattern renderers
pub mod render;
/// Undo/redo history engine and shareable-state codec
pub mod state;

pub use io::error::{PatternError, Result};
