//! Versioned, serializable pattern state
//!
//! The history engine and share-token codec both treat the named pattern
//! configuration as an immutable value: every change is a whole-object
//! replacement, so no failure can leave state partially updated.

/// Shareable-state codec for URL-embeddable tokens
pub mod codec;
/// Generic undo/redo history engine
pub mod history;
