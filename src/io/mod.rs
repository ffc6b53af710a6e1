//! Input/output operations, CLI, and error handling

/// Command-line interface and command execution
pub mod cli;
/// Rendering constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Progress display for batch rendering
pub mod progress;
