//! Typed pattern configuration model, preset catalogs, and color palettes

/// Pattern kinds, per-kind configurations, and named pattern state
pub mod config;
/// Static color palette catalog and palette application
pub mod palettes;
/// Read-only preset catalogs and default configurations
pub mod presets;
