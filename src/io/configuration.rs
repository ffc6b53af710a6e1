//! Rendering constants and runtime configuration defaults

// Renderer tuning constants. The jitter, accent, and under-fill values are
// empirical; they are kept literal for behavioral compatibility rather than
// derived from geometry.
/// Maximum per-channel RGB offset for random color jitter
pub const COLOR_JITTER_RANGE: i32 = 30;

/// Grid dots use the accent color when `(row + col)` is a multiple of this
pub const ACCENT_INTERVAL: u32 = 3;

/// Probability that a randomly scattered dot uses the accent color
pub const ACCENT_PROBABILITY: f64 = 0.3;

/// Under-fill divisor applied to the naive area-coverage dot count
pub const RANDOM_DOT_DIVISOR: f64 = 3.0;

// Surface dimensions
/// Side length of the live preview surface in pixels
pub const DEFAULT_PREVIEW_SIZE: u32 = 800;

/// Default side length for exported images in pixels
pub const DEFAULT_EXPORT_SIZE: u32 = 1024;

/// Maximum allowed export dimension per side
pub const MAX_EXPORT_DIMENSION: u32 = 4096;

// History and naming
/// Maximum number of undo entries retained before eviction
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Maximum length of a pattern name in characters
pub const MAX_NAME_LENGTH: usize = 50;

/// Name assigned when a pattern name is blank
pub const DEFAULT_PATTERN_NAME: &str = "My Pattern";

/// Name embedded in share tokens when none was provided
pub const SHARE_NAME_FALLBACK: &str = "Pattern";

// Sharing
/// Query parameter carrying the share token in a shareable URL
pub const SHARE_QUERY_PARAM: &str = "pattern";

/// Base URL used for share links when none is supplied
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

// Default values for configurable parameters
/// Fixed seed for reproducible jitter
pub const DEFAULT_SEED: u64 = 42;
