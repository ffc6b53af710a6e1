//! Error types for pattern rendering, export, and state operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern operations
#[derive(Debug)]
pub enum PatternError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Requested surface dimensions cannot be drawn to
    ///
    /// Raised when an export target is zero-sized or exceeds the
    /// maximum supported export resolution.
    InvalidSurface {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// Vector export requested for a pattern with no vector representation
    VectorUnavailable {
        /// Description of why the pattern is raster-only
        reason: &'static str,
    },

    /// Failed to encode a pixel surface as PNG bytes
    ImageEncode {
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to serialize pattern state into a share token
    TokenEncode {
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// Share token could not be decoded into a pattern state
    MalformedToken,

    /// No preset with the requested name exists in any catalog
    UnknownPreset {
        /// The requested preset name
        name: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSurface { width, height } => {
                write!(f, "Cannot draw to a {width}x{height} surface")
            }
            Self::VectorUnavailable { reason } => {
                write!(f, "Vector export unavailable: {reason}")
            }
            Self::ImageEncode { source } => {
                write!(f, "Failed to encode image: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::TokenEncode { source } => {
                write!(f, "Failed to encode share token: {source}")
            }
            Self::MalformedToken => {
                write!(f, "Share token is malformed or missing required fields")
            }
            Self::UnknownPreset { name } => {
                write!(f, "No preset named '{name}' exists")
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageEncode { source } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::TokenEncode { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern operation results
pub type Result<T> = std::result::Result<T, PatternError>;

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
