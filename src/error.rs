//! Error types for hclmap.
//!
//! A single error enum covers every failure the library and the command-line
//! tool can report.

use thiserror::Error;

/// The main error type for hclmap operations.
#[derive(Error, Debug)]
pub enum HclmapError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Color table is not a valid RGB or RGBA table
    #[error("Invalid colors: {message}")]
    InvalidColors { message: String },

    /// Control values and colors disagree in length
    #[error("'values' and 'colors' should have the same number of elements. Got {values} and {colors}.")]
    LengthMismatch { values: usize, colors: usize },

    /// Control values are not strictly increasing
    #[error("Values not strictly increasing: {message}")]
    NotIncreasing { message: String },

    /// Array shape errors from ndarray
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Block execution errors
    #[error("Execution error: {message}")]
    Execution { message: String },
}

impl HclmapError {
    /// Short machine-readable name of the error variant, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            HclmapError::Io(_) => "io",
            HclmapError::Json(_) => "json",
            HclmapError::Config { .. } => "config",
            HclmapError::InvalidParameter { .. } => "invalid_parameter",
            HclmapError::InvalidColors { .. } => "invalid_colors",
            HclmapError::LengthMismatch { .. } => "length_mismatch",
            HclmapError::NotIncreasing { .. } => "not_increasing",
            HclmapError::Shape(_) => "shape",
            HclmapError::Execution { .. } => "execution",
        }
    }
}

/// Convenience type alias for Results with HclmapError
pub type Result<T> = std::result::Result<T, HclmapError>;
