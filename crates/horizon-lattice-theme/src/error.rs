//! Error types for theme definitions and color codes.

/// Result type alias for theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading themes or parsing colors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Theme definition could not be deserialized.
    #[error("Invalid theme definition: {0}")]
    Toml(#[from] toml::de::Error),

    /// Color code is neither a hex code nor a known color name.
    #[error("Invalid color code '{code}'")]
    InvalidColor { code: String },

    /// Hex code pattern failed to compile.
    #[error("Invalid color pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// Create an invalid color error.
    pub fn invalid_color(code: impl Into<String>) -> Self {
        Self::InvalidColor { code: code.into() }
    }
}
