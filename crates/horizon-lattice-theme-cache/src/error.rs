//! Error types for the theme cache.

/// Result type alias for theme cache operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a theme cache.
///
/// Cache lookups and stores never fail; only loading a configuration can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be deserialized.
    #[error("Invalid theme cache configuration: {0}")]
    Config(#[from] toml::de::Error),
}
