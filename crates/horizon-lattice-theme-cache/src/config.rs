//! Theme cache configuration.

use serde::{Deserialize, Serialize};

/// Default number of entries kept per entry set.
pub const DEFAULT_CAPACITY: usize = 10;

/// Capacity bounds for the two entry sets of a [`ThemeCache`](crate::ThemeCache).
///
/// ```toml
/// variables_capacity = 10
/// styles_capacity = 32
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeCacheConfig {
    /// Maximum number of cached variable blocks.
    pub variables_capacity: usize,
    /// Maximum number of cached style sheets.
    pub styles_capacity: usize,
}

impl ThemeCacheConfig {
    /// Create a configuration with the default capacities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the same capacity for both entry sets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            variables_capacity: capacity,
            styles_capacity: capacity,
        }
    }

    /// Set the variables capacity.
    pub fn variables_capacity(mut self, capacity: usize) -> Self {
        self.variables_capacity = capacity;
        self
    }

    /// Set the styles capacity.
    pub fn styles_capacity(mut self, capacity: usize) -> Self {
        self.styles_capacity = capacity;
        self
    }

    /// Load a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> crate::Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

impl Default for ThemeCacheConfig {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
