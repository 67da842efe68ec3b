//! Bounded memoization of generated theme CSS for Horizon Lattice.
//!
//! Rendering a [`Theme`] into CSS variables or a full style sheet is
//! expensive, and applications usually render the same handful of themes
//! over and over. [`ThemeCache`] remembers the generated text per theme:
//!
//! - **Structural keys**: themes are matched by value, so independently
//!   constructed but equal themes share cache entries
//! - **Bounded FIFO**: each entry set holds at most a fixed number of themes
//!   ([`DEFAULT_CAPACITY`] unless configured) and evicts the oldest insert
//! - **Independent sets**: variables and styles have separate entries,
//!   capacities and locks
//!
//! # Example
//!
//! ```ignore
//! use horizon_lattice_theme::{Theme, ThemeVariables};
//! use horizon_lattice_theme_cache::ThemeCache;
//!
//! let cache = ThemeCache::new();
//! let theme = Theme::named("brand");
//!
//! let css = cache.variables_or_insert_with(&theme, |theme| {
//!     ThemeVariables::from_theme(theme).to_css()
//! });
//! ```
//!
//! # Logging
//!
//! Lookups and stores are traced under the `horizon_lattice_theme_cache`
//! target; evictions are logged at debug level.

mod cache;
mod config;
mod error;
mod fifo;

pub use cache::ThemeCache;
pub use config::{DEFAULT_CAPACITY, ThemeCacheConfig};
pub use error::{Error, Result};
pub use horizon_lattice_theme::Theme;
