//! Theme value model for Horizon Lattice components.
//!
//! This crate defines what "the same theme" means for the rest of the
//! theming stack, and provides the pieces needed to turn a theme into CSS:
//!
//! - **Theme model**: [`Theme`] and its nested option groups, compared and
//!   hashed structurally so independently built themes are interchangeable
//! - **Colors**: HTML color code and color name parsing via [`ColorNames`]
//! - **Variables**: CSS custom property generation via [`ThemeVariables`]
//!
//! # Example
//!
//! ```ignore
//! use horizon_lattice_theme::prelude::*;
//!
//! let theme = Theme::named("brand").with_color_options(ColorOptions {
//!     primary: Some("#007AFF".into()),
//!     ..Default::default()
//! });
//!
//! let css = ThemeVariables::from_theme(&theme).to_css();
//! ```

pub mod color;
pub mod theme;
pub mod variables;

mod error;

pub use color::{ColorNames, Rgb};
pub use error::{Error, Result};
pub use theme::Theme;
pub use variables::ThemeVariables;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::{ColorNames, Rgb};
    pub use crate::theme::{
        BackgroundOptions, BreakpointOptions, ColorOptions, RadiusOptions, SpacingOptions,
        TextColorOptions, Theme,
    };
    pub use crate::variables::ThemeVariables;
}
