//! Theme value model.
//!
//! A [`Theme`] is a plain value: two themes are the same theme exactly when
//! every nested slot holds the same value. Equality and hashing are both
//! derived from the full option graph, so a theme can be used directly as a
//! map key and independently constructed themes with equal contents are
//! interchangeable.
//!
//! Option groups are never absent. A group that was not configured is the
//! group's default (every slot unset), which makes "not configured" and
//! "configured with defaults" the same value.

mod options;

use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

pub use options::{
    BackgroundOptions, BreakpointOptions, ColorOptions, RadiusOptions, SpacingOptions,
    TextColorOptions,
};

/// A complete style configuration for generated components.
///
/// Themes are immutable by convention. Build one with the `with_*` methods
/// or struct update syntax, or load it with [`Theme::from_toml_str`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Theme name.
    pub name: String,
    /// Override for the base white color.
    pub white: Option<String>,
    /// Override for the base black color.
    pub black: Option<String>,
    /// Render variant colors as gradients.
    pub gradient: bool,
    /// Render components with rounded corners.
    pub rounded: bool,
    /// Per-variant color overrides.
    pub color_options: ColorOptions,
    /// Per-variant background overrides.
    pub background_options: BackgroundOptions,
    /// Per-variant text color overrides.
    pub text_color_options: TextColorOptions,
    /// Responsive breakpoints.
    pub breakpoint_options: BreakpointOptions,
    /// Spacing scale.
    pub spacing_options: SpacingOptions,
    /// Border radius scale.
    pub radius_options: RadiusOptions,
}

impl Theme {
    /// Create a theme with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a default theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Load a theme from a TOML definition.
    ///
    /// Missing groups and slots keep their defaults; unknown keys are
    /// rejected.
    ///
    /// ```toml
    /// name = "brand"
    /// black = "#101010"
    ///
    /// [color_options]
    /// primary = "#007AFF"
    /// ```
    pub fn from_toml_str(source: &str) -> crate::Result<Self> {
        let theme: Self = toml::from_str(source)?;
        tracing::debug!(
            target: "horizon_lattice_theme",
            name = %theme.name,
            "loaded theme definition"
        );
        Ok(theme)
    }

    /// Set the white color override.
    pub fn with_white(mut self, white: impl Into<String>) -> Self {
        self.white = Some(white.into());
        self
    }

    /// Set the black color override.
    pub fn with_black(mut self, black: impl Into<String>) -> Self {
        self.black = Some(black.into());
        self
    }

    /// Enable or disable gradients.
    pub fn with_gradient(mut self, gradient: bool) -> Self {
        self.gradient = gradient;
        self
    }

    /// Enable or disable rounded corners.
    pub fn with_rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    /// Replace the color options.
    pub fn with_color_options(mut self, options: ColorOptions) -> Self {
        self.color_options = options;
        self
    }

    /// Replace the background options.
    pub fn with_background_options(mut self, options: BackgroundOptions) -> Self {
        self.background_options = options;
        self
    }

    /// Replace the text color options.
    pub fn with_text_color_options(mut self, options: TextColorOptions) -> Self {
        self.text_color_options = options;
        self
    }

    /// Replace the breakpoint options.
    pub fn with_breakpoint_options(mut self, options: BreakpointOptions) -> Self {
        self.breakpoint_options = options;
        self
    }

    /// Replace the spacing options.
    pub fn with_spacing_options(mut self, options: SpacingOptions) -> Self {
        self.spacing_options = options;
        self
    }

    /// Replace the radius options.
    pub fn with_radius_options(mut self, options: RadiusOptions) -> Self {
        self.radius_options = options;
        self
    }

    /// Structural fingerprint of the whole option graph.
    ///
    /// Equal themes always share a fingerprint. Used to identify themes in
    /// logs; not a substitute for equality.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_themes_are_equal() {
        let a = Theme::new();
        let b = Theme::default();

        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn text_color_danger_differs() {
        let a = Theme::new().with_text_color_options(TextColorOptions {
            danger: Some("danger".into()),
            ..Default::default()
        });
        let b = Theme::new().with_text_color_options(TextColorOptions {
            danger: Some("warning".into()),
            ..Default::default()
        });

        assert_ne!(a, b);
    }

    #[test]
    fn explicit_default_group_equals_unconfigured() {
        let unconfigured = Theme::new();
        let explicit = Theme::new()
            .with_color_options(ColorOptions::default())
            .with_radius_options(RadiusOptions::default());

        assert_eq!(unconfigured, explicit);
        assert_eq!(unconfigured.fingerprint(), explicit.fingerprint());
    }

    #[test]
    fn independently_built_themes_are_equal() {
        let build = || {
            Theme::named("brand")
                .with_black("#101010")
                .with_rounded(true)
                .with_breakpoint_options(BreakpointOptions {
                    tablet: Some("768px".into()),
                    ..Default::default()
                })
        };

        assert_eq!(build(), build());
        assert_eq!(build().fingerprint(), build().fingerprint());
    }

    #[test]
    fn flags_and_top_level_colors_participate() {
        assert_ne!(Theme::new(), Theme::new().with_gradient(true));
        assert_ne!(Theme::new(), Theme::new().with_black("0"));
        assert_ne!(Theme::new().with_white("#FFF"), Theme::new().with_black("#FFF"));
        assert_ne!(Theme::named("a"), Theme::named("b"));
    }

    #[test]
    fn unset_slot_differs_from_empty_string() {
        let empty = Theme::new().with_color_options(ColorOptions {
            primary: Some(String::new()),
            ..Default::default()
        });

        assert_ne!(Theme::new(), empty);
    }

    #[test]
    fn load_from_toml() {
        let theme = Theme::from_toml_str(
            r##"
            name = "brand"
            black = "#101010"
            rounded = true

            [color_options]
            primary = "#007AFF"

            [text_color_options]
            danger = "danger"
            "##,
        )
        .unwrap();

        let expected = Theme::named("brand")
            .with_black("#101010")
            .with_rounded(true)
            .with_color_options(ColorOptions {
                primary: Some("#007AFF".into()),
                ..Default::default()
            })
            .with_text_color_options(TextColorOptions {
                danger: Some("danger".into()),
                ..Default::default()
            });

        assert_eq!(theme, expected);
    }

    #[test]
    fn empty_toml_is_default_theme() {
        assert_eq!(Theme::from_toml_str("").unwrap(), Theme::new());
    }

    #[test]
    fn unknown_toml_keys_are_rejected() {
        let err = Theme::from_toml_str("[color_options]\nfuchsia = \"#F0F\"").unwrap_err();
        assert!(matches!(err, crate::Error::Toml(_)));
    }
}
