//! CSS variables (custom properties) generated from a theme.

use std::fmt::Write as _;

use crate::color::ColorNames;
use crate::theme::Theme;

/// Prefix shared by every generated custom property.
pub const VARIABLE_PREFIX: &str = "b-theme";

/// Ordered set of CSS custom properties.
///
/// Order is insertion order, so generated CSS is stable for equal themes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeVariables {
    variables: Vec<(String, String)>,
}

impl ThemeVariables {
    /// Create empty variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate variables for every set slot of a theme, using the
    /// [standard](ColorNames::standard) color table.
    pub fn from_theme(theme: &Theme) -> Self {
        Self::from_theme_with(theme, ColorNames::standard())
    }

    /// Generate variables for every set slot of a theme.
    ///
    /// Color slots that parse as a color also get an `-rgb` companion
    /// holding the `r, g, b` triple.
    pub fn from_theme_with(theme: &Theme, colors: &ColorNames) -> Self {
        let mut vars = Self::new();

        if let Some(white) = &theme.white {
            vars.set_color("white", white, colors);
        }
        if let Some(black) = &theme.black {
            vars.set_color("black", black, colors);
        }

        for (slot, value) in theme.color_options.set_slots() {
            vars.set_color(slot, value, colors);
        }
        for (slot, value) in theme.background_options.set_slots() {
            vars.set_color(&format!("background-{slot}"), value, colors);
        }
        for (slot, value) in theme.text_color_options.set_slots() {
            vars.set_color(&format!("text-{slot}"), value, colors);
        }

        for (slot, value) in theme.breakpoint_options.set_slots() {
            vars.set(format!("breakpoint-{slot}"), value);
        }
        for (slot, value) in theme.spacing_options.set_slots() {
            vars.set(format!("spacing-{slot}"), value);
        }
        for (slot, value) in theme.radius_options.set_slots() {
            vars.set(format!("radius-{slot}"), value);
        }

        vars
    }

    /// Set a variable, replacing any previous value in place.
    ///
    /// A leading `--` on the name is ignored.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let name = name.strip_prefix("--").map(str::to_string).unwrap_or(name);
        let value = value.into();

        match self.variables.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.variables.push((name, value)),
        }
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if there are no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterate over all variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as a `:root` rule with one `--b-theme-*` declaration per variable.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            // Writing to a String cannot fail.
            let _ = writeln!(css, "  --{VARIABLE_PREFIX}-{name}: {value};");
        }
        css.push_str("}\n");
        css
    }

    fn set_color(&mut self, name: &str, value: &str, colors: &ColorNames) {
        self.set(name, value);
        match colors.parse(value) {
            Ok(rgb) => self.set(format!("{name}-rgb"), format!("{}, {}, {}", rgb.r, rgb.g, rgb.b)),
            Err(e) => tracing::debug!(
                target: "horizon_lattice_theme",
                variable = name,
                "no rgb companion: {}",
                e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ColorOptions, SpacingOptions, TextColorOptions};

    #[test]
    fn variables_set_get() {
        let mut vars = ThemeVariables::new();
        vars.set("primary", "#007AFF");

        assert_eq!(vars.get("primary"), Some("#007AFF"));
        assert_eq!(vars.get("--primary"), Some("#007AFF"));

        vars.set("--primary", "#0A84FF");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("primary"), Some("#0A84FF"));
    }

    #[test]
    fn default_theme_has_no_variables() {
        let vars = ThemeVariables::from_theme(&Theme::new());
        assert!(vars.is_empty());
        assert_eq!(vars.to_css(), ":root {\n}\n");
    }

    #[test]
    fn variables_from_theme() {
        let theme = Theme::new()
            .with_black("Black")
            .with_color_options(ColorOptions {
                primary: Some("#007AFF".into()),
                ..Default::default()
            })
            .with_text_color_options(TextColorOptions {
                muted: Some("var(--gray)".into()),
                ..Default::default()
            })
            .with_spacing_options(SpacingOptions {
                md: Some("1rem".into()),
                ..Default::default()
            });

        let vars = ThemeVariables::from_theme(&theme);

        assert_eq!(vars.get("black"), Some("Black"));
        assert_eq!(vars.get("black-rgb"), Some("0, 0, 0"));
        assert_eq!(vars.get("primary-rgb"), Some("0, 122, 255"));
        assert_eq!(vars.get("text-muted"), Some("var(--gray)"));
        assert!(!vars.contains("text-muted-rgb"));
        assert_eq!(vars.get("spacing-md"), Some("1rem"));
        assert!(!vars.contains("spacing-md-rgb"));
    }

    #[test]
    fn css_output_is_ordered() {
        let theme = Theme::new().with_color_options(ColorOptions {
            danger: Some("#DC3545".into()),
            primary: Some("#007AFF".into()),
            ..Default::default()
        });

        let css = ThemeVariables::from_theme(&theme).to_css();
        assert_eq!(
            css,
            ":root {\n  \
             --b-theme-primary: #007AFF;\n  \
             --b-theme-primary-rgb: 0, 122, 255;\n  \
             --b-theme-danger: #DC3545;\n  \
             --b-theme-danger-rgb: 220, 53, 69;\n\
             }\n"
        );
    }
}
