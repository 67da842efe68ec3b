//! Option groups nested inside a [`Theme`](super::Theme).

use serde::{Deserialize, Serialize};

/// Declares an option group: a record of named, optional string slots.
///
/// Every group derives structural equality and hashing, deserializes with
/// missing slots left unset, and exposes its slots in declaration order
/// together with their CSS names.
macro_rules! option_group {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$slot_meta:meta])*
                $slot:ident => $css:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            $(
                $(#[$slot_meta])*
                pub $slot: Option<String>,
            )+
        }

        impl $name {
            /// Iterate over all slots as `(css name, value)` pairs.
            pub fn slots(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
                [$(($css, self.$slot.as_deref())),+].into_iter()
            }

            /// Iterate over the slots that hold a value.
            pub fn set_slots(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
                self.slots().filter_map(|(name, value)| value.map(|v| (name, v)))
            }

            /// Returns `true` if no slot holds a value.
            pub fn is_empty(&self) -> bool {
                $(self.$slot.is_none())&&+
            }
        }
    };
}

option_group! {
    /// Per-variant color overrides (buttons, badges, alerts, ...).
    pub struct ColorOptions {
        primary => "primary",
        secondary => "secondary",
        success => "success",
        info => "info",
        warning => "warning",
        danger => "danger",
        light => "light",
        dark => "dark",
        link => "link",
    }
}

option_group! {
    /// Per-variant background color overrides.
    pub struct BackgroundOptions {
        primary => "primary",
        secondary => "secondary",
        success => "success",
        info => "info",
        warning => "warning",
        danger => "danger",
        light => "light",
        dark => "dark",
        /// Page body background.
        body => "body",
        muted => "muted",
    }
}

option_group! {
    /// Per-variant text color overrides.
    pub struct TextColorOptions {
        primary => "primary",
        secondary => "secondary",
        success => "success",
        info => "info",
        warning => "warning",
        danger => "danger",
        light => "light",
        dark => "dark",
        /// Default body text.
        body => "body",
        muted => "muted",
        white => "white",
        /// Half-transparent black text.
        black50 => "black-50",
        /// Half-transparent white text.
        white50 => "white-50",
    }
}

option_group! {
    /// Responsive breakpoint widths.
    pub struct BreakpointOptions {
        mobile => "mobile",
        tablet => "tablet",
        desktop => "desktop",
        widescreen => "widescreen",
        full_hd => "fullhd",
    }
}

option_group! {
    /// Spacing scale used for margins and paddings.
    pub struct SpacingOptions {
        xs => "xs",
        sm => "sm",
        md => "md",
        lg => "lg",
        xl => "xl",
    }
}

option_group! {
    /// Border radius scale.
    pub struct RadiusOptions {
        small => "small",
        medium => "medium",
        large => "large",
        pill => "pill",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_group_is_empty() {
        assert!(ColorOptions::default().is_empty());
        assert!(TextColorOptions::default().is_empty());
        assert_eq!(RadiusOptions::default().set_slots().count(), 0);
    }

    #[test]
    fn slots_follow_declaration_order() {
        let names: Vec<_> = BreakpointOptions::default().slots().map(|(name, _)| name).collect();
        assert_eq!(names, ["mobile", "tablet", "desktop", "widescreen", "fullhd"]);
    }

    #[test]
    fn set_slots_skip_unset_values() {
        let options = TextColorOptions {
            danger: Some("#DC3545".into()),
            white50: Some("rgba(255,255,255,.5)".into()),
            ..Default::default()
        };

        let set: Vec<_> = options.set_slots().collect();
        assert_eq!(
            set,
            [("danger", "#DC3545"), ("white-50", "rgba(255,255,255,.5)")]
        );
        assert!(!options.is_empty());
    }

    #[test]
    fn single_slot_difference_is_unequal() {
        let a = SpacingOptions {
            md: Some("1rem".into()),
            ..Default::default()
        };
        let b = SpacingOptions {
            md: Some("1.5rem".into()),
            ..Default::default()
        };
        assert_ne!(a, b);
    }
}
