//! Property-based tests for theme cache keys and eviction.

use std::collections::HashSet;

use horizon_lattice_theme::theme::{BreakpointOptions, ColorOptions, TextColorOptions};
use horizon_lattice_theme_cache::{Theme, ThemeCache};
use proptest::prelude::*;

fn slot() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z#0-9]{0,8}")
}

fn arb_theme() -> impl Strategy<Value = Theme> {
    (
        "[a-z]{0,6}",
        slot(),
        any::<bool>(),
        (slot(), slot(), slot()),
        (slot(), slot()),
        slot(),
    )
        .prop_map(|(name, black, rounded, colors, text_colors, tablet)| {
            let (primary, danger, link) = colors;
            let (text_danger, muted) = text_colors;
            Theme {
                name,
                black,
                rounded,
                color_options: ColorOptions {
                    primary,
                    danger,
                    link,
                    ..Default::default()
                },
                text_color_options: TextColorOptions {
                    danger: text_danger,
                    muted,
                    ..Default::default()
                },
                breakpoint_options: BreakpointOptions {
                    tablet,
                    ..Default::default()
                },
                ..Default::default()
            }
        })
}

proptest! {
    #[test]
    fn round_trip(theme in arb_theme(), variables in ".*", styles in ".*") {
        let cache = ThemeCache::new();
        cache.cache_variables(&theme, variables.as_str());
        cache.cache_styles(&theme, styles.as_str());

        let cached_variables = cache.try_get_variables(&theme);
        let cached_styles = cache.try_get_styles(&theme);
        prop_assert_eq!(cached_variables.as_deref(), Some(variables.as_str()));
        prop_assert_eq!(cached_styles.as_deref(), Some(styles.as_str()));
    }

    #[test]
    fn equal_clone_is_interchangeable_key(theme in arb_theme(), text in ".*") {
        let cache = ThemeCache::new();
        let twin = theme.clone();
        cache.cache_variables(&theme, text.as_str());

        prop_assert_eq!(&twin, &theme);
        prop_assert_eq!(twin.fingerprint(), theme.fingerprint());
        let cached = cache.try_get_variables(&twin);
        prop_assert_eq!(cached.as_deref(), Some(text.as_str()));
    }

    #[test]
    fn single_slot_difference_is_distinct_key(
        theme in arb_theme(),
        a in "[a-z]{1,8}",
        b in "[A-Z]{1,8}"
    ) {
        let with_a = Theme {
            text_color_options: TextColorOptions {
                danger: Some(a),
                ..theme.text_color_options.clone()
            },
            ..theme.clone()
        };
        let with_b = Theme {
            text_color_options: TextColorOptions {
                danger: Some(b),
                ..theme.text_color_options.clone()
            },
            ..theme
        };

        let cache = ThemeCache::new();
        cache.cache_styles(&with_a, "a");

        prop_assert_ne!(&with_a, &with_b);
        prop_assert!(cache.try_get_styles(&with_b).is_none());
    }

    #[test]
    fn fifo_eviction(capacity in 1usize..16, inserts in 0usize..48) {
        let cache = ThemeCache::with_capacity(capacity);
        let themes: Vec<Theme> = (0..inserts).map(|i| Theme::named(i.to_string())).collect();

        for (i, theme) in themes.iter().enumerate() {
            cache.cache_styles(theme, i.to_string());
            prop_assert!(cache.styles_len() <= capacity);
        }

        // Exactly the newest `capacity` themes survive.
        let evicted = inserts.saturating_sub(capacity);
        for (i, theme) in themes.iter().enumerate() {
            let hit = cache.try_get_styles(theme);
            let expected = i.to_string();
            if i < evicted {
                prop_assert!(hit.is_none());
            } else {
                prop_assert_eq!(hit.as_deref(), Some(expected.as_str()));
            }
        }
    }

    #[test]
    fn styles_eviction_leaves_variables_alone(
        themes in prop::collection::vec(arb_theme(), 1..40)
    ) {
        let cache = ThemeCache::new();
        let unique: Vec<&Theme> = {
            let mut seen = HashSet::new();
            themes.iter().filter(|t| seen.insert(*t)).collect()
        };

        for theme in unique.iter().take(10) {
            cache.cache_variables(theme, theme.name.as_str());
        }
        for (i, theme) in unique.iter().enumerate() {
            cache.cache_styles(theme, i.to_string());
        }

        for theme in unique.iter().take(10) {
            let cached = cache.try_get_variables(theme);
            prop_assert_eq!(cached.as_deref(), Some(theme.name.as_str()));
        }
        prop_assert!(cache.styles_len() <= 10);
    }
}
