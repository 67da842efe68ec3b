//! Theme cache with independent variables and styles entry sets.

use std::sync::{Arc, OnceLock};

use horizon_lattice_theme::Theme;
use parking_lot::RwLock;

use crate::config::ThemeCacheConfig;
use crate::fifo::BoundedFifo;

const TARGET: &str = "horizon_lattice_theme_cache";

/// Memoizes generated CSS text per theme.
///
/// The cache keeps two independent entry sets: one for generated CSS
/// variables and one for generated style sheets. Each is keyed by the
/// theme's structural value, bounded by its own capacity, and evicts in
/// insertion order when a new theme would exceed that capacity. Lookups
/// never change the eviction order.
///
/// The cache never generates text itself. Callers look up a theme, and on a
/// miss generate the text and store it back, either by hand or through
/// [`variables_or_insert_with`](Self::variables_or_insert_with).
///
/// All methods take `&self`; the cache can be shared between threads
/// without external locking.
///
/// # Example
///
/// ```ignore
/// let cache = ThemeCache::new();
///
/// let css = match cache.try_get_variables(&theme) {
///     Some(css) => css,
///     None => {
///         let css: Arc<str> = ThemeVariables::from_theme(&theme).to_css().into();
///         cache.cache_variables(&theme, Arc::clone(&css));
///         css
///     }
/// };
/// ```
#[derive(Debug)]
pub struct ThemeCache {
    variables: EntrySet,
    styles: EntrySet,
}

static_assertions::assert_impl_all!(ThemeCache: Send, Sync);

impl ThemeCache {
    /// Create a cache with the default capacity for both entry sets.
    pub fn new() -> Self {
        Self::with_config(ThemeCacheConfig::default())
    }

    /// Create a cache with the same capacity for both entry sets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(ThemeCacheConfig::with_capacity(capacity))
    }

    /// Create a cache from a configuration.
    pub fn with_config(config: ThemeCacheConfig) -> Self {
        tracing::debug!(
            target: TARGET,
            variables_capacity = config.variables_capacity,
            styles_capacity = config.styles_capacity,
            "creating theme cache"
        );

        Self {
            variables: EntrySet::new("variables", config.variables_capacity),
            styles: EntrySet::new("styles", config.styles_capacity),
        }
    }

    /// The process-wide cache, created with the default configuration on
    /// first use.
    pub fn global() -> &'static ThemeCache {
        static GLOBAL: OnceLock<ThemeCache> = OnceLock::new();
        GLOBAL.get_or_init(ThemeCache::new)
    }

    /// Look up cached variables for a theme equal to `theme`.
    pub fn try_get_variables(&self, theme: &Theme) -> Option<Arc<str>> {
        self.variables.get(theme)
    }

    /// Cache variables for `theme`, replacing any text stored for an equal
    /// theme.
    pub fn cache_variables(&self, theme: &Theme, variables: impl Into<Arc<str>>) {
        self.variables.store(theme, variables.into());
    }

    /// Look up cached variables, generating and caching them on a miss.
    ///
    /// `generate` runs without holding the cache lock. If another thread
    /// cached variables for an equal theme in the meantime, that text is
    /// kept and returned instead.
    pub fn variables_or_insert_with<F>(&self, theme: &Theme, generate: F) -> Arc<str>
    where
        F: FnOnce(&Theme) -> String,
    {
        self.variables.get_or_insert_with(theme, generate)
    }

    /// Look up cached styles for a theme equal to `theme`.
    pub fn try_get_styles(&self, theme: &Theme) -> Option<Arc<str>> {
        self.styles.get(theme)
    }

    /// Cache styles for `theme`, replacing any text stored for an equal
    /// theme.
    pub fn cache_styles(&self, theme: &Theme, styles: impl Into<Arc<str>>) {
        self.styles.store(theme, styles.into());
    }

    /// Look up cached styles, generating and caching them on a miss.
    ///
    /// See [`variables_or_insert_with`](Self::variables_or_insert_with).
    pub fn styles_or_insert_with<F>(&self, theme: &Theme, generate: F) -> Arc<str>
    where
        F: FnOnce(&Theme) -> String,
    {
        self.styles.get_or_insert_with(theme, generate)
    }

    /// Number of cached variable blocks.
    pub fn variables_len(&self) -> usize {
        self.variables.len()
    }

    /// Number of cached style sheets.
    pub fn styles_len(&self) -> usize {
        self.styles.len()
    }

    /// Capacity bounds of both entry sets.
    pub fn config(&self) -> ThemeCacheConfig {
        ThemeCacheConfig {
            variables_capacity: self.variables.capacity(),
            styles_capacity: self.styles.capacity(),
        }
    }

    /// Drop every cached entry from both entry sets.
    pub fn clear(&self) {
        self.variables.clear();
        self.styles.clear();
    }
}

impl Default for ThemeCache {
    fn default() -> Self {
        Self::new()
    }
}

/// One bounded entry set and the lock serializing its mutations.
#[derive(Debug)]
struct EntrySet {
    kind: &'static str,
    entries: RwLock<BoundedFifo<Theme, Arc<str>>>,
}

impl EntrySet {
    fn new(kind: &'static str, capacity: usize) -> Self {
        Self {
            kind,
            entries: RwLock::new(BoundedFifo::new(capacity)),
        }
    }

    fn get(&self, theme: &Theme) -> Option<Arc<str>> {
        let hit = self.entries.read().get(theme).cloned();
        tracing::trace!(
            target: TARGET,
            kind = self.kind,
            theme = %theme.name,
            hit = hit.is_some(),
            "lookup"
        );
        hit
    }

    fn store(&self, theme: &Theme, text: Arc<str>) {
        let key = theme.clone();
        let evicted = self.entries.write().insert(key, text);
        tracing::trace!(target: TARGET, kind = self.kind, theme = %theme.name, "stored");
        self.log_eviction(evicted.map(|(key, _)| key));
    }

    fn get_or_insert_with<F>(&self, theme: &Theme, generate: F) -> Arc<str>
    where
        F: FnOnce(&Theme) -> String,
    {
        if let Some(text) = self.get(theme) {
            return text;
        }

        let text: Arc<str> = generate(theme).into();
        let key = theme.clone();

        let evicted = {
            let mut entries = self.entries.write();
            if let Some(existing) = entries.get(theme) {
                return Arc::clone(existing);
            }
            entries.insert(key, Arc::clone(&text))
        };
        tracing::trace!(target: TARGET, kind = self.kind, theme = %theme.name, "generated");
        self.log_eviction(evicted.map(|(key, _)| key));

        text
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn capacity(&self) -> usize {
        self.entries.read().capacity()
    }

    fn clear(&self) {
        self.entries.write().clear();
        tracing::debug!(target: TARGET, kind = self.kind, "cleared");
    }

    fn log_eviction(&self, evicted: Option<Arc<Theme>>) {
        if let Some(theme) = evicted {
            tracing::debug!(
                target: TARGET,
                kind = self.kind,
                theme = %theme.name,
                fingerprint = theme.fingerprint(),
                "evicted oldest entry"
            );
        }
    }
}
