//! Theme toggle: applies the persisted theme and flips it on demand.

use movierec_domain::theme::ThemePreference;

use crate::ports::{PreferenceStore, ThemeSurface};

/// Reads, applies and persists the visitor's theme preference.
pub struct ThemeToggle<S, V> {
    store: S,
    surface: V,
    storage_key: String,
}

impl<S: PreferenceStore, V: ThemeSurface> ThemeToggle<S, V> {
    /// Create a toggle persisting under `storage_key`.
    pub fn new(store: S, surface: V, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            surface,
            storage_key: storage_key.into(),
        }
    }

    /// Apply the stored preference. Called once at page load.
    pub fn initialize(&self) -> ThemePreference {
        let stored = self.store.load(&self.storage_key);
        let theme = ThemePreference::from_stored(stored.as_deref());
        self.surface.apply(theme);
        tracing::debug!(?theme, "applied stored theme");
        theme
    }

    /// Flip the presentation, persist it and return the new theme.
    pub fn toggle(&self) -> ThemePreference {
        let theme = self.surface.current().toggled();
        self.surface.apply(theme);
        self.store.save(&self.storage_key, theme.stored_value());
        theme
    }
}
