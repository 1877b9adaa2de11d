//! `localStorage`-backed preference store.

use movierec_app::ports::PreferenceStore;
use web_sys::{Storage, Window};

/// Preferences persisted in `window.localStorage`.
///
/// When storage is unavailable (privacy mode, sandboxed frame) reads report
/// nothing stored and writes are dropped.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    /// Open the window's local storage.
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            tracing::debug!("localStorage unavailable, preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage
            && storage.set_item(key, value).is_err()
        {
            tracing::debug!(key, "failed to write localStorage");
        }
    }
}
