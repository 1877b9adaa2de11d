//! Storage port: string preferences persisted on the client.

/// Key/value storage that survives page reloads.
///
/// Storage access is assumed to always succeed; implementations swallow
/// failures rather than report them.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str);
}
