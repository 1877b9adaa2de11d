//! Light/dark presentation preference persisted in client storage.

/// Value stored when the dark presentation is active.
pub const STORED_ENABLED: &str = "enabled";
/// Value stored when the dark presentation is inactive.
pub const STORED_DISABLED: &str = "disabled";

/// Presentation theme chosen by the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Interpret a stored value. Only `"enabled"` selects the dark theme;
    /// anything else, including a missing value, means light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(STORED_ENABLED) => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The string written back to storage.
    #[must_use]
    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Dark => STORED_ENABLED,
            Self::Light => STORED_DISABLED,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the trigger: it names the theme a click switches *to*.
    #[must_use]
    pub fn trigger_label(self) -> &'static str {
        match self {
            Self::Dark => "Light Mode",
            Self::Light => "Dark Mode",
        }
    }
}

impl From<bool> for ThemePreference {
    fn from(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}
