//! Configuration loading: optional JSON block embedded in the page.
//!
//! The server may render `<script type="application/json" id="movierec-config">`
//! into the page. Every field has a sensible default so the block is
//! optional, and any section may be omitted.

use movierec_domain::movie::{CardStyle, DEFAULT_POSTER_BASE_URL, DEFAULT_PREVIEW_CHARS};
use serde::Deserialize;
use web_sys::Document;

/// Id of the element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "movierec-config";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend location.
    pub api: ApiConfig,
    /// Movie feed rendering.
    pub feed: FeedConfig,
    /// Theme persistence and presentation.
    pub theme: ThemeConfig,
    /// Diagnostic channel settings.
    pub logging: LoggingConfig,
    /// Elements the components attach to.
    pub selectors: Selectors,
}

/// Backend location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for every endpoint path. Empty means same origin.
    pub base_url: String,
}

/// Movie feed rendering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Prefix joined with each card's poster path.
    pub poster_base_url: String,
    /// Overview characters kept on a card before the ellipsis.
    pub preview_chars: usize,
}

/// Theme persistence and presentation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding `"enabled"` / `"disabled"`.
    pub storage_key: String,
    /// Class set on `<body>` while the dark theme is active.
    pub dark_class: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// DOM contract. Fields ending in `_id` are element ids, the like/unlike
/// triggers are CSS selectors matching any number of buttons.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_trigger_id: String,
    pub like_trigger: String,
    pub unlike_trigger: String,
    pub feed_trigger_id: String,
    pub feed_container_id: String,
    pub review_form_id: String,
    pub review_region_id: String,
    pub rating_field_id: String,
    pub text_field_id: String,
}

impl ClientConfig {
    /// Load configuration from the page's config block, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the block exists but is malformed or invalid.
    pub fn load(document: &Document) -> Result<Self, ConfigError> {
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Ok(Self::default());
        };
        match element.text_content() {
            Some(text) if !text.trim().is_empty() => Self::from_json(&text),
            _ => Ok(Self::default()),
        }
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON and
    /// [`ConfigError::Validation`] on semantically invalid values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rendering parameters for feed cards.
    #[must_use]
    pub fn card_style(&self) -> CardStyle {
        CardStyle {
            poster_base_url: self.feed.poster_base_url.clone(),
            preview_chars: self.feed.preview_chars,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.preview_chars == 0 {
            return Err(ConfigError::Validation(
                "feed.preview_chars must be non-zero".to_string(),
            ));
        }
        if self.theme.storage_key.is_empty() {
            return Err(ConfigError::Validation(
                "theme.storage_key must not be empty".to_string(),
            ));
        }
        if self.theme.dark_class.is_empty() {
            return Err(ConfigError::Validation(
                "theme.dark_class must not be empty".to_string(),
            ));
        }
        self.selectors.validate()
    }
}

impl Selectors {
    fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("theme_trigger_id", self.theme_trigger_id.as_str()),
            ("like_trigger", self.like_trigger.as_str()),
            ("unlike_trigger", self.unlike_trigger.as_str()),
            ("feed_trigger_id", self.feed_trigger_id.as_str()),
            ("feed_container_id", self.feed_container_id.as_str()),
            ("review_form_id", self.review_form_id.as_str()),
            ("review_region_id", self.review_region_id.as_str()),
            ("rating_field_id", self.rating_field_id.as_str()),
            ("text_field_id", self.text_field_id.as_str()),
        ]
    }

    /// Selector syntax is checked by the browser at mount time; only blank
    /// values are rejected here.
    fn validate(&self) -> Result<(), ConfigError> {
        match self.entries().into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::Validation(format!(
                "selectors.{name} must not be empty"
            ))),
            None => Ok(()),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            poster_base_url: DEFAULT_POSTER_BASE_URL.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "darkMode".to_string(),
            dark_class: "dark-mode".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "movierec=info".to_string(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_trigger_id: "toggle-dark-mode".to_string(),
            like_trigger: ".like-button".to_string(),
            unlike_trigger: ".remove-like-button".to_string(),
            feed_trigger_id: "load-more-button".to_string(),
            feed_container_id: "movies-container".to_string(),
            review_form_id: "review-form".to_string(),
            review_region_id: "reviews-section".to_string(),
            rating_field_id: "rating".to_string(),
            text_field_id: "review_text".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse config block")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
