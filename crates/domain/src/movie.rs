//! Movie cards delivered by the paginated feed.

use serde::{Deserialize, Serialize};

use crate::id::MovieId;
use crate::markup::{escape, preview};

/// Default image host prefix for poster paths.
pub const DEFAULT_POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
/// Default number of overview characters shown on a card.
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

/// One movie in a feed page. Rendered once, never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCard {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// Rendering parameters for [`MovieCard::to_markup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyle {
    /// Prefix joined with the card's `poster_path`.
    pub poster_base_url: String,
    /// Number of overview characters kept before the ellipsis.
    pub preview_chars: usize,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            poster_base_url: DEFAULT_POSTER_BASE_URL.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl MovieCard {
    /// Overview text as displayed on the card.
    #[must_use]
    pub fn overview_preview(&self, max_chars: usize) -> String {
        preview(self.overview.as_deref().unwrap_or_default(), max_chars)
    }

    /// Detail page of this movie.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("/movie/{}", self.id)
    }

    /// Card markup appended to the feed container.
    #[must_use]
    pub fn to_markup(&self, style: &CardStyle) -> String {
        let title = escape(&self.title);
        let poster = escape(&format!(
            "{}{}",
            style.poster_base_url,
            self.poster_path.as_deref().unwrap_or_default()
        ));
        let overview = escape(&self.overview_preview(style.preview_chars));
        let detail = escape(&self.detail_path());

        format!(
            r#"<div class="col-md-4"><div class="card mb-4" style="width: 18rem;"><img src="{poster}" alt="{title} poster"><div class="card-body"><h2 class="card-title">{title}</h2><p class="card-text">{overview}</p><a href="{detail}" class="btn bg-secondary">View Details</a></div></div></div>"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> MovieCard {
        MovieCard {
            id: MovieId::Numeric(5),
            title: "X".to_string(),
            poster_path: Some("/p.jpg".to_string()),
            overview: Some("A".repeat(150)),
        }
    }

    #[test]
    fn should_deserialize_feed_entry() {
        let json = r#"{"id":5,"title":"X","poster_path":"/p.jpg","overview":"Plot"}"#;
        let parsed: MovieCard = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, MovieId::Numeric(5));
        assert_eq!(parsed.poster_path.as_deref(), Some("/p.jpg"));
        assert_eq!(parsed.overview.as_deref(), Some("Plot"));
    }

    #[test]
    fn should_accept_null_or_missing_optional_fields() {
        let json = r#"{"id":1,"title":"Untitled","overview":null}"#;
        let parsed: MovieCard = serde_json::from_str(json).unwrap();
        assert!(parsed.poster_path.is_none());
        assert!(parsed.overview.is_none());
        assert_eq!(parsed.overview_preview(100), "...");
    }

    #[test]
    fn should_truncate_overview_to_hundred_characters() {
        let markup = card().to_markup(&CardStyle::default());
        let expected = format!(r#"<p class="card-text">{}...</p>"#, "A".repeat(100));
        assert!(markup.contains(&expected));
    }

    #[test]
    fn should_render_poster_title_and_detail_link() {
        let markup = card().to_markup(&CardStyle::default());
        assert!(markup.contains(r#"src="https://image.tmdb.org/t/p/w500/p.jpg""#));
        assert!(markup.contains(r#"alt="X poster""#));
        assert!(markup.contains(r#"<h2 class="card-title">X</h2>"#));
        assert!(markup.contains(r#"href="/movie/5""#));
    }

    #[test]
    fn should_escape_title_in_markup() {
        let mut card = card();
        card.title = "<script>".to_string();
        let markup = card.to_markup(&CardStyle::default());
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;"));
    }
}
