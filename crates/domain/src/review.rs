//! Reviews: fetched per movie, rendered in arrival order, never cached.

use serde::{Deserialize, Serialize};

use crate::id::MovieId;
use crate::markup::{escape, paragraph};

/// Shown in place of the list when a movie has no reviews.
pub const NO_REVIEWS_MESSAGE: &str = "No reviews yet. Be the first to leave one!";
/// Replaces the list when fetching reviews fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load reviews. Please try again later.";
/// Alert shown when a submission fails.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit review. Please try again.";

/// A review as returned by `/get_reviews/{movie_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub username: String,
    /// Score out of 10. The server owns validation; the client only displays it.
    pub rating: i64,
    #[serde(default)]
    pub review_text: Option<String>,
}

impl Review {
    /// Entry markup: author, score, text and a trailing divider.
    #[must_use]
    pub fn to_markup(&self) -> String {
        format!(
            r#"<div class="review"><strong>{}</strong> - {}/10{}<hr></div>"#,
            escape(&self.username),
            self.rating,
            paragraph(&escape(self.review_text.as_deref().unwrap_or_default())),
        )
    }
}

/// Placeholder markup for a movie without reviews.
#[must_use]
pub fn empty_list_markup() -> String {
    paragraph(NO_REVIEWS_MESSAGE)
}

/// Markup replacing the list after a failed fetch.
#[must_use]
pub fn fetch_failed_markup() -> String {
    paragraph(FETCH_FAILED_MESSAGE)
}

/// JSON body posted to `/submit_review`.
///
/// `rating` is forwarded exactly as the form field holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSubmission {
    pub movie_id: MovieId,
    pub rating: String,
    pub review_text: String,
}

/// Confirmation returned by the server after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitReceipt {
    pub message: String,
}
