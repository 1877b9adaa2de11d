//! Review panel: lists a movie's reviews and submits new ones.
//!
//! ```text
//! Idle ──fetch──▶ Fetching ──▶ Rendered | FetchFailed
//! Rendered ──submit──▶ Submitting ──▶ (refresh) Fetching | SubmitFailed
//! ```
//!
//! A refresh is only issued after the submission succeeded. Independent
//! fetches are not ordered: whichever response arrives last is displayed.

use std::cell::Cell;

use movierec_domain::error::BackendError;
use movierec_domain::id::MovieId;
use movierec_domain::review::{
    ReviewSubmission, SUBMIT_FAILED_MESSAGE, empty_list_markup, fetch_failed_markup,
};

use crate::ports::{Notifier, ReviewApi, ReviewForm, ReviewRegion};

/// Where the panel is in its fetch/submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Idle,
    Fetching,
    Rendered,
    FetchFailed,
    Submitting,
    SubmitFailed,
}

/// Review list and form of a single movie page.
pub struct ReviewPanel<A, R, F, N> {
    api: A,
    region: R,
    form: F,
    notifier: N,
    movie_id: MovieId,
    state: Cell<PanelState>,
}

impl<A, R, F, N> ReviewPanel<A, R, F, N>
where
    A: ReviewApi,
    R: ReviewRegion,
    F: ReviewForm,
    N: Notifier,
{
    /// Create an idle panel for `movie_id`.
    pub fn new(api: A, region: R, form: F, notifier: N, movie_id: MovieId) -> Self {
        Self {
            api,
            region,
            form,
            notifier,
            movie_id,
            state: Cell::new(PanelState::Idle),
        }
    }

    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state.get()
    }

    /// Fetch the reviews and redraw the region.
    ///
    /// An empty list renders a single placeholder; a failure replaces the
    /// region with a static message.
    ///
    /// # Errors
    ///
    /// Returns the [`BackendError`] of a failed fetch, after the failure
    /// message has been rendered.
    pub async fn fetch_reviews(&self) -> Result<usize, BackendError> {
        self.state.set(PanelState::Fetching);

        let reviews = match self.api.get_reviews(&self.movie_id).await {
            Ok(reviews) => reviews,
            Err(err) => {
                tracing::warn!(movie_id = %self.movie_id, error = %err, "failed to load reviews");
                self.region.replace_markup(&fetch_failed_markup());
                self.state.set(PanelState::FetchFailed);
                return Err(err);
            }
        };

        self.region.clear();
        if reviews.is_empty() {
            self.region.append_markup(&empty_list_markup());
        } else {
            for review in &reviews {
                self.region.append_markup(&review.to_markup());
            }
        }
        self.state.set(PanelState::Rendered);
        Ok(reviews.len())
    }

    /// Submit the form's current values, then refresh the list.
    ///
    /// On success the server's message is shown, the form is reset and the
    /// list is fetched once more. Values are sent unvalidated.
    ///
    /// # Errors
    ///
    /// Returns the [`BackendError`] of a failed submission, after the generic
    /// failure alert has been shown. A failing refresh is not reported here:
    /// it already rendered its own failure message.
    pub async fn submit_review(&self) -> Result<(), BackendError> {
        let submission = ReviewSubmission {
            movie_id: self.movie_id.clone(),
            rating: self.form.rating(),
            review_text: self.form.review_text(),
        };
        self.state.set(PanelState::Submitting);

        match self.api.submit_review(&submission).await {
            Ok(receipt) => {
                tracing::info!(movie_id = %self.movie_id, "review submitted");
                self.notifier.alert(&receipt.message);
                self.form.reset();
                let _ = self.fetch_reviews().await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(movie_id = %self.movie_id, error = %err, "failed to submit review");
                self.notifier.alert(SUBMIT_FAILED_MESSAGE);
                self.state.set(PanelState::SubmitFailed);
                Err(err)
            }
        }
    }
}
