//! Like/unlike controller: posts the action and reloads the page on success.
//!
//! There is no optimistic update: the reload is the only way the page picks
//! up the new like state. Failures only reach the diagnostic channel.

use movierec_domain::error::{BackendError, MovieRecError};
use movierec_domain::id::MovieId;
use movierec_domain::like::LikeAction;

use crate::ports::{LikeApi, PageReloader};

/// Handles activations of like (or unlike) triggers.
pub struct LikeController<A, P> {
    api: A,
    page: P,
    action: LikeAction,
}

impl<A: LikeApi, P: PageReloader> LikeController<A, P> {
    /// Create a controller sending `action` on every activation.
    pub fn new(api: A, page: P, action: LikeAction) -> Self {
        Self { api, page, action }
    }

    /// Handle a trigger activation given the raw `data-movie-id` value.
    ///
    /// # Errors
    ///
    /// Returns [`MovieRecError::Validation`] when the attribute is missing or
    /// blank (no request is sent), or [`MovieRecError::Backend`] when the
    /// request fails.
    pub async fn activate_from_attribute(&self, raw: Option<&str>) -> Result<(), MovieRecError> {
        let movie_id = match raw.unwrap_or_default().parse::<MovieId>() {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(action = self.action.describe(), error = %err, "trigger has no movie id");
                return Err(err.into());
            }
        };
        self.activate(&movie_id).await?;
        Ok(())
    }

    /// Send the action for `movie_id`, then reload the page.
    ///
    /// # Errors
    ///
    /// Returns the [`BackendError`] of a failed request. The page is left
    /// untouched in that case.
    pub async fn activate(&self, movie_id: &MovieId) -> Result<(), BackendError> {
        match self.api.send(self.action, movie_id).await {
            Ok(()) => {
                tracing::info!(%movie_id, action = self.action.describe(), "done, reloading page");
                self.page.reload();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%movie_id, action = self.action.describe(), error = %err, "request failed");
                Err(err)
            }
        }
    }
}
