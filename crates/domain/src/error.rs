//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into these via
//! `#[from]`. Transport failures and malformed responses are deliberately not
//! told apart: both surface as [`BackendError::Transport`].

use std::error::Error as StdError;

/// Top-level error for the movierec client.
#[derive(Debug, thiserror::Error)]
pub enum MovieRecError {
    /// A value read from the page failed a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A call to the backend failed.
    #[error("backend error")]
    Backend(#[from] BackendError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The trigger carried no movie identifier.
    #[error("movie id must not be empty")]
    EmptyMovieId,
}

/// Failure of a single request/response exchange with the backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error text from the response body, or a generic description.
        message: String,
    },

    /// The request never completed, or its body could not be decoded.
    #[error("request failed")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),
}

impl BackendError {
    /// Wrap any transport-level error.
    pub fn transport(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }
}
