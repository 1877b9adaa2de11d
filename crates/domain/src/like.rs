//! Like/unlike actions and the payload they send.

use serde::Serialize;

use crate::id::MovieId;

/// What a like trigger does to the visitor's list of liked movies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    Like,
    Unlike,
}

impl LikeAction {
    /// Backend path receiving the action.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Like => "/like_movie",
            Self::Unlike => "/remove_like",
        }
    }

    /// Short description used in diagnostic messages.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Like => "liking movie",
            Self::Unlike => "removing movie from likes",
        }
    }
}

/// JSON body of a like or unlike request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeRequest {
    pub movie_id: MovieId,
}
