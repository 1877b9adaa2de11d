//! Backend ports: one trait per group of endpoints.
//!
//! Every call is a single request/response pair: no retries, no timeouts,
//! no de-duplication of identical in-flight requests.

use std::future::Future;

use movierec_domain::error::BackendError;
use movierec_domain::id::MovieId;
use movierec_domain::like::LikeAction;
use movierec_domain::movie::MovieCard;
use movierec_domain::review::{Review, ReviewSubmission, SubmitReceipt};

/// `POST /like_movie` and `POST /remove_like`.
pub trait LikeApi {
    /// Send `action` for `movie_id`. The response body is opaque.
    fn send(
        &self,
        action: LikeAction,
        movie_id: &MovieId,
    ) -> impl Future<Output = Result<(), BackendError>>;
}

/// `GET /load_more_movies?page=N`.
pub trait MovieFeed {
    /// Fetch the cards of `page`, in server order.
    fn load_page(&self, page: u32) -> impl Future<Output = Result<Vec<MovieCard>, BackendError>>;
}

/// `GET /get_reviews/{movie_id}` and `POST /submit_review`.
pub trait ReviewApi {
    /// Fetch every review of a movie, in server order.
    fn get_reviews(
        &self,
        movie_id: &MovieId,
    ) -> impl Future<Output = Result<Vec<Review>, BackendError>>;

    /// Post a new review.
    fn submit_review(
        &self,
        submission: &ReviewSubmission,
    ) -> impl Future<Output = Result<SubmitReceipt, BackendError>>;
}
