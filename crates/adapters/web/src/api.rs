//! HTTP client wrapping `gloo-net` for calls to the movierec backend.

use gloo_net::http::{Request, Response};
use movierec_app::ports::{LikeApi, MovieFeed, ReviewApi};
use movierec_domain::error::BackendError;
use movierec_domain::id::MovieId;
use movierec_domain::like::{LikeAction, LikeRequest};
use movierec_domain::movie::MovieCard;
use movierec_domain::review::{Review, ReviewSubmission, SubmitReceipt};
use serde::Deserialize;

use crate::error::WebError;

/// JSON error body some endpoints return on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "message")]
    error: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, WebError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {status}"),
    };
    Err(WebError::Status { status, message })
}

/// Percent-encode a value used as a single path segment.
fn encode_path_segment(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('/', "%2F")
        .replace('?', "%3F")
        .replace('#', "%23")
        .replace(' ', "%20")
}

/// Endpoint accepting review submissions.
const SUBMIT_REVIEW_PATH: &str = "/submit_review";

/// Path of one page of the movie feed.
fn feed_path(page: u32) -> String {
    format!("/load_more_movies?page={page}")
}

/// Path listing the reviews of `movie_id`.
fn reviews_path(movie_id: &MovieId) -> String {
    format!("/get_reviews/{}", encode_path_segment(&movie_id.to_string()))
}

/// Backend client shared by every component.
#[derive(Debug, Clone, Default)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    /// Client sending every request to `base_url` + endpoint path.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    async fn post_like(&self, action: LikeAction, movie_id: &MovieId) -> Result<(), WebError> {
        let body = LikeRequest {
            movie_id: movie_id.clone(),
        };
        check_response(
            Request::post(&self.url(action.endpoint()))
                .json(&body)?
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }

    async fn fetch_page(&self, page: u32) -> Result<Vec<MovieCard>, WebError> {
        let url = self.url(&feed_path(page));
        let resp = check_response(Request::get(&url).send().await?).await?;
        let cards: Vec<MovieCard> = resp.json().await?;
        Ok(cards)
    }

    async fn fetch_reviews(&self, movie_id: &MovieId) -> Result<Vec<Review>, WebError> {
        let url = self.url(&reviews_path(movie_id));
        let resp = check_response(Request::get(&url).send().await?).await?;
        let reviews: Vec<Review> = resp.json().await?;
        Ok(reviews)
    }

    async fn post_review(&self, submission: &ReviewSubmission) -> Result<SubmitReceipt, WebError> {
        let resp = check_response(
            Request::post(&self.url(SUBMIT_REVIEW_PATH))
                .json(submission)?
                .send()
                .await?,
        )
        .await?;
        let receipt: SubmitReceipt = resp.json().await?;
        Ok(receipt)
    }
}

impl LikeApi for HttpBackend {
    async fn send(&self, action: LikeAction, movie_id: &MovieId) -> Result<(), BackendError> {
        self.post_like(action, movie_id).await.map_err(Into::into)
    }
}

impl MovieFeed for HttpBackend {
    async fn load_page(&self, page: u32) -> Result<Vec<MovieCard>, BackendError> {
        self.fetch_page(page).await.map_err(Into::into)
    }
}

impl ReviewApi for HttpBackend {
    async fn get_reviews(&self, movie_id: &MovieId) -> Result<Vec<Review>, BackendError> {
        self.fetch_reviews(movie_id).await.map_err(Into::into)
    }

    async fn submit_review(
        &self,
        submission: &ReviewSubmission,
    ) -> Result<SubmitReceipt, BackendError> {
        self.post_review(submission).await.map_err(Into::into)
    }
}
