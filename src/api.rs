//! Posts API
//!
//! One-shot HTTP fetch of the posts batch.

use thiserror::Error;

use crate::models::Post;

/// Fixed batch: the first seven posts. Filtering happens client-side, so the
/// list is never re-fetched.
const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts/?_start=0&_limit=7";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

pub async fn fetch_posts() -> Result<Vec<Post>, FetchError> {
    let response = gloo_net::http::Request::get(POSTS_URL)
        .send()
        .await
        .map_err(|e| FetchError::Http(e.to_string()))?;

    response
        .json::<Vec<Post>>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
