//! HTTP client helpers (REST).

use crate::logic::{delete_review_path, reviews_path};
use crate::models::ReviewRow;
use bindery_api_models::ReviewsResponse;
use gloo_net::http::Request;

/// REST client for the reviews endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient {
    /// URL prefix for every request; empty targets the page origin.
    pub base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (empty = same origin).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(&self, path: &str) -> anyhow::Result<T> {
        let response = Request::get(&format!("{}{path}", self.base_url)).send().await?;
        if !response.ok() {
            anyhow::bail!("API response not ok ({})", response.status());
        }
        Ok(response.json::<T>().await?)
    }

    /// Fetch the ordered review collection for one book.
    ///
    /// # Errors
    /// Fails on transport errors, on any non-2xx status, and when the body
    /// does not parse as a review collection.
    pub async fn fetch_reviews(&self, book_id: &str) -> anyhow::Result<Vec<ReviewRow>> {
        let data: ReviewsResponse = self.get_json(&reviews_path(book_id)).await?;
        Ok(data.reviews.into_iter().map(ReviewRow::from).collect())
    }

    /// Issue a removal for one (book, reviewer) pair.
    ///
    /// The response status is deliberately not inspected: deletion is
    /// server-authoritative and the visible row outlives it until the next
    /// open-cycle.
    ///
    /// # Errors
    /// Fails only when the request cannot be sent at all.
    pub async fn delete_review(&self, book_id: &str, user_id: &str) -> anyhow::Result<()> {
        Request::delete(&format!(
            "{}{}",
            self.base_url,
            delete_review_path(book_id, user_id)
        ))
        .send()
        .await?;
        Ok(())
    }
}
