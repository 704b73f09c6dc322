// File: src/source.rs
// Purpose: Async seams between views and the REST backend

use adw_api::{ApiClient, ApiError, FeedPage, LikeToggle, Post};
use async_trait::async_trait;

/// Remote data for the feed and post views
///
/// Futures are not `Send`: everything runs on the single UI thread.
#[async_trait(?Send)]
pub trait ContentSource {
    async fn feed(&self, page: u32) -> Result<FeedPage, ApiError>;

    async fn post(&self, id: &str) -> Result<Post, ApiError>;
}

#[async_trait(?Send)]
impl ContentSource for ApiClient {
    async fn feed(&self, page: u32) -> Result<FeedPage, ApiError> {
        self.fetch_feed(page).await
    }

    async fn post(&self, id: &str) -> Result<Post, ApiError> {
        self.fetch_post(id).await
    }
}

#[async_trait(?Send)]
pub trait LikeBackend {
    /// Toggles a like; `liked` is the state before the click
    async fn toggle_like(&self, liked: bool, item_type: &str, item_id: &str)
        -> Result<LikeToggle, ApiError>;
}

#[async_trait(?Send)]
impl LikeBackend for ApiClient {
    async fn toggle_like(
        &self,
        liked: bool,
        item_type: &str,
        item_id: &str,
    ) -> Result<LikeToggle, ApiError> {
        ApiClient::toggle_like(self, liked, item_type, item_id).await
    }
}
