//! REST client for the Adwaita-web blog backend.
//!
//! - `GET /api/v1/feed?page=N`, `GET /api/v1/posts/:id`
//! - `POST /api/v1/auth/login`, `POST /api/v1/auth/register`
//! - `POST /like/{like|unlike}/:item_type/:item_id`
//! - `POST /api/settings/{theme|accent_color}`
//!
//! POST requests carry the page's CSRF token. Failures come back as
//! [`ApiError`] and are never retried.

pub mod client;
pub mod error;
pub mod models;

pub use client::{decode, ApiClient, DEFAULT_CSRF_HEADER};
pub use error::{ApiError, ApiResult};
pub use models::{
    AuthSession, Author, Credentials, FeedItem, FeedPage, LikeToggle, Post, Registration, Term,
};
