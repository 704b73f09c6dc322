// File: src/client.rs
// Purpose: Thin reqwest wrapper over the blog REST endpoints

use crate::error::{ApiError, ApiResult};
use crate::models::{
    AuthSession, Credentials, FeedPage, LikeToggle, Post, PostEnvelope, Registration,
};
use reqwest::{Client, Method, Request, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

/// REST client
///
/// Requests are built and sent in two steps so the exact request can be
/// inspected without a network. POST requests carry the CSRF token header
/// when a token is set.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    csrf_header: String,
    csrf_token: Option<String>,
}

impl ApiClient {
    /// `base_url` is the origin the `/api/...` paths are appended to
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_header: DEFAULT_CSRF_HEADER.to_string(),
            csrf_token: None,
        }
    }

    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_csrf_header(mut self, header: impl Into<String>) -> Self {
        self.csrf_header = header.into();
        self
    }

    pub fn with_csrf_token(mut self, token: Option<String>) -> Self {
        self.csrf_token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Request builders
    // ========================================================================

    pub fn feed_request(&self, page: u32) -> ApiResult<Request> {
        let url = self.url("/api/v1/feed");
        self.http
            .get(&url)
            .query(&[("page", page)])
            .build()
            .map_err(|source| ApiError::Request { url, source })
    }

    pub fn post_request(&self, id: &str) -> ApiResult<Request> {
        let url = self.endpoint(&["api", "v1", "posts", id])?;
        self.http
            .get(url.clone())
            .build()
            .map_err(|source| ApiError::Request {
                url: url.to_string(),
                source,
            })
    }

    pub fn login_request(&self, credentials: &Credentials) -> ApiResult<Request> {
        self.post_json("/api/v1/auth/login", credentials)
    }

    pub fn register_request(&self, registration: &Registration) -> ApiResult<Request> {
        self.post_json("/api/v1/auth/register", registration)
    }

    /// `POST /like/{like|unlike}/:item_type/:item_id`
    pub fn like_request(&self, liked: bool, item_type: &str, item_id: &str) -> ApiResult<Request> {
        let action = if liked { "unlike" } else { "like" };
        let url = self.endpoint(&["like", action, item_type, item_id])?;
        self.post_url(url, None::<&()>)
    }

    /// Base URL plus percent-encoded path segments
    ///
    /// Segments come from the location hash, so empty, `.` and `..` values
    /// are rejected instead of being resolved against the path.
    pub fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let invalid = |reason: String| ApiError::InvalidUrl {
            url: self.base_url.clone(),
            reason,
        };

        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(invalid(format!("invalid path segment '{}'", bad)));
        }

        let mut url = Url::parse(&self.base_url).map_err(|err| invalid(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("base URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn theme_request(&self, theme: &str) -> ApiResult<Request> {
        self.post_json("/api/settings/theme", &json!({ "theme": theme }))
    }

    pub fn accent_color_request(&self, accent_color: &str) -> ApiResult<Request> {
        self.post_json(
            "/api/settings/accent_color",
            &json!({ "accent_color": accent_color }),
        )
    }

    fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Request> {
        self.post(path, Some(body))
    }

    fn post<B: Serialize + ?Sized>(&self, path: &str, body: Option<&B>) -> ApiResult<Request> {
        let raw = self.url(path);
        let url = Url::parse(&raw).map_err(|err| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: err.to_string(),
        })?;
        self.post_url(url, body)
    }

    fn post_url<B: Serialize + ?Sized>(&self, url: Url, body: Option<&B>) -> ApiResult<Request> {
        let mut builder = self.http.request(Method::POST, url.clone());
        if let Some(token) = &self.csrf_token {
            builder = builder.header(self.csrf_header.as_str(), token.as_str());
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder.build().map_err(|source| ApiError::Request {
            url: url.to_string(),
            source,
        })
    }

    // ========================================================================
    // Calls
    // ========================================================================

    pub async fn fetch_feed(&self, page: u32) -> ApiResult<FeedPage> {
        self.send_json(self.feed_request(page)?).await
    }

    pub async fn fetch_post(&self, id: &str) -> ApiResult<Post> {
        let envelope: PostEnvelope = self.send_json(self.post_request(id)?).await?;
        Ok(envelope.into())
    }

    pub async fn login(&self, credentials: &Credentials) -> ApiResult<AuthSession> {
        self.send_json(self.login_request(credentials)?).await
    }

    pub async fn register(&self, registration: &Registration) -> ApiResult<AuthSession> {
        self.send_json(self.register_request(registration)?).await
    }

    /// Toggles a like; `liked` is the state before the click
    pub async fn toggle_like(&self, liked: bool, item_type: &str, item_id: &str) -> ApiResult<LikeToggle> {
        self.send_json(self.like_request(liked, item_type, item_id)?)
            .await
    }

    pub async fn save_theme(&self, theme: &str) -> ApiResult<()> {
        self.send(self.theme_request(theme)?).await.map(|_| ())
    }

    pub async fn save_accent_color(&self, accent_color: &str) -> ApiResult<()> {
        self.send(self.accent_color_request(accent_color)?)
            .await
            .map(|_| ())
    }

    async fn send_json<T: DeserializeOwned>(&self, request: Request) -> ApiResult<T> {
        let (url, body) = self.send(request).await?;
        decode(&url, &body)
    }

    /// Sends a request, returning the URL and body of a successful response
    async fn send(&self, request: Request) -> ApiResult<(String, String)> {
        let url = request.url().to_string();
        tracing::debug!("{} {}", request.method(), url);

        let response = self.http.execute(request).await.map_err(|source| {
            tracing::error!("Request to {} failed: {}", url, source);
            ApiError::Request {
                url: url.clone(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("{} returned {}", url, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await.map_err(|source| ApiError::Request {
            url: url.clone(),
            source,
        })?;
        Ok((url, body))
    }
}

/// Decodes a JSON body, attributing failures to `url`
pub fn decode<T: DeserializeOwned>(url: &str, body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|source| {
        tracing::error!("Invalid JSON from {}: {}", url, source);
        ApiError::Decode {
            url: url.to_string(),
            source,
        }
    })
}
