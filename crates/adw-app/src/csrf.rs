// File: src/csrf.rs
// Purpose: CSRF token discovery and API client construction

use crate::config::ApiConfig;
use adw_api::ApiClient;
use adw_dom::Document;

/// `<meta name="csrf-token" content="...">`
pub const CSRF_META_NAME: &str = "csrf-token";

/// Token published by the server page, if any
pub fn csrf_token(document: &Document) -> Option<String> {
    document
        .meta_content(CSRF_META_NAME)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

pub fn api_client(config: &ApiConfig, csrf_token: Option<String>) -> ApiClient {
    ApiClient::new(&config.base_url)
        .with_csrf_header(config.csrf_header.as_str())
        .with_csrf_token(csrf_token)
}
