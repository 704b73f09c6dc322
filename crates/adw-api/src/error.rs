// File: src/error.rs
// Purpose: Error type for REST calls

use thiserror::Error;

/// A failed API call
///
/// Every variant is a network failure from the caller's point of view: the
/// call did not produce usable data. None of them are retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    /// The request URL could not be built
    #[error("invalid request URL for {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn is_network_failure(&self) -> bool {
        matches!(
            self,
            Self::Request { .. }
                | Self::Status { .. }
                | Self::InvalidUrl { .. }
                | Self::Decode { .. }
        )
    }

    /// HTTP status for non-success responses
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. }
            | Self::Status { url, .. }
            | Self::InvalidUrl { url, .. }
            | Self::Decode { url, .. } => url,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
