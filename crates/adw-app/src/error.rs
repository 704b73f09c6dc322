// File: src/error.rs
// Purpose: Errors surfaced by the view dispatcher

use adw_api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// Remote data could not be fetched; nothing was rendered
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("missing route parameter '{0}'")]
    MissingParam(&'static str),

    #[error("invalid value '{value}' for route parameter '{name}'")]
    InvalidParam { name: &'static str, value: String },
}

impl DispatchError {
    pub fn is_network_failure(&self) -> bool {
        matches!(self, Self::Api(err) if err.is_network_failure())
    }
}
