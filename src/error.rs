//! Error types for the news cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Config Error Enum ==
/// Raised while turning configuration into cache instances.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Eviction policy name other than LRU or LFU
    #[error("Cache algorithm not defined: {0:?}")]
    UnknownAlgorithm(String),
}

// == Service Error Enum ==
/// Errors surfaced by the backing stores and the HTTP layer.
///
/// The cache-sync layer passes these through untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No entity with the requested id
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// Request body failed validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Startup configuration rejected
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        Self::NotFound { entity, id }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Config(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ServiceError::not_found("News", 7);
        assert_eq!(err.to_string(), "News with id 7 not found");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServiceError::not_found("Comment", 1).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::InvalidRequest("blank".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::from(ConfigError::UnknownAlgorithm("MRU".into()))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
