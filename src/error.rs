use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("object not found: {0}")]
    ObjectUnknown(String), // Contains the requested key

    #[error("storage backend unavailable: {0}")]
    Upstream(String),

    // Internal Errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] axum::http::Error),

    #[error("Axum error: {0}")]
    Axum(#[from] axum::Error),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NoSuchKey(key) => AppError::ObjectUnknown(key),
            StorageError::Timeout(_) | StorageError::Backend(_) => {
                AppError::Upstream(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Generating response for AppError: {:?}", self);

        let status_code = match &self {
            Self::ObjectUnknown(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Io(_) | Self::Http(_) | Self::Axum(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status_code, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn missing_key_maps_to_not_found() {
        let err: AppError = StorageError::NoSuchKey("a/b.txt".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn backend_failure_maps_to_bad_gateway() {
        let err: AppError = StorageError::Backend("connection refused".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn timeout_maps_to_bad_gateway() {
        let err: AppError = StorageError::Timeout(Duration::from_secs(5)).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
