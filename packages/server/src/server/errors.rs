//! API error type and its HTTP status mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::common::auth::AuthError;

/// Errors surfaced by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Map an `anyhow` error coming out of a model query.
    ///
    /// Model lookups use `fetch_one`, so a missing row arrives here as a
    /// wrapped `sqlx::Error::RowNotFound` and becomes a 404.
    pub fn from_model(err: anyhow::Error) -> Self {
        match err.downcast::<sqlx::Error>() {
            Ok(sqlx::Error::RowNotFound) => ApiError::NotFound,
            Ok(db_err) => ApiError::Database(db_err),
            Err(other) => ApiError::Internal(other),
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Auth(AuthError::AuthenticationRequired)
            | ApiError::Auth(AuthError::InvalidToken) => {
                (StatusCode::UNAUTHORIZED, "authentication_required")
            }
            ApiError::Auth(AuthError::PermissionDenied(_)) => {
                (StatusCode::FORBIDDEN, "permission_denied")
            }
            ApiError::Database(sqlx::Error::RowNotFound) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Auth(_) | ApiError::Database(_) | ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": self.to_string(),
            "code": code,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_map_to_401_and_403() {
        let (status, _) = ApiError::Auth(AuthError::AuthenticationRequired).status_and_code();
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) =
            ApiError::Auth(AuthError::PermissionDenied("nope".to_string())).status_and_code();
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_missing_row_maps_to_404() {
        let model_err = anyhow::Error::from(sqlx::Error::RowNotFound);
        let (status, code) = ApiError::from_model(model_err).status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "not_found");
    }

    #[test]
    fn test_other_errors_map_to_500() {
        let (status, _) = ApiError::Internal(anyhow::anyhow!("boom")).status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
