//! Handler-boundary errors.
//!
//! Every failure ends here as a status code plus a short plaintext body, and
//! is logged once on the way out.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use friendbook_core::DomainError;
use friendbook_infra::StoreError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed body or an invalid relation between arguments (400).
    #[error("{0}")]
    BadRequest(String),

    /// Unknown user id (404).
    #[error("{0}")]
    NotFound(String),

    /// Anything the client could not have caused (500, details only logged).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::BadRequest(msg) => {
                tracing::warn!(%status, "bad request: {msg}");
                msg.clone()
            }
            Self::NotFound(msg) => {
                tracing::warn!(%status, "not found: {msg}");
                "Not found".to_string()
            }
            Self::Internal(msg) => {
                tracing::error!(%status, "internal error: {msg}");
                "Internal error".to_string()
            }
        };

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => Self::NotFound(e.to_string()),
            StoreError::Poisoned => Self::Internal(e.to_string()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            // Path ids are produced by our own router, so a bad one is our fault.
            DomainError::InvalidId(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use friendbook_core::UserId;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn bad_request_is_400_with_message() {
        let response = ApiError::bad_request("already friends").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "already friends");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::from(StoreError::NotFound(UserId::new(3))).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Not found");
    }

    #[tokio::test]
    async fn internal_hides_details() {
        let response = ApiError::internal("lock poisoned").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Internal error");
    }

    #[test]
    fn invalid_id_maps_to_internal() {
        let err = ApiError::from(DomainError::invalid_id("UserId: invalid digit"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
