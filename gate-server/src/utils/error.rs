//! Unified error handling
//!
//! [`AppError`] covers every way a request can be rejected by the gate.
//! All variants are terminal and request-local; none is ever retried or
//! escalated. Responses carry a structured JSON body and never leak
//! internal detail.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::auth::Role;

/// JSON error body, the gate's only failure wire shape
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed Authorization header (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Token failed verification (401)
    #[error("Invalid token")]
    InvalidToken,

    /// Token expired (401) - surfaced identically to `InvalidToken`
    #[error("Token expired")]
    TokenExpired,

    /// Caller lacks the required role (403)
    #[error("Forbidden: {0} access required")]
    Forbidden(Role),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token".to_string()),
            // Expired and tampered tokens are indistinguishable to the caller
            AppError::TokenExpired => (StatusCode::UNAUTHORIZED, "Invalid token".to_string()),
            AppError::Forbidden(role) => (
                StatusCode::FORBIDDEN,
                format!("Forbidden: {} access required", role),
            ),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(status_of(AppError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AppError::InvalidToken), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AppError::TokenExpired), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(AppError::Forbidden(Role::Admin)),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_forbidden_message_names_the_role() {
        assert_eq!(
            AppError::Forbidden(Role::Admin).to_string(),
            "Forbidden: Admin access required"
        );
        assert_eq!(
            AppError::Forbidden(Role::User).to_string(),
            "Forbidden: User access required"
        );
    }
}
