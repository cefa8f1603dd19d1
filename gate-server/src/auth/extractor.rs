//! JWT Extractor
//!
//! Lets protected handlers take the verified identity as an argument.
//! Reuses the identity `require_auth` attached; validates the header
//! itself when used on a route the middleware does not cover.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Already extracted by the authentication middleware
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header.and_then(JwtService::extract_from_header) {
            Some(token) => token,
            None => {
                security_log!("auth_missing", uri = ?parts.uri);
                return Err(AppError::Unauthorized);
            }
        };

        match state.get_jwt_service().validate_token(token) {
            Ok(claims) => {
                let user = CurrentUser::from(claims);

                // Store for reuse by later extractors on the same request
                parts.extensions.insert(user.clone());

                Ok(user)
            }
            Err(e) => {
                security_log!("auth_failed", error = %e, uri = ?parts.uri);

                match e {
                    JwtError::ExpiredToken => Err(AppError::TokenExpired),
                    _ => Err(AppError::InvalidToken),
                }
            }
        }
    }
}
