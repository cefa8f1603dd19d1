//! Authentication Middleware
//!
//! The two pipeline stages guarding `/api`: bearer token authentication
//! (`require_auth`) and role gating (`require_admin`, `require_role`).
//! Authentication runs first and attaches a [`CurrentUser`] to the request
//! extensions; role gates read it back and decide.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtError, JwtService, Role};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Require authentication middleware
///
/// Extracts and validates the JWT from the Authorization header. On success
/// the decoded identity is inserted into the request extensions and control
/// passes on; on failure the request is rejected with 401.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> AppResult<Response> {
    // Allow OPTIONS requests for CORS preflight (skip auth)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Only API routes are gated; everything else routes normally
    if !req.uri().path().starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    // Missing and malformed headers are deliberately indistinguishable
    // to the caller
    let token = match auth_header.and_then(JwtService::extract_from_header) {
        Some(token) => token,
        None => {
            security_log!("auth_missing", uri = ?req.uri());
            return Err(AppError::Unauthorized);
        }
    };

    match state.get_jwt_service().validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);

            tracing::debug!(
                user_id = %user.id,
                role = %user.role,
                "caller authenticated"
            );

            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!("auth_failed", error = %e, uri = ?req.uri());

            match e {
                JwtError::ExpiredToken => Err(AppError::TokenExpired),
                _ => Err(AppError::InvalidToken),
            }
        }
    }
}

/// Require admin role middleware
pub async fn require_admin(req: Request, next: Next) -> AppResult<Response> {
    authorize(Role::Admin, req, next).await
}

/// Require a specific role middleware
///
/// ```ignore
/// router.route_layer(axum::middleware::from_fn(require_role(Role::User)))
/// ```
pub fn require_role(
    required: Role,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = AppResult<Response>> + Send>>
+ Clone {
    move |req: Request, next: Next| Box::pin(authorize(required, req, next))
}

/// Role gate: read the identity attached by `require_auth` and decide
///
/// A request that never passed authentication carries no identity and is
/// always rejected.
async fn authorize(required: Role, req: Request, next: Next) -> AppResult<Response> {
    let Some(user) = req.extensions().get::<CurrentUser>() else {
        security_log!("authz_no_identity", required_role = %required, uri = ?req.uri());
        return Err(AppError::Forbidden(required));
    };

    if !user.has_role(required) {
        security_log!(
            "authz_denied",
            user_id = %user.id,
            user_role = %user.role,
            required_role = %required
        );
        return Err(AppError::Forbidden(required));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, middleware as axum_middleware, routing::get};
    use http::StatusCode;
    use tower::ServiceExt;

    async fn ok_handler() -> &'static str {
        "ok"
    }

    async fn inject_user(mut req: Request, next: Next) -> Response {
        req.extensions_mut().insert(CurrentUser {
            id: "user-1".to_string(),
            role: "USER".to_string(),
        });
        next.run(req).await
    }

    #[tokio::test]
    async fn role_gate_rejects_without_identity() {
        let app = Router::new()
            .route("/locked", get(ok_handler))
            .route_layer(axum_middleware::from_fn(require_admin));

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/locked")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn role_gate_rejects_wrong_role() {
        let app = Router::new()
            .route("/locked", get(ok_handler))
            .route_layer(axum_middleware::from_fn(require_admin))
            .layer(axum_middleware::from_fn(inject_user));

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/locked")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn role_gate_passes_matching_role() {
        let app = Router::new()
            .route("/open", get(ok_handler))
            .route_layer(axum_middleware::from_fn(require_role(Role::User)))
            .layer(axum_middleware::from_fn(inject_user));

        let resp = app
            .oneshot(Request::builder().uri("/open").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
