//! Identity Handlers

use axum::Json;
use serde::Serialize;

use crate::auth::CurrentUser;

/// Identity returned to the authenticated caller
#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub sub: String,
    pub role: String,
}

/// Return the verified identity attached by the authentication stage
pub async fn me(user: CurrentUser) -> Json<IdentityResponse> {
    Json(IdentityResponse {
        sub: user.id,
        role: user.role,
    })
}
