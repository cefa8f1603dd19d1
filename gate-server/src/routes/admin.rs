//! Admin Routes - requires authentication and admin access

use axum::Router;
use axum::routing::get;

use crate::auth::require_admin;
use crate::core::ServerState;
use crate::handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/status", get(handler::admin::status))
        .route_layer(axum::middleware::from_fn(require_admin))
}
