//! Identity Routes - requires authentication

use axum::Router;
use axum::routing::get;

use crate::core::ServerState;
use crate::handler;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/me", get(handler::identity::me))
}
