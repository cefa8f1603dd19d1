use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::Config;

/// Shared server state
///
/// Cheap to clone; one instance per process. Read-only at request time —
/// request handling never mutates it.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(&config.jwt));
        Self {
            config,
            jwt_service,
        }
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
