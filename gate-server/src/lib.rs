//! Gate Server - request authentication and authorization gate
//!
//! # Architecture
//!
//! Inbound requests pass through a two-stage pipeline:
//!
//! - **Authentication** (`auth::require_auth`): validates the bearer JWT
//!   and attaches the decoded identity to the request
//! - **Authorization** (`auth::require_admin` / `auth::require_role`):
//!   permits or rejects continuation based on the required role
//!
//! # Module structure
//!
//! ```text
//! gate-server/src/
//! ├── core/          # configuration, state, server lifecycle
//! ├── auth/          # JWT validation, roles, auth middleware pair
//! ├── middleware/    # request logging
//! ├── routes/        # HTTP routing and layer composition
//! ├── handler/       # request handlers
//! └── utils/         # errors, logging setup
//! ```

pub mod auth;
pub mod core;
pub mod handler;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export public types
pub use auth::{Claims, CurrentUser, JwtConfig, JwtError, JwtService, Role};
pub use crate::core::{Config, ConfigError, Server, ServerState};
pub use routes::{build_app, build_router};
pub use utils::logger::{init_logger, init_logger_with_file};
pub use utils::{AppError, AppResult};

/// Security event logging - tracing with a dedicated `security` target
#[macro_export]
macro_rules! security_log {
    ($event:expr, $($fields:tt)*) => {
        tracing::warn!(
            target: "security",
            event = $event,
            $($fields)*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
   ______      __
  / ____/___ _/ /____
 / / __/ __ `/ __/ _ \
/ /_/ / /_/ / /_/  __/
\____/\__,_/\__/\___/
    "#
    );
}
