//! HTTP middleware that is not part of the auth pipeline itself.

mod logging;

pub use logging::logging_middleware;
