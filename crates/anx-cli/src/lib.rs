//! Library surface of the dashboard CLI: logging setup and the
//! session-scoped dataset store, exposed for integration tests.

pub mod logging;
pub mod session;
