//! commentary-server — HTTP façade over the commentary pipeline
//!
//! Three routes: a health check, a provider-availability probe, and the
//! batch commentary endpoint the game backend posts engine analysis to.

pub mod protocol;
pub mod routes;

pub use routes::{AppState, app};
