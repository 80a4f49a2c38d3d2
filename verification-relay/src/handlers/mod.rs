//! HTTP handlers for verification-relay.

pub mod health;
pub mod verification;

pub use health::{health_check, metrics};
pub use verification::send_verification;
