//! HTTP handlers for purchase-receiver.

pub mod health;
pub mod purchase;

pub use health::{health_check, metrics};
pub use purchase::receive_purchase;
