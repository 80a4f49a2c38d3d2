pub mod purchase;

pub use purchase::{PurchaseAck, PurchaseDuration, PurchaseEvent, TIMESTAMP_FORMAT};
