pub mod otp;
pub mod phone;
pub mod verification;

pub use otp::OneTimeCode;
pub use phone::{InvalidPhoneNumber, PhoneNumber};
pub use verification::{VerificationRequest, VerificationResponse};
