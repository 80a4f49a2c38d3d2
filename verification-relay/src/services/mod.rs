pub mod metrics;
pub mod providers;

pub use self::metrics::record_provider_call;
pub use providers::{Msg91Provider, ProviderError, ProviderResponse, SmsProvider};
