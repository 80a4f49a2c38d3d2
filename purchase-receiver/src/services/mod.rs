pub mod sink;

pub use sink::{PurchaseSink, StdoutSink};
