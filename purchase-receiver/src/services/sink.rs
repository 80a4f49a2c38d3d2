use crate::models::PurchaseEvent;
use async_trait::async_trait;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

/// Destination for received purchase records.
#[async_trait]
pub trait PurchaseSink: Send + Sync {
    async fn record(&self, event: &PurchaseEvent, received_at: &str) -> std::io::Result<()>;
}

/// Writes each record to the process's standard output.
///
/// Records are written whole under a lock so concurrent requests never interleave.
pub struct StdoutSink {
    stdout: Mutex<Stdout>,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            stdout: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PurchaseSink for StdoutSink {
    async fn record(&self, event: &PurchaseEvent, received_at: &str) -> std::io::Result<()> {
        let record = event.render_record(received_at);

        let mut stdout = self.stdout.lock().await;
        stdout.write_all(record.as_bytes()).await?;
        stdout.flush().await
    }
}
