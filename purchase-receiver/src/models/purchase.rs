use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-side timestamp layout used in records and acknowledgements.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Subscription length as sent by the client: usually free text ("1 month")
/// or a number, but any JSON value is accepted and logged as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PurchaseDuration {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl fmt::Display for PurchaseDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseDuration::Text(text) => write!(f, "{}", text),
            PurchaseDuration::Number(number) => write!(f, "{}", number),
            PurchaseDuration::Other(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseEvent {
    pub service: String,
    pub duration: PurchaseDuration,
    pub status: String,
    /// Client clock as the sender reports it (epoch millis from the mobile
    /// client, but any shape is tolerated).
    #[serde(default)]
    pub timestamp: Option<serde_json::Value>,
}

impl PurchaseEvent {
    /// The block written to stdout for each received event.
    pub fn render_record(&self, received_at: &str) -> String {
        let mut record = format!(
            "\n[{}] Purchase Notification:\nService: {}\nDuration: {}\nStatus: {}\n",
            received_at, self.service, self.duration, self.status
        );
        match &self.timestamp {
            None | Some(serde_json::Value::Null) => {}
            Some(serde_json::Value::String(text)) => {
                record.push_str(&format!("Client timestamp: {}\n", text));
            }
            Some(other) => record.push_str(&format!("Client timestamp: {}\n", other)),
        }
        record.push('\n');
        record
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PurchaseAck {
    pub status: &'static str,
    pub timestamp: String,
}

impl PurchaseAck {
    pub fn received<Tz>(at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            status: "received",
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
