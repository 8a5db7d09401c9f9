//! Messages emitted by a tool invocation.
//!
//! A tool returns an ordered sequence of messages: free-form text for
//! humans, exactly one structured JSON result (success or error shape),
//! and — for audio extraction on success — one binary payload.

use serde::Serialize;
use serde_json::{json, Value};

/// One message in a tool's output sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolMessage {
    /// Human-readable text.
    Text(String),
    /// The structured result.
    Json(Value),
    /// Binary payload with naming metadata.
    Blob {
        data: Vec<u8>,
        filename: String,
        mime_type: String,
    },
}

impl ToolMessage {
    pub fn text(message: impl Into<String>) -> Self {
        Self::Text(message.into())
    }

    /// Builds the `{status: "error", message}` result message.
    pub fn error_json(message: &str) -> Self {
        Self::Json(json!({ "status": "error", "message": message }))
    }

    /// Returns the JSON value if this is the structured result message.
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// True when this is the structured result message with an error status.
    #[must_use]
    pub fn is_error_json(&self) -> bool {
        self.as_json()
            .and_then(|value| value.get("status"))
            .and_then(Value::as_str)
            == Some("error")
    }
}

/// Structured success result of an audio extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionSummary {
    pub status: &'static str,
    pub message: String,
    pub original_filename: String,
    pub audio_filename: String,
    pub audio_format: String,
    pub audio_size: u64,
}
