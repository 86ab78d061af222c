//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Envelope for JSON output: the payload plus metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T: ?Sized> {
    /// The actual data
    pub data: &'a T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the output was produced (RFC 3339)
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Number of items, for list payloads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Metadata {
    fn now(count: Option<usize>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            count,
        }
    }
}

/// Format a single value as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput {
        data,
        meta: Metadata::now(None),
    })
}

/// Format a list as pretty-printed JSON, recording its length in the metadata
pub fn format_json_list<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput {
        data: items,
        meta: Metadata::now(Some(items.len())),
    })
}
