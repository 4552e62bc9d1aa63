//! JSON rendering for summaries.

use crate::error::{Error, Result};

use super::Summary;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a summary to JSON.
pub fn to_json(summary: &Summary, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(summary),
        JsonFormat::Compact => serde_json::to_string(summary),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
