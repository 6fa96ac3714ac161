//! JSON rendering for extracted objects.

use crate::error::{Error, Result};
use crate::model::ExtractedObject;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert objects to a JSON array.
///
/// Source elements are not part of the output.
pub fn to_json(objects: &[ExtractedObject<'_>], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(objects),
        JsonFormat::Compact => serde_json::to_string(objects),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
