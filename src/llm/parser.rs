use crate::error::{Error, Result};
use crate::models::Classification;

/// Parse a completion as a classification. The model is told to answer with
/// bare JSON, so anything else (prose, code fences) is rejected.
pub fn parse_classification(response: &str) -> Result<Classification> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return Err(Error::ParseError("empty completion".to_string()));
    }

    serde_json::from_str(trimmed)
        .map_err(|e| Error::ParseError(format!("Failed to parse classification: {}", e)))
}
