//! Parsing of the free-text header field.

use std::collections::HashMap;

use crate::error::ClientError;

/// Parse header text as a JSON object of string values.
///
/// Blank text means "no headers". Anything that is not an object whose
/// values are all strings is rejected before a request is ever built.
pub fn parse_headers(text: &str) -> Result<HashMap<String, String>, ClientError> {
    if text.trim().is_empty() {
        return Ok(HashMap::new());
    }
    serde_json::from_str(text).map_err(|e| {
        tracing::error!(error = %e, "failed to parse headers");
        ClientError::InvalidHeaders(e.to_string())
    })
}
