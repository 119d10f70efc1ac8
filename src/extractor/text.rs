use crate::extractor::errors::ExtractError;

/// Decode a plain-text upload as strict UTF-8. Invalid byte sequences are
/// an extraction failure, never silently substituted.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| ExtractError::ExtractionFailed(format!("invalid utf-8: {e}")))
}
