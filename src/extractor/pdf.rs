use crate::extractor::errors::ExtractError;

/// Extract text from a PDF byte stream. Per-page text is concatenated in
/// page order with a newline after each page. No OCR, no layout or table
/// reconstruction.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::ExtractionFailed(format!("unreadable pdf: {e}")))?;

    let mut text = String::new();
    for page in pages {
        text.push_str(&page);
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_extraction() {
        let result = extract(b"not a pdf at all");
        assert!(matches!(result, Err(ExtractError::ExtractionFailed(_))));
    }

    #[test]
    fn truncated_header_fails_extraction() {
        // A valid magic number with nothing behind it.
        let result = extract(b"%PDF-1.7\n");
        assert!(result.is_err());
    }
}
