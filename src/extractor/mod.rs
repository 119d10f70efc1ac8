pub mod docx;
pub mod errors;
pub mod pdf;
pub mod text;

pub use errors::ExtractError;

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Declared format of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    /// Resolve a declared format tag. Unrecognized tags are an
    /// `UnsupportedFormat` error, fatal to the request.
    pub fn from_tag(tag: &str) -> Result<Self, ExtractError> {
        match tag.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "text" | "txt" => Ok(Self::Text),
            other => Err(ExtractError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ExtractError::UnsupportedFormat("<none>".to_string()))?;
        Self::from_tag(extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Text => "text",
        }
    }
}

/// An uploaded document: raw bytes plus the declared format. Ephemeral;
/// exists only until extraction produces text.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
}

impl RawDocument {
    pub fn new(bytes: Vec<u8>, format: DocumentFormat) -> Self {
        Self { bytes, format }
    }
}

/// Turn an uploaded document into UTF-8 text.
///
/// A document whose content yields no text at all is treated as unreadable:
/// downstream heuristics need at least one non-blank line to work with.
pub fn extract(doc: &RawDocument) -> Result<String, ExtractError> {
    let text = match doc.format {
        DocumentFormat::Pdf => pdf::extract(&doc.bytes)?,
        DocumentFormat::Docx => docx::extract(&doc.bytes)?,
        DocumentFormat::Text => text::extract(&doc.bytes)?,
    };

    if text.trim().is_empty() {
        return Err(ExtractError::ExtractionFailed(
            "document contains no extractable text".to_string(),
        ));
    }

    Ok(text)
}
