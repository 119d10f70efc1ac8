use thiserror::Error;

/// Fatal extraction errors. Either stops the analysis pipeline immediately:
/// no structured resume is produced and the caller must surface the failure.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The declared format tag is not one we know how to read.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The format was recognized but the content could not be read
    /// (malformed page stream, broken archive, invalid text encoding).
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
