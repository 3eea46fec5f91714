//! Document Reader
//!
//! Extracts concatenated page text from a PDF, from either a filesystem
//! path or in-memory bytes. Failures are a proper error variant, not a
//! sentinel string; callers distinguish an unreadable document from an
//! empty one by matching on the `Result`.

use std::path::Path;

use thiserror::Error;

/// Errors from PDF text extraction.
#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to extract PDF text: {0}")]
    Extract(String),
}

/// Extract the text of a PDF file on disk.
pub fn read_pdf_file(path: &Path) -> Result<String, ReaderError> {
    tracing::debug!(path = %path.display(), "extracting PDF text");
    pdf_extract::extract_text(path).map_err(|e| ReaderError::Extract(e.to_string()))
}

/// Extract the text of an in-memory PDF (e.g. an uploaded file).
pub fn read_pdf_bytes(bytes: &[u8]) -> Result<String, ReaderError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ReaderError::Extract(e.to_string()))
}
