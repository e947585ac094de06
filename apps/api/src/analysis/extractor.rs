//! Document bytes → plain text.
//!
//! PDF parsing is delegated to `pdf-extract`; plain-text uploads are decoded as UTF-8.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported document type: {0}")]
    UnsupportedFormat(String),

    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("text document is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("PDF parser aborted on malformed input")]
    ParserPanicked,
}

/// An uploaded document as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub bytes: Bytes,
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

impl Document {
    #[cfg(test)]
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[cfg(test)]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::detect(
            self.content_type.as_deref(),
            self.file_name.as_deref(),
            &self.bytes,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// - PDF: content type contains `application/pdf`, or the bytes start with `%PDF-`
    /// - Plain text: content type `text/plain`, or a `.txt` file name
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>, head: &[u8]) -> Option<Self> {
        let ct = content_type.unwrap_or("").to_ascii_lowercase();
        if ct.contains("application/pdf") || head.starts_with(b"%PDF-") {
            return Some(DocumentKind::Pdf);
        }

        let is_txt = file_name
            .map(|n| n.to_ascii_lowercase().ends_with(".txt"))
            .unwrap_or(false);
        if ct.starts_with("text/plain") || is_txt {
            return Some(DocumentKind::PlainText);
        }

        None
    }
}

/// Converts a document into best-effort plain text.
///
/// Implementations are synchronous and CPU-bound; async callers should run
/// them on the blocking pool.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &Document) -> Result<String, ExtractionError>;
}

/// Default extractor: PDF via `pdf-extract`, plain text via UTF-8 decoding.
pub struct DocumentTextExtractor;

impl TextExtractor for DocumentTextExtractor {
    fn extract(&self, document: &Document) -> Result<String, ExtractionError> {
        match document.kind() {
            Some(DocumentKind::Pdf) => extract_pdf(&document.bytes),
            Some(DocumentKind::PlainText) => Ok(String::from_utf8(document.bytes.to_vec())?),
            None => Err(ExtractionError::UnsupportedFormat(
                document
                    .content_type
                    .clone()
                    .unwrap_or_else(|| "unknown".to_string()),
            )),
        }
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed files instead of returning an error.
    let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| ExtractionError::ParserPanicked)?
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    debug!("Extracted {} chars from {} byte PDF", text.len(), bytes.len());
    Ok(text)
}
