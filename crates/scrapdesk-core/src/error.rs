//! Error types for the scrapdesk-core library.

use thiserror::Error;

/// Main error type for the scrapdesk library.
#[derive(Error, Debug)]
pub enum ScrapdeskError {
    /// CSV input shape violation.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural violations in delivery CSV input.
///
/// These are the only hard failures the transformer raises; rows that
/// merely fail a lookup or arrive incomplete are skipped silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The CSV lacks a header row plus at least one data row.
    #[error("CSV must contain a header row and at least one data row")]
    TooFewRows,

    /// A required header column could not be resolved.
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
}

/// Errors related to the PDF text source.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Result type for the scrapdesk library.
pub type Result<T> = std::result::Result<T, ScrapdeskError>;
