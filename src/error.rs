//! Error types for the pdftext2md library.
//!
//! All fallibility lives in the surrounding system — reading or downloading
//! the input, parsing the PDF, writing the output. The structure-inference
//! core itself ([`crate::convert_text`]) is a total function over all string
//! inputs and has no error cases at all, so a single fatal enum covers the
//! whole crate. Every variant carries enough context for an actionable
//! message; there is nothing to retry and no partial success to report.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pdftext2md library.
#[derive(Debug, Error)]
pub enum ConvertError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// HTTP URL was syntactically valid but download failed.
    #[error("Failed to download '{url}': {reason}\nCheck your internet connection.")]
    DownloadFailed { url: String, reason: String },

    /// The input bytes do not start with the PDF magic header.
    #[error("Input is not a valid PDF.\nFirst bytes: {magic:?} (expected \"%PDF\")")]
    NotAPdf { magic: [u8; 4] },

    // ── Extraction errors ─────────────────────────────────────────────────
    /// The PDF could not be parsed at all.
    #[error("Failed to extract text from PDF: {detail}\nThe file may be corrupt or use unsupported encryption.")]
    ExtractionFailed { detail: String },

    /// Parsing succeeded but no text came out.
    #[error("No text could be extracted from this PDF.\nScanned or image-only documents need OCR, which this tool does not perform.")]
    EmptyDocument,

    /// The page selection matched nothing.
    #[error("Page selection matched no pages (document has {total} pages)")]
    NoPagesSelected { total: usize },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output Markdown file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_pdf_display() {
        let e = ConvertError::NotAPdf {
            magic: *b"<htm",
        };
        let msg = e.to_string();
        assert!(msg.contains("%PDF"), "got: {msg}");
    }

    #[test]
    fn no_pages_selected_display() {
        let e = ConvertError::NoPagesSelected { total: 7 };
        assert!(e.to_string().contains("7 pages"));
    }

    #[test]
    fn download_failed_display() {
        let e = ConvertError::DownloadFailed {
            url: "https://example.com/x.pdf".into(),
            reason: "HTTP 404".into(),
        };
        assert!(e.to_string().contains("HTTP 404"));
        assert!(e.to_string().contains("example.com"));
    }

    #[test]
    fn file_not_found_display() {
        let e = ConvertError::FileNotFound {
            path: PathBuf::from("/tmp/missing.pdf"),
        };
        assert!(e.to_string().contains("/tmp/missing.pdf"));
    }
}
