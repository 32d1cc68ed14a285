//! Output types: the assembled document plus metadata and run statistics.

use serde::{Deserialize, Serialize};

/// The result of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// The assembled Markdown document.
    pub markdown: String,
    /// Document metadata recovered during extraction.
    pub metadata: DocumentMetadata,
    /// Statistics about the conversion run.
    pub stats: ConversionStats,
}

/// Document-level metadata recovered from the extracted text.
///
/// `pdf-extract` exposes no trailer dictionary, so the title is a
/// best-effort guess: the first short non-empty line of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Best-effort title guess, if any line qualified.
    pub title: Option<String>,
    /// Total pages in the document (before page selection).
    pub page_count: usize,
}

/// Statistics for a conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Total pages in the document.
    pub total_pages: usize,
    /// Pages actually selected and converted.
    pub selected_pages: usize,
    /// Characters of raw text fed into the structure stages.
    pub input_chars: usize,
    /// Characters of Markdown produced.
    pub output_chars: usize,
    /// Wall-clock time spent extracting text from the PDF.
    pub extract_duration_ms: u64,
    /// Wall-clock time spent in the structure-inference stages.
    pub structure_duration_ms: u64,
    /// Total wall-clock time including input resolution.
    pub total_duration_ms: u64,
}
