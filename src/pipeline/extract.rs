//! Text extraction: pull the raw text stream out of PDF bytes.
//!
//! Backed by the `pdf-extract` crate, which works entirely in memory and
//! returns the whole document as one string with form-feed characters
//! (`\x0C`) between pages. We split on those to recover page boundaries,
//! falling back to triple newlines for the rare producer that emits none.
//!
//! All fallibility of the surrounding system lives here and in
//! [`crate::pipeline::input`]: once extraction has produced non-empty text,
//! the downstream structure stages are total and can no longer fail.

use tracing::debug;

use crate::error::ConvertError;

/// Raw text recovered from a PDF, split into pages.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    /// Per-page raw text, in document order. Never empty.
    pub pages: Vec<String>,
    /// Best-effort title guess: the first short non-empty line.
    pub title: Option<String>,
}

/// Extract the text content of a PDF held in memory.
///
/// # Errors
/// - [`ConvertError::ExtractionFailed`] when the bytes cannot be parsed
///   as a PDF (corrupt file, unsupported encryption).
/// - [`ConvertError::EmptyDocument`] when parsing succeeds but no text
///   comes out (scanned/image-only documents).
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText, ConvertError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ConvertError::ExtractionFailed {
            detail: e.to_string(),
        })?;

    if text.trim().is_empty() {
        return Err(ConvertError::EmptyDocument);
    }

    let mut pages: Vec<String> = if text.contains('\x0C') {
        text.split('\x0C').map(str::to_string).collect()
    } else {
        // Fallback: some producers emit no form feeds at all.
        text.split("\n\n\n").map(str::to_string).collect()
    };

    // A trailing form feed leaves an empty phantom page at the end.
    while pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }

    debug!("Extracted {} pages, {} chars", pages.len(), text.len());

    Ok(ExtractedText {
        title: guess_title(&text),
        pages,
    })
}

/// First non-empty line under 200 chars, as a title guess.
fn guess_title(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && l.len() < 200)
        .map(str::to_string)
}
