//! Conversion entry points.
//!
//! The whole pipeline is synchronous: text extraction and structure
//! inference are pure CPU work with no suspension points, so independent
//! conversions can simply run on independent threads with no coordination.
//!
//! [`convert_text`] is the heuristic core on its own — a total function
//! from raw text to Markdown with no I/O and no failure modes. The other
//! entry points wrap it with input resolution, PDF text extraction, page
//! selection, and output writing.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use crate::output::{ConversionOutput, ConversionStats, DocumentMetadata};
use crate::pipeline::{assemble, classify, extract, input, normalize};

/// Convert raw extracted text to structured Markdown.
///
/// This is the heuristic core: normalise lines, classify each one
/// (heading / ordered item / unordered item / paragraph), then assemble
/// with paragraph breaks. Total over all string inputs — empty or
/// whitespace-only text yields `""`, and nothing can make it fail.
///
/// # Example
/// ```rust
/// let md = pdftext2md::convert_text("CHAPTER 1: INTRODUCTION\nThis is the content.");
/// assert_eq!(md, "# CHAPTER 1: INTRODUCTION\nThis is the content.");
/// ```
pub fn convert_text(raw: &str) -> String {
    let classified: Vec<classify::ClassifiedLine> = normalize::normalize_lines(raw)
        .iter()
        .map(|line| classify::classify(line))
        .collect();
    assemble::assemble(&classified)
}

/// Convert a PDF file or URL to Markdown.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `input_str` — Local file path or HTTP/HTTPS URL to a PDF
/// * `config` — Conversion configuration
///
/// # Errors
/// Returns `Err(ConvertError)` when the input cannot be read or downloaded,
/// is not a PDF, yields no text, or the page selection matches nothing.
pub fn convert(
    input_str: impl AsRef<str>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, ConvertError> {
    let total_start = Instant::now();
    let input_str = input_str.as_ref();
    info!("Starting conversion: {}", input_str);

    let bytes = input::resolve_input(input_str, config.download_timeout_secs)?;
    convert_resolved(&bytes, config, total_start)
}

/// Convert PDF bytes in memory to Markdown.
///
/// The recommended API when PDF data comes from an upload, database, or
/// network stream rather than a file on disk.
pub fn convert_from_bytes(
    bytes: &[u8],
    config: &ConversionConfig,
) -> Result<ConversionOutput, ConvertError> {
    let total_start = Instant::now();
    input::check_pdf_magic(bytes)?;
    convert_resolved(bytes, config, total_start)
}

/// Convert a PDF and write output directly to a file.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
pub fn convert_to_file(
    input_str: impl AsRef<str>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, ConvertError> {
    let output = convert(input_str, config)?;
    let path = output_path.as_ref();
    let write_err = |source: std::io::Error| ConvertError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let tmp_path = path.with_extension("md.tmp");
    std::fs::write(&tmp_path, &output.markdown).map_err(write_err)?;
    std::fs::rename(&tmp_path, path).map_err(write_err)?;

    Ok(output.stats)
}

/// Extract PDF metadata without converting content.
pub fn inspect(input_str: impl AsRef<str>) -> Result<DocumentMetadata, ConvertError> {
    let bytes = input::resolve_input(input_str.as_ref(), 120)?;
    let extracted = extract::extract_text(&bytes)?;
    Ok(DocumentMetadata {
        page_count: extracted.pages.len(),
        title: extracted.title,
    })
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Run extraction, page selection, and the structure stages on PDF bytes.
fn convert_resolved(
    bytes: &[u8],
    config: &ConversionConfig,
    total_start: Instant,
) -> Result<ConversionOutput, ConvertError> {
    let extract_start = Instant::now();
    let extracted = extract::extract_text(bytes)?;
    let extract_duration_ms = extract_start.elapsed().as_millis() as u64;

    let total_pages = extracted.pages.len();
    info!("PDF has {} pages", total_pages);

    let indices = config.pages.to_indices(total_pages);
    if indices.is_empty() {
        return Err(ConvertError::NoPagesSelected { total: total_pages });
    }
    debug!("Selected {} pages for conversion", indices.len());

    // Page boundaries become plain newlines; the structure stages treat the
    // selection as one continuous text stream.
    let raw_text: String = indices
        .iter()
        .map(|&i| extracted.pages[i].as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let structure_start = Instant::now();
    let mut markdown = convert_text(&raw_text);
    let structure_duration_ms = structure_start.elapsed().as_millis() as u64;

    let metadata = DocumentMetadata {
        title: extracted.title,
        page_count: total_pages,
    };

    if config.include_metadata {
        markdown = format!("{}{}", format_yaml_front_matter(&metadata), markdown);
    }

    let stats = ConversionStats {
        total_pages,
        selected_pages: indices.len(),
        input_chars: raw_text.len(),
        output_chars: markdown.len(),
        extract_duration_ms,
        structure_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Conversion complete: {}/{} pages, {}ms total",
        stats.selected_pages, total_pages, stats.total_duration_ms
    );

    Ok(ConversionOutput {
        markdown,
        metadata,
        stats,
    })
}

/// Format document metadata as YAML front matter.
fn format_yaml_front_matter(meta: &DocumentMetadata) -> String {
    let mut yaml = String::from("---\n");
    if let Some(ref t) = meta.title {
        yaml.push_str(&format!("title: \"{}\"\n", t.replace('"', "\\\"")));
    }
    yaml.push_str(&format!("pages: {}\n", meta.page_count));
    yaml.push_str("---\n\n");
    yaml
}
