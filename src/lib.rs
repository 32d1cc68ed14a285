//! # pdftext2md
//!
//! Convert PDF documents to structured Markdown using deterministic
//! text heuristics.
//!
//! ## Why this crate?
//!
//! PDF text streams carry no semantic markup — a chapter title, a bullet
//! list, and a body paragraph all arrive as bare runs of characters. This
//! crate infers document structure (headings with levels, ordered and
//! unordered lists, paragraph breaks) purely from typographic and lexical
//! cues in the extracted text: keyword prefixes like `CHAPTER 1:`,
//! all-caps titles, numbered-section prefixes, list digits, and bullet
//! glyphs. No network, no models, no configuration of the heuristics —
//! identical input always produces identical Markdown.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input      resolve local file or download from URL
//!  ├─ 2. Extract    pull the text stream via pdf-extract, split pages
//!  ├─ 3. Normalize  trim lines, collapse whitespace, drop empties
//!  ├─ 4. Classify   heading / ordered item / bullet item / paragraph
//!  └─ 5. Assemble   insert paragraph breaks, join into one document
//! ```
//!
//! Stages 3–5 are a pure total function exposed directly as
//! [`convert_text`], usable on any text regardless of where it came from.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdftext2md::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let output = convert("document.pdf", &config)?;
//!     println!("{}", output.markdown);
//!     eprintln!("{} pages in {}ms",
//!         output.stats.selected_pages,
//!         output.stats.total_duration_ms);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdftext2md` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdftext2md = { version = "0.3", default-features = false }
//! ```
//!
//! ## What this crate does not do
//!
//! It does not reconstruct visual layout (columns, fonts, indentation) and
//! it does not OCR scanned pages — it operates purely on the extracted
//! text's line content and line order. Structure recovery is a reproducible
//! heuristic, not a guarantee of semantic correctness.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, PageSelection};
pub use convert::{convert, convert_from_bytes, convert_text, convert_to_file, inspect};
pub use error::ConvertError;
pub use output::{ConversionOutput, ConversionStats, DocumentMetadata};
pub use pipeline::classify::{ClassifiedLine, LineClass};
