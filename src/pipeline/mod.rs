//! Pipeline stages for PDF-text-to-Markdown conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch the extraction backend) without
//! touching other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ normalize ──▶ classify ──▶ assemble
//! (URL/path) (pdf-extract) (lines)     (roles)     (Markdown)
//! ```
//!
//! 1. [`input`]     — canonicalise the user-supplied path or URL to PDF bytes
//! 2. [`extract`]   — pull the raw text stream out of the PDF and split pages
//! 3. [`normalize`] — trim, collapse whitespace, drop empty lines
//! 4. [`classify`]  — infer each line's role (heading/list/paragraph) and
//!    rewrite it into Markdown form
//! 5. [`assemble`]  — insert paragraph breaks and join into the final document
//!
//! Stages 3–5 are pure and total: once extraction succeeds, nothing
//! downstream can fail, and identical input text always yields identical
//! Markdown.

pub mod assemble;
pub mod classify;
pub mod extract;
pub mod input;
pub mod normalize;
