//! Line classification: decide the structural role of each normalised line.
//!
//! ## Why heuristics?
//!
//! A PDF text stream carries no semantic markup — a chapter title and a body
//! sentence arrive as indistinguishable runs of characters. The only signals
//! that survive extraction are *lexical*: keyword prefixes ("CHAPTER 1:"),
//! all-caps runs, numbered-section prefixes ("1.1 Overview"), list digits,
//! and bullet glyphs. This module encodes those signals as an explicit
//! ordered list of predicate/transform pairs, evaluated top to bottom so
//! precedence stays visible and each pattern is independently testable.
//!
//! ## Classification order
//!
//! More specific patterns are checked before generic fallbacks:
//!
//! 1. Heading (keyword prefix, all-caps-colon, `1.1 Title`, `Section 1.1:`)
//! 2. Ordered list item (`3. text`) — already valid Markdown, kept verbatim
//! 3. Unordered list item (`• text`) — bullet glyph rewritten to `- `
//! 4. Paragraph — everything else, kept verbatim
//!
//! The predicates are deliberately permissive: `API:` classifies as a
//! heading just like `INTRODUCTION:` does. Tightening this would trade
//! false positives for false negatives on real section titles, so the
//! generic all-caps rule is kept as-is.
//!
//! Classification is stateless and total: every line gets exactly one class
//! and one rewritten form, with no cross-line memory. The same predicate
//! functions are reused by [`crate::pipeline::assemble`] for its lookahead,
//! so the two stages can never disagree about what counts as a heading or
//! list item.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Structural role of a single normalised line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineClass {
    /// Section heading with Markdown depth 1 (`#`) or 2 (`##`).
    Heading { level: u8 },
    /// Ordered list item (`1. text`), preserved verbatim.
    OrderedItem,
    /// Unordered list item, bullet glyph normalised to `- `.
    UnorderedItem,
    /// Plain paragraph text (fallback).
    Paragraph,
}

/// A normalised line together with its inferred class and Markdown form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// The normalised line as it came out of the normaliser.
    pub raw: String,
    /// The line rewritten into its Markdown form.
    pub markdown: String,
    /// The inferred structural role.
    pub class: LineClass,
}

// ── Patterns ─────────────────────────────────────────────────────────────────

/// Keyword-prefixed heading: "CHAPTER 1:", "Section A:", "TITLE:" …
static RE_KEYWORD_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(CHAPTER|SECTION|TITLE|PART|APPENDIX)\s*\w*\s*:").unwrap());

/// At least three uppercase letters/spaces followed by a colon: "INTRODUCTION:".
static RE_ALLCAPS_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z\s]{3,}:").unwrap());

/// Two-level numeric prefix followed by an uppercase letter: "1.1 Overview".
static RE_NUMBERED_SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\s+[A-Z]").unwrap());

/// "Section 1.1:" in any case.
static RE_SECTION_DOTTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Section\s+\d+\.\d+:").unwrap());

/// Top-level keyword prefixes (heading level 1).
static RE_LEVEL1_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(CHAPTER|TITLE|PART)\s*\w*\s*:").unwrap());

/// Second-level keyword prefixes (heading level 2).
static RE_LEVEL2_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(SECTION|APPENDIX)\s*\w*\s*:").unwrap());

/// Bare two-level numeric prefix, used only for level assignment.
static RE_NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+").unwrap());

/// Ordered list item: digits, period, whitespace, content.
static RE_ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+").unwrap());

/// Unordered list item: a bullet glyph followed by whitespace.
static RE_BULLET_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[•·‣⁃]\s+").unwrap());

// ── Predicates ───────────────────────────────────────────────────────────────

/// Does this line look like a heading under any of the four heading patterns?
pub fn is_heading(line: &str) -> bool {
    RE_KEYWORD_HEADING.is_match(line)
        || RE_ALLCAPS_COLON.is_match(line)
        || RE_NUMBERED_SECTION.is_match(line)
        || RE_SECTION_DOTTED.is_match(line)
}

/// Does this line look like an ordered list item (`3. text`)?
pub fn is_ordered_item(line: &str) -> bool {
    RE_ORDERED_ITEM.is_match(line)
}

/// Does this line start with a bullet glyph (`•`, `·`, `‣`, `⁃`)?
pub fn is_bullet_item(line: &str) -> bool {
    RE_BULLET_ITEM.is_match(line)
}

/// Markdown heading depth for a line already known to be a heading.
///
/// Evaluated in priority order against the same line:
/// CHAPTER/TITLE/PART → 1, SECTION/APPENDIX or `Section d.d:` → 2,
/// bare `d.d` prefix → 2, anything else (generic all-caps-colon) → 1.
fn heading_level(line: &str) -> u8 {
    if RE_LEVEL1_KEYWORD.is_match(line) {
        1
    } else if RE_LEVEL2_KEYWORD.is_match(line) || RE_SECTION_DOTTED.is_match(line) {
        2
    } else if RE_NUMERIC_PREFIX.is_match(line) {
        2
    } else {
        1
    }
}

// ── Classification ───────────────────────────────────────────────────────────

/// Classify one normalised line and rewrite it into its Markdown form.
///
/// Total over all inputs: every line receives exactly one class, first
/// match wins.
pub fn classify(line: &str) -> ClassifiedLine {
    if is_heading(line) {
        let level = heading_level(line);
        let marker = if level == 1 { "# " } else { "## " };
        return ClassifiedLine {
            raw: line.to_string(),
            markdown: format!("{marker}{line}"),
            class: LineClass::Heading { level },
        };
    }

    if is_ordered_item(line) {
        return ClassifiedLine {
            raw: line.to_string(),
            markdown: line.to_string(),
            class: LineClass::OrderedItem,
        };
    }

    if is_bullet_item(line) {
        return ClassifiedLine {
            raw: line.to_string(),
            markdown: RE_BULLET_ITEM.replace(line, "- ").to_string(),
            class: LineClass::UnorderedItem,
        };
    }

    ClassifiedLine {
        raw: line.to_string(),
        markdown: line.to_string(),
        class: LineClass::Paragraph,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn class_of(line: &str) -> LineClass {
        classify(line).class
    }

    #[test]
    fn test_keyword_headings_level_1() {
        for line in ["CHAPTER 1: INTRODUCTION", "TITLE: My Document", "PART 2: Details"] {
            let c = classify(line);
            assert_eq!(c.class, LineClass::Heading { level: 1 }, "line: {line}");
            assert_eq!(c.markdown, format!("# {line}"));
        }
    }

    #[test]
    fn test_keyword_headings_level_2() {
        for line in ["SECTION A: First Section", "APPENDIX B: Tables"] {
            let c = classify(line);
            assert_eq!(c.class, LineClass::Heading { level: 2 }, "line: {line}");
            assert_eq!(c.markdown, format!("## {line}"));
        }
    }

    #[test]
    fn test_keyword_headings_case_insensitive() {
        assert_eq!(class_of("Chapter 3: The End"), LineClass::Heading { level: 1 });
        assert_eq!(class_of("section 2: Middle"), LineClass::Heading { level: 2 });
    }

    #[test]
    fn test_dotted_section_heading() {
        let c = classify("Section 1.1: Overview");
        assert_eq!(c.class, LineClass::Heading { level: 2 });
        assert_eq!(c.markdown, "## Section 1.1: Overview");
    }

    #[test]
    fn test_numbered_section_heading() {
        let c = classify("1.1 Overview");
        assert_eq!(c.class, LineClass::Heading { level: 2 });
        assert_eq!(c.markdown, "## 1.1 Overview");
    }

    #[test]
    fn test_numbered_section_needs_uppercase() {
        // "1.1 overview" fails the uppercase-letter requirement, and the
        // missing space after "1." rules out the ordered-item shape too.
        assert_eq!(class_of("1.1 overview"), LineClass::Paragraph);
    }

    #[test]
    fn test_allcaps_colon_heading_defaults_to_level_1() {
        let c = classify("INTRODUCTION: the early years");
        assert_eq!(c.class, LineClass::Heading { level: 1 });
        assert!(c.markdown.starts_with("# "));
    }

    #[test]
    fn test_short_acronym_still_matches_allcaps_rule() {
        // Known permissive behaviour: three caps + colon is enough.
        assert_eq!(class_of("API:"), LineClass::Heading { level: 1 });
        // Two caps is not.
        assert_eq!(class_of("Dr:"), LineClass::Paragraph);
    }

    #[test]
    fn test_ordered_item() {
        let c = classify("1. First step");
        assert_eq!(c.class, LineClass::OrderedItem);
        assert_eq!(c.markdown, "1. First step", "ordered items pass through");
        assert_eq!(class_of("42. Deep thought"), LineClass::OrderedItem);
    }

    #[test]
    fn test_ordered_item_requires_space_after_period() {
        assert_eq!(class_of("3.5 million people"), LineClass::Paragraph);
        assert_eq!(class_of("1.First"), LineClass::Paragraph);
    }

    #[test]
    fn test_bullet_items_rewritten() {
        for glyph in ['•', '·', '‣', '⁃'] {
            let c = classify(&format!("{glyph} An item"));
            assert_eq!(c.class, LineClass::UnorderedItem, "glyph: {glyph}");
            assert_eq!(c.markdown, "- An item");
        }
    }

    #[test]
    fn test_bullet_without_space_is_paragraph() {
        assert_eq!(class_of("•item"), LineClass::Paragraph);
    }

    #[test]
    fn test_paragraph_fallback() {
        let c = classify("Just some ordinary sentence.");
        assert_eq!(c.class, LineClass::Paragraph);
        assert_eq!(c.markdown, "Just some ordinary sentence.");
    }

    #[test]
    fn test_heading_wins_over_ordered_item() {
        // "1.1 Overview" matches both the numbered-section heading pattern
        // and (almost) the ordered-item shape; heading is checked first.
        assert_eq!(class_of("1.1 Overview"), LineClass::Heading { level: 2 });
    }

    #[test]
    fn test_predicates_agree_with_classify() {
        let samples = [
            "CHAPTER 1: INTRO",
            "Section 1.1: Overview",
            "1. item",
            "• bullet",
            "plain text",
        ];
        for s in samples {
            let c = classify(s);
            assert_eq!(
                matches!(c.class, LineClass::Heading { .. }),
                is_heading(s),
                "is_heading mismatch for {s:?}"
            );
            assert_eq!(c.class == LineClass::OrderedItem, !is_heading(s) && is_ordered_item(s));
            assert_eq!(c.class == LineClass::UnorderedItem, is_bullet_item(s));
        }
    }
}
