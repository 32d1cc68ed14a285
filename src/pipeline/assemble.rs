//! Paragraph assembly: join classified lines into a Markdown document.
//!
//! Markdown block structure is carried by blank lines: two paragraphs need a
//! blank separator between them, while consecutive list items and the line
//! right after a heading must *not* be separated or the renderer splits the
//! list apart. This stage walks the classified lines in order and decides,
//! for each line with a successor, whether to emit a separator.
//!
//! The lookahead re-evaluates the *next line's raw text* with the same
//! predicates the classifier uses ([`classify::is_heading`] and friends), so
//! a lead-in paragraph directly followed by a list stays attached to it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::pipeline::classify::{self, ClassifiedLine};

/// Runs of three or more newlines collapse to a single blank line.
static RE_EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Assemble the final Markdown document from classified lines.
///
/// Emits each line's rewritten text, inserting one blank line after the
/// current line unless:
/// - the current line is a heading, or
/// - the current line is a list item, or
/// - the next line (raw form) is itself a heading or list item.
///
/// The joined result is collapsed to at most one blank line between blocks
/// and trimmed. An empty input slice yields `""`.
pub fn assemble(lines: &[ClassifiedLine]) -> String {
    let mut emitted: Vec<&str> = Vec::with_capacity(lines.len() * 2);

    for (i, line) in lines.iter().enumerate() {
        emitted.push(&line.markdown);

        if let Some(next) = lines.get(i + 1) {
            if paragraph_break_after(line, &next.raw) {
                emitted.push("");
            }
        }
    }

    RE_EXCESS_NEWLINES
        .replace_all(&emitted.join("\n"), "\n\n")
        .trim()
        .to_string()
}

/// Should a blank separator follow `current`, given the next raw line?
///
/// The current line is judged by its rewritten Markdown (a heading starts
/// with `#`, a list item starts with `- ` or a digit-period-space prefix);
/// the next line is judged by re-applying the classifier predicates to its
/// raw text.
fn paragraph_break_after(current: &ClassifiedLine, next_raw: &str) -> bool {
    let current_is_heading = current.markdown.starts_with('#');
    let current_is_item =
        current.markdown.starts_with("- ") || classify::is_ordered_item(&current.markdown);
    let next_is_block = classify::is_heading(next_raw)
        || classify::is_ordered_item(next_raw)
        || classify::is_bullet_item(next_raw);

    !current_is_heading && !current_is_item && !next_is_block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::classify::classify;

    fn assemble_lines(lines: &[&str]) -> String {
        let classified: Vec<ClassifiedLine> = lines.iter().map(|l| classify(l)).collect();
        assemble(&classified)
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        assert_eq!(assemble(&[]), "");
    }

    #[test]
    fn test_paragraphs_separated_by_blank_line() {
        assert_eq!(
            assemble_lines(&["First paragraph.", "Second paragraph."]),
            "First paragraph.\n\nSecond paragraph."
        );
    }

    #[test]
    fn test_no_blank_after_heading() {
        let out = assemble_lines(&["CHAPTER 1: INTRO", "Body text."]);
        assert_eq!(out, "# CHAPTER 1: INTRO\nBody text.");
    }

    #[test]
    fn test_no_blank_between_list_items() {
        let out = assemble_lines(&["1. First", "2. Second", "3. Third"]);
        assert_eq!(out, "1. First\n2. Second\n3. Third");
    }

    #[test]
    fn test_no_blank_before_upcoming_list() {
        // The lead-in paragraph stays attached to the list that follows it.
        let out = assemble_lines(&["Items:", "• one", "• two"]);
        assert_eq!(out, "Items:\n- one\n- two");
    }

    #[test]
    fn test_blank_after_list_before_paragraph() {
        let out = assemble_lines(&["• one", "Afterword paragraph."]);
        // List items never get a separator after them.
        assert_eq!(out, "- one\nAfterword paragraph.");
    }

    #[test]
    fn test_no_blank_before_upcoming_heading() {
        let out = assemble_lines(&["Some prose.", "SECTION A: Next"]);
        assert_eq!(out, "Some prose.\n## SECTION A: Next");
    }

    #[test]
    fn test_never_more_than_one_blank_line() {
        let out = assemble_lines(&["a.", "b.", "c."]);
        assert!(!out.contains("\n\n\n"));
    }
}
