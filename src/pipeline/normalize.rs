//! Line normalisation: turn raw extracted text into clean candidate lines.
//!
//! PDF extraction output is messy — trailing spaces, tab runs, blank lines
//! between every paragraph fragment. Normalising up front means the
//! classifier and assembler only ever see non-empty lines with single
//! internal spaces, which keeps their patterns simple.

/// Split raw text into trimmed, whitespace-collapsed, non-empty lines.
///
/// Order is preserved. Empty or whitespace-only input yields an empty Vec.
/// This step is total: no input can make it fail.
pub fn normalize_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_internal_whitespace() {
        assert_eq!(normalize_lines("a   b\t\tc"), vec!["a b c"]);
    }

    #[test]
    fn test_trims_and_drops_empty_lines() {
        assert_eq!(
            normalize_lines("  first  \n\n   \n second\n"),
            vec!["first", "second"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines("   ").is_empty());
        assert!(normalize_lines("\n\n\n").is_empty());
    }

    #[test]
    fn test_order_preserved() {
        assert_eq!(normalize_lines("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_carriage_returns_treated_as_whitespace() {
        assert_eq!(normalize_lines("one\r\ntwo\r"), vec!["one", "two"]);
    }
}
