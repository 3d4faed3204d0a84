//! Input grammar check and segmentation into groups.

use crate::{Group, RecognizeError, Result};
use tracing::debug;

/// Split `raw` into its ordered digit groups.
///
/// ```text
/// "  2 10 6 9  "  ── trim ──▶ "2 10 6 9" ── grammar ──▶ [2, 10, 6, 9]
/// ```
///
/// Groups are ASCII digit runs separated by exactly one ASCII whitespace
/// character. Leading/trailing ASCII whitespace and control characters are
/// ignored; any other Unicode space is a format error.
pub(crate) fn split(raw: &str) -> Result<Vec<Group>> {
    let input = raw.trim_matches(|c: char| c <= ' ');

    if !regex!(r"^[0-9]+([ \t\n\x0B\f\r][0-9]+)*$").is_match(input) {
        debug!(input = raw, "rejected input");
        return Err(RecognizeError::InputFormat { input: raw.to_string() });
    }

    let groups = regex!(r"[0-9]+").find_iter(input).map(|m| Group::new(m.as_str())).collect::<Result<Vec<_>>>()?;

    debug!(groups = groups.len(), "split input");
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(groups: &[Group]) -> Vec<&str> {
        groups.iter().map(Group::as_str).collect()
    }

    #[test]
    fn splits_on_single_whitespace() {
        let groups = split("2 10 6 9 30 6 6 4").unwrap();
        assert_eq!(texts(&groups), vec!["2", "10", "6", "9", "30", "6", "6", "4"]);
    }

    #[test]
    fn trims_outer_whitespace() {
        let groups = split("  \t305 5\n").unwrap();
        assert_eq!(texts(&groups), vec!["305", "5"]);
    }

    #[test]
    fn tab_is_a_valid_separator() {
        assert_eq!(texts(&split("1\t2").unwrap()), vec!["1", "2"]);
    }

    #[test]
    fn rejects_malformed_input() {
        let unicode_spaces = ["1\u{a0}2", "\u{2003}12", "12\u{3000}"];
        for input in ["ABCDEF", "", "   ", "2  10", "2,10", "12a", "-5", "1.5", "١٢ 3"].into_iter().chain(unicode_spaces) {
            assert_eq!(
                split(input),
                Err(RecognizeError::InputFormat { input: input.to_string() }),
                "input {input:?} should be rejected"
            );
        }
    }
}
