//! Group shape classification.
//!
//! Each digit run (a whole group, or a tail produced while splitting one) is
//! scanned once into a [`GroupShape`]. The interpreter dispatches on these
//! flags instead of re-running patterns at every decision point.
//!
//! | flag            | pattern        | example |
//! |-----------------|----------------|---------|
//! | `SINGLE_DIGIT`  | one character  | `7`     |
//! | `ZEROS`         | `^0+$`         | `000`   |
//! | `MODULUS`       | `^[1-9]+0+$`   | `350`   |
//! | `LEADING_ZEROS` | `^0+[1-9]+$`   | `05`    |
//!
//! `LEADING_ZEROS` mirrors the exact pattern above: a tail like `0105` has an
//! inner zero and is not flagged.

use std::num::IntErrorKind;

bitflags::bitflags! {
    /// Coarse features of a digit run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GroupShape: u8 {
        const SINGLE_DIGIT  = 1 << 0;
        const ZEROS         = 1 << 1;
        const MODULUS       = 1 << 2;
        const LEADING_ZEROS = 1 << 3;
    }
}

impl GroupShape {
    /// Scan `text` (assumed digits-only) for its shape flags.
    pub fn scan(text: &str) -> Self {
        let mut shape = GroupShape::empty();

        if text.len() == 1 {
            shape |= GroupShape::SINGLE_DIGIT;
        }
        if regex!(r"^0+$").is_match(text) {
            shape |= GroupShape::ZEROS;
        }
        if regex!(r"^[1-9]+0+$").is_match(text) {
            shape |= GroupShape::MODULUS;
        }
        if regex!(r"^0+[1-9]+$").is_match(text) {
            shape |= GroupShape::LEADING_ZEROS;
        }

        shape
    }

    /// A single digit or a run of zeros has exactly one reading.
    pub fn is_trivial(self) -> bool {
        self.intersects(GroupShape::SINGLE_DIGIT | GroupShape::ZEROS)
    }

    /// A tail that cannot stand alone as a spoken sub-number.
    pub fn is_unreadable_tail(self) -> bool {
        self.intersects(GroupShape::ZEROS | GroupShape::LEADING_ZEROS)
    }
}

/// Number of trailing `'0'` characters in `text`.
pub fn trailing_zeros(text: &str) -> usize {
    text.bytes().rev().take_while(|&b| b == b'0').count()
}

/// `text` followed by `count` zeros.
pub fn pad_zeros(text: &str, count: usize) -> String {
    let mut out = String::with_capacity(text.len() + count);
    out.push_str(text);
    out.extend(std::iter::repeat_n('0', count));
    out
}

/// True when the decimal value of `digits` is strictly above `threshold`.
///
/// Values too large for `u64` exceed every threshold.
pub fn exceeds(digits: &str, threshold: u64) -> bool {
    match digits.parse::<u64>() {
        Ok(value) => value > threshold,
        Err(err) => matches!(err.kind(), IntErrorKind::PosOverflow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_classifies_runs() {
        assert_eq!(GroupShape::scan("7"), GroupShape::SINGLE_DIGIT);
        assert_eq!(GroupShape::scan("0"), GroupShape::SINGLE_DIGIT | GroupShape::ZEROS);
        assert_eq!(GroupShape::scan("000"), GroupShape::ZEROS);
        assert_eq!(GroupShape::scan("350"), GroupShape::MODULUS);
        assert_eq!(GroupShape::scan("3000"), GroupShape::MODULUS);
        assert_eq!(GroupShape::scan("05"), GroupShape::LEADING_ZEROS);
        assert_eq!(GroupShape::scan("305"), GroupShape::empty());
        assert_eq!(GroupShape::scan("1020"), GroupShape::empty());
        assert_eq!(GroupShape::scan("0105"), GroupShape::empty());
    }

    #[test]
    fn trivial_and_unreadable() {
        assert!(GroupShape::scan("9").is_trivial());
        assert!(GroupShape::scan("00").is_trivial());
        assert!(!GroupShape::scan("10").is_trivial());
        assert!(GroupShape::scan("00").is_unreadable_tail());
        assert!(GroupShape::scan("07").is_unreadable_tail());
        assert!(!GroupShape::scan("70").is_unreadable_tail());
    }

    #[test]
    fn zero_helpers() {
        assert_eq!(trailing_zeros("30500"), 2);
        assert_eq!(trailing_zeros("305"), 0);
        assert_eq!(trailing_zeros("000"), 3);
        assert_eq!(pad_zeros("305", 2), "30500");
        assert_eq!(pad_zeros("3", 0), "3");
    }

    #[test]
    fn exceeds_compares_numerically() {
        assert!(!exceeds("19", 19));
        assert!(exceeds("20", 19));
        assert!(!exceeds("0019", 19));
        assert!(exceeds("99999999999999999999999", 19));
    }
}
