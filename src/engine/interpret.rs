//! Per-position group interpretation.
//!
//! Classification of the group at `index`, checked in order:
//!
//! ```text
//! trivial  (one digit, or all zeros)  -> { text }
//! modulus  (^[1-9]+0+$)               -> expand(text) + merge with next group
//! complex  (anything else)            -> expand(text)
//! ```
//!
//! ## Modulus merge
//!
//! Trailing zeros of a modulus reading may not be a magnitude of their own;
//! they can elide into the following group. "30" followed by "6" may have been
//! "thirty-six":
//!
//! ```text
//! m = "30", next = "6"    zeros(m)=1 >= len(next)=1
//!   trimmed = "3"         value("3" + "6") = 36 > threshold  -> keep "3"
//! ```
//!
//! Only the immediately following group is consulted, and only when it is not
//! all zeros.

use super::expand::Expander;
use super::shape::{GroupShape, exceeds, trailing_zeros};
use crate::{CandidateSet, Group, Language, RecognizeError, Result};

/// Group interpreter for one language and one recognition call.
#[derive(Debug)]
pub(crate) struct Interpreter {
    threshold: u64,
    expander: Expander,
}

impl Interpreter {
    pub fn new(language: Language) -> Self {
        let threshold = language.threshold();
        Interpreter { threshold, expander: Expander::new(threshold) }
    }

    /// Candidate set for `groups[index]`, looking at `groups[index + 1]` when
    /// the group is a modulus.
    pub fn interpret(&mut self, groups: &[Group], index: usize) -> Result<CandidateSet> {
        let group = groups.get(index).ok_or_else(|| {
            RecognizeError::Invariant(format!("group index {index} out of range for {} groups", groups.len()))
        })?;
        if group.as_str().is_empty() {
            return Err(RecognizeError::Invariant(format!("empty group at index {index}")));
        }

        let text = group.as_str();
        let shape = GroupShape::scan(text);

        if shape.is_trivial() {
            return Ok(CandidateSet::from([text.to_string()]));
        }

        if shape.contains(GroupShape::MODULUS) {
            return Ok(self.interpret_modulus(text, groups.get(index + 1)));
        }

        Ok(self.expander.expand(text).as_ref().clone())
    }

    fn interpret_modulus(&mut self, text: &str, next: Option<&Group>) -> CandidateSet {
        let readings = self.expander.expand(text);
        let next = next.filter(|n| !GroupShape::scan(n.as_str()).contains(GroupShape::ZEROS));

        let mut items = CandidateSet::with_capacity(readings.len() * 2);
        for reading in readings.iter() {
            items.insert(reading.clone());

            let Some(next) = next else { continue };

            let zeros = trailing_zeros(reading);
            if zeros < next.len() {
                continue;
            }

            let trimmed = &reading[..reading.len() - zeros.min(next.len())];
            if exceeds(&format!("{trimmed}{next}"), self.threshold) {
                items.insert(trimmed.to_string());
            }
        }

        items
    }
}
