#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod profile;

use std::collections::{BTreeSet, HashSet};

pub use api::{
    GroupSummary, Options, RecognizeDetails, RecognizeResult, RecognizeVerbose, recognize,
    recognize_phone, recognize_verbose, recognize_with,
};
pub use engine::{Engine, EngineRegistry, PhaseTimings, validate};
pub use error::{RecognizeError, Result};
pub use profile::{Country, Language};

// --- Value types ------------------------------------------------------------

/// Deduplicated alternative readings for one group position.
pub(crate) type CandidateSet = HashSet<String>;

/// Every full digit-string reading of an input. Ordered so that output is
/// stable across runs.
pub type Interpretations = BTreeSet<String>;

/// One maximal run of digits from the input.
///
/// Always non-empty and digits-only; the only way to build one is
/// [`Group::new`], which checks that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Group {
    text: String,
}

impl Group {
    /// Create a group from `text`, rejecting anything but ASCII digits.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if !regex!(r"^[0-9]+$").is_match(&text) {
            return Err(RecognizeError::InputFormat { input: text });
        }
        Ok(Group { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// An interpretation checked against a country's phone format.
///
/// `valid` is derived from the other two fields at construction and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumberCandidate {
    country: Country,
    interpretation: String,
    valid: bool,
}

impl PhoneNumberCandidate {
    pub fn new(country: Country, interpretation: impl Into<String>) -> Self {
        let interpretation = interpretation.into();
        let valid = engine::validate(country, &interpretation);
        PhoneNumberCandidate { country, interpretation, valid }
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn interpretation(&self) -> &str {
        &self.interpretation
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_accepts_only_digits() {
        assert_eq!(Group::new("0305").map(|g| g.len()), Ok(4));
        for text in ["2 10", "", "12a", "1\u{a0}2"] {
            assert_eq!(Group::new(text), Err(RecognizeError::InputFormat { input: text.to_string() }));
        }
    }

    #[test]
    fn groups_compare_by_text() {
        assert_eq!(Group::new("10").unwrap(), Group::new(String::from("10")).unwrap());
        assert_ne!(Group::new("10").unwrap(), Group::new("100").unwrap());
    }

    #[test]
    fn candidate_validity_is_computed_once_from_fields() {
        let a = PhoneNumberCandidate::new(Country::Greece, "2106930664");
        let b = PhoneNumberCandidate::new(Country::Greece, "2106930664");
        assert!(a.is_valid());
        assert_eq!(a, b);
        assert_eq!(a.country(), Country::Greece);
        assert_eq!(a.interpretation(), "2106930664");

        let short = PhoneNumberCandidate::new(Country::Greece, "210693664");
        assert!(!short.is_valid());
    }
}
