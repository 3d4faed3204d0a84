//! Language and country profiles.
//!
//! Both are process-wide constants. A [`Language`] carries the ambiguity
//! threshold used when expanding groups; a [`Country`] carries the phone
//! format an interpretation is checked against.

use crate::error::RecognizeError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Spoken language whose compound-number pronunciation drives ambiguity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    Greek,
    Russian,
}

impl Language {
    /// All supported languages, in registry order.
    pub const ALL: [Language; 3] = [Language::English, Language::Greek, Language::Russian];

    /// Value above which a group's literal reading is ambiguous.
    ///
    /// In English "15" is only ever fifteen, while in Greek it can also be
    /// heard as "10 5".
    pub const fn threshold(self) -> u64 {
        match self {
            Language::English => 19,
            Language::Greek => 12,
            Language::Russian => 19,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Language::English => 0,
            Language::Greek => 1,
            Language::Russian => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Greek => "greek",
            Language::Russian => "russian",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = RecognizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "greek" | "el" | "gr" => Ok(Language::Greek),
            "russian" | "ru" => Ok(Language::Russian),
            _ => Err(RecognizeError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Country whose phone-number format interpretations are validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Country {
    Usa,
    Greece,
    Russia,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::Usa, Country::Greece, Country::Russia];

    /// Local 10-digit form or any accepted international-prefixed form.
    pub fn phone_format(self) -> &'static Regex {
        match self {
            Country::Usa => regex!(r"^(?:[0-9]{10}|001[0-9]{10})$"),
            Country::Greece => regex!(r"^(?:[0-9]{10}|0030[0-9]{10})$"),
            Country::Russia => regex!(r"^(?:[0-9]{10}|007[0-9]{10}|8[0-9]{10})$"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Country::Usa => "usa",
            Country::Greece => "greece",
            Country::Russia => "russia",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Country {
    type Err = RecognizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "usa" | "us" => Ok(Country::Usa),
            "greece" | "gr" => Ok(Country::Greece),
            "russia" | "ru" => Ok(Country::Russia),
            _ => Err(RecognizeError::UnknownCountry(s.to_string())),
        }
    }
}
