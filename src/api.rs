use crate::engine::{EngineRegistry, PhaseTimings, RunResult};
use crate::{Country, Group, Interpretations, Language, PhoneNumberCandidate, Result};
use std::collections::BTreeSet;
use std::time::Duration;

/// Options that select the recognizer and the optional phone check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Language whose pronunciation rules drive ambiguity.
    pub language: Language,
    /// Country to validate interpretations against, if any.
    pub country: Option<Country>,
}

impl Default for Options {
    fn default() -> Self {
        Options { language: Language::English, country: None }
    }
}

/// Result from [`recognize_with`].
#[derive(Debug, Clone)]
pub struct RecognizeResult {
    /// The raw input text.
    pub text: String,
    /// Every interpretation of the input.
    pub interpretations: Interpretations,
    /// Interpretations checked against [`Options::country`]; `None` when no
    /// country was requested.
    pub phone_numbers: Option<BTreeSet<PhoneNumberCandidate>>,
    /// Total time spent recognizing.
    pub elapsed: Duration,
}

/// One group and the readings it contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub text: String,
    /// Sorted candidate readings.
    pub candidates: Vec<String>,
}

/// Extra details returned by [`recognize_verbose`].
#[derive(Debug, Clone)]
pub struct RecognizeDetails {
    pub groups: Vec<GroupSummary>,
    pub timings: PhaseTimings,
}

/// Result from [`recognize_verbose`].
#[derive(Debug, Clone)]
pub struct RecognizeVerbose {
    pub text: String,
    pub interpretations: Interpretations,
    pub phone_numbers: Option<BTreeSet<PhoneNumberCandidate>>,
    pub elapsed: Duration,
    pub details: RecognizeDetails,
}

/// Every interpretation of `input` in `language`.
///
/// # Example
/// ```
/// use numread::{Language, recognize};
///
/// let out = recognize(Language::English, "25").unwrap();
/// assert!(out.contains("25") && out.contains("205"));
/// ```
pub fn recognize(language: Language, input: &str) -> Result<Interpretations> {
    EngineRegistry::get(language).recognize(input)
}

/// Every interpretation of `input` in `language`, checked against `country`.
pub fn recognize_phone(language: Language, country: Country, input: &str) -> Result<BTreeSet<PhoneNumberCandidate>> {
    EngineRegistry::get(language).recognize_phone(country, input)
}

/// Recognize `text` with `options`, reporting elapsed time.
pub fn recognize_with(text: &str, options: &Options) -> Result<RecognizeResult> {
    let run = EngineRegistry::get(options.language).run_with_metrics(text, options.country)?;

    Ok(RecognizeResult {
        text: text.to_string(),
        interpretations: run.interpretations,
        phone_numbers: run.phone_numbers,
        elapsed: run.timings.total,
    })
}

/// Recognize `text` with `options` and return per-group candidates and
/// per-phase timings as well.
pub fn recognize_verbose(text: &str, options: &Options) -> Result<RecognizeVerbose> {
    let RunResult { groups, candidates, interpretations, phone_numbers, timings } =
        EngineRegistry::get(options.language).run_with_metrics(text, options.country)?;

    let groups = groups.iter().zip(candidates).map(|(group, set)| summarize(group, set)).collect();

    Ok(RecognizeVerbose {
        text: text.to_string(),
        interpretations,
        phone_numbers,
        elapsed: timings.total,
        details: RecognizeDetails { groups, timings },
    })
}

fn summarize(group: &Group, candidates: impl IntoIterator<Item = String>) -> GroupSummary {
    let mut candidates: Vec<String> = candidates.into_iter().collect();
    candidates.sort_unstable();
    GroupSummary { text: group.as_str().to_string(), candidates }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecognizeError;

    #[test]
    fn recognize_with_defaults_to_english_without_country() {
        let res = recognize_with("15", &Options::default()).unwrap();

        assert_eq!(res.text, "15");
        assert_eq!(res.interpretations, Interpretations::from(["15".to_string()]));
        assert!(res.phone_numbers.is_none());
    }

    #[test]
    fn recognize_with_country_attaches_validity() {
        let opts = Options { language: Language::English, country: Some(Country::Greece) };
        let res = recognize_with("2 10 6 9 30 6 6 4", &opts).unwrap();

        let phones = res.phone_numbers.unwrap();
        assert_eq!(phones.len(), res.interpretations.len());
        let valid: Vec<&str> = phones.iter().filter(|p| p.is_valid()).map(|p| p.interpretation()).collect();
        assert_eq!(valid, vec!["2106930664"]);
    }

    #[test]
    fn recognize_verbose_reports_groups_and_timings() {
        let opts = Options { language: Language::English, country: None };
        let res = recognize_verbose("350 5", &opts).unwrap();

        assert_eq!(
            res.details.groups,
            vec![
                GroupSummary {
                    text: "350".to_string(),
                    candidates: vec!["3005".into(), "30050".into(), "35".into(), "350".into()],
                },
                GroupSummary { text: "5".to_string(), candidates: vec!["5".into()] },
            ]
        );
        assert_eq!(res.elapsed, res.details.timings.total);
        assert!(res.details.timings.interpret <= res.details.timings.total);
    }

    #[test]
    fn free_functions_match_engine() {
        assert_eq!(recognize(Language::Greek, "15").unwrap().len(), 2);
        let phones = recognize_phone(Language::English, Country::Usa, "0 0 1 2 0 2 5 5 5 0 1 4 3").unwrap();
        assert_eq!(phones.len(), 1);
        assert!(phones.iter().all(PhoneNumberCandidate::is_valid));
    }

    #[test]
    fn errors_surface_to_caller() {
        let err = recognize_with("2  10", &Options::default()).unwrap_err();
        assert_eq!(err, RecognizeError::InputFormat { input: "2  10".to_string() });
        assert!(recognize_verbose("abc", &Options::default()).is_err());
    }
}
