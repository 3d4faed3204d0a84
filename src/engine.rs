//! Recognition engine.
//!
//! This module is the entry point for turning dictated digit groups into every
//! digit-string a listener could have meant. The work is split into focused
//! submodules under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! raw input ── split (split.rs) ──▶ [Group, Group, ...]
//!                                      │
//!                                      │  Interpreter::interpret (interpret.rs)
//!                                      │    - classify via GroupShape (shape.rs)
//!                                      │    - complex expansion, memoized (expand.rs)
//!                                      │    - modulus merge, one group lookahead
//!                                      v
//!                          [CandidateSet, CandidateSet, ...]
//!                                      │
//!                                      │  CombinationTree::grow (tree.rs)
//!                                      v
//!                               Interpretations
//!                                      │
//!                                      │  validate (validate.rs), optional
//!                                      v
//!                       BTreeSet<PhoneNumberCandidate>
//! ```
//!
//! An [`Engine`] is bound to one [`Language`] and holds no other state, so the
//! same instance can be shared by any number of threads. [`EngineRegistry`]
//! hands out one engine per language from a table built once.
//!
//! ## Cost
//!
//! A complex group of length `n` where every split is valid can expand to
//! roughly `2^(n-1)` candidates, and the tree multiplies candidate counts across
//! groups. Phone-length input stays small; adversarial input does not, and no
//! cancellation exists.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events at `debug`/`trace` level. The binary reads
//! its filter from `NUMREAD_LOG`, e.g. `NUMREAD_LOG=numread=trace`.

#[path = "engine/expand.rs"]
mod expand;
#[path = "engine/interpret.rs"]
mod interpret;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/registry.rs"]
mod registry;
#[path = "engine/shape.rs"]
mod shape;
#[path = "engine/split.rs"]
mod split;
#[path = "engine/tree.rs"]
mod tree;
#[path = "engine/validate.rs"]
mod validate;


pub use metrics::PhaseTimings;
pub(crate) use metrics::RunResult;
pub use registry::EngineRegistry;
pub use validate::validate;

use crate::{CandidateSet, Country, Group, Interpretations, Language, PhoneNumberCandidate, Result};
use interpret::Interpreter;
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::{debug, trace};
use tree::CombinationTree;

/// Recognizer bound to a single [`Language`].
///
/// Obtain one through [`EngineRegistry::get`]; constructing another for the
/// same language yields identical results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    language: Language,
}

impl Engine {
    pub(crate) fn new(language: Language) -> Self {
        Engine { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Every interpretation of `input`.
    ///
    /// Fails with [`RecognizeError::InputFormat`](crate::RecognizeError::InputFormat)
    /// when `input` is not digit groups separated by single whitespace.
    pub fn recognize(&self, input: &str) -> Result<Interpretations> {
        let groups = split::split(input)?;
        let candidates = self.interpret_all(&groups)?;
        Ok(combine(&candidates))
    }

    /// Every interpretation of `input`, each checked against `country`.
    pub fn recognize_phone(&self, country: Country, input: &str) -> Result<BTreeSet<PhoneNumberCandidate>> {
        let interpretations = self.recognize(input)?;
        Ok(to_phone_numbers(country, interpretations))
    }

    /// Run the full pipeline and record per-phase timings plus the
    /// intermediate groups and candidate sets.
    pub(crate) fn run_with_metrics(&self, input: &str, country: Option<Country>) -> Result<RunResult> {
        let start = Instant::now();
        let mut timings = PhaseTimings::default();

        let t = Instant::now();
        let groups = split::split(input)?;
        timings.split = t.elapsed();

        let t = Instant::now();
        let candidates = self.interpret_all(&groups)?;
        timings.interpret = t.elapsed();

        let t = Instant::now();
        let interpretations = combine(&candidates);
        timings.combine = t.elapsed();

        let t = Instant::now();
        let phone_numbers = country.map(|c| to_phone_numbers(c, interpretations.clone()));
        timings.validate = t.elapsed();

        timings.total = start.elapsed();

        Ok(RunResult { groups, candidates, interpretations, phone_numbers, timings })
    }

    /// Candidate set for every group position, in order.
    fn interpret_all(&self, groups: &[Group]) -> Result<Vec<CandidateSet>> {
        debug!(language = %self.language, groups = groups.len(), "interpreting groups");

        let mut interpreter = Interpreter::new(self.language);
        let mut out = Vec::with_capacity(groups.len());
        for index in 0..groups.len() {
            let candidates = interpreter.interpret(groups, index)?;
            trace!(index, group = %groups[index], candidates = ?candidates, "group candidates");
            out.push(candidates);
        }
        Ok(out)
    }
}

fn combine(candidates: &[CandidateSet]) -> Interpretations {
    let mut tree = CombinationTree::new();
    for set in candidates {
        tree.grow(set);
    }
    let interpretations = tree.interpretations();
    debug!(leaves = tree.frontier_len(), interpretations = interpretations.len(), "combined candidates");
    interpretations
}

fn to_phone_numbers(country: Country, interpretations: Interpretations) -> BTreeSet<PhoneNumberCandidate> {
    interpretations.into_iter().map(|i| PhoneNumberCandidate::new(country, i)).collect()
}
