//! Run metrics.
//!
//! `Engine::recognize` skips all of this; `Engine::run_with_metrics` records
//! per-phase wall time and keeps the intermediate groups and candidate sets so
//! callers can show how an interpretation was reached.

use crate::{CandidateSet, Group, Interpretations, PhoneNumberCandidate};
use std::collections::BTreeSet;
use std::time::Duration;

/// Wall time spent in each phase of one recognition run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTimings {
    /// Grammar check and segmentation.
    pub split: Duration,
    /// Per-group candidate generation.
    pub interpret: Duration,
    /// Combination tree build and walk.
    pub combine: Duration,
    /// Phone-format checks; zero when no country was requested.
    pub validate: Duration,
    /// Whole run.
    pub total: Duration,
}

/// Pipeline output bundled with its intermediates and timings.
#[derive(Debug, Clone)]
pub(crate) struct RunResult {
    pub groups: Vec<Group>,
    /// One set per entry in `groups`.
    pub candidates: Vec<CandidateSet>,
    pub interpretations: Interpretations,
    pub phone_numbers: Option<BTreeSet<PhoneNumberCandidate>>,
    pub timings: PhaseTimings,
}
