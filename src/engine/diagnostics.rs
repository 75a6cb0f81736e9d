//! Reasons and hooks for roots whose subject could not be resolved

use std::collections::HashMap;
use std::fmt;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Why no subject was found for a root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnresolvedReason {
    /// The root has no child with a subject relation
    #[serde(rename = "no_subject")]
    NoSubjectChild,
    /// An expletive is present but there is no attribute to stand in for it
    #[serde(rename = "expletive_without_attr")]
    ExpletiveWithoutAttribute,
    /// The subject token lies outside the sentence being assembled
    #[serde(rename = "subject_outside_sentence")]
    SubjectOutsideSentence,
}

impl UnresolvedReason {
    /// Stable code used in failure logs
    pub fn code(&self) -> &'static str {
        match self {
            UnresolvedReason::NoSubjectChild => "no_subject",
            UnresolvedReason::ExpletiveWithoutAttribute => "expletive_without_attr",
            UnresolvedReason::SubjectOutsideSentence => "subject_outside_sentence",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UnresolvedReason::NoSubjectChild => "no qualifying subject child",
            UnresolvedReason::ExpletiveWithoutAttribute => "expletive without attribute",
            UnresolvedReason::SubjectOutsideSentence => "subject outside sentence",
        }
    }
}

impl fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Hook notified once per root left without a subject
pub trait UnresolvedObserver: Send + Sync {
    fn on_unresolved(&self, sentence_text: &str, reason: UnresolvedReason);
}

impl<F> UnresolvedObserver for F
where
    F: Fn(&str, UnresolvedReason) + Send + Sync,
{
    fn on_unresolved(&self, sentence_text: &str, reason: UnresolvedReason) {
        self(sentence_text, reason)
    }
}

/// In-memory counter of unresolved reasons
#[derive(Debug, Default)]
pub struct UnresolvedTally {
    counts: Mutex<HashMap<UnresolvedReason, usize>>,
}

impl UnresolvedTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, reason: UnresolvedReason) -> usize {
        self.counts.lock().get(&reason).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.lock().values().sum()
    }
}

impl UnresolvedObserver for UnresolvedTally {
    fn on_unresolved(&self, _sentence_text: &str, reason: UnresolvedReason) {
        *self.counts.lock().entry(reason).or_insert(0) += 1;
    }
}
