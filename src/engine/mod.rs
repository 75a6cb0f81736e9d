//! Engine module computing root/subject answer keys
//!
//! This module is organized into the following submodules:
//! - `constants`: Dependency labels, tags and defaults
//! - `config`: Analyzer configuration loaded from YAML
//! - `rules`: Label matchers driving the heuristics
//! - `roots`: Root finder
//! - `subjects`: Subject resolver and subject spans
//! - `mode_filter`: FULL / CORE root filtering
//! - `assembler`: Per-sentence token records and answer keys
//! - `diagnostics`: Unresolved-subject reasons and observers
//! - `error`: The analysis failure type
//! - `analyzer`: The `Analyzer` entry point

pub mod analyzer;
pub mod assembler;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod mode_filter;
pub mod roots;
pub mod rules;
pub mod subjects;

// Re-export main types for convenience
pub use analyzer::Analyzer;
pub use assembler::{assemble_sentence, AssembledSentence};
pub use config::{load_config_from_yaml, AnalyzerConfig};
pub use constants::*;
pub use diagnostics::{UnresolvedObserver, UnresolvedReason, UnresolvedTally};
pub use error::AnalysisError;
pub use mode_filter::apply_mode;
pub use roots::find_roots;
pub use rules::{RuleOverrides, RuleSet};
pub use subjects::{find_subject, find_subjects, subject_span, SubjectResolution};
