pub mod engine;
pub mod digraph;
pub mod parse;
pub mod types;
pub mod data;
pub mod tracking;

#[cfg(test)]
pub(crate) mod fixtures;

pub use engine::{Analyzer, AnalysisError, AnalyzerConfig, UnresolvedObserver, UnresolvedReason};
pub use engine::load_config_from_yaml;
pub use parse::{LazyProvider, ParseProvider, ParsedDoc};
pub use types::{AnalysisResult, AnswerKey, Mode, Sentence, Token};
pub use data::{Document, DocumentParser, PreparsedProvider};
pub use tracking::FailureLog;
