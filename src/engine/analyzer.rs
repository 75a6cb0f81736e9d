//! Core Analyzer struct and entry points

use std::sync::Arc;
use anyhow::Result;
use rayon::prelude::*;

use crate::engine::assembler::assemble_sentence;
use crate::engine::config::AnalyzerConfig;
use crate::engine::diagnostics::UnresolvedObserver;
use crate::engine::error::AnalysisError;
use crate::engine::rules::RuleSet;
use crate::parse::{ParseProvider, ParsedDoc};
use crate::types::{AnalysisResult, Mode};

/// Computes root/subject answer keys for passages.
///
/// Holds no per-call state: every `analyze` parses afresh and builds its own
/// token index, so one analyzer can serve concurrent requests.
pub struct Analyzer {
    provider: Arc<dyn ParseProvider>,
    rules: RuleSet,
    observer: Option<Arc<dyn UnresolvedObserver>>,
}

impl Analyzer {
    pub fn new(provider: Arc<dyn ParseProvider>) -> Self {
        Self {
            provider,
            rules: RuleSet::default(),
            observer: None,
        }
    }

    /// Create an analyzer whose rules honor the configured overrides
    pub fn from_config(provider: Arc<dyn ParseProvider>, config: &AnalyzerConfig) -> Result<Self> {
        let rules = RuleSet::with_overrides(&config.rules)?;
        Ok(Self::new(provider).with_rules(rules))
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn UnresolvedObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Parse `passage` and build its answer keys
    pub fn analyze(&self, passage: &str, mode: Mode) -> Result<AnalysisResult, AnalysisError> {
        let doc = self.provider.parse(passage).map_err(|e| {
            log::warn!("Parse failed for passage of {} chars: {}", passage.chars().count(), e);
            AnalysisError::from(e)
        })?;
        Ok(self.analyze_doc(&doc, mode))
    }

    /// Build answer keys for an already parsed document
    pub fn analyze_doc(&self, doc: &ParsedDoc, mode: Mode) -> AnalysisResult {
        let mut sentences = Vec::with_capacity(doc.sentence_count());

        for (id, span) in doc.sentences().enumerate() {
            let assembled = assemble_sentence(id, &span, mode, &self.rules);
            if let Some(observer) = &self.observer {
                for &reason in &assembled.unresolved {
                    observer.on_unresolved(&assembled.sentence.text, reason);
                }
            }
            sentences.push(assembled.sentence);
        }

        log::debug!("Analyzed {} sentences with model '{}'", sentences.len(), doc.model());
        AnalysisResult::new(sentences, doc.model().to_string())
    }

    /// Analyze passages in parallel; results keep the input order
    pub fn analyze_batch(&self, passages: &[String], mode: Mode) -> Vec<Result<AnalysisResult, AnalysisError>> {
        passages
            .par_iter()
            .map(|passage| self.analyze(passage, mode))
            .collect()
    }
}
