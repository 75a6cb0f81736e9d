//! Label rules driving root and subject detection

use anyhow::Result;
use serde::Deserialize;

use crate::digraph::LabelMatcher;
use crate::engine::constants::*;

/// Optional regex overrides for parsers with a different label inventory
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleOverrides {
    pub subject: Option<String>,
    pub auxiliary: Option<String>,
    pub relative_clause: Option<String>,
}

/// Dependency label matchers used by the root finder and subject resolver
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub coordination: LabelMatcher,
    pub clausal: LabelMatcher,
    pub auxiliary: LabelMatcher,
    pub subject: LabelMatcher,
    pub expletive: LabelMatcher,
    pub attribute: LabelMatcher,
    pub relative_clause: LabelMatcher,
}

impl RuleSet {
    /// Default rules with any configured overrides applied
    pub fn with_overrides(overrides: &RuleOverrides) -> Result<Self> {
        let mut rules = Self::default();
        if let Some(pattern) = &overrides.subject {
            rules.subject = LabelMatcher::regex(pattern.as_str())?;
        }
        if let Some(pattern) = &overrides.auxiliary {
            rules.auxiliary = LabelMatcher::regex(pattern.as_str())?;
        }
        if let Some(pattern) = &overrides.relative_clause {
            rules.relative_clause = LabelMatcher::regex(pattern.as_str())?;
        }
        Ok(rules)
    }

    pub fn is_finite_tag(&self, tag: &str) -> bool {
        FINITE_TAGS.contains(&tag)
    }

    pub fn is_non_finite_tag(&self, tag: &str) -> bool {
        NON_FINITE_TAGS.contains(&tag)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            coordination: LabelMatcher::exact(DEP_CONJ),
            clausal: LabelMatcher::any_of(&CLAUSAL_DEPS),
            auxiliary: LabelMatcher::any_of(&AUXILIARY_DEPS),
            subject: LabelMatcher::any_of(&SUBJECT_DEPS),
            expletive: LabelMatcher::exact(DEP_EXPL),
            attribute: LabelMatcher::exact(DEP_ATTR),
            relative_clause: LabelMatcher::exact(DEP_RELCL),
        }
    }
}
