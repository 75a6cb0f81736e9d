use serde::{Deserialize, Serialize};
use crate::types::token::Token;

/// The expected answers for one sentence.
///
/// The three sequences are parallel: `subjects[k]` and `subject_spans[k]`
/// belong to `roots[k]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerKey {
    pub roots: Vec<usize>,
    pub subjects: Vec<Option<usize>>,
    pub subject_spans: Vec<Vec<usize>>,
}

impl AnswerKey {
    /// Root, subject and span triples in root order
    pub fn pairs(&self) -> impl Iterator<Item = (usize, Option<usize>, &[usize])> + '_ {
        self.roots
            .iter()
            .zip(&self.subjects)
            .zip(&self.subject_spans)
            .map(|((&root, &subject), span)| (root, subject, span.as_slice()))
    }
}

/// A sentence of the passage with its tokens and answer key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub id: usize,
    pub text: String,
    pub tokens: Vec<Token>,
    pub key: AnswerKey,
}

impl Sentence {
    pub fn token_text(&self, idx: usize) -> Option<&str> {
        self.tokens.get(idx).map(|t| t.text.as_str())
    }

    /// Texts of the root tokens, in root order
    pub fn root_texts(&self) -> Vec<&str> {
        self.key.roots.iter().filter_map(|&idx| self.token_text(idx)).collect()
    }

    /// Texts of the resolved subjects, `None` where unresolved
    pub fn subject_texts(&self) -> Vec<Option<&str>> {
        self.key
            .subjects
            .iter()
            .map(|subject| subject.and_then(|idx| self.token_text(idx)))
            .collect()
    }

    /// Texts of the tokens in the `k`-th subject span
    pub fn span_texts(&self, k: usize) -> Vec<&str> {
        self.key
            .subject_spans
            .get(k)
            .map(|span| span.iter().filter_map(|&idx| self.token_text(idx)).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMeta {
    pub total_sentences: usize,
    /// Name of the parse model that produced the analysis
    pub model: String,
}

/// Everything produced for one passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentences: Vec<Sentence>,
    pub meta: AnalysisMeta,
}

impl AnalysisResult {
    pub fn new(sentences: Vec<Sentence>, model: String) -> Self {
        let total_sentences = sentences.len();
        Self {
            sentences,
            meta: AnalysisMeta { total_sentences, model },
        }
    }
}
