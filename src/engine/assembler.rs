//! Sentence assembler: turns one parsed sentence into tokens and an answer key

use std::collections::HashMap;

use crate::engine::diagnostics::UnresolvedReason;
use crate::engine::mode_filter::apply_mode;
use crate::engine::roots::find_roots;
use crate::engine::rules::RuleSet;
use crate::engine::subjects::find_subjects;
use crate::parse::{SentenceSpan, TokenId};
use crate::types::{AnswerKey, Mode, Sentence, Token};

/// An assembled sentence plus the reasons its unresolved roots lack a subject
#[derive(Debug, Clone)]
pub struct AssembledSentence {
    pub sentence: Sentence,
    pub unresolved: Vec<UnresolvedReason>,
}

pub fn assemble_sentence(id: usize, span: &SentenceSpan<'_>, mode: Mode, rules: &RuleSet) -> AssembledSentence {
    let start_char = span.start_char();
    let mut index_map: HashMap<TokenId, usize> = HashMap::with_capacity(span.tokens().len());
    let mut tokens = Vec::with_capacity(span.tokens().len());

    for (local, parsed) in span.tokens().iter().enumerate() {
        index_map.insert(parsed.id, local);
        tokens.push(Token::new(
            local,
            parsed.text.clone(),
            parsed.offset.saturating_sub(start_char),
            parsed.pos.clone(),
            parsed.tag.clone(),
            parsed.dep.clone(),
        ));
    }

    let doc = span.doc();
    let sentence_root = span.root().id;
    let roots: Vec<TokenId> = find_roots(doc, sentence_root, rules)
        .into_iter()
        .filter(|root| index_map.contains_key(root))
        .collect();
    let roots = apply_mode(roots, sentence_root, mode);
    let resolution = find_subjects(doc, &roots, &index_map, rules);
    let unresolved = resolution.unresolved().collect();

    let key = AnswerKey {
        roots: roots.iter().filter_map(|root| index_map.get(root).copied()).collect(),
        subjects: resolution.subjects,
        subject_spans: resolution.spans,
    };

    log::debug!(
        "Sentence {}: roots {:?}, subjects {:?} ({} mode)",
        id, key.roots, key.subjects, mode
    );

    AssembledSentence {
        sentence: Sentence {
            id,
            text: span.text().to_string(),
            tokens,
            key,
        },
        unresolved,
    }
}
