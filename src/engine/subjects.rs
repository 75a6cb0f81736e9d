//! Subject resolver: the subject token and subject phrase of each root

use std::collections::{HashMap, HashSet};

use crate::engine::diagnostics::UnresolvedReason;
use crate::engine::rules::RuleSet;
use crate::parse::{SyntaxTree, TokenId};

/// Subjects and subject spans aligned with the roots they were resolved for.
///
/// Indices are sentence-local. `reasons[k]` is `Some` exactly when
/// `subjects[k]` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectResolution {
    pub subjects: Vec<Option<usize>>,
    pub spans: Vec<Vec<usize>>,
    pub reasons: Vec<Option<UnresolvedReason>>,
}

impl SubjectResolution {
    fn push_resolved(&mut self, subject: usize, span: Vec<usize>) {
        self.subjects.push(Some(subject));
        self.spans.push(span);
        self.reasons.push(None);
    }

    fn push_unresolved(&mut self, reason: UnresolvedReason) {
        self.subjects.push(None);
        self.spans.push(Vec::new());
        self.reasons.push(Some(reason));
    }

    pub fn unresolved(&self) -> impl Iterator<Item = UnresolvedReason> + '_ {
        self.reasons.iter().flatten().copied()
    }
}

/// Resolve the subject of every root.
///
/// `index_map` maps document token ids to sentence-local indices; tokens
/// missing from it are never reported.
pub fn find_subjects<T: SyntaxTree + ?Sized>(
    tree: &T,
    roots: &[TokenId],
    index_map: &HashMap<TokenId, usize>,
    rules: &RuleSet,
) -> SubjectResolution {
    let mut resolution = SubjectResolution::default();

    for &root in roots {
        let subject = match find_subject(tree, root, rules) {
            Ok(subject) => subject,
            Err(reason) => {
                log::debug!("No subject for root {}: {}", root, reason);
                resolution.push_unresolved(reason);
                continue;
            }
        };

        match index_map.get(&subject) {
            Some(&local) => {
                let span = subject_span(tree, subject, index_map, rules);
                resolution.push_resolved(local, span);
            }
            None => resolution.push_unresolved(UnresolvedReason::SubjectOutsideSentence),
        }
    }

    resolution
}

/// The subject token of `root`.
///
/// With an expletive ("There is a cat") the attribute stands in as the
/// subject. Otherwise, or when the expletive has no attribute sibling, the
/// first child with a subject relation.
pub fn find_subject<T: SyntaxTree + ?Sized>(
    tree: &T,
    root: TokenId,
    rules: &RuleSet,
) -> Result<TokenId, UnresolvedReason> {
    let has_expletive = !tree.children_labeled(root, &rules.expletive).is_empty();
    if has_expletive {
        if let Some(&attribute) = tree.children_labeled(root, &rules.attribute).first() {
            return Ok(attribute);
        }
    }

    match tree.children_labeled(root, &rules.subject).first() {
        Some(&subject) => Ok(subject),
        None if has_expletive => Err(UnresolvedReason::ExpletiveWithoutAttribute),
        None => Err(UnresolvedReason::NoSubjectChild),
    }
}

/// Sentence-local indices of the subject phrase, ascending.
///
/// The phrase is the subject's subtree minus the subtree of every relative
/// clause attached directly to the subject.
pub fn subject_span<T: SyntaxTree + ?Sized>(
    tree: &T,
    subject: TokenId,
    index_map: &HashMap<TokenId, usize>,
    rules: &RuleSet,
) -> Vec<usize> {
    let suppressed: HashSet<TokenId> = tree
        .children_labeled(subject, &rules.relative_clause)
        .into_iter()
        .flat_map(|clause| tree.subtree(clause))
        .collect();

    let mut span: Vec<usize> = tree
        .subtree(subject)
        .into_iter()
        .filter(|id| !suppressed.contains(id))
        .filter_map(|id| index_map.get(&id).copied())
        .collect();
    span.sort_unstable();
    span.dedup();
    span
}
