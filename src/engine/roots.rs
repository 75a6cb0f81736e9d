//! Root finder: which verbs of a sentence anchor a quizzable clause

use crate::engine::constants::POS_VERB;
use crate::engine::rules::RuleSet;
use crate::parse::{ParsedToken, SyntaxTree, TokenId};

/// Clause roots of the sentence headed by `sentence_root`, in surface order.
///
/// The parser's own root is always included. Verb conjuncts of it are added,
/// and so are verb clausal complements / adverbial clauses that form a full
/// clause (see `is_full_clause`).
pub fn find_roots<T: SyntaxTree + ?Sized>(tree: &T, sentence_root: TokenId, rules: &RuleSet) -> Vec<TokenId> {
    let mut roots = vec![sentence_root];

    for child in tree.children_labeled(sentence_root, &rules.coordination) {
        let Some(token) = tree.token(child) else {
            continue;
        };
        if token.pos == POS_VERB {
            log::debug!("'{}' joins root {} as a conjunct", token.text, sentence_root);
            roots.push(child);
        }
    }

    for child in tree.children_labeled(sentence_root, &rules.clausal) {
        let Some(token) = tree.token(child) else {
            continue;
        };
        if token.pos != POS_VERB {
            continue;
        }
        if is_full_clause(tree, token, rules) {
            log::debug!("'{}' ({}) heads a full {} clause", token.text, token.tag, token.dep);
            roots.push(child);
        } else {
            log::debug!("'{}' ({}) is a non-finite complement, skipped", token.text, token.tag);
        }
    }

    roots.sort_unstable();
    roots.dedup();
    roots
}

/// A clausal verb counts as its own clause when it is tensed, or when it is
/// non-finite but carries an auxiliary ("will come", "was stolen"). Bare
/// infinitives and participles acting as object complements ("helps them
/// stay") do not.
pub fn is_full_clause<T: SyntaxTree + ?Sized>(tree: &T, verb: &ParsedToken, rules: &RuleSet) -> bool {
    if rules.is_finite_tag(&verb.tag) {
        return true;
    }
    rules.is_non_finite_tag(&verb.tag) && !tree.children_labeled(verb.id, &rules.auxiliary).is_empty()
}
