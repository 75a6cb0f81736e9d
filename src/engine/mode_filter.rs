//! Mode filter: narrows clause roots for the simplified mode

use crate::parse::TokenId;
use crate::types::Mode;

/// Apply `mode` to the sorted `roots` of a sentence.
///
/// `Full` keeps everything. `Core` keeps a single root: the parser's own
/// sentence root when present, otherwise the first root.
pub fn apply_mode(roots: Vec<TokenId>, sentence_root: TokenId, mode: Mode) -> Vec<TokenId> {
    match mode {
        Mode::Full => roots,
        Mode::Core if roots.len() <= 1 => roots,
        Mode::Core => {
            if roots.contains(&sentence_root) {
                vec![sentence_root]
            } else {
                log::debug!("Sentence root {} not among {:?}, keeping first root", sentence_root, roots);
                roots.into_iter().take(1).collect()
            }
        }
    }
}
