//! Parsed documents as handed over by a parse provider.

use std::ops::Range;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::digraph::{self, DirectedGraph, LabelMatcher};
use crate::engine::constants::DEP_ROOT;

/// Document-global token identity
pub type TokenId = usize;

/// One token of a parsed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedToken {
    pub id: TokenId,
    pub text: String,
    /// Character offset into the document text
    pub offset: usize,
    /// Coarse part of speech (UPOS, e.g. `VERB`)
    pub pos: String,
    /// Fine-grained tag (e.g. `VBZ`)
    pub tag: String,
    pub dep: String,
    /// Head token; equal to `id` for a sentence root
    pub head: TokenId,
}

impl ParsedToken {
    /// Character length of the token text
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_root(&self) -> bool {
        self.head == self.id || self.dep == DEP_ROOT
    }
}

/// Read-only access to a dependency tree.
///
/// Everything the root and subject heuristics need from a parse goes through
/// this trait; implementors never hand out mutable access.
pub trait SyntaxTree {
    fn token(&self, id: TokenId) -> Option<&ParsedToken>;

    /// Head of `id`, `None` for roots and unknown tokens
    fn head(&self, id: TokenId) -> Option<TokenId>;

    /// Direct dependents of `id` in surface order
    fn children(&self, id: TokenId) -> Vec<TokenId>;

    /// Direct dependents of `id` whose relation `matcher` accepts, in surface
    /// order
    fn children_labeled(&self, id: TokenId, matcher: &LabelMatcher) -> Vec<TokenId>;

    /// `id` plus all descendants, in surface order
    fn subtree(&self, id: TokenId) -> Vec<TokenId>;
}

/// A whole parsed passage: text, tokens, sentence segmentation and the
/// dependency graph linking heads to dependents.
#[derive(Debug, Clone)]
pub struct ParsedDoc {
    text: String,
    tokens: Vec<ParsedToken>,
    sentences: Vec<Range<TokenId>>,
    graph: DirectedGraph,
    model: String,
}

impl ParsedDoc {
    /// Build a document, validating token identities and sentence ranges
    pub fn new(
        text: impl Into<String>,
        tokens: Vec<ParsedToken>,
        sentences: Vec<Range<TokenId>>,
        model: impl Into<String>,
    ) -> Result<Self> {
        for (idx, token) in tokens.iter().enumerate() {
            if token.id != idx {
                return Err(anyhow!(
                    "Token '{}' has id {} but sits at position {}",
                    token.text, token.id, idx
                ));
            }
        }

        let mut previous_end = 0;
        for range in &sentences {
            if range.start >= range.end || range.start < previous_end || range.end > tokens.len() {
                return Err(anyhow!(
                    "Invalid sentence range {:?} for {} tokens",
                    range, tokens.len()
                ));
            }
            previous_end = range.end;
        }

        let mut graph = DirectedGraph::with_nodes(tokens.len());
        for token in tokens.iter().filter(|token| token.head != token.id) {
            graph.add_bounded_edge(token.head, token.id, &token.dep)?;
        }

        Ok(Self {
            text: text.into(),
            tokens,
            sentences,
            graph,
            model: model.into(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[ParsedToken] {
        &self.tokens
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Sentence spans in document order
    pub fn sentences(&self) -> impl Iterator<Item = SentenceSpan<'_>> + '_ {
        self.sentences.iter().map(move |range| SentenceSpan {
            doc: self,
            range: range.clone(),
        })
    }

    /// Slice the document text by character (not byte) offsets
    pub fn char_slice(&self, start: usize, end: usize) -> &str {
        let mut indices = self.text.char_indices().map(|(byte, _)| byte);
        let byte_start = indices.by_ref().nth(start).unwrap_or(self.text.len());
        let byte_end = if end > start {
            indices.nth(end - start - 1).unwrap_or(self.text.len())
        } else {
            byte_start
        };
        &self.text[byte_start..byte_end]
    }
}

impl SyntaxTree for ParsedDoc {
    fn token(&self, id: TokenId) -> Option<&ParsedToken> {
        self.tokens.get(id)
    }

    fn head(&self, id: TokenId) -> Option<TokenId> {
        digraph::head_of(&self.graph, id).ok().flatten().map(|(head, _)| head)
    }

    fn children(&self, id: TokenId) -> Vec<TokenId> {
        digraph::children(&self.graph, id)
    }

    fn children_labeled(&self, id: TokenId, matcher: &LabelMatcher) -> Vec<TokenId> {
        digraph::children_labeled(&self.graph, id, matcher)
    }

    fn subtree(&self, id: TokenId) -> Vec<TokenId> {
        digraph::subtree(&self.graph, id)
    }
}

/// A read-only view of one sentence of a `ParsedDoc`
#[derive(Debug, Clone)]
pub struct SentenceSpan<'a> {
    doc: &'a ParsedDoc,
    range: Range<TokenId>,
}

impl<'a> SentenceSpan<'a> {
    pub fn doc(&self) -> &'a ParsedDoc {
        self.doc
    }

    pub fn tokens(&self) -> &'a [ParsedToken] {
        &self.doc.tokens[self.range.clone()]
    }

    pub fn contains(&self, id: TokenId) -> bool {
        self.range.contains(&id)
    }

    /// The parser-designated root of the sentence.
    ///
    /// The first token labeled `ROOT` or heading itself. Failing that, the
    /// first token attached to a head outside the sentence, then the first
    /// token.
    pub fn root(&self) -> &'a ParsedToken {
        let tokens = self.tokens();
        tokens
            .iter()
            .find(|token| token.is_root())
            .or_else(|| tokens.iter().find(|token| !self.contains(token.head)))
            .unwrap_or(&tokens[0])
    }

    /// Character offset of the sentence start in the document
    pub fn start_char(&self) -> usize {
        self.tokens()[0].offset
    }

    /// Character offset just past the last token of the sentence
    pub fn end_char(&self) -> usize {
        let tokens = self.tokens();
        let last = &tokens[tokens.len() - 1];
        last.offset + last.char_len()
    }

    pub fn text(&self) -> &'a str {
        self.doc.char_slice(self.start_char(), self.end_char())
    }
}
