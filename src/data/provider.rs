//! Parse provider backed by pre-computed parses.
//!
//! Parses are produced offline (one Odinson-style document per passage) and
//! looked up by passage text at analysis time.

use std::collections::HashMap;
use std::ops::Range;
use std::path::Path;
use anyhow::{Result, anyhow};

use crate::data::document::Document;
use crate::data::parser::DocumentParser;
use crate::engine::constants::{DEP_ROOT, FIELD_POS, FIELD_TAG};
use crate::parse::{ParseProvider, ParsedDoc, ParsedToken};

pub struct PreparsedProvider {
    model: String,
    passages: HashMap<String, ParsedDoc>,
}

impl PreparsedProvider {
    /// Index documents by their (trimmed) passage text
    pub fn from_documents(documents: Vec<Document>, model: impl Into<String>) -> Result<Self> {
        let model = model.into();
        let parser = DocumentParser::new();
        let mut passages = HashMap::with_capacity(documents.len());

        for document in &documents {
            parser.validate_document(document)?;
            let parsed = document_to_parse(document, &model)
                .map_err(|e| anyhow!("Document '{}': {}", document.id, e))?;
            let key = parsed.text().trim().to_string();
            if passages.insert(key, parsed).is_some() {
                log::warn!("Document '{}' replaces an earlier parse of the same passage", document.id);
            }
        }

        Ok(Self { model, passages })
    }

    /// Load parses from a JSON, JSONL or gzipped JSON file
    pub fn from_file<P: AsRef<Path>>(path: P, model: impl Into<String>) -> Result<Self> {
        let documents = DocumentParser::new().parse_file(path)?;
        Self::from_documents(documents, model)
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    pub fn contains(&self, passage: &str) -> bool {
        self.passages.contains_key(passage.trim())
    }
}

impl ParseProvider for PreparsedProvider {
    fn model_name(&self) -> &str {
        &self.model
    }

    fn parse(&self, text: &str) -> Result<ParsedDoc> {
        let key = text.trim();
        if key.is_empty() {
            return ParsedDoc::new(text, Vec::new(), Vec::new(), self.model.clone());
        }
        self.passages
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow!("No parse available for passage ({} chars)", key.chars().count()))
    }
}

/// Convert an Odinson-style document into a `ParsedDoc`.
///
/// Each token's head and label come from its incoming dependency edge; tokens
/// listed as graph roots, or without an incoming edge, become `ROOT`. Character
/// offsets are recovered by aligning tokens left to right against the text.
pub fn document_to_parse(document: &Document, model: &str) -> Result<ParsedDoc> {
    let text = document.passage_text();
    let mut tokens: Vec<ParsedToken> = Vec::new();
    let mut sentences: Vec<Range<usize>> = Vec::with_capacity(document.sentences.len());
    let mut cursor = TextCursor::new(&text);

    for sentence_idx in 0..document.sentences.len() {
        let words = document
            .surface_tokens(sentence_idx)
            .ok_or_else(|| anyhow!("sentence {} has no raw or word tokens", sentence_idx))?;
        if words.is_empty() {
            log::debug!("Skipping empty sentence {} of '{}'", sentence_idx, document.id);
            continue;
        }
        let deps = document
            .get_dependencies(sentence_idx)
            .ok_or_else(|| anyhow!("sentence {} has no dependency graph", sentence_idx))?;
        let tags = document.get_tokens(sentence_idx, FIELD_TAG);
        let pos = document.get_tokens(sentence_idx, FIELD_POS);

        let base = tokens.len();
        let mut heads: Vec<Option<(usize, &str)>> = vec![None; words.len()];
        for (from, to, rel) in &deps.edges {
            let (from, to) = (*from as usize, *to as usize);
            if to >= words.len() || from >= words.len() {
                return Err(anyhow!("sentence {} edge {}->{} out of range", sentence_idx, from, to));
            }
            if heads[to].is_some() {
                log::debug!("Token {} of sentence {} has several heads, keeping the first", to, sentence_idx);
                continue;
            }
            heads[to] = Some((from, rel.as_str()));
        }
        for &root in &deps.roots {
            if let Some(head) = heads.get_mut(root as usize) {
                *head = None;
            }
        }

        for (local, word) in words.iter().enumerate() {
            let offset = cursor
                .advance(word)
                .ok_or_else(|| anyhow!("token '{}' not found in passage text", word))?;
            let tag = tags.and_then(|t| t.get(local)).cloned().unwrap_or_default();
            let coarse = pos
                .and_then(|p| p.get(local))
                .cloned()
                .unwrap_or_else(|| coarse_pos_from_tag(&tag).to_string());
            let (head, dep) = match heads[local] {
                Some((head, rel)) => (base + head, rel.to_string()),
                None => (base + local, DEP_ROOT.to_string()),
            };
            tokens.push(ParsedToken {
                id: base + local,
                text: word.clone(),
                offset,
                pos: coarse,
                tag,
                dep,
                head,
            });
        }
        sentences.push(base..tokens.len());
    }

    ParsedDoc::new(text, tokens, sentences, model)
}

/// Left-to-right token alignment over a text, tracking char offsets
struct TextCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> TextCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, byte: 0, chars: 0 }
    }

    /// Find `word` at or after the cursor and return its char offset
    fn advance(&mut self, word: &str) -> Option<usize> {
        let rest = &self.text[self.byte..];
        let found = rest.find(word)?;
        let start = self.chars + rest[..found].chars().count();
        self.byte += found + word.len();
        self.chars = start + word.chars().count();
        Some(start)
    }
}

/// Universal POS for a Penn Treebank tag, used when a parse carries no
/// coarse tags of its own
pub fn coarse_pos_from_tag(tag: &str) -> &'static str {
    match tag {
        "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => "VERB",
        "MD" => "AUX",
        "NN" | "NNS" => "NOUN",
        "NNP" | "NNPS" => "PROPN",
        "PRP" | "PRP$" | "WP" | "WP$" | "EX" => "PRON",
        "JJ" | "JJR" | "JJS" => "ADJ",
        "RB" | "RBR" | "RBS" | "WRB" => "ADV",
        "DT" | "PDT" | "WDT" => "DET",
        "IN" => "ADP",
        "CC" => "CCONJ",
        "CD" => "NUM",
        "TO" | "RP" | "POS" => "PART",
        "UH" => "INTJ",
        "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "HYPH" | "NFP" => "PUNCT",
        "$" | "#" | "SYM" => "SYM",
        _ => "X",
    }
}
