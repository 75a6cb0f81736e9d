use serde::{Deserialize, Serialize};

use crate::engine::constants::{FIELD_DEPENDENCIES, FIELD_RAW, FIELD_WORD};

/// Represents a complete parsed document with metadata and sentences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    /// Original passage text, when the producer kept it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub metadata: Vec<String>,
    pub sentences: Vec<Sentence>,
}

/// Represents a single sentence with its fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    #[serde(rename = "numTokens")]
    pub num_tokens: u32,
    pub fields: Vec<Field>,
}

/// Represents a field in a sentence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Field {
    #[serde(rename = "ai.lum.odinson.TokensField")]
    TokensField {
        name: String,
        tokens: Vec<String>,
    },
    #[serde(rename = "ai.lum.odinson.GraphField")]
    GraphField {
        name: String,
        edges: Vec<(u32, u32, String)>, // (head, dependent, relation)
        roots: Vec<u32>,
    },
}

/// Represents a dependency graph field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphField {
    pub name: String,
    pub edges: Vec<(u32, u32, String)>, // (head, dependent, relation)
    pub roots: Vec<u32>,
}

impl Document {
    /// Get a specific field by name from a sentence
    pub fn get_field(&self, sentence_idx: usize, field_name: &str) -> Option<&Field> {
        self.sentences.get(sentence_idx)?.fields.iter()
            .find(|field| match field {
                Field::TokensField { name, .. } => name == field_name,
                Field::GraphField { name, .. } => name == field_name,
            })
    }

    /// Get tokens from a specific field
    pub fn get_tokens(&self, sentence_idx: usize, field_name: &str) -> Option<&[String]> {
        match self.get_field(sentence_idx, field_name)? {
            Field::TokensField { tokens, .. } => Some(tokens),
            _ => None,
        }
    }

    /// Surface tokens of a sentence, preferring `raw` over `word`
    pub fn surface_tokens(&self, sentence_idx: usize) -> Option<&[String]> {
        self.get_tokens(sentence_idx, FIELD_RAW)
            .or_else(|| self.get_tokens(sentence_idx, FIELD_WORD))
    }

    /// Get dependencies from a sentence
    pub fn get_dependencies(&self, sentence_idx: usize) -> Option<GraphField> {
        match self.get_field(sentence_idx, FIELD_DEPENDENCIES)? {
            Field::GraphField { edges, roots, .. } => {
                Some(GraphField {
                    name: FIELD_DEPENDENCIES.to_string(),
                    edges: edges.clone(),
                    roots: roots.clone(),
                })
            }
            _ => None,
        }
    }

    /// The passage text: the stored text, or the surface tokens joined by spaces
    pub fn passage_text(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        (0..self.sentences.len())
            .filter_map(|idx| self.surface_tokens(idx))
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
