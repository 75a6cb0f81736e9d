use serde::{Deserialize, Serialize};

/// A token as presented to the student, indexed within its sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Sentence-local index, assigned left to right from 0
    pub id: usize,
    pub text: String,
    /// Character offset relative to the sentence start
    pub start: usize,
    pub end: usize,
    pub pos: String,
    pub tag: String,
    pub dep: String,
}

impl Token {
    pub fn new(
        id: usize,
        text: String,
        start: usize,
        pos: String,
        tag: String,
        dep: String,
    ) -> Self {
        let end = start + text.chars().count();
        Self { id, text, start, end, pos, tag, dep }
    }
}
