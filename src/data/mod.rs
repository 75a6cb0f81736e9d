pub mod document;
pub mod parser;
pub mod provider;

pub use document::{Document, Sentence, Field, GraphField};
pub use parser::DocumentParser;
pub use provider::{document_to_parse, PreparsedProvider};
