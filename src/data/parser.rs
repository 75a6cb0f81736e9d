use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use anyhow::{Result, anyhow};
use flate2::read::GzDecoder;

use crate::data::document::{Document, Field};

/// Parser for JSON and gzipped JSON parsed documents
#[derive(Debug, Default, Clone)]
pub struct DocumentParser;

impl DocumentParser {
    pub fn new() -> Self {
        Self
    }

    /// Validate document structure before use.
    /// Checks for valid edge indices and consistent token counts
    pub fn validate_document(&self, doc: &Document) -> Result<()> {
        for (sentence_idx, sentence) in doc.sentences.iter().enumerate() {
            let token_count = sentence.num_tokens as usize;

            for field in &sentence.fields {
                match field {
                    Field::TokensField { name, tokens } => {
                        if tokens.len() != token_count {
                            log::warn!(
                                "Document '{}' sentence {}: field '{}' has {} tokens but numTokens is {}",
                                doc.id, sentence_idx, name, tokens.len(), token_count
                            );
                        }
                    }
                    Field::GraphField { edges, roots, .. } => {
                        for (from, to, rel) in edges {
                            let from_idx = *from as usize;
                            let to_idx = *to as usize;
                            if from_idx >= token_count {
                                return Err(anyhow!(
                                    "Document '{}' sentence {}: edge {}->{}:{} has invalid 'from' index {} (token count: {})",
                                    doc.id, sentence_idx, from, to, rel, from_idx, token_count
                                ));
                            }
                            if to_idx >= token_count {
                                return Err(anyhow!(
                                    "Document '{}' sentence {}: edge {}->{}:{} has invalid 'to' index {} (token count: {})",
                                    doc.id, sentence_idx, from, to, rel, to_idx, token_count
                                ));
                            }
                        }
                        if let Some(root) = roots.iter().find(|&&r| r as usize >= token_count) {
                            return Err(anyhow!(
                                "Document '{}' sentence {}: root {} out of range (token count: {})",
                                doc.id, sentence_idx, root, token_count
                            ));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Parse a JSON file (regular or gzipped)
    pub fn parse_file<P: AsRef<Path>>(&self, file_path: P) -> Result<Vec<Document>> {
        let path = file_path.as_ref();
        let file = File::open(path)
            .map_err(|e| anyhow!("Failed to open {}: {}", path.display(), e))?;

        let mut bytes = Vec::new();
        BufReader::new(file).read_to_end(&mut bytes)?;

        // Gzip magic bytes
        let documents = if bytes.starts_with(&[0x1f, 0x8b]) {
            self.parse_gzipped_json(&bytes)?
        } else {
            self.parse_reader(BufReader::new(bytes.as_slice()))?
        };

        log::info!("Loaded {} parsed documents from {}", documents.len(), path.display());
        Ok(documents)
    }

    /// Parse from a reader (single document, array of documents, or JSONL)
    pub fn parse_reader<R: Read>(&self, mut reader: BufReader<R>) -> Result<Vec<Document>> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        if let Ok(docs) = self.parse_json(&content) {
            return Ok(docs);
        }

        let mut documents = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            if !line.trim().is_empty() {
                let doc: Document = serde_json::from_str(line)
                    .map_err(|e| anyhow!("Invalid document on line {}: {}", line_no + 1, e))?;
                documents.push(doc);
            }
        }

        Ok(documents)
    }

    /// Parse a JSON string
    pub fn parse_json(&self, json_str: &str) -> Result<Vec<Document>> {
        if let Ok(doc) = serde_json::from_str::<Document>(json_str) {
            return Ok(vec![doc]);
        }

        if let Ok(docs) = serde_json::from_str::<Vec<Document>>(json_str) {
            return Ok(docs);
        }

        Err(anyhow!("Failed to parse JSON as single document or array of documents"))
    }

    /// Parse gzipped JSON data
    pub fn parse_gzipped_json(&self, gzipped_data: &[u8]) -> Result<Vec<Document>> {
        let decoder = GzDecoder::new(gzipped_data);
        self.parse_reader(BufReader::new(decoder))
    }
}
