//! Hand-checked dependency parses (en_core_web_sm style) used across tests.

use crate::data::{Document, Field, PreparsedProvider, Sentence};
use crate::parse::{ParseProvider, ParsedDoc};

pub const MODEL: &str = "en_core_web_sm";

pub const RELATIVE_WHO: &str = "The man who lives next door is friendly.";
pub const RELATIVE_WHICH: &str = "The book which I bought yesterday is interesting.";
pub const RELATIVE_THAT: &str = "The cake that she baked was delicious.";
pub const EXPLETIVE: &str = "There is a cat on the mat.";
pub const EXPLETIVE_WITH_SUBJECT: &str = "There goes the bus.";
pub const BARE_EXPLETIVE: &str = "There remains.";
pub const BECAUSE_CLAUSE: &str = "Some fans dislike it because it stops the game.";
pub const COORDINATION: &str = "She opened the door and walked in.";
pub const BARE_INFINITIVE: &str = "This mental training helps them stay calm.";
pub const PARTICIPLE: &str = "I saw him running.";
pub const MODAL_COMPLEMENT: &str = "I think he will come tomorrow.";
pub const PASSIVE: &str = "The letter was written by Tom.";
pub const FRAGMENT: &str = "Goodbye, everyone.";
pub const COPULA_COMPLEMENT: &str = "I think he is tall.";
pub const COPULA_CONJUNCT: &str = "She is tall and she is strong.";
pub const PASSIVE_COMPLEMENT: &str = "He said it was stolen.";

pub const TWO_SENTENCE_PASSAGE: &str =
    "The man who lives next door is friendly. There is a cat on the mat.";

pub const ALL_SENTENCES: [&str; 16] = [
    RELATIVE_WHO,
    RELATIVE_WHICH,
    RELATIVE_THAT,
    EXPLETIVE,
    EXPLETIVE_WITH_SUBJECT,
    BARE_EXPLETIVE,
    BECAUSE_CLAUSE,
    COORDINATION,
    BARE_INFINITIVE,
    PARTICIPLE,
    MODAL_COMPLEMENT,
    PASSIVE,
    FRAGMENT,
    COPULA_COMPLEMENT,
    COPULA_CONJUNCT,
    PASSIVE_COMPLEMENT,
];

/// (text, pos, tag, dep, head); the root heads itself
type TokenRow = (&'static str, &'static str, &'static str, &'static str, usize);

fn parsed_rows(text: &str) -> &'static [TokenRow] {
    match text {
        RELATIVE_WHO => &[
            ("The", "DET", "DT", "det", 1),
            ("man", "NOUN", "NN", "nsubj", 6),
            ("who", "PRON", "WP", "nsubj", 3),
            ("lives", "VERB", "VBZ", "relcl", 1),
            ("next", "ADJ", "JJ", "amod", 5),
            ("door", "NOUN", "NN", "npadvmod", 3),
            ("is", "AUX", "VBZ", "ROOT", 6),
            ("friendly", "ADJ", "JJ", "acomp", 6),
            (".", "PUNCT", ".", "punct", 6),
        ],
        RELATIVE_WHICH => &[
            ("The", "DET", "DT", "det", 1),
            ("book", "NOUN", "NN", "nsubj", 6),
            ("which", "PRON", "WDT", "dobj", 4),
            ("I", "PRON", "PRP", "nsubj", 4),
            ("bought", "VERB", "VBD", "relcl", 1),
            ("yesterday", "NOUN", "NN", "npadvmod", 4),
            ("is", "AUX", "VBZ", "ROOT", 6),
            ("interesting", "ADJ", "JJ", "acomp", 6),
            (".", "PUNCT", ".", "punct", 6),
        ],
        RELATIVE_THAT => &[
            ("The", "DET", "DT", "det", 1),
            ("cake", "NOUN", "NN", "nsubj", 5),
            ("that", "PRON", "WDT", "dobj", 4),
            ("she", "PRON", "PRP", "nsubj", 4),
            ("baked", "VERB", "VBD", "relcl", 1),
            ("was", "AUX", "VBD", "ROOT", 5),
            ("delicious", "ADJ", "JJ", "acomp", 5),
            (".", "PUNCT", ".", "punct", 5),
        ],
        EXPLETIVE => &[
            ("There", "PRON", "EX", "expl", 1),
            ("is", "VERB", "VBZ", "ROOT", 1),
            ("a", "DET", "DT", "det", 3),
            ("cat", "NOUN", "NN", "attr", 1),
            ("on", "ADP", "IN", "prep", 1),
            ("the", "DET", "DT", "det", 6),
            ("mat", "NOUN", "NN", "pobj", 4),
            (".", "PUNCT", ".", "punct", 1),
        ],
        EXPLETIVE_WITH_SUBJECT => &[
            ("There", "PRON", "EX", "expl", 1),
            ("goes", "VERB", "VBZ", "ROOT", 1),
            ("the", "DET", "DT", "det", 3),
            ("bus", "NOUN", "NN", "nsubj", 1),
            (".", "PUNCT", ".", "punct", 1),
        ],
        BARE_EXPLETIVE => &[
            ("There", "PRON", "EX", "expl", 1),
            ("remains", "VERB", "VBZ", "ROOT", 1),
            (".", "PUNCT", ".", "punct", 1),
        ],
        BECAUSE_CLAUSE => &[
            ("Some", "DET", "DT", "det", 1),
            ("fans", "NOUN", "NNS", "nsubj", 2),
            ("dislike", "VERB", "VBP", "ROOT", 2),
            ("it", "PRON", "PRP", "dobj", 2),
            ("because", "SCONJ", "IN", "mark", 6),
            ("it", "PRON", "PRP", "nsubj", 6),
            ("stops", "VERB", "VBZ", "advcl", 2),
            ("the", "DET", "DT", "det", 8),
            ("game", "NOUN", "NN", "dobj", 6),
            (".", "PUNCT", ".", "punct", 2),
        ],
        COORDINATION => &[
            ("She", "PRON", "PRP", "nsubj", 1),
            ("opened", "VERB", "VBD", "ROOT", 1),
            ("the", "DET", "DT", "det", 3),
            ("door", "NOUN", "NN", "dobj", 1),
            ("and", "CCONJ", "CC", "cc", 1),
            ("walked", "VERB", "VBD", "conj", 1),
            ("in", "ADV", "RB", "advmod", 5),
            (".", "PUNCT", ".", "punct", 1),
        ],
        BARE_INFINITIVE => &[
            ("This", "DET", "DT", "det", 2),
            ("mental", "ADJ", "JJ", "amod", 2),
            ("training", "NOUN", "NN", "nsubj", 3),
            ("helps", "VERB", "VBZ", "ROOT", 3),
            ("them", "PRON", "PRP", "nsubj", 5),
            ("stay", "VERB", "VB", "ccomp", 3),
            ("calm", "ADJ", "JJ", "acomp", 5),
            (".", "PUNCT", ".", "punct", 3),
        ],
        PARTICIPLE => &[
            ("I", "PRON", "PRP", "nsubj", 1),
            ("saw", "VERB", "VBD", "ROOT", 1),
            ("him", "PRON", "PRP", "nsubj", 3),
            ("running", "VERB", "VBG", "ccomp", 1),
            (".", "PUNCT", ".", "punct", 1),
        ],
        MODAL_COMPLEMENT => &[
            ("I", "PRON", "PRP", "nsubj", 1),
            ("think", "VERB", "VBP", "ROOT", 1),
            ("he", "PRON", "PRP", "nsubj", 4),
            ("will", "AUX", "MD", "aux", 4),
            ("come", "VERB", "VB", "ccomp", 1),
            ("tomorrow", "NOUN", "NN", "npadvmod", 4),
            (".", "PUNCT", ".", "punct", 1),
        ],
        PASSIVE => &[
            ("The", "DET", "DT", "det", 1),
            ("letter", "NOUN", "NN", "nsubjpass", 3),
            ("was", "AUX", "VBD", "auxpass", 3),
            ("written", "VERB", "VBN", "ROOT", 3),
            ("by", "ADP", "IN", "agent", 3),
            ("Tom", "PROPN", "NNP", "pobj", 4),
            (".", "PUNCT", ".", "punct", 3),
        ],
        FRAGMENT => &[
            ("Goodbye", "INTJ", "UH", "ROOT", 0),
            (",", "PUNCT", ",", "punct", 0),
            ("everyone", "PRON", "NN", "npadvmod", 0),
            (".", "PUNCT", ".", "punct", 0),
        ],
        COPULA_COMPLEMENT => &[
            ("I", "PRON", "PRP", "nsubj", 1),
            ("think", "VERB", "VBP", "ROOT", 1),
            ("he", "PRON", "PRP", "nsubj", 3),
            ("is", "AUX", "VBZ", "ccomp", 1),
            ("tall", "ADJ", "JJ", "acomp", 3),
            (".", "PUNCT", ".", "punct", 1),
        ],
        COPULA_CONJUNCT => &[
            ("She", "PRON", "PRP", "nsubj", 1),
            ("is", "AUX", "VBZ", "ROOT", 1),
            ("tall", "ADJ", "JJ", "acomp", 1),
            ("and", "CCONJ", "CC", "cc", 1),
            ("she", "PRON", "PRP", "nsubj", 5),
            ("is", "AUX", "VBZ", "conj", 1),
            ("strong", "ADJ", "JJ", "acomp", 5),
            (".", "PUNCT", ".", "punct", 1),
        ],
        PASSIVE_COMPLEMENT => &[
            ("He", "PRON", "PRP", "nsubj", 1),
            ("said", "VERB", "VBD", "ROOT", 1),
            ("it", "PRON", "PRP", "nsubjpass", 4),
            ("was", "AUX", "VBD", "auxpass", 4),
            ("stolen", "VERB", "VBN", "ccomp", 1),
            (".", "PUNCT", ".", "punct", 1),
        ],
        _ => &[],
    }
}

fn tokens_field(name: &str, rows: &[TokenRow], column: fn(&TokenRow) -> &'static str) -> Field {
    Field::TokensField {
        name: name.to_string(),
        tokens: rows.iter().map(|t| column(t).to_string()).collect(),
    }
}

fn sentence(rows: &[TokenRow]) -> Sentence {
    let mut edges = Vec::new();
    let mut roots = Vec::new();
    for (idx, &(_, _, _, dep, head)) in rows.iter().enumerate() {
        if head == idx {
            roots.push(idx as u32);
        } else {
            edges.push((head as u32, idx as u32, dep.to_string()));
        }
    }

    Sentence {
        num_tokens: rows.len() as u32,
        fields: vec![
            tokens_field("raw", rows, |t| t.0),
            tokens_field("pos", rows, |t| t.1),
            tokens_field("tag", rows, |t| t.2),
            Field::GraphField {
                name: "dependencies".to_string(),
                edges,
                roots,
            },
        ],
    }
}

fn document(id: usize, sentences: &[&str]) -> Document {
    Document {
        id: format!("fixture_{}", id),
        text: Some(sentences.join(" ")),
        metadata: Vec::new(),
        sentences: sentences.iter().map(|s| sentence(parsed_rows(s))).collect(),
    }
}

pub fn documents() -> Vec<Document> {
    let mut docs: Vec<Document> = ALL_SENTENCES
        .iter()
        .enumerate()
        .map(|(id, &text)| document(id, &[text]))
        .collect();
    docs.push(document(ALL_SENTENCES.len(), &[RELATIVE_WHO, EXPLETIVE]));
    docs
}

pub fn provider() -> PreparsedProvider {
    PreparsedProvider::from_documents(documents(), MODEL).unwrap()
}

pub fn parse(passage: &str) -> ParsedDoc {
    provider().parse(passage).unwrap()
}

#[test]
fn test_fixtures_cover_every_sentence() {
    for text in ALL_SENTENCES {
        assert!(!parsed_rows(text).is_empty(), "{}", text);
    }
    assert!(provider().contains(TWO_SENTENCE_PASSAGE));
}
