//! Label, tag and default constants shared across the engine

pub const DEP_ROOT: &str = "ROOT";
pub const DEP_CONJ: &str = "conj";
pub const DEP_CCOMP: &str = "ccomp";
pub const DEP_ADVCL: &str = "advcl";
pub const DEP_EXPL: &str = "expl";
pub const DEP_ATTR: &str = "attr";
pub const DEP_RELCL: &str = "relcl";

/// Subject relations, in both ClearNLP and Universal Dependencies spelling
pub const SUBJECT_DEPS: [&str; 6] = [
    "nsubj", "nsubjpass", "nsubj:pass", "csubj", "csubjpass", "csubj:pass",
];

/// Auxiliary relations that turn a non-finite verb into a full clause
pub const AUXILIARY_DEPS: [&str; 3] = ["aux", "aux:pass", "auxpass"];

/// Clausal dependents that may carry their own root
pub const CLAUSAL_DEPS: [&str; 2] = [DEP_CCOMP, DEP_ADVCL];

pub const POS_VERB: &str = "VERB";

/// Tensed verb tags (past, non-3sg present, 3sg present)
pub const FINITE_TAGS: [&str; 3] = ["VBD", "VBP", "VBZ"];

/// Base form, gerund/present participle, past participle
pub const NON_FINITE_TAGS: [&str; 3] = ["VB", "VBG", "VBN"];

pub const DEFAULT_MODEL: &str = "en_core_web_sm";
pub const DEFAULT_MAX_PASSAGE_CHARS: usize = 2000;

/// Token fields read from parsed documents
pub const FIELD_RAW: &str = "raw";
pub const FIELD_WORD: &str = "word";
pub const FIELD_POS: &str = "pos";
pub const FIELD_TAG: &str = "tag";
pub const FIELD_DEPENDENCIES: &str = "dependencies";
