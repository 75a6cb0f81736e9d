pub mod mode;
pub mod sentence;
pub mod token;

pub use mode::Mode;
pub use sentence::{AnalysisMeta, AnalysisResult, AnswerKey, Sentence};
pub use token::Token;
