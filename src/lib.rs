//! wordpipe: load a text file, tokenize, lowercase, drop stop words.

pub mod error;
pub mod filter;
pub mod freq;
pub mod loader;
pub mod normalize;
pub mod pipeline;
pub mod tokenize;

pub use error::{Error, Result};
pub use filter::{filter, filter_with, PunctuationTable, StopwordSet};
pub use loader::{load, Document};
pub use normalize::normalize;
pub use pipeline::{Pipeline, PipelineConfig, TokenizerStrategy};
pub use tokenize::{RegexTokenizer, Tokenizer, WhitespaceTokenizer};
