//! Text to token sequence: whitespace split or regex word matching.

use regex::Regex;

use crate::error::{Error, Result};

/// Word characters bounded by word boundaries. Apostrophes split words.
pub const WORD_PATTERN: &str = r"\b\w+\b";

/// Like [`WORD_PATTERN`] but keeps apostrophes inside words ("isn't").
pub const APOSTROPHE_WORD_PATTERN: &str = r"\b[\w']+\b";

/// Converts raw text into tokens in document order.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Split on runs of whitespace. Punctuation stays attached ("day,").
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}

/// Lowercase the text, then collect every pattern match left to right.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    /// Tokenizer using [`WORD_PATTERN`].
    pub fn new() -> Self {
        Self::with_pattern(WORD_PATTERN).expect("word pattern is valid")
    }

    /// Tokenizer using [`APOSTROPHE_WORD_PATTERN`].
    pub fn with_apostrophes() -> Self {
        Self::with_pattern(APOSTROPHE_WORD_PATTERN).expect("apostrophe pattern is valid")
    }

    /// Tokenizer with a caller-supplied pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| Error::PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        self.pattern
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
