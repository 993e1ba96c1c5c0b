//! Loader → Tokenizer → Normalizer → Filter, configured by [`PipelineConfig`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filter::{self, PunctuationTable, StopwordSet};
use crate::loader;
use crate::normalize::normalize;
use crate::tokenize::{RegexTokenizer, Tokenizer, WhitespaceTokenizer};

/// Which tokenizer the pipeline runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TokenizerStrategy {
    /// Split on whitespace, then trim punctuation.
    #[default]
    Whitespace,
    /// Match `\b\w+\b` on lowercased text.
    Regex,
    /// Match `\b[\w']+\b` on lowercased text.
    RegexApostrophe,
}

/// Caller-supplied pipeline settings. Every field has a default, so a
/// config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub tokenizer: TokenizerStrategy,
    /// Replaces the regex strategies' pattern. Ignored for whitespace.
    pub pattern: Option<String>,
    /// `None` means the built-in English set.
    pub stopwords: Option<Vec<String>>,
    /// Only applies to the whitespace strategy. When off, punctuation-only
    /// tokens such as "--" are kept.
    pub strip_punctuation: bool,
    /// `None` means ASCII punctuation.
    pub punctuation: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerStrategy::default(),
            pattern: None,
            stopwords: None,
            strip_punctuation: true,
            punctuation: None,
        }
    }
}

impl PipelineConfig {
    /// Read a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = loader::load(path)?;
        serde_json::from_str(&json).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A configured pipeline. Holds no state between runs.
pub struct Pipeline {
    tokenizer: Box<dyn Tokenizer>,
    stopwords: StopwordSet,
    punctuation: Option<PunctuationTable>,
}

impl Pipeline {
    /// Build the stages `config` selects. Fails only on a bad pattern.
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        let tokenizer: Box<dyn Tokenizer> = match (config.tokenizer, &config.pattern) {
            (TokenizerStrategy::Whitespace, pattern) => {
                if pattern.is_some() {
                    log::warn!("pattern is ignored by the whitespace tokenizer");
                }
                Box::new(WhitespaceTokenizer)
            }
            (_, Some(pattern)) => Box::new(RegexTokenizer::with_pattern(pattern)?),
            (TokenizerStrategy::Regex, None) => Box::new(RegexTokenizer::new()),
            (TokenizerStrategy::RegexApostrophe, None) => {
                Box::new(RegexTokenizer::with_apostrophes())
            }
        };

        let stopwords = match &config.stopwords {
            Some(words) => StopwordSet::from_words(words),
            None => StopwordSet::default(),
        };

        // Regex tokens never carry punctuation, so trimming is skipped there.
        let punctuation = (config.tokenizer == TokenizerStrategy::Whitespace
            && config.strip_punctuation)
            .then(|| match &config.punctuation {
                Some(chars) => PunctuationTable::from_chars(chars),
                None => PunctuationTable::default(),
            });

        Ok(Self {
            tokenizer,
            stopwords,
            punctuation,
        })
    }

    /// Tokenize, lowercase and filter `text`.
    pub fn run_text(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(text);
        log::debug!("tokenized {} tokens", tokens.len());
        let tokens = normalize(tokens);
        let tokens = filter::filter_with(tokens, &self.stopwords, self.punctuation.as_ref());
        log::debug!("{} tokens after filtering", tokens.len());
        tokens
    }

    /// Load the file at `path` and run it through the pipeline.
    pub fn run_file(&self, path: &Path) -> Result<Vec<String>> {
        let document = loader::load(path)?;
        Ok(self.run_text(&document))
    }
}
