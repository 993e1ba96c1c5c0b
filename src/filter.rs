//! Stop-word removal and punctuation trimming.

use std::collections::HashSet;

/// Built-in English stop words used when the caller supplies none.
pub const DEFAULT_STOPWORDS: [&str; 16] = [
    "the", "is", "in", "and", "to", "a", "of", "that", "it", "on", "for", "with", "as", "was",
    "at", "by",
];

/// Lowercase words removed by [`filter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// A set that removes nothing.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build from arbitrary words; each is lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Parse a stop-word list: one word per line, `#` comments and blank
    /// lines ignored.
    pub fn parse(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOPWORDS)
    }
}

/// Characters trimmed from the edges of whitespace-split tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationTable {
    chars: HashSet<char>,
}

impl PunctuationTable {
    pub fn from_chars(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// `token` with leading and trailing table characters removed.
    pub fn trim<'a>(&self, token: &'a str) -> &'a str {
        token.trim_matches(|c: char| self.contains(c))
    }
}

impl Default for PunctuationTable {
    /// The ASCII punctuation marks.
    fn default() -> Self {
        Self {
            chars: (0u8..128)
                .map(char::from)
                .filter(char::is_ascii_punctuation)
                .collect(),
        }
    }
}

/// Drop empty tokens and tokens whose lowercase form is a stop word.
/// Surviving tokens are returned unchanged.
pub fn filter(tokens: Vec<String>, stopwords: &StopwordSet) -> Vec<String> {
    filter_with(tokens, stopwords, None)
}

/// Like [`filter`], first trimming `punctuation` from each token's edges.
///
/// The stop-word test runs on the trimmed token, so "the," goes when "the"
/// is a stop word.
pub fn filter_with(
    tokens: Vec<String>,
    stopwords: &StopwordSet,
    punctuation: Option<&PunctuationTable>,
) -> Vec<String> {
    tokens
        .into_iter()
        .map(|t| match punctuation {
            Some(table) => {
                let trimmed = table.trim(&t);
                if trimmed.len() == t.len() {
                    t
                } else {
                    trimmed.to_string()
                }
            }
            None => t,
        })
        .filter(|t| !t.is_empty() && !is_stopword(stopwords, t))
        .collect()
}

fn is_stopword(stopwords: &StopwordSet, token: &str) -> bool {
    stopwords.contains(token) || stopwords.contains(&token.to_lowercase())
}
