//! Case-folding.

/// Lowercase every token. One output token per input token, same order.
pub fn normalize(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().map(|t| t.to_lowercase()).collect()
}
