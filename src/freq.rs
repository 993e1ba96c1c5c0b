//! Token frequency report.

use std::collections::HashMap;

/// How often one token occurs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TokenCount {
    pub token: String,
    pub count: u32,
}

/// Count each token. Sorted by count descending, then token ascending.
pub fn count(tokens: &[String]) -> Vec<TokenCount> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let mut v: Vec<TokenCount> = counts
        .into_iter()
        .map(|(token, count)| TokenCount {
            token: token.to_string(),
            count,
        })
        .collect();
    v.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
    v
}
