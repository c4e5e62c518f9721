//! Weighted valence scoring against the bundled AFINN-style lexicon.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

static LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, i32>>(raw).expect("valid sentiment lexicon")
});

/// Summed valence of a text plus the words that contributed to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Valence {
    pub score: i32,
    pub positive_words: usize,
    pub negative_words: usize,
}

/// Lexicon weight for a single lower-cased word (0 if unknown).
#[inline]
pub fn word_score(w: &str) -> i32 {
    *LEXICON.get(w).unwrap_or(&0)
}

/// Sums word weights over alphanumeric tokens. Exact-match lookup; every
/// added lexicon word moves the score in its own direction.
pub fn score_text(text: &str) -> Valence {
    let mut v = Valence::default();
    for tok in tokenize(text) {
        let w = word_score(&tok);
        if w > 0 {
            v.positive_words += 1;
        } else if w < 0 {
            v.negative_words += 1;
        }
        v.score += w;
    }
    v
}

/// Alphanumeric tokens, lower-case.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}
