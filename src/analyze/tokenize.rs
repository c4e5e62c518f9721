//! Tokenizer/normalizer: lower-cased whitespace tokens plus sentence statistics.

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of non-terminator characters followed by its terminators (if any).
static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]*").expect("sentence regex"));

/// Token sequence and counts for one email.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStats {
    /// Lower-cased, whitespace-delimited tokens (punctuation kept).
    pub tokens: Vec<String>,
    pub word_count: usize,
    pub sentence_count: usize,
    /// Sentences terminated by `?`.
    pub question_count: usize,
}

impl TextStats {
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Words per sentence; sentence count floors at 1.
    pub fn avg_sentence_len(&self) -> f32 {
        if self.word_count == 0 {
            return 0.0;
        }
        self.word_count as f32 / self.sentence_count.max(1) as f32
    }
}

pub fn normalize(text: &str) -> TextStats {
    let tokens: Vec<String> = text
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut sentence_count = 0;
    let mut question_count = 0;
    for m in SENTENCE_RE.find_iter(text) {
        let s = m.as_str();
        let body = s.trim_end_matches(&['.', '!', '?'][..]);
        if !body.chars().any(char::is_alphanumeric) {
            continue;
        }
        sentence_count += 1;
        if s[body.len()..].contains('?') {
            question_count += 1;
        }
    }

    TextStats {
        word_count: tokens.len(),
        tokens,
        sentence_count,
        question_count,
    }
}
