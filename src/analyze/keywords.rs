//! Keyword extractor: stop-word filtering, Porter2 stem grouping and
//! frequency ranking.

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};

static STEMMER: Lazy<Stemmer> = Lazy::new(|| Stemmer::create(Algorithm::English));

static STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_LIST.iter().copied().collect());

const STOP_LIST: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "this", "that", "these",
    "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
    "from", "said", "each", "which", "their", "time", "there", "about", "other", "make",
    "what", "know", "just", "first", "into", "over", "think", "also", "your", "work", "life",
    "only", "still", "after", "now", "made", "before", "here", "through", "when", "where",
    "much", "good", "well", "some", "very", "more", "most", "many", "then", "than", "such",
    "like", "want", "dont", "cant", "wont", "didnt", "doesnt", "isnt", "youre", "thats",
    "ive", "hello", "regards", "best",
];

// Typical noun/adjective endings; stands in for a part-of-speech tagger.
const CONTENT_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "ance", "ence", "ful", "ous", "ive",
    "able", "ible", "ical", "less", "ism", "ist",
];

/// Hard ceiling on keywords per analysis, whatever `top_n` says.
pub const MAX_KEYWORDS: usize = 8;

/// Tuning for `extract`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordOptions {
    pub top_n: usize,
    /// Rank likely nouns/adjectives ahead of other words.
    pub pos_boost: bool,
}

impl Default for KeywordOptions {
    fn default() -> Self {
        Self {
            top_n: MAX_KEYWORDS,
            pos_boost: false,
        }
    }
}

pub fn is_stop_word(w: &str) -> bool {
    STOP_WORDS.contains(w)
}

pub fn looks_like_content_word(w: &str) -> bool {
    CONTENT_SUFFIXES
        .iter()
        .any(|s| w.len() > s.len() + 2 && w.ends_with(s))
}

#[derive(Debug)]
struct Bucket {
    display: String,
    count: usize,
    important: bool,
}

/// Ranked keywords, most relevant first. Ties keep first-occurrence order.
pub fn extract(text: &str, opts: &KeywordOptions) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    let mut buckets: Vec<Bucket> = Vec::new();
    let mut by_stem: HashMap<String, usize> = HashMap::new();

    for word in cleaned.split_whitespace() {
        if word.chars().count() <= 3
            || !word.chars().all(char::is_alphabetic)
            || is_stop_word(word)
        {
            continue;
        }
        let stem = STEMMER.stem(word).into_owned();
        match by_stem.get(&stem) {
            Some(&i) => {
                let b = &mut buckets[i];
                b.count += 1;
                if word.len() < b.display.len() {
                    b.display = word.to_string();
                }
            }
            None => {
                by_stem.insert(stem, buckets.len());
                buckets.push(Bucket {
                    display: word.to_string(),
                    count: 1,
                    important: false,
                });
            }
        }
    }

    if opts.pos_boost {
        for b in &mut buckets {
            b.important = looks_like_content_word(&b.display);
        }
    }

    // stable: equal keys stay in first-occurrence order
    buckets.sort_by(|a, b| b.important.cmp(&a.important).then(b.count.cmp(&a.count)));
    buckets
        .into_iter()
        .take(opts.top_n.min(MAX_KEYWORDS))
        .map(|b| b.display)
        .collect()
}
