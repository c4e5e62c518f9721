// src/analyze/mod.rs
//! Tone analysis pipeline: tokenize → lexicon scoring → aggregation →
//! (suggestions, keywords). Pure and deterministic; identity, timestamps and
//! history live in `service`.

pub mod aggregate;
pub mod keywords;
pub mod lexicon;
pub mod suggest;
pub mod tokenize;
pub mod valence;

use serde::Serialize;

use crate::analysis::{Sentiment, ToneScores};

pub use aggregate::Aggregate;
pub use keywords::KeywordOptions;
pub use lexicon::{Category, LexiconHits};
pub use tokenize::TextStats;

/// Everything the engine derives from one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneReport {
    pub sentiment: Sentiment,
    pub confidence: f32,
    pub tones: ToneScores,
    pub suggestions: Vec<String>,
    pub keywords: Vec<String>,
    pub word_count: usize,
}

/// Intermediate numbers, exposed for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub word_count: usize,
    pub sentence_count: usize,
    pub question_count: usize,
    pub avg_sentence_len: f32,
    pub hits: LexiconHits,
    pub categories: Vec<(Category, usize)>,
    pub valence: valence::Valence,
    pub aggregate: Aggregate,
    pub fired_rules: Vec<&'static str>,
}

#[derive(Debug, Clone, Default)]
pub struct ToneEngine {
    keywords: KeywordOptions,
}

impl ToneEngine {
    pub fn new(keywords: KeywordOptions) -> Self {
        Self { keywords }
    }

    pub fn run(&self, text: &str) -> ToneReport {
        let stats = tokenize::normalize(text);
        let hits = lexicon::score(text, &stats);
        let agg = aggregate::aggregate(&stats, &hits);

        // Suggestions and keywords are independent of each other.
        let suggestions = suggest::generate(&agg);
        let keywords = keywords::extract(text, &self.keywords);

        ToneReport {
            sentiment: agg.sentiment,
            confidence: agg.confidence,
            tones: agg.scores,
            suggestions,
            keywords,
            word_count: agg.word_count,
        }
    }

    pub fn breakdown(&self, text: &str) -> Breakdown {
        let stats = tokenize::normalize(text);
        let hits = lexicon::score(text, &stats);
        let agg = aggregate::aggregate(&stats, &hits);
        Breakdown {
            word_count: stats.word_count,
            sentence_count: stats.sentence_count,
            question_count: stats.question_count,
            avg_sentence_len: stats.avg_sentence_len(),
            fired_rules: suggest::matching_rules(&agg),
            categories: hits.per_category(),
            valence: valence::score_text(text),
            hits,
            aggregate: agg,
        }
    }
}
