//! Tone aggregator: raw lexicon counts + text statistics → bounded tone
//! percentages, overall sentiment and a deterministic confidence.
//!
//! Densities are `hits / words`. Each tone has its own multiplier; anger uses
//! the steepest one so it saturates first. Internal math is `f32`, outputs are
//! rounded once at the end.

use serde::Serialize;

use super::lexicon::LexiconHits;
use super::tokenize::TextStats;
use crate::analysis::{Sentiment, ToneScores};

// Valence score beyond which the email leans positive/negative.
pub const SENTIMENT_THRESHOLD: i32 = 2;

const POSITIVE_BASE: f32 = 50.0;
const POSITIVE_PER_POINT: f32 = 8.0;
const NEGATIVE_BASE: f32 = 20.0;
const NEGATIVE_PER_POINT: f32 = 6.0;
const POLARITY_DENSITY: f32 = 200.0;
const NEUTRAL_BONUS: f32 = 20.0;

const ANGER_DENSITY: f32 = 600.0;
const ENTHUSIASM_DENSITY: f32 = 500.0;
const ANALYTICAL_BASE: f32 = 30.0;
const ANALYTICAL_DENSITY: f32 = 400.0;
const CONFIDENT_BASE: f32 = 50.0;
const CONFIDENT_DENSITY: f32 = 300.0;
const TENTATIVE_BASE: f32 = 30.0;
const TENTATIVE_DENSITY: f32 = 400.0;

const FORMAL_BASE: f32 = 50.0;
const FORMAL_PER_PHRASE: f32 = 10.0;
const INFORMAL_PER_PHRASE: f32 = 8.0;
const LONG_SENTENCE_BONUS: f32 = 15.0;
const SHORT_SENTENCE_PENALTY: f32 = 10.0;
const CONTRACTION_PENALTY: f32 = 5.0;

/// Everything downstream stages need from the aggregation step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    pub scores: ToneScores,
    pub sentiment: Sentiment,
    pub confidence: f32,
    pub word_count: usize,
}

pub fn classify(weighted_score: i32) -> Sentiment {
    if weighted_score > SENTIMENT_THRESHOLD {
        Sentiment::Positive
    } else if weighted_score < -SENTIMENT_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

pub fn aggregate(stats: &TextStats, hits: &LexiconHits) -> Aggregate {
    if stats.is_empty() {
        return Aggregate {
            scores: ToneScores::floors(),
            sentiment: Sentiment::Neutral,
            confidence: confidence(stats),
            word_count: 0,
        };
    }

    let words = stats.word_count.max(1) as f32;
    let density = |n: usize| n as f32 / words;
    let score = hits.weighted_score as f32;

    let mut positive = (POSITIVE_BASE
        + score * POSITIVE_PER_POINT
        + density(hits.positive) * POLARITY_DENSITY)
        .clamp(10.0, 90.0);
    let mut negative = (NEGATIVE_BASE - score * NEGATIVE_PER_POINT
        + density(hits.negative) * POLARITY_DENSITY)
        .clamp(5.0, 85.0);
    let mut neutral = (100.0 - positive - negative + NEUTRAL_BONUS).clamp(10.0, 80.0);

    let total = positive + negative + neutral;
    if total > 100.0 {
        let factor = 100.0 / total;
        positive *= factor;
        negative *= factor;
        neutral *= factor;
    }

    let formal = round_pct(formality(stats, hits));
    let questions = hits.questions as f32;

    let scores = ToneScores {
        positive: round_pct(positive),
        negative: round_pct(negative),
        neutral: round_pct(neutral),
        angry: round_pct(density(hits.angry) * ANGER_DENSITY),
        enthusiastic: round_pct(density(hits.enthusiastic) * ENTHUSIASM_DENSITY),
        formal,
        informal: 100 - formal,
        analytical: round_pct(ANALYTICAL_BASE + density(hits.analytical) * ANALYTICAL_DENSITY),
        confident: round_pct(
            CONFIDENT_BASE + density(hits.confident) * CONFIDENT_DENSITY - questions * 5.0,
        ),
        tentative: round_pct(
            TENTATIVE_BASE + density(hits.tentative) * TENTATIVE_DENSITY + questions * 10.0,
        ),
    };

    Aggregate {
        scores,
        sentiment: classify(hits.weighted_score),
        confidence: confidence(stats),
        word_count: stats.word_count,
    }
}

fn formality(stats: &TextStats, hits: &LexiconHits) -> f32 {
    let avg = stats.avg_sentence_len();
    let mut f = FORMAL_BASE + hits.formal_phrases as f32 * FORMAL_PER_PHRASE
        - hits.informal_phrases as f32 * INFORMAL_PER_PHRASE;
    if avg > 15.0 {
        f += LONG_SENTENCE_BONUS;
    }
    if avg < 8.0 {
        f -= SHORT_SENTENCE_PENALTY;
    }
    f - hits.contractions as f32 * CONTRACTION_PENALTY
}

/// Length and sentence-structure heuristic, clamped to `[0.5, 0.95]`.
pub fn confidence(stats: &TextStats) -> f32 {
    let wc = stats.word_count;
    let mut c: f32 = 0.6;
    if wc > 100 {
        c += 0.2;
    }
    if wc > 200 {
        c += 0.1;
    }
    if stats.sentence_count > 0 {
        let avg = stats.avg_sentence_len();
        if (8.0..=25.0).contains(&avg) {
            c += 0.1;
        }
    }
    if wc < 20 {
        c -= 0.2;
    }
    c.clamp(0.5, 0.95)
}

fn round_pct(x: f32) -> u8 {
    x.clamp(0.0, 100.0).round() as u8
}
