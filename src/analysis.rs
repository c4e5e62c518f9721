//! analysis.rs: Result shapes produced by the tone engine.
//!
//! `ToneAnalysis` is what callers (HTTP API, CLI, UI exporters) render. It is
//! built once per analysis and never mutated afterwards; the service keeps a
//! copy in its history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse three-way classification derived from the weighted valence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of tone dimensions reported for every email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
    Angry,
    Enthusiastic,
    Formal,
    Informal,
    Analytical,
    Confident,
    Tentative,
}

impl Tone {
    pub const ALL: [Tone; 10] = [
        Tone::Positive,
        Tone::Negative,
        Tone::Neutral,
        Tone::Angry,
        Tone::Enthusiastic,
        Tone::Formal,
        Tone::Informal,
        Tone::Analytical,
        Tone::Confident,
        Tone::Tentative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
            Tone::Neutral => "neutral",
            Tone::Angry => "angry",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Formal => "formal",
            Tone::Informal => "informal",
            Tone::Analytical => "analytical",
            Tone::Confident => "confident",
            Tone::Tentative => "tentative",
        }
    }
}

/// Percentages in `[0, 100]` for each tone.
///
/// `formal + informal == 100` holds for every value produced by the engine.
/// The positive/negative/neutral triple is related but not forced to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToneScores {
    pub positive: u8,
    pub negative: u8,
    pub neutral: u8,
    pub angry: u8,
    pub enthusiastic: u8,
    pub formal: u8,
    pub informal: u8,
    pub analytical: u8,
    pub confident: u8,
    pub tentative: u8,
}

impl ToneScores {
    /// Scores reported when there is no text to analyze.
    pub const fn floors() -> Self {
        Self {
            positive: 10,
            negative: 5,
            neutral: 10,
            angry: 0,
            enthusiastic: 0,
            formal: 0,
            informal: 100,
            analytical: 0,
            confident: 0,
            tentative: 0,
        }
    }

    pub fn get(&self, tone: Tone) -> u8 {
        match tone {
            Tone::Positive => self.positive,
            Tone::Negative => self.negative,
            Tone::Neutral => self.neutral,
            Tone::Angry => self.angry,
            Tone::Enthusiastic => self.enthusiastic,
            Tone::Formal => self.formal,
            Tone::Informal => self.informal,
            Tone::Analytical => self.analytical,
            Tone::Confident => self.confident,
            Tone::Tentative => self.tentative,
        }
    }

    /// `(tone, score)` pairs in `Tone::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Tone, u8)> + '_ {
        Tone::ALL.iter().map(move |t| (*t, self.get(*t)))
    }

    /// Highest scoring tone (first one wins ties).
    pub fn dominant(&self) -> Tone {
        let mut best = (Tone::Positive, self.positive);
        for (tone, score) in self.iter() {
            if score > best.1 {
                best = (tone, score);
            }
        }
        best.0
    }
}

/// One completed analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneAnalysis {
    /// Opaque identifier, unique within the process.
    pub id: String,
    /// The analyzed text, kept for display and export.
    pub email_content: String,
    pub timestamp: DateTime<Utc>,
    pub overall_sentiment: Sentiment,
    /// Self-reported reliability in `[0.5, 0.95]`.
    pub confidence: f32,
    pub tones: ToneScores,
    /// Advisory strings in rule-evaluation order.
    pub suggestions: Vec<String>,
    /// Up to eight keywords, most relevant first.
    pub keywords: Vec<String>,
}

/// Tagged success/failure envelope handed to collaborators.
///
/// Serialized as `{ "success": true, "data": ... }` or
/// `{ "success": false, "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(d)) => Ok(d),
            _ => Err(self
                .error
                .unwrap_or_else(|| "analysis produced no data".to_string())),
        }
    }
}

/// Outcome of `ToneService::analyze`.
pub type AnalysisResponse = Envelope<ToneAnalysis>;

/// Unexpected failure inside the pipeline. Empty or odd input is never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    Internal(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Internal(msg) => write!(f, "internal analysis error: {msg}"),
        }
    }
}

impl std::error::Error for AnalysisError {}
