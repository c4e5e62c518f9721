//! Suggestion generator: a fixed, ordered rule table over the aggregate.
//!
//! Conditions inside one rule are AND-ed:
//! - `sentiment`: overall sentiment must equal the given label
//! - `above`:     score of the tone must be strictly greater than the value
//! - `at_least`:  score of the tone must be greater than or equal to the value
//! - `below`:     score of the tone must be strictly less than the value
//!
//! Every matching rule appends all of its strings; there is no early exit.
//! When nothing matches the single default message is returned.

use super::aggregate::Aggregate;
use crate::analysis::{Sentiment, Tone};

pub const DEFAULT_SUGGESTION: &str =
    "Your email has a balanced tone appropriate for professional communication";

#[derive(Debug, Clone, Copy)]
pub struct When {
    pub sentiment: Option<Sentiment>,
    pub above: Option<(Tone, u8)>,
    pub at_least: Option<(Tone, u8)>,
    pub below: Option<(Tone, u8)>,
}

impl When {
    pub const ANY: When = When {
        sentiment: None,
        above: None,
        at_least: None,
        below: None,
    };
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub when: When,
    pub then: &'static [&'static str],
}

pub static RULES: &[Rule] = &[
    Rule {
        name: "negative-sentiment",
        when: When {
            sentiment: Some(Sentiment::Negative),
            ..When::ANY
        },
        then: &["Consider using more positive language to improve the tone"],
    },
    Rule {
        name: "strong-negativity",
        when: When {
            above: Some((Tone::Negative, 50)),
            ..When::ANY
        },
        then: &[
            "Consider revising negative language to maintain professional relationships",
            "Try to frame concerns as opportunities for improvement",
        ],
    },
    Rule {
        name: "high-anger",
        when: When {
            above: Some((Tone::Angry, 70)),
            ..When::ANY
        },
        then: &[
            "High emotional intensity detected. Consider cooling down before sending",
            "Focus on specific actions rather than emotional responses",
        ],
    },
    Rule {
        name: "warm-positive",
        when: When {
            sentiment: Some(Sentiment::Positive),
            at_least: Some((Tone::Positive, 70)),
            ..When::ANY
        },
        then: &["Excellent positive tone! This email should be well-received"],
    },
    Rule {
        name: "high-enthusiasm",
        when: When {
            above: Some((Tone::Enthusiastic, 80)),
            ..When::ANY
        },
        then: &["Great enthusiasm! Ensure the energy matches your audience"],
    },
    Rule {
        name: "too-informal",
        when: When {
            below: Some((Tone::Formal, 30)),
            ..When::ANY
        },
        then: &[
            "Consider using more formal language for professional communication",
            "Add proper greetings and closings to improve professionalism",
        ],
    },
    Rule {
        name: "very-formal",
        when: When {
            above: Some((Tone::Formal, 85)),
            ..When::ANY
        },
        then: &["Very formal tone detected. Consider adding warmth if appropriate for the relationship"],
    },
    Rule {
        name: "tentative",
        when: When {
            above: Some((Tone::Tentative, 70)),
            ..When::ANY
        },
        then: &[
            "Consider using more decisive language to convey confidence",
            "Replace uncertain phrases with more assertive alternatives",
        ],
    },
    Rule {
        name: "overconfident",
        when: When {
            above: Some((Tone::Confident, 85)),
            ..When::ANY
        },
        then: &["Strong confident tone. Ensure it doesn't come across as arrogant"],
    },
    Rule {
        name: "flat-neutral",
        when: When {
            sentiment: Some(Sentiment::Neutral),
            at_least: Some((Tone::Neutral, 40)),
            ..When::ANY
        },
        then: &["Consider adding more emotional connection to engage your reader"],
    },
];

fn matches_when(agg: &Aggregate, w: &When) -> bool {
    if let Some(s) = w.sentiment {
        if agg.sentiment != s {
            return false;
        }
    }
    if let Some((t, v)) = w.above {
        if agg.scores.get(t) <= v {
            return false;
        }
    }
    if let Some((t, v)) = w.at_least {
        if agg.scores.get(t) < v {
            return false;
        }
    }
    if let Some((t, v)) = w.below {
        if agg.scores.get(t) >= v {
            return false;
        }
    }
    true
}

/// Names of the rules that fire for `agg`, in table order.
pub fn matching_rules(agg: &Aggregate) -> Vec<&'static str> {
    if agg.word_count == 0 {
        return Vec::new();
    }
    RULES
        .iter()
        .filter(|r| matches_when(agg, &r.when))
        .map(|r| r.name)
        .collect()
}

pub fn generate(agg: &Aggregate) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    if agg.word_count > 0 {
        for rule in RULES {
            if matches_when(agg, &rule.when) {
                out.extend(rule.then.iter().map(|s| s.to_string()));
            }
        }
    }
    if out.is_empty() {
        out.push(DEFAULT_SUGGESTION.to_string());
    }
    out
}
