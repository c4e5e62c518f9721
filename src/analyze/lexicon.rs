//! Lexicon scorer: raw hit counts per tone category.
//!
//! Word categories use substring containment on whitespace tokens, so
//! "thank" also counts "thanks," and "thankful". Formality categories are
//! phrase lists matched at word boundaries; each phrase counts once.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::tokenize::TextStats;
use super::valence;

/// Lexicon categories. Formal/Informal are phrase lists, the rest word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Positive,
    Negative,
    Angry,
    Formal,
    Informal,
    Confident,
    Tentative,
    Enthusiastic,
    Analytical,
}

const POSITIVE: &[&str] = &[
    "thank", "great", "excellent", "appreciat", "wonderful", "amazing", "fantastic", "love",
    "pleased", "happy", "glad", "delight", "grateful", "gratitude",
];

const NEGATIVE: &[&str] = &[
    "terrible", "awful", "disappoint", "angry", "frustrat", "unacceptable", "complaint",
    "problem", "issue", "wrong", "poor", "damaged",
];

const ANGRY: &[&str] = &[
    "furious", "outraged", "disgust", "livid", "infuriat", "demand", "immediately",
    "unacceptable", "terrible", "awful", "angry", "frustrated", "disappointed",
];

const ENTHUSIASTIC: &[&str] = &[
    "amazing", "fantastic", "excellent", "wonderful", "outstanding", "brilliant", "incredibl",
    "awesome", "excited", "thrilled",
];

const ANALYTICAL: &[&str] = &[
    "analy", "consider", "evaluat", "assess", "examin", "therefore", "however", "consequently",
    "furthermore", "moreover",
];

const CONFIDENT: &[&str] = &[
    "will", "definitely", "certainly", "absolutely", "confident", "sure", "guarantee",
    "promise", "commit", "determined",
];

const TENTATIVE: &[&str] = &[
    "maybe", "perhaps", "possibly", "might", "could", "uncertain", "unsure", "think",
    "believe", "seem",
];

const FORMAL_PHRASES: &[&str] = &[
    "dear", "sincerely", "regards", "respectfully", "kindly", "please", "thank you",
    "appreciate", "professional", "formal", "official",
];

const INFORMAL_PHRASES: &[&str] = &[
    "hey", "hi", "sup", "yeah", "ok", "cool", "awesome", "thanks", "cheers", "catch up",
    "hang out", "stuff", "things",
];

static FORMAL_RE: Lazy<Vec<Regex>> = Lazy::new(|| compile_phrases(Category::Formal.entries()));
static INFORMAL_RE: Lazy<Vec<Regex>> =
    Lazy::new(|| compile_phrases(Category::Informal.entries()));

static CONTRACTION_RE: Lazy<Regex> = Lazy::new(|| {
    // Bare 's is usually a possessive; only pronoun/adverb heads count.
    Regex::new(
        r"\b(?:[a-z]+['’](?:t|re|ve|ll|d|m)|(?:it|that|there|here|what|who|where|he|she|let)['’]s)\b",
    )
    .expect("contraction regex")
});

fn compile_phrases(phrases: &[&str]) -> Vec<Regex> {
    phrases
        .iter()
        .map(|p| {
            let pat = format!(r"\b{}\b", regex::escape(p).replace(' ', r"\s+"));
            Regex::new(&pat).expect("phrase regex")
        })
        .collect()
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Positive,
        Category::Negative,
        Category::Angry,
        Category::Formal,
        Category::Informal,
        Category::Confident,
        Category::Tentative,
        Category::Enthusiastic,
        Category::Analytical,
    ];

    /// Static entries for this category.
    pub fn entries(&self) -> &'static [&'static str] {
        match self {
            Category::Positive => POSITIVE,
            Category::Negative => NEGATIVE,
            Category::Angry => ANGRY,
            Category::Formal => FORMAL_PHRASES,
            Category::Informal => INFORMAL_PHRASES,
            Category::Confident => CONFIDENT,
            Category::Tentative => TENTATIVE,
            Category::Enthusiastic => ENTHUSIASTIC,
            Category::Analytical => ANALYTICAL,
        }
    }
}

/// Raw counts consumed by the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LexiconHits {
    pub positive: usize,
    pub negative: usize,
    pub angry: usize,
    pub enthusiastic: usize,
    pub analytical: usize,
    pub confident: usize,
    pub tentative: usize,
    /// Distinct formal indicator phrases present.
    pub formal_phrases: usize,
    /// Distinct informal indicator phrases present.
    pub informal_phrases: usize,
    pub contractions: usize,
    pub questions: usize,
    /// Summed valence weights (see `valence`).
    pub weighted_score: i32,
}

impl LexiconHits {
    /// `(category, count)` for every category in `Category::ALL` order.
    pub fn per_category(&self) -> Vec<(Category, usize)> {
        Category::ALL.iter().map(|c| (*c, self.get(*c))).collect()
    }

    pub fn get(&self, c: Category) -> usize {
        match c {
            Category::Positive => self.positive,
            Category::Negative => self.negative,
            Category::Angry => self.angry,
            Category::Formal => self.formal_phrases,
            Category::Informal => self.informal_phrases,
            Category::Confident => self.confident,
            Category::Tentative => self.tentative,
            Category::Enthusiastic => self.enthusiastic,
            Category::Analytical => self.analytical,
        }
    }
}

/// Number of tokens containing at least one of `entries`.
pub fn count_containing(tokens: &[String], entries: &[&str]) -> usize {
    tokens
        .iter()
        .filter(|t| entries.iter().any(|e| t.contains(e)))
        .count()
}

fn count_phrases(text: &str, phrases: &[Regex]) -> usize {
    phrases.iter().filter(|re| re.is_match(text)).count()
}

/// Pure function of the tokenized text and the static lexicons.
pub fn score(text: &str, stats: &TextStats) -> LexiconHits {
    let lower = text.to_lowercase();
    let words = |c: Category| count_containing(&stats.tokens, c.entries());

    LexiconHits {
        positive: words(Category::Positive),
        negative: words(Category::Negative),
        angry: words(Category::Angry),
        enthusiastic: words(Category::Enthusiastic),
        analytical: words(Category::Analytical),
        confident: words(Category::Confident),
        tentative: words(Category::Tentative),
        formal_phrases: count_phrases(&lower, &FORMAL_RE),
        informal_phrases: count_phrases(&lower, &INFORMAL_RE),
        contractions: CONTRACTION_RE.find_iter(&lower).count(),
        questions: stats.question_count,
        weighted_score: valence::score_text(text).score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::tokenize::normalize;

    fn hits(text: &str) -> LexiconHits {
        score(text, &normalize(text))
    }

    #[test]
    fn substring_match_catches_inflections() {
        let h = hits("Thanks! I am thankful and very appreciative.");
        assert_eq!(h.positive, 3);
    }

    #[test]
    fn each_token_counts_once_per_category() {
        // "unacceptable" sits in both negative and angry lists
        let h = hits("unacceptable unacceptable");
        assert_eq!(h.negative, 2);
        assert_eq!(h.angry, 2);
    }

    #[test]
    fn formality_phrases_respect_word_boundaries() {
        // "this" and "things" must not trigger "hi"; "things" itself is informal
        let h = hits("Dear team, please find this attached. Thank you. Sincerely, Ann");
        assert_eq!(h.formal_phrases, 4);
        assert_eq!(h.informal_phrases, 0);

        let h = hits("hey, cool stuff! catch   up later?");
        assert_eq!(h.informal_phrases, 4);
        assert_eq!(h.questions, 1);
    }

    #[test]
    fn counts_contractions() {
        let h = hits("I'm sure we'll manage, don't worry. It’s fine.");
        assert_eq!(h.contractions, 4);
    }

    #[test]
    fn possessives_are_not_contractions() {
        let h = hits("Dear Sir, the company's report and the client's invoice are attached.");
        assert_eq!(h.contractions, 0);

        let h = hits("That's fine, let's go; it's what's left.");
        assert_eq!(h.contractions, 4);
    }

    #[test]
    fn per_category_reports_every_category() {
        let h = hits("unacceptable, please fix this. Maybe?");
        let per = h.per_category();
        assert_eq!(per.len(), Category::ALL.len());
        assert!(per.contains(&(Category::Angry, 1)));
        assert!(per.contains(&(Category::Formal, 1)));
        assert!(per.contains(&(Category::Tentative, 1)));
        for c in Category::ALL {
            assert!(!c.entries().is_empty(), "{c:?}");
        }
    }
}
