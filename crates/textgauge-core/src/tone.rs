//! Lexicon-based tone scoring.
//!
//! Polarity is the mean weight of the sentiment-bearing words, so it always
//! lies in `[-1.0, 1.0]`. A negator among the three words before a sentiment
//! word (within the same sentence) flips that word's sign: "not good" scores
//! like "bad". Text without any sentiment word is neutral (`0.0`).
//!
//! # Truncation
//!
//! Only words that end within the first [`DEFAULT_TONE_CHAR_CAP`] characters
//! are scored. This bounds the cost of tone scoring on long documents at the
//! price of ignoring sentiment later in the text. The cap is configurable and
//! [`ToneScore::truncated`] reports when words were left out.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::sentiment::{NEGATORS, SENTIMENT_WEIGHTS};
use crate::tokens::Tokens;

/// Default number of leading characters considered by tone scoring.
pub const DEFAULT_TONE_CHAR_CAP: usize = 500;

/// How many preceding words a negator reaches.
pub const NEGATION_WINDOW: usize = 3;

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| Lexicon {
    weights: SENTIMENT_WEIGHTS
        .iter()
        .map(|(word, weight)| ((*word).to_string(), *weight))
        .collect(),
    negators: NEGATORS.iter().map(|w| (*w).to_string()).collect(),
});

/// Sentiment word weights and negators.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    weights: HashMap<String, f64>,
    negators: HashSet<String>,
}

impl Lexicon {
    /// The bundled English lexicon, built once per process.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// A copy of the bundled lexicon with extra or replaced word weights.
    ///
    /// Keys are lower-cased; weights are clamped to `[-1.0, 1.0]`. A weight of
    /// `0.0` removes the word.
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a f64)>,
    {
        let mut lexicon = Self::builtin().clone();
        for (word, weight) in overrides {
            let word = word.to_lowercase();
            if *weight == 0.0 || weight.is_nan() {
                lexicon.weights.remove(&word);
            } else {
                lexicon.weights.insert(word, weight.clamp(-1.0, 1.0));
            }
        }
        lexicon
    }

    /// Weight of a lower-cased word, if it carries sentiment.
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    /// Whether a lower-cased word negates what follows.
    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word)
    }

    /// Number of sentiment-bearing words.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the lexicon has no sentiment words.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Result of tone scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToneScore {
    /// Mean sentiment weight in `[-1.0, 1.0]`.
    pub polarity: f64,
    /// Words that contributed a sentiment weight.
    pub sentiment_words: usize,
    /// Words considered (those inside the character cap).
    pub scored_words: usize,
    /// Whether words beyond the character cap were ignored.
    pub truncated: bool,
}

/// Score the tone of tokenized text.
#[tracing::instrument(skip_all, fields(words = tokens.word_count(), char_cap = char_cap))]
pub fn score_tone(tokens: &Tokens, lexicon: &Lexicon, char_cap: usize) -> ToneScore {
    let mut total = 0.0;
    let mut score = ToneScore::default();

    for sentence in &tokens.sentences {
        for (idx, word) in sentence.words.iter().enumerate() {
            if word.char_end > char_cap {
                score.truncated = true;
                break;
            }
            score.scored_words += 1;

            let Some(weight) = lexicon.weight(&word.lower) else {
                continue;
            };
            let window = &sentence.words[idx.saturating_sub(NEGATION_WINDOW)..idx];
            let negated = window.iter().any(|w| lexicon.is_negator(&w.lower));

            total += if negated { -weight } else { weight };
            score.sentiment_words += 1;
        }
        if score.truncated {
            break;
        }
    }

    if score.sentiment_words > 0 {
        score.polarity = (total / score.sentiment_words as f64).clamp(-1.0, 1.0);
    }

    tracing::debug!(
        polarity = score.polarity,
        sentiment_words = score.sentiment_words,
        truncated = score.truncated,
        "tone scored"
    );
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::tokenize;

    fn polarity(text: &str) -> f64 {
        score_tone(&tokenize(text), Lexicon::builtin(), DEFAULT_TONE_CHAR_CAP).polarity
    }

    #[test]
    fn positive_text_is_positive() {
        assert!(polarity("This is a wonderful and amazing day.") > 0.6);
    }

    #[test]
    fn negative_text_is_negative() {
        assert!(polarity("The service was terrible and the food was awful.") < -0.6);
    }

    #[test]
    fn no_sentiment_words_is_neutral() {
        assert_eq!(polarity("The cat sat on the mat."), 0.0);
    }

    #[test]
    fn negation_flips_sign() {
        assert!(polarity("This is good.") > 0.0);
        assert!(polarity("This is not good.") < 0.0);
        assert!(polarity("It is not very good.") < 0.0);
    }

    #[test]
    fn negation_with_typographic_apostrophe() {
        let straight = polarity("This isn't good.");
        assert!(straight < 0.0);
        assert_eq!(polarity("This isn\u{2019}t good."), straight);
    }

    #[test]
    fn negation_window_is_three_words() {
        // "not" is four words before "good"
        assert!(polarity("It is not that it was all good.") > 0.0);
    }

    #[test]
    fn negation_does_not_cross_sentences() {
        assert!(polarity("I said no. Good work.") > 0.0);
    }

    #[test]
    fn polarity_is_mean_of_weights() {
        let expected = (0.5 - 0.5) / 2.0;
        assert!((polarity("Good and bad.") - expected).abs() < 1e-9);
    }

    #[test]
    fn text_beyond_cap_is_ignored() {
        let padding = "The cat sat on the mat. ".repeat(30);
        let text = format!("{padding}Everything was terrible.");
        let score = score_tone(&tokenize(&text), Lexicon::builtin(), DEFAULT_TONE_CHAR_CAP);
        assert!(score.truncated);
        assert_eq!(score.polarity, 0.0);

        let uncapped = score_tone(&tokenize(&text), Lexicon::builtin(), usize::MAX);
        assert!(!uncapped.truncated);
        assert!(uncapped.polarity < 0.0);
    }

    #[test]
    fn overrides_replace_and_remove_words() {
        let overrides: HashMap<String, f64> = [
            ("Rustacean".to_string(), 2.0),
            ("good".to_string(), 0.0),
        ]
        .into_iter()
        .collect();
        let lexicon = Lexicon::with_overrides(&overrides);
        assert_eq!(lexicon.weight("rustacean"), Some(1.0));
        assert_eq!(lexicon.weight("good"), None);
        assert_eq!(Lexicon::builtin().weight("good"), Some(0.5));
    }

    #[test]
    fn polarity_stays_in_range() {
        for text in [
            "Amazing amazing amazing!",
            "Not terrible, not awful, never horrible.",
            "Hate.",
        ] {
            let p = polarity(text);
            assert!((-1.0..=1.0).contains(&p), "{text}: {p}");
        }
    }
}
