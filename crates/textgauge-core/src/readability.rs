//! Readability formulas.
//!
//! Every formula is a pure function of [`Tokens`] counts:
//!
//! | Formula | Definition |
//! |---|---|
//! | Flesch Reading Ease | `206.835 - 1.015·(W/S) - 84.6·(Y/W)` |
//! | Flesch-Kincaid Grade | `0.39·(W/S) + 11.8·(Y/W) - 15.59` |
//! | Gunning Fog | `0.4·((W/S) + 100·(C/W))` |
//! | SMOG | `3.1291 + 1.0430·√(30·C/S)` |
//! | Automated Readability Index | `4.71·(chars/W) + 0.5·(W/S) - 21.43` |
//! | Coleman-Liau | `0.0588·L - 0.296·Se - 15.8` |
//! | Dale-Chall | `0.1579·(100·D/W) + 0.0496·(W/S)`, `+3.6365` when `D/W > 0.05` |
//! | Linsear Write | first 100 words, `r = (easy + 3·hard)/S`, `r/2` or `r/2 - 1` |
//!
//! `W` words, `S` sentences, `Y` syllables, `C` words of three or more
//! syllables, `D` difficult words. SMOG is applied to the whole document
//! without the 30-sentence sampling, so the score is deterministic.
//!
//! A formula whose denominator would be zero scores `0.0` rather than NaN,
//! which keeps averages over several formulas well defined.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tokens::{COMPLEX_SYLLABLES, Tokens};

/// Number of leading words sampled by the Linsear Write formula.
pub const LINSEAR_SAMPLE_WORDS: usize = 100;

/// Raw counts the formulas are computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextCounts {
    /// Number of words.
    pub words: usize,
    /// Number of sentences.
    pub sentences: usize,
    /// Total syllables.
    pub syllables: usize,
    /// Alphanumeric characters inside words.
    pub characters: usize,
    /// Letters inside words.
    pub letters: usize,
    /// Words of three or more syllables.
    pub complex_words: usize,
    /// Unfamiliar words of three or more syllables.
    pub difficult_words: usize,
}

impl TextCounts {
    /// Collect counts from tokens.
    pub fn from_tokens(tokens: &Tokens) -> Self {
        let mut counts = Self {
            sentences: tokens.sentence_count(),
            ..Self::default()
        };
        for word in tokens.words() {
            counts.words += 1;
            counts.syllables += word.syllables;
            counts.characters += word.alphanumeric_len();
            counts.letters += word.letter_len();
            counts.complex_words += usize::from(word.is_complex());
            counts.difficult_words += usize::from(word.difficult);
        }
        counts
    }

    fn words_per_sentence(&self) -> Option<f64> {
        ratio(self.words, self.sentences)
    }

    fn per_word(&self, n: usize) -> Option<f64> {
        ratio(n, self.words)
    }
}

/// The full set of readability scores for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityScores {
    /// Flesch Reading Ease (higher is easier).
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level.
    pub flesch_kincaid_grade: f64,
    /// Gunning Fog Index.
    pub gunning_fog_index: f64,
    /// SMOG Index.
    pub smog_index: f64,
    /// Automated Readability Index.
    pub automated_readability_index: f64,
    /// Coleman-Liau Index.
    pub coleman_liau_index: f64,
    /// Dale-Chall readability score.
    pub dale_chall_score: f64,
    /// Linsear Write Formula.
    pub linsear_write_formula: f64,
    /// Counts the scores were derived from.
    pub counts: TextCounts,
}

impl ReadabilityScores {
    /// Compute every formula from the given tokens.
    #[tracing::instrument(skip_all, fields(words = tokens.word_count()))]
    pub fn from_tokens(tokens: &Tokens) -> Self {
        let counts = TextCounts::from_tokens(tokens);
        let scores = Self {
            flesch_reading_ease: flesch_reading_ease(&counts),
            flesch_kincaid_grade: flesch_kincaid_grade(&counts),
            gunning_fog_index: gunning_fog(&counts),
            smog_index: smog_index(&counts),
            automated_readability_index: automated_readability_index(&counts),
            coleman_liau_index: coleman_liau_index(&counts),
            dale_chall_score: dale_chall_score(&counts),
            linsear_write_formula: linsear_write_formula(tokens),
            counts,
        };
        tracing::debug!(
            flesch = scores.flesch_reading_ease,
            fog = scores.gunning_fog_index,
            "readability scored"
        );
        scores
    }

    /// Mean of Gunning Fog, SMOG, and ARI, used as the grade-level estimate.
    pub fn average_grade(&self) -> f64 {
        (self.gunning_fog_index + self.smog_index + self.automated_readability_index) / 3.0
    }
}

/// `n / d`, or `None` when `d` is zero.
fn ratio(n: usize, d: usize) -> Option<f64> {
    (d != 0).then(|| n as f64 / d as f64)
}

/// Flesch Reading Ease.
pub fn flesch_reading_ease(c: &TextCounts) -> f64 {
    match (c.words_per_sentence(), c.per_word(c.syllables)) {
        (Some(asl), Some(asw)) => 1.015f64.mul_add(-asl, 84.6f64.mul_add(-asw, 206.835)),
        _ => 0.0,
    }
}

/// Flesch-Kincaid Grade Level.
pub fn flesch_kincaid_grade(c: &TextCounts) -> f64 {
    match (c.words_per_sentence(), c.per_word(c.syllables)) {
        (Some(asl), Some(asw)) => 0.39f64.mul_add(asl, 11.8 * asw) - 15.59,
        _ => 0.0,
    }
}

/// Gunning Fog Index.
pub fn gunning_fog(c: &TextCounts) -> f64 {
    match (c.words_per_sentence(), c.per_word(c.complex_words)) {
        (Some(asl), Some(complex)) => 0.4 * 100.0f64.mul_add(complex, asl),
        _ => 0.0,
    }
}

/// SMOG Index over the whole document.
pub fn smog_index(c: &TextCounts) -> f64 {
    match ratio(c.complex_words, c.sentences) {
        Some(per_sentence) => 1.0430f64.mul_add((30.0 * per_sentence).sqrt(), 3.1291),
        None => 0.0,
    }
}

/// Automated Readability Index.
pub fn automated_readability_index(c: &TextCounts) -> f64 {
    match (c.per_word(c.characters), c.words_per_sentence()) {
        (Some(chars), Some(asl)) => 4.71f64.mul_add(chars, 0.5 * asl) - 21.43,
        _ => 0.0,
    }
}

/// Coleman-Liau Index.
pub fn coleman_liau_index(c: &TextCounts) -> f64 {
    match (c.per_word(c.letters), c.per_word(c.sentences)) {
        (Some(letters), Some(sentences)) => {
            let l = letters * 100.0;
            let s = sentences * 100.0;
            0.0588f64.mul_add(l, -0.296 * s) - 15.8
        }
        _ => 0.0,
    }
}

/// Dale-Chall readability score.
pub fn dale_chall_score(c: &TextCounts) -> f64 {
    match (c.per_word(c.difficult_words), c.words_per_sentence()) {
        (Some(difficult), Some(asl)) => {
            let raw = 0.1579f64.mul_add(difficult * 100.0, 0.0496 * asl);
            if difficult > 0.05 { raw + 3.6365 } else { raw }
        }
        _ => 0.0,
    }
}

/// Linsear Write Formula over the first [`LINSEAR_SAMPLE_WORDS`] words.
///
/// Sentences are counted when at least one of their words falls inside the
/// sample.
pub fn linsear_write_formula(tokens: &Tokens) -> f64 {
    let mut remaining = LINSEAR_SAMPLE_WORDS;
    let mut sentences = 0usize;
    let mut easy = 0usize;
    let mut hard = 0usize;

    for sentence in &tokens.sentences {
        if remaining == 0 {
            break;
        }
        sentences += 1;
        for word in sentence.words.iter().take(remaining) {
            if word.syllables >= COMPLEX_SYLLABLES {
                hard += 1;
            } else {
                easy += 1;
            }
        }
        remaining = remaining.saturating_sub(sentence.words.len());
    }

    match ratio(easy + 3 * hard, sentences) {
        Some(r) if r > 20.0 => r / 2.0,
        Some(r) => r / 2.0 - 1.0,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::tokenize;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn counts(words: usize, sentences: usize, syllables: usize) -> TextCounts {
        TextCounts {
            words,
            sentences,
            syllables,
            ..TextCounts::default()
        }
    }

    #[test]
    fn the_cat_sat() {
        let scores = ReadabilityScores::from_tokens(&tokenize("The cat sat."));
        assert_eq!(scores.counts.words, 3);
        assert_eq!(scores.counts.sentences, 1);
        assert!(approx(scores.flesch_kincaid_grade, 0.39 * 3.0 + 11.8 - 15.59));
        assert!(approx(scores.gunning_fog_index, 1.2));
        assert!(approx(scores.flesch_reading_ease, 206.835 - 1.015 * 3.0 - 84.6));
        assert!(approx(scores.smog_index, 3.1291));
    }

    #[test]
    fn automated_readability_counts_alphanumerics_only() {
        let scores = ReadabilityScores::from_tokens(&tokenize("The cat sat."));
        assert_eq!(scores.counts.characters, 9);
        assert!(approx(
            scores.automated_readability_index,
            4.71 * 3.0 + 0.5 * 3.0 - 21.43
        ));
    }

    #[test]
    fn coleman_liau_uses_per_hundred_words() {
        let c = TextCounts {
            words: 10,
            sentences: 2,
            letters: 50,
            ..TextCounts::default()
        };
        assert!(approx(
            coleman_liau_index(&c),
            0.0588 * 500.0 - 0.296 * 20.0 - 15.8
        ));
    }

    #[test]
    fn dale_chall_adjusts_above_five_percent() {
        let below = TextCounts {
            words: 100,
            sentences: 10,
            difficult_words: 5,
            ..TextCounts::default()
        };
        assert!(approx(dale_chall_score(&below), 0.1579 * 5.0 + 0.0496 * 10.0));

        let above = TextCounts {
            difficult_words: 6,
            ..below
        };
        assert!(approx(
            dale_chall_score(&above),
            0.1579 * 6.0 + 0.0496 * 10.0 + 3.6365
        ));
    }

    #[test]
    fn gunning_fog_and_smog_with_complex_words() {
        let c = TextCounts {
            words: 20,
            sentences: 2,
            complex_words: 4,
            ..TextCounts::default()
        };
        assert!(approx(gunning_fog(&c), 0.4 * (10.0 + 20.0)));
        assert!(approx(smog_index(&c), 3.1291 + 1.0430 * 60.0f64.sqrt()));
    }

    #[test]
    fn linsear_write_short_and_long_regimes() {
        // 3 easy words, 1 sentence: r = 3, r <= 20
        let short = tokenize("The cat sat.");
        assert!(approx(linsear_write_formula(&short), 0.5));

        // 25 easy words in one sentence: r = 25 > 20
        let long = format!("{}.", vec!["cat"; 25].join(" "));
        assert!(approx(linsear_write_formula(&tokenize(&long)), 12.5));
    }

    #[test]
    fn linsear_write_samples_first_hundred_words() {
        let sentence = format!("{}. ", vec!["Dog"; 60].join(" "));
        let doc = sentence.repeat(3);
        // Sample: 100 easy words across 2 sentences, r = 50
        assert!(approx(linsear_write_formula(&tokenize(&doc)), 25.0));
    }

    #[test]
    fn zero_denominators_score_zero() {
        let empty = TextCounts::default();
        assert_eq!(flesch_reading_ease(&empty), 0.0);
        assert_eq!(flesch_kincaid_grade(&empty), 0.0);
        assert_eq!(gunning_fog(&empty), 0.0);
        assert_eq!(smog_index(&empty), 0.0);
        assert_eq!(automated_readability_index(&empty), 0.0);
        assert_eq!(coleman_liau_index(&empty), 0.0);
        assert_eq!(dale_chall_score(&empty), 0.0);
        assert_eq!(linsear_write_formula(&Tokens::default()), 0.0);
    }

    #[test]
    fn non_alphabetic_document_scores_zero() {
        let scores = ReadabilityScores::from_tokens(&tokenize("123 456 !!!"));
        assert_eq!(scores, ReadabilityScores::default());
    }

    #[test]
    fn all_scores_finite_for_varied_text() {
        for text in [
            "a",
            "Hello!",
            "The implementation of the comprehensive organizational restructuring \
             initiative necessitated interdepartmental communication protocols.",
            "I. Am. Here.",
            "Well... maybe? Sure!",
        ] {
            let s = ReadabilityScores::from_tokens(&tokenize(text));
            for value in [
                s.flesch_reading_ease,
                s.flesch_kincaid_grade,
                s.gunning_fog_index,
                s.smog_index,
                s.automated_readability_index,
                s.coleman_liau_index,
                s.dale_chall_score,
                s.linsear_write_formula,
                s.average_grade(),
            ] {
                assert!(value.is_finite(), "{text:?} produced {value}");
            }
        }
    }

    #[test]
    fn flesch_reading_ease_non_increasing() {
        let mut previous = f64::INFINITY;
        for step in 1..20 {
            let c = counts(10 * step, 10, 10 * step + step * step);
            let score = flesch_reading_ease(&c);
            assert!(score <= previous, "step {step}: {score} > {previous}");
            previous = score;
        }
    }

    #[test]
    fn complex_prose_scores_harder_than_simple_prose() {
        let simple = ReadabilityScores::from_tokens(&tokenize(
            "The cat sat on the mat. The dog ran fast.",
        ));
        let complex = ReadabilityScores::from_tokens(&tokenize(
            "The implementation of the comprehensive organizational restructuring \
             initiative necessitated the establishment of interdepartmental \
             communication protocols that facilitated the dissemination of \
             procedural documentation.",
        ));
        assert!(simple.flesch_reading_ease > complex.flesch_reading_ease);
        assert!(simple.average_grade() < complex.average_grade());
        assert!(complex.counts.difficult_words > 0);
    }
}
