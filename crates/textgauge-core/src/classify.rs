//! Threshold tables that turn raw metrics into labels and guidance.
//!
//! All thresholds and strings live in one [`ClassificationTable`]. Its
//! `Default` is the canonical table; a configuration file may replace any
//! section of it. Classification is total: every value, including NaN and
//! values outside the usual range, lands on exactly one label because a value
//! that matches no rung falls through to the ladder's `otherwise` entry.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::readability::ReadabilityScores;
use crate::similarity::SimilarityScore;
use crate::tone::ToneScore;

/// Name of a raw metric.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Flesch Reading Ease.
    FleschReadingEase,
    /// Gunning Fog index.
    GunningFogIndex,
    /// SMOG index.
    SmogIndex,
    /// Automated Readability Index.
    AutomatedReadabilityIndex,
    /// Dale-Chall readability score.
    DaleChallScore,
    /// Flesch-Kincaid grade level.
    FleschKincaidGrade,
    /// Coleman-Liau index.
    ColemanLiauIndex,
    /// Linsear Write formula.
    LinsearWriteFormula,
    /// Number of difficult words.
    DifficultWordsCount,
    /// Tone polarity in `[-1.0, 1.0]`.
    TonePolarity,
    /// Best similarity ratio in `[0.0, 1.0]`.
    PlagiarismRatio,
}

/// Raw metric values of one document.
///
/// A metric is absent when its scorer was not run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MetricSet(BTreeMap<Metric, f64>);

impl MetricSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one metric.
    pub fn insert(&mut self, metric: Metric, value: f64) {
        self.0.insert(metric, value);
    }

    /// Value of one metric, if present.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.0.get(&metric).copied()
    }

    /// Iterate metrics in name order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.0.iter().map(|(m, v)| (*m, *v))
    }

    /// Record every readability formula and the difficult-word count.
    pub fn record_readability(&mut self, scores: &ReadabilityScores) {
        self.0.extend([
            (Metric::FleschReadingEase, scores.flesch_reading_ease),
            (Metric::GunningFogIndex, scores.gunning_fog_index),
            (Metric::SmogIndex, scores.smog_index),
            (
                Metric::AutomatedReadabilityIndex,
                scores.automated_readability_index,
            ),
            (Metric::DaleChallScore, scores.dale_chall_score),
            (Metric::FleschKincaidGrade, scores.flesch_kincaid_grade),
            (Metric::ColemanLiauIndex, scores.coleman_liau_index),
            (Metric::LinsearWriteFormula, scores.linsear_write_formula),
            (
                Metric::DifficultWordsCount,
                scores.counts.difficult_words as f64,
            ),
        ]);
    }

    /// Record tone polarity.
    pub fn record_tone(&mut self, tone: &ToneScore) {
        self.insert(Metric::TonePolarity, tone.polarity);
    }

    /// Record the best similarity ratio.
    pub fn record_similarity(&mut self, similarity: &SimilarityScore) {
        self.insert(Metric::PlagiarismRatio, similarity.ratio);
    }

    /// Mean of Gunning Fog, SMOG and ARI, when all three are present.
    pub fn average_grade(&self) -> Option<f64> {
        let fog = self.get(Metric::GunningFogIndex)?;
        let smog = self.get(Metric::SmogIndex)?;
        let ari = self.get(Metric::AutomatedReadabilityIndex)?;
        Some((fog + smog + ari) / 3.0)
    }
}

/// How a ladder compares a value against each rung's bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// `value >= bound`; bounds must be strictly decreasing.
    AtLeast,
    /// `value > bound`; bounds must be strictly decreasing.
    Above,
    /// `value <= bound`; bounds must be strictly increasing.
    AtMost,
}

impl Comparison {
    fn matches(self, value: f64, bound: f64) -> bool {
        match self {
            Self::AtLeast => value >= bound,
            Self::Above => value > bound,
            Self::AtMost => value <= bound,
        }
    }

    fn ordered(self, previous: f64, next: f64) -> bool {
        match self {
            Self::AtLeast | Self::Above => next < previous,
            Self::AtMost => next > previous,
        }
    }
}

/// A label with its guidance text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Outcome {
    /// Category label.
    pub label: String,
    /// What the category means for the reader.
    #[serde(default)]
    pub insight: String,
    /// What the writer could do about it.
    #[serde(default)]
    pub suggestion: String,
}

impl Outcome {
    fn new(label: &str, insight: &str, suggestion: &str) -> Self {
        Self {
            label: label.to_string(),
            insight: insight.to_string(),
            suggestion: suggestion.to_string(),
        }
    }
}

/// One step of a ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rung {
    /// Threshold compared against the value.
    pub bound: f64,
    /// Outcome when the comparison holds.
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Ordered thresholds checked top to bottom; the first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Ladder {
    /// Comparison applied at every rung.
    pub comparison: Comparison,
    /// Rungs in evaluation order.
    pub rungs: Vec<Rung>,
    /// Outcome when no rung matches.
    pub otherwise: Outcome,
}

impl Ladder {
    fn new(comparison: Comparison, rungs: &[(f64, Outcome)], otherwise: Outcome) -> Self {
        Self {
            comparison,
            rungs: rungs
                .iter()
                .map(|(bound, outcome)| Rung {
                    bound: *bound,
                    outcome: outcome.clone(),
                })
                .collect(),
            otherwise,
        }
    }

    /// Outcome for a value.
    pub fn classify(&self, value: f64) -> &Outcome {
        self.rungs
            .iter()
            .find(|rung| self.comparison.matches(value, rung.bound))
            .map_or(&self.otherwise, |rung| &rung.outcome)
    }

    fn validate(&self, name: &str) -> ConfigResult<()> {
        for pair in self.rungs.windows(2) {
            if !self.comparison.ordered(pair[0].bound, pair[1].bound) {
                return Err(ConfigError::InvalidTable(format!(
                    "{name}: bound {} does not follow {} in {:?} order",
                    pair[1].bound, pair[0].bound, self.comparison
                )));
            }
        }
        if let Some(rung) = self.rungs.iter().find(|r| !r.bound.is_finite()) {
            return Err(ConfigError::InvalidTable(format!(
                "{name}: bound {} is not finite",
                rung.bound
            )));
        }
        let outcomes = self
            .rungs
            .iter()
            .map(|r| &r.outcome)
            .chain(std::iter::once(&self.otherwise));
        for outcome in outcomes {
            if outcome.label.trim().is_empty() {
                return Err(ConfigError::InvalidTable(format!("{name}: empty label")));
            }
        }
        Ok(())
    }
}

/// Sentence complexity rule, driven by Gunning Fog and SMOG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceComplexityRule {
    /// Fog above this is very complex.
    pub very_complex_fog: f64,
    /// SMOG above this is very complex.
    pub very_complex_smog: f64,
    /// Fog above this (and not very complex) is moderate.
    pub moderate_fog: f64,
    /// Outcome for very complex sentences.
    pub very_complex: Outcome,
    /// Outcome for moderately complex sentences.
    pub moderate: Outcome,
    /// Outcome for everything else.
    pub simple: Outcome,
}

impl SentenceComplexityRule {
    /// Outcome for a Fog/SMOG pair.
    pub fn classify(&self, fog: f64, smog: f64) -> &Outcome {
        if fog > self.very_complex_fog || smog > self.very_complex_smog {
            &self.very_complex
        } else if fog > self.moderate_fog {
            &self.moderate
        } else {
            &self.simple
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        let bounds = [
            self.very_complex_fog,
            self.very_complex_smog,
            self.moderate_fog,
        ];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(ConfigError::InvalidTable(
                "sentence_complexity: bounds must be finite".to_string(),
            ));
        }
        if self.moderate_fog >= self.very_complex_fog {
            return Err(ConfigError::InvalidTable(format!(
                "sentence_complexity: moderate_fog {} must be below very_complex_fog {}",
                self.moderate_fog, self.very_complex_fog
            )));
        }
        if [&self.very_complex, &self.moderate, &self.simple]
            .iter()
            .any(|o| o.label.trim().is_empty())
        {
            return Err(ConfigError::InvalidTable(
                "sentence_complexity: empty label".to_string(),
            ));
        }
        Ok(())
    }
}

/// Every threshold and guidance string used by the classifier.
///
/// Sections missing from a configuration file keep their defaults; a section
/// that is present replaces the default section as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ClassificationTable {
    /// Flesch Reading Ease to overall readability.
    pub overall_readability: Ladder,
    /// Average grade (Fog, SMOG, ARI) to education level.
    pub education_level: Ladder,
    /// Fog and SMOG to sentence complexity.
    pub sentence_complexity: SentenceComplexityRule,
    /// Dale-Chall score to vocabulary level.
    pub word_simplicity: Ladder,
    /// Tone polarity to dominant tone.
    pub tone: Ladder,
    /// Similarity score (0 to 100) to plagiarism verdict.
    pub plagiarism: Ladder,
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self {
            overall_readability: Ladder::new(
                Comparison::AtLeast,
                &[
                    (
                        80.0,
                        Outcome::new(
                            "Very Easy",
                            "Your writing is highly accessible, perfect for all audiences.",
                            "Consider adding variety or complexity if writing for professionals.",
                        ),
                    ),
                    (
                        60.0,
                        Outcome::new(
                            "Easy",
                            "Your text is clear and easy to read for most people.",
                            "You're doing great. Keep sentences concise and engaging.",
                        ),
                    ),
                    (
                        40.0,
                        Outcome::new(
                            "Moderate",
                            "Your writing is moderately complex and suits mature readers.",
                            "Simplify long sentences and replace advanced words where possible.",
                        ),
                    ),
                    (
                        20.0,
                        Outcome::new(
                            "Difficult",
                            "Your text is quite complex and suits professional or academic readers.",
                            "Use shorter sentences and simpler vocabulary to enhance clarity.",
                        ),
                    ),
                ],
                Outcome::new(
                    "Very Difficult",
                    "Your text is highly complex and challenging for general readers.",
                    "Break long sentences and use everyday words to improve readability.",
                ),
            ),
            education_level: Ladder::new(
                Comparison::AtMost,
                &[
                    (
                        6.0,
                        Outcome::new(
                            "Elementary School",
                            "Readers aged about 11 and up can follow this text.",
                            "Fine for a general audience.",
                        ),
                    ),
                    (
                        9.0,
                        Outcome::new(
                            "Middle School",
                            "Readers aged about 14 and up can follow this text.",
                            "A good level for most public-facing writing.",
                        ),
                    ),
                    (
                        12.0,
                        Outcome::new(
                            "High School",
                            "Readers need a high school education to follow this text.",
                            "Shorten sentences if the audience is broad.",
                        ),
                    ),
                    (
                        16.0,
                        Outcome::new(
                            "College Level",
                            "Readers need a college education to follow this text.",
                            "Reserve this level for specialist audiences.",
                        ),
                    ),
                ],
                Outcome::new(
                    "Graduate / Research",
                    "Only readers with graduate-level education will follow this text easily.",
                    "Split long sentences and define technical terms.",
                ),
            ),
            sentence_complexity: SentenceComplexityRule {
                very_complex_fog: 18.0,
                very_complex_smog: 14.0,
                moderate_fog: 14.0,
                very_complex: Outcome::new(
                    "Very Complex",
                    "Sentences are long and packed with polysyllabic words.",
                    "Break sentences apart and aim for one idea per sentence.",
                ),
                moderate: Outcome::new(
                    "Moderate",
                    "Sentences are on the long side.",
                    "Trim clauses that do not carry new information.",
                ),
                simple: Outcome::new(
                    "Simple",
                    "Sentences are short and direct.",
                    "Keep it up.",
                ),
            },
            word_simplicity: Ladder::new(
                Comparison::Above,
                &[
                    (
                        10.0,
                        Outcome::new(
                            "Advanced Vocabulary",
                            "Many words fall outside everyday vocabulary.",
                            "Replace rare words with common ones where meaning allows.",
                        ),
                    ),
                    (
                        8.0,
                        Outcome::new(
                            "Moderate Vocabulary",
                            "Some words fall outside everyday vocabulary.",
                            "Check that uncommon words are necessary.",
                        ),
                    ),
                ],
                Outcome::new(
                    "Simple Vocabulary",
                    "Vocabulary is familiar to most readers.",
                    "No vocabulary changes needed.",
                ),
            ),
            tone: Ladder::new(
                Comparison::Above,
                &[
                    (
                        0.6,
                        Outcome::new(
                            "Highly Positive",
                            "The text reads as strongly positive and enthusiastic.",
                            "",
                        ),
                    ),
                    (
                        0.2,
                        Outcome::new(
                            "Slightly Positive",
                            "The text leans positive.",
                            "",
                        ),
                    ),
                    (
                        -0.2,
                        Outcome::new(
                            "Neutral",
                            "The text reads as neutral and matter-of-fact.",
                            "",
                        ),
                    ),
                    (
                        -0.6,
                        Outcome::new(
                            "Slightly Negative",
                            "The text leans negative.",
                            "",
                        ),
                    ),
                ],
                Outcome::new(
                    "Highly Negative",
                    "The text reads as strongly negative or critical.",
                    "",
                ),
            ),
            plagiarism: Ladder::new(
                Comparison::Above,
                &[(
                    60.0,
                    Outcome::new(
                        "Flagged",
                        "High similarity with reference content detected.",
                        "",
                    ),
                )],
                Outcome::new(
                    "Original",
                    "No significant similarity with reference content.",
                    "",
                ),
            ),
        }
    }
}

impl ClassificationTable {
    /// Check every ladder for ordered, finite bounds and non-empty labels.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTable`] naming the first offending
    /// section.
    pub fn validate(&self) -> ConfigResult<()> {
        self.overall_readability.validate("overall_readability")?;
        self.education_level.validate("education_level")?;
        self.sentence_complexity.validate()?;
        self.word_simplicity.validate("word_simplicity")?;
        self.tone.validate("tone")?;
        self.plagiarism.validate("plagiarism")?;
        Ok(())
    }

    /// Classify every metric present in the set.
    pub fn classify(&self, metrics: &MetricSet) -> ClassificationResult {
        let overall_readability = metrics
            .get(Metric::FleschReadingEase)
            .map(|v| self.overall_readability.classify(v).clone());
        let education_level = metrics
            .average_grade()
            .map(|v| self.education_level.classify(v).clone());
        let sentence_complexity = metrics
            .get(Metric::GunningFogIndex)
            .zip(metrics.get(Metric::SmogIndex))
            .map(|(fog, smog)| self.sentence_complexity.classify(fog, smog).clone());
        let word_simplicity = metrics
            .get(Metric::DaleChallScore)
            .map(|v| self.word_simplicity.classify(v).clone());
        let dominant_tone = metrics
            .get(Metric::TonePolarity)
            .map(|v| self.tone.classify(v).clone());
        let plagiarism_verdict = metrics
            .get(Metric::PlagiarismRatio)
            .map(|v| self.plagiarism.classify(v * 100.0).clone());

        ClassificationResult {
            overall_readability,
            education_level,
            sentence_complexity,
            word_simplicity,
            dominant_tone,
            plagiarism_verdict,
        }
    }
}

/// Labels derived from a [`MetricSet`].
///
/// A category is `None` when the metrics it needs were not computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClassificationResult {
    /// From Flesch Reading Ease.
    pub overall_readability: Option<Outcome>,
    /// From the average grade.
    pub education_level: Option<Outcome>,
    /// From Fog and SMOG.
    pub sentence_complexity: Option<Outcome>,
    /// From Dale-Chall.
    pub word_simplicity: Option<Outcome>,
    /// From tone polarity.
    pub dominant_tone: Option<Outcome>,
    /// From the similarity score.
    pub plagiarism_verdict: Option<Outcome>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(outcome: &Outcome) -> &str {
        outcome.label.as_str()
    }

    #[test]
    fn default_table_is_valid() {
        ClassificationTable::default().validate().unwrap();
    }

    #[test]
    fn flesch_ladder_is_inclusive() {
        let t = ClassificationTable::default();
        let ladder = &t.overall_readability;
        assert_eq!(label(ladder.classify(100.0)), "Very Easy");
        assert_eq!(label(ladder.classify(80.0)), "Very Easy");
        assert_eq!(label(ladder.classify(79.99)), "Easy");
        assert_eq!(label(ladder.classify(60.0)), "Easy");
        assert_eq!(label(ladder.classify(40.0)), "Moderate");
        assert_eq!(label(ladder.classify(20.0)), "Difficult");
        assert_eq!(label(ladder.classify(19.99)), "Very Difficult");
        assert_eq!(label(ladder.classify(-50.0)), "Very Difficult");
    }

    #[test]
    fn grade_ladder_uses_upper_bounds() {
        let t = ClassificationTable::default();
        let ladder = &t.education_level;
        assert_eq!(label(ladder.classify(-3.0)), "Elementary School");
        assert_eq!(label(ladder.classify(6.0)), "Elementary School");
        assert_eq!(label(ladder.classify(6.01)), "Middle School");
        assert_eq!(label(ladder.classify(12.0)), "High School");
        assert_eq!(label(ladder.classify(16.0)), "College Level");
        assert_eq!(label(ladder.classify(16.5)), "Graduate / Research");
    }

    #[test]
    fn sentence_complexity_rule() {
        let rule = ClassificationTable::default().sentence_complexity;
        assert_eq!(label(rule.classify(18.5, 0.0)), "Very Complex");
        assert_eq!(label(rule.classify(0.0, 14.5)), "Very Complex");
        assert_eq!(label(rule.classify(18.0, 14.0)), "Moderate");
        assert_eq!(label(rule.classify(14.0, 14.0)), "Simple");
    }

    #[test]
    fn tone_and_plagiarism_bounds_are_strict() {
        let t = ClassificationTable::default();
        assert_eq!(label(t.tone.classify(0.61)), "Highly Positive");
        assert_eq!(label(t.tone.classify(0.6)), "Slightly Positive");
        assert_eq!(label(t.tone.classify(0.0)), "Neutral");
        assert_eq!(label(t.tone.classify(-0.2)), "Slightly Negative");
        assert_eq!(label(t.tone.classify(-0.6)), "Highly Negative");
        assert_eq!(label(t.plagiarism.classify(60.0)), "Original");
        assert_eq!(label(t.plagiarism.classify(60.01)), "Flagged");
    }

    #[test]
    fn nan_falls_through_to_last_rung() {
        let t = ClassificationTable::default();
        assert_eq!(label(t.overall_readability.classify(f64::NAN)), "Very Difficult");
        assert_eq!(
            label(t.education_level.classify(f64::NAN)),
            "Graduate / Research"
        );
        assert_eq!(label(t.tone.classify(f64::NAN)), "Highly Negative");
        assert_eq!(
            label(t.sentence_complexity.classify(f64::NAN, f64::NAN)),
            "Simple"
        );
    }

    #[test]
    fn classify_skips_missing_metrics() {
        let mut metrics = MetricSet::new();
        metrics.insert(Metric::TonePolarity, 0.9);
        let result = ClassificationTable::default().classify(&metrics);
        assert_eq!(result.dominant_tone.unwrap().label, "Highly Positive");
        assert!(result.overall_readability.is_none());
        assert!(result.education_level.is_none());
        assert!(result.plagiarism_verdict.is_none());
    }

    #[test]
    fn plagiarism_uses_percentage_scale() {
        let mut metrics = MetricSet::new();
        metrics.insert(Metric::PlagiarismRatio, 1.0);
        let result = ClassificationTable::default().classify(&metrics);
        assert_eq!(result.plagiarism_verdict.unwrap().label, "Flagged");
    }

    #[test]
    fn classification_is_deterministic() {
        let mut metrics = MetricSet::new();
        metrics.insert(Metric::FleschReadingEase, 55.5);
        metrics.insert(Metric::GunningFogIndex, 15.0);
        metrics.insert(Metric::SmogIndex, 11.0);
        metrics.insert(Metric::AutomatedReadabilityIndex, 10.0);
        metrics.insert(Metric::DaleChallScore, 9.0);
        metrics.insert(Metric::TonePolarity, -0.3);
        metrics.insert(Metric::PlagiarismRatio, 0.2);
        let table = ClassificationTable::default();
        let first = table.classify(&metrics);
        for _ in 0..10 {
            assert_eq!(table.classify(&metrics), first);
        }
        assert_eq!(first.overall_readability.unwrap().label, "Moderate");
        assert_eq!(first.education_level.unwrap().label, "High School");
        assert_eq!(first.sentence_complexity.unwrap().label, "Moderate");
        assert_eq!(first.word_simplicity.unwrap().label, "Moderate Vocabulary");
        assert_eq!(first.dominant_tone.unwrap().label, "Slightly Negative");
        assert_eq!(first.plagiarism_verdict.unwrap().label, "Original");
    }

    #[test]
    fn average_grade_needs_all_three_inputs() {
        let mut metrics = MetricSet::new();
        metrics.insert(Metric::GunningFogIndex, 9.0);
        metrics.insert(Metric::SmogIndex, 6.0);
        assert_eq!(metrics.average_grade(), None);
        metrics.insert(Metric::AutomatedReadabilityIndex, 3.0);
        assert_eq!(metrics.average_grade(), Some(6.0));
    }

    #[test]
    fn metric_names_serialize_snake_case() {
        let mut metrics = MetricSet::new();
        metrics.insert(Metric::FleschReadingEase, 1.0);
        metrics.insert(Metric::PlagiarismRatio, 0.5);
        let json = serde_json::to_string(&metrics).unwrap();
        assert_eq!(json, r#"{"flesch_reading_ease":1.0,"plagiarism_ratio":0.5}"#);
    }

    #[test]
    fn partial_override_keeps_other_sections() {
        let json = r#"{
            "plagiarism": {
                "comparison": "above",
                "rungs": [{ "bound": 30.0, "label": "Suspicious", "insight": "Looks copied." }],
                "otherwise": { "label": "Fine" }
            }
        }"#;
        let table: ClassificationTable = serde_json::from_str(json).unwrap();
        table.validate().unwrap();
        assert_eq!(label(table.plagiarism.classify(45.0)), "Suspicious");
        assert_eq!(label(table.plagiarism.classify(10.0)), "Fine");
        assert_eq!(table.tone, ClassificationTable::default().tone);
    }

    #[test]
    fn unordered_bounds_are_rejected() {
        let mut table = ClassificationTable::default();
        table.overall_readability.rungs.swap(0, 1);
        let err = table.validate().unwrap_err();
        assert!(
            matches!(&err, ConfigError::InvalidTable(msg) if msg.contains("overall_readability"))
        );
    }

    #[test]
    fn empty_label_is_rejected() {
        let mut table = ClassificationTable::default();
        table.tone.otherwise.label = "  ".to_string();
        assert!(matches!(
            table.validate(),
            Err(ConfigError::InvalidTable(_))
        ));
    }

    #[test]
    fn inverted_sentence_complexity_is_rejected() {
        let mut table = ClassificationTable::default();
        table.sentence_complexity.moderate_fog = 20.0;
        assert!(matches!(
            table.validate(),
            Err(ConfigError::InvalidTable(_))
        ));
    }
}
