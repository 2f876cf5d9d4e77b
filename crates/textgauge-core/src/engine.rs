//! The analysis engine and the payloads it produces.
//!
//! An [`Engine`] owns everything a request needs that does not change between
//! requests: the classification table, the reference corpus, the sentiment
//! lexicon and the grammar service. It is immutable after construction, so a
//! single instance can be shared across threads and requests.
//!
//! Every request trims the document, rejects blank input, tokenizes once and
//! runs the requested scorers on the shared tokens.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::{ClassificationResult, ClassificationTable, MetricSet};
use crate::config::Config;
use crate::error::{AnalysisError, AnalysisResult, ConfigResult};
use crate::grammar::{
    DEFAULT_GRAMMAR_TIMEOUT, GrammarOutcome, GrammarReport, GrammarService, RuleBasedChecker,
    check_with_timeout,
};
use crate::readability::{ReadabilityScores, TextCounts};
use crate::similarity::{ReferenceCorpus, SimilarityScore, score_similarity};
use crate::tokens::{Tokens, tokenize};
use crate::tone::{DEFAULT_TONE_CHAR_CAP, Lexicon, ToneScore, score_tone};

/// A scorer the caller can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Check {
    /// Readability formulas and their classification.
    Readability,
    /// Tone polarity.
    Tone,
    /// Similarity to the reference corpus.
    #[cfg_attr(feature = "clap", value(alias = "plagiarism"))]
    Similarity,
    /// Grammar issues from the grammar service.
    Grammar,
}

impl Check {
    /// Every check, in report order.
    pub const ALL: [Self; 4] = [Self::Readability, Self::Tone, Self::Similarity, Self::Grammar];

    /// Lowercase name of the check.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Readability => "readability",
            Self::Tone => "tone",
            Self::Similarity => "similarity",
            Self::Grammar => "grammar",
        }
    }

    fn available() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Check {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "readability" => Ok(Self::Readability),
            "tone" => Ok(Self::Tone),
            "similarity" | "plagiarism" => Ok(Self::Similarity),
            "grammar" => Ok(Self::Grammar),
            _ => Err(AnalysisError::UnknownCheck {
                name: s.to_string(),
                available: Self::available(),
            }),
        }
    }
}

/// Parse check names, rejecting the first unknown one.
///
/// An empty list means every check.
pub fn parse_checks<S: AsRef<str>>(names: &[S]) -> AnalysisResult<Vec<Check>> {
    if names.is_empty() {
        return Ok(Check::ALL.to_vec());
    }
    let mut checks = Vec::with_capacity(names.len());
    for name in names {
        let check = name.as_ref().parse()?;
        if !checks.contains(&check) {
            checks.push(check);
        }
    }
    Ok(checks)
}

/// Round to two decimals for presentation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a 0 to 100 score as a percentage with at most two decimals and at
/// least one: `100.0%`, `45.5%`, `45.67%`.
pub fn format_percent(score: f64) -> String {
    let fixed = format!("{:.2}", round2(score));
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0%")
    } else {
        format!("{trimmed}%")
    }
}

/// Labels and guidance for the readability payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilitySummary {
    /// Label from Flesch Reading Ease.
    pub overall_readability: String,
    /// Label from the average grade.
    pub education_level: String,
    /// Label from Fog and SMOG.
    pub sentence_complexity: String,
    /// Label from Dale-Chall.
    pub word_simplicity: String,
    /// What the overall readability means.
    pub insight: String,
    /// How to improve it.
    pub suggestion: String,
}

/// Raw readability numbers, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RawScores {
    /// Flesch Reading Ease.
    pub flesch_reading_ease: f64,
    /// Gunning Fog index.
    pub gunning_fog_index: f64,
    /// SMOG index.
    pub smog_index: f64,
    /// Automated Readability Index.
    pub automated_readability_index: f64,
    /// Dale-Chall score.
    pub dale_chall_score: f64,
    /// Flesch-Kincaid grade level.
    pub flesch_kincaid_grade: f64,
    /// Coleman-Liau index.
    pub coleman_liau_index: f64,
    /// Linsear Write formula.
    pub linsear_write_formula: f64,
    /// Words not on the familiar-word list with three or more syllables.
    pub difficult_words: usize,
    /// Mean of Fog, SMOG and ARI.
    pub average_grade: f64,
}

impl RawScores {
    fn from_scores(scores: &ReadabilityScores) -> Self {
        Self {
            flesch_reading_ease: round2(scores.flesch_reading_ease),
            gunning_fog_index: round2(scores.gunning_fog_index),
            smog_index: round2(scores.smog_index),
            automated_readability_index: round2(scores.automated_readability_index),
            dale_chall_score: round2(scores.dale_chall_score),
            flesch_kincaid_grade: round2(scores.flesch_kincaid_grade),
            coleman_liau_index: round2(scores.coleman_liau_index),
            linsear_write_formula: round2(scores.linsear_write_formula),
            difficult_words: scores.counts.difficult_words,
            average_grade: round2(scores.average_grade()),
        }
    }
}

/// Readability payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Labels and guidance.
    pub summary: ReadabilitySummary,
    /// Rounded formula results.
    pub raw_scores: RawScores,
    /// Counts the formulas were computed from.
    pub counts: TextCounts,
}

/// Labels and guidance for the tone payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToneSummary {
    /// Tone label.
    pub dominant_tone: String,
    /// Strength of the polarity, `|polarity| × 100`, two decimals.
    pub confidence: f64,
    /// What the tone means.
    pub feedback: String,
}

/// Tone payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToneReport {
    /// Label and feedback.
    pub summary: ToneSummary,
    /// Polarity in `[-1.0, 1.0]`, two decimals.
    pub tone_value: f64,
    /// Whether text past the tone character cap was ignored.
    pub truncated: bool,
}

/// Verdict and feedback for the plagiarism payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlagiarismSummary {
    /// Best similarity score as a percentage string.
    pub plagiarism_score: String,
    /// Verdict label.
    pub verdict: String,
    /// What the verdict means.
    pub feedback: String,
}

/// Plagiarism payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlagiarismReport {
    /// Score string and feedback.
    pub summary: PlagiarismSummary,
    /// Best similarity score (0 to 100), two decimals.
    pub similarity_reference: f64,
    /// The reference text that matched best.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closest_reference: Option<String>,
}

/// A requested check that produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Unavailable {
    /// The check that was skipped.
    pub check: Check,
    /// Why it was skipped.
    pub reason: String,
}

/// Everything one `analyze` call produced.
///
/// Sections are present exactly when their check was requested and
/// succeeded; failed optional checks are listed in `unavailable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Readability payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityReport>,
    /// Tone payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<ToneReport>,
    /// Plagiarism payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plagiarism: Option<PlagiarismReport>,
    /// Grammar issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar: Option<GrammarReport>,
    /// Unrounded metrics behind the payloads.
    pub metrics: MetricSet,
    /// Labels derived from `metrics`.
    pub classification: ClassificationResult,
    /// Requested checks that could not run.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unavailable: Vec<Unavailable>,
}

/// Scores documents. Cheap to share; see the module docs.
#[derive(Clone)]
pub struct Engine {
    table: ClassificationTable,
    corpus: ReferenceCorpus,
    lexicon: Lexicon,
    tone_char_cap: usize,
    grammar: Option<Arc<dyn GrammarService>>,
    grammar_timeout: Duration,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("references", &self.corpus.len())
            .field("lexicon_words", &self.lexicon.len())
            .field("tone_char_cap", &self.tone_char_cap)
            .field("grammar", &self.grammar.as_ref().map(|g| g.name()))
            .field("grammar_timeout", &self.grammar_timeout)
            .finish_non_exhaustive()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            table: ClassificationTable::default(),
            corpus: ReferenceCorpus::builtin().clone(),
            lexicon: Lexicon::builtin().clone(),
            tone_char_cap: DEFAULT_TONE_CHAR_CAP,
            grammar: Some(Arc::new(RuleBasedChecker)),
            grammar_timeout: DEFAULT_GRAMMAR_TIMEOUT,
        }
    }
}

impl Engine {
    /// Engine with the bundled table, corpus, lexicon and grammar checker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from loaded configuration.
    ///
    /// Relative paths in the config (the corpus file) resolve against
    /// `base_dir`.
    ///
    /// # Errors
    ///
    /// Fails if the classification table is invalid or the reference corpus
    /// cannot be read or is empty.
    #[tracing::instrument(skip(config))]
    pub fn from_config(config: &Config, base_dir: &Utf8Path) -> ConfigResult<Self> {
        let mut engine = Self::default();

        if let Some(table) = &config.classification {
            table.validate()?;
            engine.table = table.clone();
        }
        if let Some(corpus) = &config.reference_corpus
            && let Some(entries) = corpus.resolve(base_dir)?
        {
            engine.corpus = ReferenceCorpus::new(entries)?;
        }
        if let Some(overrides) = &config.lexicon {
            engine.lexicon = Lexicon::with_overrides(overrides);
        }
        if let Some(cap) = config.tone_char_cap {
            engine.tone_char_cap = cap;
        }
        if let Some(ms) = config.grammar_timeout_ms {
            engine.grammar_timeout = Duration::from_millis(ms);
        }

        tracing::debug!(engine = ?engine, "engine configured");
        Ok(engine)
    }

    /// Replace the classification table.
    #[must_use]
    pub fn with_table(mut self, table: ClassificationTable) -> Self {
        self.table = table;
        self
    }

    /// Replace the reference corpus.
    #[must_use]
    pub fn with_corpus(mut self, corpus: ReferenceCorpus) -> Self {
        self.corpus = corpus;
        self
    }

    /// Replace the sentiment lexicon.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Set how many leading characters tone scoring considers.
    #[must_use]
    pub const fn with_tone_char_cap(mut self, cap: usize) -> Self {
        self.tone_char_cap = cap;
        self
    }

    /// Use a different grammar service.
    #[must_use]
    pub fn with_grammar_service(mut self, service: Arc<dyn GrammarService>) -> Self {
        self.grammar = Some(service);
        self
    }

    /// Run without a grammar service; grammar checks report as unavailable.
    #[must_use]
    pub fn without_grammar(mut self) -> Self {
        self.grammar = None;
        self
    }

    /// Set the grammar deadline.
    #[must_use]
    pub const fn with_grammar_timeout(mut self, timeout: Duration) -> Self {
        self.grammar_timeout = timeout;
        self
    }

    /// The classification table in use.
    pub const fn table(&self) -> &ClassificationTable {
        &self.table
    }

    /// The reference corpus in use.
    pub const fn corpus(&self) -> &ReferenceCorpus {
        &self.corpus
    }

    /// Run the requested checks on a document.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyInput`] if the document is blank. No
    /// scorer runs in that case. Grammar failures do not error; see
    /// [`AnalysisReport::unavailable`].
    #[tracing::instrument(skip(self, document), fields(text_len = document.len()))]
    pub fn analyze(&self, document: &str, checks: &[Check]) -> AnalysisResult<AnalysisReport> {
        let document = validated(document)?;
        tracing::debug!("starting analysis");

        let tokens = tokenize(document);
        let mut metrics = MetricSet::new();
        let mut report = AnalysisReport {
            readability: None,
            tone: None,
            plagiarism: None,
            grammar: None,
            metrics: MetricSet::new(),
            classification: ClassificationResult::default(),
            unavailable: Vec::new(),
        };

        if checks.contains(&Check::Readability) {
            let scores = ReadabilityScores::from_tokens(&tokens);
            metrics.record_readability(&scores);
            report.readability = Some(self.readability_report(&scores));
        }
        if checks.contains(&Check::Tone) {
            let tone = self.score_tone(&tokens);
            metrics.record_tone(&tone);
            report.tone = Some(self.tone_report(&tone));
        }
        if checks.contains(&Check::Similarity) {
            let similarity = score_similarity(document, &self.corpus);
            metrics.record_similarity(&similarity);
            report.plagiarism = Some(self.plagiarism_report(&similarity));
        }
        if checks.contains(&Check::Grammar) {
            match self.check_grammar(document) {
                Ok(grammar) => report.grammar = Some(grammar),
                Err(reason) => report.unavailable.push(Unavailable {
                    check: Check::Grammar,
                    reason,
                }),
            }
        }

        report.classification = self.table.classify(&metrics);
        report.metrics = metrics;

        tracing::info!(
            sentences = tokens.sentence_count(),
            words = tokens.word_count(),
            unavailable = report.unavailable.len(),
            "analysis complete"
        );
        Ok(report)
    }

    /// Readability payload for a document.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyInput`] if the document is blank.
    #[tracing::instrument(skip(self, document), fields(text_len = document.len()))]
    pub fn readability(&self, document: &str) -> AnalysisResult<ReadabilityReport> {
        let tokens = tokenize(validated(document)?);
        let scores = ReadabilityScores::from_tokens(&tokens);
        Ok(self.readability_report(&scores))
    }

    /// Tone payload for a document.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyInput`] if the document is blank.
    #[tracing::instrument(skip(self, document), fields(text_len = document.len()))]
    pub fn tone(&self, document: &str) -> AnalysisResult<ToneReport> {
        let tokens = tokenize(validated(document)?);
        Ok(self.tone_report(&self.score_tone(&tokens)))
    }

    /// Plagiarism payload for a document.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyInput`] if the document is blank.
    #[tracing::instrument(skip(self, document), fields(text_len = document.len()))]
    pub fn plagiarism(&self, document: &str) -> AnalysisResult<PlagiarismReport> {
        let similarity = score_similarity(validated(document)?, &self.corpus);
        Ok(self.plagiarism_report(&similarity))
    }

    fn score_tone(&self, tokens: &Tokens) -> ToneScore {
        score_tone(tokens, &self.lexicon, self.tone_char_cap)
    }

    fn readability_report(&self, scores: &ReadabilityScores) -> ReadabilityReport {
        let overall = self
            .table
            .overall_readability
            .classify(scores.flesch_reading_ease);
        let education = self.table.education_level.classify(scores.average_grade());
        let complexity = self
            .table
            .sentence_complexity
            .classify(scores.gunning_fog_index, scores.smog_index);
        let vocabulary = self.table.word_simplicity.classify(scores.dale_chall_score);

        ReadabilityReport {
            summary: ReadabilitySummary {
                overall_readability: overall.label.clone(),
                education_level: education.label.clone(),
                sentence_complexity: complexity.label.clone(),
                word_simplicity: vocabulary.label.clone(),
                insight: overall.insight.clone(),
                suggestion: overall.suggestion.clone(),
            },
            raw_scores: RawScores::from_scores(scores),
            counts: scores.counts,
        }
    }

    fn tone_report(&self, tone: &ToneScore) -> ToneReport {
        let outcome = self.table.tone.classify(tone.polarity);
        ToneReport {
            summary: ToneSummary {
                dominant_tone: outcome.label.clone(),
                confidence: round2(tone.polarity.abs() * 100.0),
                feedback: outcome.insight.clone(),
            },
            tone_value: round2(tone.polarity),
            truncated: tone.truncated,
        }
    }

    fn plagiarism_report(&self, similarity: &SimilarityScore) -> PlagiarismReport {
        let outcome = self.table.plagiarism.classify(similarity.score);
        PlagiarismReport {
            summary: PlagiarismSummary {
                plagiarism_score: format_percent(similarity.score),
                verdict: outcome.label.clone(),
                feedback: outcome.insight.clone(),
            },
            similarity_reference: round2(similarity.score),
            closest_reference: similarity.reference.clone(),
        }
    }

    fn check_grammar(&self, document: &str) -> Result<GrammarReport, String> {
        let Some(service) = &self.grammar else {
            return Err("no grammar service configured".to_string());
        };
        let name = service.name().to_string();
        match check_with_timeout(Arc::clone(service), document, self.grammar_timeout) {
            GrammarOutcome::Issues(issues) => Ok(GrammarReport {
                service: name,
                issues,
            }),
            GrammarOutcome::Clean => Ok(GrammarReport {
                service: name,
                issues: Vec::new(),
            }),
            GrammarOutcome::Unavailable(e) => Err(e.to_string()),
        }
    }
}

fn validated(document: &str) -> AnalysisResult<&str> {
    let trimmed = document.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Metric;
    use crate::error::GrammarError;
    use crate::grammar::GrammarIssue;

    struct Offline;

    impl GrammarService for Offline {
        fn name(&self) -> &str {
            "offline"
        }

        fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
            Err(GrammarError::Failed {
                service: "offline".to_string(),
                reason: "service unreachable".to_string(),
            })
        }
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn blank_input_is_rejected() {
        let engine = Engine::new();
        assert_eq!(
            engine.analyze("", &Check::ALL),
            Err(AnalysisError::EmptyInput)
        );
        assert_eq!(
            engine.analyze("   \n\t ", &Check::ALL),
            Err(AnalysisError::EmptyInput)
        );
        assert_eq!(engine.readability("  "), Err(AnalysisError::EmptyInput));
        assert_eq!(engine.tone(""), Err(AnalysisError::EmptyInput));
        assert_eq!(engine.plagiarism(" "), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn short_sentence_is_simple() {
        let report = Engine::new().readability("The cat sat.").unwrap();
        assert_eq!(report.counts.words, 3);
        assert_eq!(report.counts.sentences, 1);
        assert_eq!(report.summary.sentence_complexity, "Simple");
        assert_eq!(report.summary.overall_readability, "Very Easy");
        assert_eq!(report.summary.education_level, "Elementary School");
        assert_eq!(report.summary.word_simplicity, "Simple Vocabulary");
        assert!(report.raw_scores.flesch_kincaid_grade < 3.0);
        assert!((report.raw_scores.gunning_fog_index - 1.2).abs() < 1e-9);
    }

    #[test]
    fn verbatim_reference_is_flagged() {
        let report = Engine::new()
            .plagiarism("The quick brown fox jumps over the lazy dog.")
            .unwrap();
        assert_eq!(report.summary.plagiarism_score, "100.0%");
        assert_eq!(report.summary.verdict, "Flagged");
        assert!(report.summary.feedback.contains("High similarity"));
        assert_eq!(report.similarity_reference, 100.0);
    }

    #[test]
    fn case_folding_keeps_full_match() {
        let report = Engine::new()
            .plagiarism("  THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG.  ")
            .unwrap();
        assert_eq!(report.summary.plagiarism_score, "100.0%");
    }

    #[test]
    fn tone_payload() {
        let report = Engine::new()
            .tone("What a wonderful, amazing, fantastic day.")
            .unwrap();
        assert_eq!(report.summary.dominant_tone, "Highly Positive");
        assert_eq!(report.tone_value, 0.9);
        assert_eq!(report.summary.confidence, 90.0);
        assert!(!report.truncated);
    }

    #[test]
    fn analyze_runs_only_requested_checks() {
        let report = Engine::new()
            .analyze("The cat sat.", &[Check::Tone])
            .unwrap();
        assert!(report.readability.is_none());
        assert!(report.plagiarism.is_none());
        assert!(report.grammar.is_none());
        assert!(report.tone.is_some());
        assert!(report.metrics.get(Metric::FleschReadingEase).is_none());
        assert_eq!(report.metrics.get(Metric::TonePolarity), Some(0.0));
        assert_eq!(
            report.classification.dominant_tone.unwrap().label,
            "Neutral"
        );
    }

    #[test]
    fn analyze_all_checks() {
        let text = "The committee reviewed the proposal carefully. It was good work, and everyone agreed.";
        let report = Engine::new().analyze(text, &Check::ALL).unwrap();
        assert!(report.readability.is_some());
        assert!(report.tone.is_some());
        assert!(report.plagiarism.is_some());
        assert!(report.grammar.is_some());
        assert!(report.unavailable.is_empty());
        for (metric, value) in report.metrics.iter() {
            assert!(value.is_finite(), "{metric:?} = {value}");
        }
        let summary = report.readability.unwrap().summary;
        assert_eq!(
            Some(summary.overall_readability),
            report.classification.overall_readability.map(|o| o.label)
        );
    }

    #[test]
    fn metrics_are_finite_for_degenerate_input() {
        for text in ["123 456", "!!! ???", "a", "Hi", "x.y.z", "... --- ..."] {
            let report = Engine::new().analyze(text, &Check::ALL).unwrap();
            for (metric, value) in report.metrics.iter() {
                assert!(value.is_finite(), "{text:?}: {metric:?} = {value}");
            }
        }
    }

    #[test]
    fn grammar_failure_is_not_fatal() {
        let engine = Engine::new().with_grammar_service(Arc::new(Offline));
        let report = engine
            .analyze("He are late.", &[Check::Readability, Check::Grammar])
            .unwrap();
        assert!(report.readability.is_some());
        assert!(report.grammar.is_none());
        assert_eq!(report.unavailable.len(), 1);
        assert_eq!(report.unavailable[0].check, Check::Grammar);
        assert!(report.unavailable[0].reason.contains("service unreachable"));
    }

    #[test]
    fn missing_grammar_service_is_reported() {
        let report = Engine::new()
            .without_grammar()
            .analyze("Fine text.", &[Check::Grammar])
            .unwrap();
        assert_eq!(report.unavailable[0].check, Check::Grammar);
    }

    #[test]
    fn grammar_issues_are_reported() {
        let report = Engine::new()
            .analyze("He are late.", &[Check::Grammar])
            .unwrap();
        let grammar = report.grammar.unwrap();
        assert_eq!(grammar.service, "rule-based");
        assert!(!grammar.issues.is_empty());
    }

    #[test]
    fn custom_corpus_is_used() {
        let corpus = ReferenceCorpus::new(["Rust is a systems programming language."]).unwrap();
        let report = Engine::new()
            .with_corpus(corpus)
            .plagiarism("Rust is a systems programming language.")
            .unwrap();
        assert_eq!(report.summary.plagiarism_score, "100.0%");
        assert_eq!(
            report.closest_reference.as_deref(),
            Some("Rust is a systems programming language.")
        );
    }

    #[test]
    fn tone_cap_is_configurable() {
        let text = format!("{}Awful.", "The cat sat on the mat. ".repeat(3));
        let capped = Engine::new().with_tone_char_cap(10).tone(&text).unwrap();
        assert!(capped.truncated);
        assert_eq!(capped.tone_value, 0.0);
        let full = Engine::new().tone(&text).unwrap();
        assert!(full.tone_value < 0.0);
    }

    #[test]
    fn from_config_applies_overrides() {
        let config = Config {
            tone_char_cap: Some(42),
            grammar_timeout_ms: Some(10),
            reference_corpus: Some(crate::config::CorpusConfig {
                entries: Some(vec!["Only entry.".to_string()]),
                file: None,
            }),
            lexicon: Some([("stellar".to_string(), 0.9)].into_iter().collect()),
            ..Config::default()
        };
        let engine = Engine::from_config(&config, Utf8Path::new("/tmp")).unwrap();
        assert_eq!(engine.corpus().len(), 1);
        let tone = engine.tone("A stellar result.").unwrap();
        assert_eq!(tone.summary.dominant_tone, "Highly Positive");
    }

    #[test]
    fn from_config_rejects_empty_corpus() {
        let config = Config {
            reference_corpus: Some(crate::config::CorpusConfig {
                entries: Some(vec!["   ".to_string()]),
                file: None,
            }),
            ..Config::default()
        };
        assert!(Engine::from_config(&config, Utf8Path::new("/tmp")).is_err());
    }

    #[test]
    fn check_names_parse() {
        assert_eq!("Tone".parse::<Check>(), Ok(Check::Tone));
        assert_eq!("plagiarism".parse::<Check>(), Ok(Check::Similarity));
        let err = "spelling".parse::<Check>().unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnknownCheck {
                name: "spelling".to_string(),
                available: "readability, tone, similarity, grammar".to_string(),
            }
        );
        assert_eq!(
            parse_checks(&["tone", "tone", "readability"]).unwrap(),
            vec![Check::Tone, Check::Readability]
        );
        assert_eq!(parse_checks::<&str>(&[]).unwrap(), Check::ALL.to_vec());
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(100.0), "100.0%");
        assert_eq!(format_percent(45.6666), "45.67%");
        assert_eq!(format_percent(45.5), "45.5%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(12.004), "12.0%");
    }

    #[test]
    fn report_serializes_payload_shapes() {
        let report = Engine::new()
            .analyze("The cat sat.", &[Check::Readability, Check::Similarity])
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["readability"]["summary"]["overall_readability"].is_string());
        assert!(json["readability"]["raw_scores"]["dale_chall_score"].is_number());
        assert!(json["plagiarism"]["summary"]["plagiarism_score"].is_string());
        assert!(json["plagiarism"]["similarity_reference"].is_number());
        assert!(json.get("tone").is_none());
        assert!(json.get("unavailable").is_none());
    }
}
