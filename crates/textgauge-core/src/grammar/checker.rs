//! Rule-based grammar checks.
//!
//! Pattern rules over single sentences: subject-verb agreement, double
//! negatives, comma splices, repeated spaces and missing terminal
//! punctuation. They are cheap and deterministic and will miss anything a
//! parser would be needed for.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::GrammarService;
use crate::error::GrammarError;
use crate::text;

/// A detected grammar issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GrammarIssue {
    /// Which rule fired.
    pub kind: GrammarIssueKind,
    /// Human-readable description.
    pub message: String,
    /// Sentence number, counting from 1.
    pub sentence: usize,
    /// Text that triggered the rule, when the rule matches a span.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// How sure the rule is that this is an error.
    pub severity: Severity,
}

/// Grammar rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GrammarIssueKind {
    /// Singular subject with plural verb or the reverse.
    SubjectVerbAgreement,
    /// Negated verb followed by a negative pronoun or adverb.
    DoubleNegative,
    /// Independent clauses joined only by a comma.
    CommaSplice,
    /// Two or more spaces in a row.
    DoubleSpace,
    /// Last sentence has no `.`, `!` or `?`.
    MissingPunctuation,
}

/// Issue severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Style nit.
    Low,
    /// Probably worth fixing.
    Medium,
    /// Almost certainly wrong.
    High,
}

struct AgreementRule {
    pattern: Regex,
    message: &'static str,
    severity: Severity,
}

static AGREEMENT_RULES: LazyLock<Vec<AgreementRule>> = LazyLock::new(|| {
    vec![
        AgreementRule {
            pattern: Regex::new(r"\b(?:he|she|it)\s+(?:are|were|have|don't)\b")
                .expect("valid regex"),
            message: "Singular pronoun with plural verb",
            severity: Severity::High,
        },
        AgreementRule {
            pattern: Regex::new(r"\b(?:they|we|you)\s+(?:is|was|has|doesn't)\b")
                .expect("valid regex"),
            message: "Plural pronoun with singular verb",
            severity: Severity::High,
        },
        AgreementRule {
            pattern: Regex::new(r"\bi\s+(?:is|are|has)\b").expect("valid regex"),
            message: "\"I\" with third-person or plural verb",
            severity: Severity::High,
        },
    ]
});

static DOUBLE_NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:don't|doesn't|didn't|won't|can't|couldn't|shouldn't|wouldn't|isn't|aren't|wasn't|ain't)\s+(?:\w+\s+)?(?:no|nothing|nobody|never|nowhere|none)\b",
    )
    .expect("valid regex")
});

static REPEATED_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("valid regex"));

static CLAUSE_SUBJECTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "you", "he", "she", "it", "we", "they", "this", "that", "there",
    ]
    .into_iter()
    .collect()
});

static FINITE_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "am", "is", "are", "was", "were", "has", "have", "had", "do", "does", "did", "will",
        "would", "can", "could", "should", "shall", "may", "might", "must", "went", "goes",
        "made", "makes", "got", "gets", "said", "says", "knew", "knows", "thought", "thinks",
        "came", "comes", "took", "takes", "saw", "sees", "wanted", "wants", "looked", "looks",
        "used", "uses", "found", "finds", "gave", "gives", "told", "tells", "worked", "works",
        "called", "calls", "tried", "tries", "asked", "asks", "needed", "needs", "felt", "feels",
        "became", "becomes", "left", "leaves", "kept", "keeps", "began", "begins", "showed",
        "shows", "heard", "hears", "played", "plays", "moved", "moves", "lived", "lives",
        "happened", "happens", "wrote", "writes", "ran", "runs", "stood", "stands", "like",
        "likes", "liked", "love", "loves", "loved",
    ]
    .into_iter()
    .collect()
});

/// Bundled checker that runs the pattern rules in-process.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedChecker;

impl GrammarService for RuleBasedChecker {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        let sentences: Vec<&str> = text::split_sentences(text)
            .into_iter()
            .map(|s| s.text)
            .collect();
        Ok(check_sentences(&sentences))
    }
}

/// Run every rule over each sentence.
#[tracing::instrument(skip_all, fields(sentence_count = sentences.len()))]
pub fn check_sentences(sentences: &[&str]) -> Vec<GrammarIssue> {
    let mut issues = Vec::new();

    for (idx, sentence) in sentences.iter().enumerate() {
        let number = idx + 1;
        let lower = sentence.to_lowercase();

        for rule in AGREEMENT_RULES.iter() {
            if let Some(m) = rule.pattern.find(&lower) {
                issues.push(GrammarIssue {
                    kind: GrammarIssueKind::SubjectVerbAgreement,
                    message: rule.message.to_string(),
                    sentence: number,
                    excerpt: Some(m.as_str().to_string()),
                    severity: rule.severity,
                });
            }
        }

        if let Some(m) = DOUBLE_NEGATIVE.find(&lower) {
            issues.push(GrammarIssue {
                kind: GrammarIssueKind::DoubleNegative,
                message: "Double negative".to_string(),
                sentence: number,
                excerpt: Some(m.as_str().to_string()),
                severity: Severity::High,
            });
        }

        if is_comma_splice(sentence) {
            issues.push(GrammarIssue {
                kind: GrammarIssueKind::CommaSplice,
                message: "Independent clauses joined only by a comma".to_string(),
                sentence: number,
                excerpt: None,
                severity: Severity::Medium,
            });
        }

        if REPEATED_SPACES.is_match(sentence) {
            issues.push(GrammarIssue {
                kind: GrammarIssueKind::DoubleSpace,
                message: "Repeated spaces".to_string(),
                sentence: number,
                excerpt: None,
                severity: Severity::Low,
            });
        }
    }

    if let Some(last) = sentences.last() {
        let end = last.trim_end_matches(|c: char| {
            matches!(c, '"' | '\'' | ')' | ']' | '\u{201D}' | '\u{2019}')
        });
        if !end.is_empty() && !end.ends_with(['.', '!', '?']) {
            issues.push(GrammarIssue {
                kind: GrammarIssueKind::MissingPunctuation,
                message: "Missing terminal punctuation".to_string(),
                sentence: sentences.len(),
                excerpt: None,
                severity: Severity::Medium,
            });
        }
    }

    issues
}

/// Two comma-separated parts that each open with a subject pronoun followed
/// closely by a finite verb, with no conjunction after the comma.
fn is_comma_splice(sentence: &str) -> bool {
    let mut clauses = 0;
    for (idx, part) in sentence.split(',').enumerate() {
        let words: Vec<String> = part
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .collect();
        let after_conjunction = words.first().is_some_and(|w| {
            matches!(w.as_str(), "and" | "but" | "or" | "so" | "yet" | "nor" | "for")
        });
        if idx > 0 && after_conjunction {
            continue;
        }
        if opens_clause(&words) {
            clauses += 1;
        }
    }
    clauses >= 2
}

fn opens_clause(words: &[String]) -> bool {
    let Some(first) = words.first() else {
        return false;
    };
    CLAUSE_SUBJECTS.contains(first.as_str())
        && words
            .iter()
            .skip(1)
            .take(2)
            .any(|w| FINITE_VERBS.contains(w.as_str()))
}
