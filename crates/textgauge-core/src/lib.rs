//! Core library for textgauge.
//!
//! Scores English prose for readability, tone and similarity to a reference
//! corpus, and maps the raw numbers to human-readable labels through a
//! configurable classification table.
//!
//! # Modules
//!
//! - [`tokens`] - Sentence and word tokenization shared by every scorer
//! - [`readability`] - The eight readability formulas
//! - [`tone`] - Lexicon-based polarity with negation
//! - [`similarity`] - Sequence-matching similarity against a reference corpus
//! - [`classify`] - Threshold tables that turn metrics into labels
//! - [`grammar`] - Optional grammar checks behind a service trait
//! - [`engine`] - Runs the scorers and assembles the reports
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use textgauge_core::{Check, Engine};
//!
//! let engine = Engine::new();
//! let report = engine
//!     .analyze("The cat sat on the mat.", &Check::ALL)
//!     .expect("non-empty input");
//!
//! if let Some(readability) = report.readability {
//!     println!("{}", readability.summary.overall_readability);
//! }
//! ```
#![deny(unsafe_code)]

pub mod classify;
pub mod config;
pub mod dictionaries;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod markdown;
pub mod readability;
pub mod similarity;
pub mod syllables;
pub mod text;
pub mod tokens;
pub mod tone;

pub use classify::{ClassificationResult, ClassificationTable, Metric, MetricSet, Outcome};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use engine::{
    AnalysisReport, Check, Engine, PlagiarismReport, ReadabilityReport, ToneReport, parse_checks,
};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult, GrammarError};
pub use grammar::{GrammarIssue, GrammarReport, GrammarService, RuleBasedChecker};
pub use readability::{ReadabilityScores, TextCounts};
pub use similarity::{ReferenceCorpus, SimilarityScore};
pub use tokens::{Tokens, tokenize};
pub use tone::{Lexicon, ToneScore};

/// Default cap on input size for file and MCP input (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
