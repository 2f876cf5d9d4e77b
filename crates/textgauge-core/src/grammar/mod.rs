//! Grammar checking behind a swappable service boundary.
//!
//! Scoring never depends on grammar. The engine calls a [`GrammarService`]
//! through [`check_with_timeout`], and a service that fails or runs past its
//! deadline makes the grammar section go missing from the report instead of
//! failing the request.
//!
//! [`RuleBasedChecker`] is the bundled service. Other implementations (a
//! remote grammar server, for instance) plug in through the same trait.

pub mod checker;

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use checker::{GrammarIssue, GrammarIssueKind, RuleBasedChecker, Severity, check_sentences};

use crate::error::GrammarError;

/// Default deadline for a grammar check.
pub const DEFAULT_GRAMMAR_TIMEOUT: Duration = Duration::from_millis(2_000);

/// A grammar checker.
pub trait GrammarService: Send + Sync {
    /// Short identifier used in reports and logs.
    fn name(&self) -> &str;

    /// Check a document.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError`] when the service cannot produce a result.
    fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError>;
}

/// What a grammar check produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarOutcome {
    /// The service found issues.
    Issues(Vec<GrammarIssue>),
    /// The service found nothing to report.
    Clean,
    /// The service failed or timed out.
    Unavailable(GrammarError),
}

/// Grammar section of an analysis report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GrammarReport {
    /// Service that produced the issues.
    pub service: String,
    /// Issues in document order.
    pub issues: Vec<GrammarIssue>,
}

/// Run `service` on its own thread and wait at most `timeout` for it.
///
/// A service that overruns keeps its thread until it returns; its result is
/// discarded.
#[tracing::instrument(skip(service, text), fields(service = service.name(), text_len = text.len()))]
pub fn check_with_timeout(
    service: Arc<dyn GrammarService>,
    text: &str,
    timeout: Duration,
) -> GrammarOutcome {
    let name = service.name().to_string();
    let (tx, rx) = mpsc::channel();
    let text = text.to_string();

    let spawned = thread::Builder::new()
        .name(format!("grammar-{name}"))
        .spawn(move || {
            // The receiver may be gone after a timeout.
            let _ = tx.send(service.check(&text));
        });
    if let Err(e) = spawned {
        return unavailable(GrammarError::Failed {
            service: name,
            reason: e.to_string(),
        });
    }

    match rx.recv_timeout(timeout) {
        Ok(Ok(issues)) if issues.is_empty() => GrammarOutcome::Clean,
        Ok(Ok(issues)) => {
            tracing::debug!(issues = issues.len(), "grammar check finished");
            GrammarOutcome::Issues(issues)
        }
        Ok(Err(e)) => unavailable(e),
        Err(mpsc::RecvTimeoutError::Timeout) => unavailable(GrammarError::Timeout {
            service: name,
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }),
        Err(mpsc::RecvTimeoutError::Disconnected) => unavailable(GrammarError::Failed {
            service: name,
            reason: "worker exited without a result".to_string(),
        }),
    }
}

fn unavailable(error: GrammarError) -> GrammarOutcome {
    tracing::warn!(%error, "grammar service unavailable");
    GrammarOutcome::Unavailable(error)
}
