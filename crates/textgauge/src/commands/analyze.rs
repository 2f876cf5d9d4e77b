//! Analyze command: every scorer in one pass.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textgauge_core::{Check, Engine};

use super::read_document;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Checks to run (comma-separated). Omit for all checks.
    #[arg(long, value_delimiter = ',', value_enum)]
    pub checks: Vec<Check>,
}

/// Run the requested checks on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    engine: &Engine,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, checks = ?args.checks, "executing analyze command");

    let content = read_document(&args.file, max_input_bytes)?;
    let checks = if args.checks.is_empty() {
        Check::ALL.to_vec()
    } else {
        args.checks
    };

    let report = engine
        .analyze(&content, &checks)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Text output, section by section
    println!("{}", args.file.bold());

    if let Some(ref r) = report.readability {
        println!(
            "\n  {} {}, {} ({}), {}",
            "Readability:".cyan(),
            r.summary.overall_readability,
            r.summary.education_level,
            r.summary.sentence_complexity,
            r.summary.word_simplicity,
        );
        println!(
            "    Flesch {:.1}, average grade {:.1}, {} difficult words",
            r.raw_scores.flesch_reading_ease,
            r.raw_scores.average_grade,
            r.raw_scores.difficult_words,
        );
    }

    if let Some(ref t) = report.tone {
        println!(
            "\n  {} {} ({:+.2})",
            "Tone:".cyan(),
            t.summary.dominant_tone,
            t.tone_value,
        );
    }

    if let Some(ref p) = report.plagiarism {
        println!(
            "\n  {} {} ({})",
            "Similarity:".cyan(),
            p.summary.plagiarism_score,
            p.summary.verdict,
        );
    }

    if let Some(ref g) = report.grammar {
        if g.issues.is_empty() {
            println!("\n  {} no issues", "Grammar:".cyan());
        } else {
            println!("\n  {} {} issues", "Grammar:".yellow(), g.issues.len());
            for issue in &g.issues {
                match &issue.excerpt {
                    Some(excerpt) => println!(
                        "    sentence {}: {} (\"{}\")",
                        issue.sentence, issue.message, excerpt
                    ),
                    None => println!("    sentence {}: {}", issue.sentence, issue.message),
                }
            }
        }
    }

    for skipped in &report.unavailable {
        println!(
            "\n  {} {} unavailable: {}",
            "Skipped:".dimmed(),
            skipped.check,
            skipped.reason,
        );
    }

    Ok(())
}
