//! Plagiarism command: similarity against the reference corpus.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textgauge_core::Engine;

use super::read_document;

/// Arguments for the `plagiarism` subcommand.
#[derive(Args, Debug)]
pub struct PlagiarismArgs {
    /// File to compare.
    pub file: Utf8PathBuf,

    /// Print the reference text that matched best.
    #[arg(long)]
    pub show_match: bool,
}

/// Compare a file against the reference corpus.
#[instrument(name = "cmd_plagiarism", skip_all, fields(file = %args.file))]
pub fn cmd_plagiarism(
    args: PlagiarismArgs,
    global_json: bool,
    engine: &Engine,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, references = engine.corpus().len(), "executing plagiarism command");

    let content = read_document(&args.file, max_input_bytes)?;
    let report = engine
        .plagiarism(&content)
        .with_context(|| format!("failed to compare {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let flagged = report.summary.verdict != engine.table().plagiarism.otherwise.label;
    let verdict = if flagged {
        report.summary.verdict.red().to_string()
    } else {
        report.summary.verdict.green().to_string()
    };

    println!("{}", args.file.bold());
    println!(
        "  {} {} ({})",
        "Similarity:".cyan(),
        report.summary.plagiarism_score,
        verdict,
    );
    println!("  {}", report.summary.feedback);
    if args.show_match
        && let Some(reference) = &report.closest_reference
    {
        println!("  {} {}", "Closest reference:".dimmed(), reference);
    }

    Ok(())
}
