//! Readability command: eight formulas and their classification.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use textgauge_core::Engine;
use textgauge_core::engine::ReadabilityReport;

use super::read_document;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Maximum acceptable average grade (mean of Fog, SMOG and ARI).
    #[arg(long)]
    pub max_grade: Option<f64>,
}

/// JSON output: the report plus the grade gate outcome.
#[derive(Serialize)]
struct GatedReport<'a> {
    #[serde(flatten)]
    report: &'a ReadabilityReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_grade: Option<f64>,
    over_max: bool,
}

/// Score readability of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    engine: &Engine,
    config_max_grade: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_grade = ?args.max_grade, "executing readability command");

    let content = read_document(&args.file, max_input_bytes)?;
    let max_grade = args.max_grade.or(config_max_grade);

    let report = engine
        .readability(&content)
        .with_context(|| format!("failed to check readability of {}", args.file))?;
    let grade = report.raw_scores.average_grade;
    let over_max = max_grade.is_some_and(|max| grade > max);

    if global_json {
        let gated = GatedReport {
            report: &report,
            max_grade,
            over_max,
        };
        println!("{}", serde_json::to_string_pretty(&gated)?);
        if over_max {
            bail!("{} averages grade {:.1}, over the maximum", args.file, grade);
        }
        return Ok(());
    }

    print_report(&args.file, &report);

    if let Some(max) = max_grade {
        if over_max {
            bail!(
                "{} averages grade {:.1} (max: {:.1}). Shorten sentences or use simpler words.",
                args.file,
                grade,
                max,
            );
        }
        println!(
            "\n{} {} averages grade {:.1} (max: {:.1})",
            "PASS:".green(),
            args.file,
            grade,
            max,
        );
    }

    Ok(())
}

fn print_report(file: &Utf8Path, report: &ReadabilityReport) {
    let s = &report.summary;
    let r = &report.raw_scores;

    println!("{}", file.bold());
    println!("  {} {}", "Overall readability:".cyan(), s.overall_readability);
    println!("  {} {}", "Education level:".cyan(), s.education_level);
    println!("  {} {}", "Sentence complexity:".cyan(), s.sentence_complexity);
    println!("  {} {}", "Word simplicity:".cyan(), s.word_simplicity);
    println!("\n  {}", s.insight);
    println!("  {} {}", "Suggestion:".yellow(), s.suggestion);

    println!("\n  {}", "Scores".bold().underline());
    let rows = [
        ("Flesch Reading Ease", r.flesch_reading_ease),
        ("Flesch-Kincaid Grade", r.flesch_kincaid_grade),
        ("Gunning Fog", r.gunning_fog_index),
        ("SMOG", r.smog_index),
        ("Automated Readability", r.automated_readability_index),
        ("Coleman-Liau", r.coleman_liau_index),
        ("Dale-Chall", r.dale_chall_score),
        ("Linsear Write", r.linsear_write_formula),
        ("Average grade", r.average_grade),
    ];
    for (label, value) in rows {
        println!("  {:<22} {:>7.2}", label.dimmed(), value);
    }
    println!(
        "  {:<22} {:>7}",
        "Difficult words".dimmed(),
        r.difficult_words
    );
    println!(
        "\n  {} sentences, {} words, {} syllables",
        report.counts.sentences, report.counts.words, report.counts.syllables,
    );
}
