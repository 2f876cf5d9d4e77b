//! Tone command.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textgauge_core::Engine;

use super::read_document;

/// Arguments for the `tone` subcommand.
#[derive(Args, Debug)]
pub struct ToneArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

/// Score the tone of a file.
#[instrument(name = "cmd_tone", skip_all, fields(file = %args.file))]
pub fn cmd_tone(
    args: ToneArgs,
    global_json: bool,
    engine: &Engine,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing tone command");

    let content = read_document(&args.file, max_input_bytes)?;
    let report = engine
        .tone(&content)
        .with_context(|| format!("failed to score tone of {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let value = format!("{:+.2}", report.tone_value);
    let value = if report.tone_value > 0.0 {
        value.green().to_string()
    } else if report.tone_value < 0.0 {
        value.red().to_string()
    } else {
        value
    };

    println!("{}", args.file.bold());
    println!(
        "  {} {} ({}, confidence {:.2}%)",
        "Tone:".cyan(),
        report.summary.dominant_tone,
        value,
        report.summary.confidence,
    );
    println!("  {}", report.summary.feedback);
    if report.truncated {
        println!(
            "  {}",
            "Only the opening of the document was scored.".dimmed()
        );
    }

    Ok(())
}
