//! Library interface for the `textgauge` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions via `xtask`.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                    Log filter (e.g., debug, textgauge=trace)
    TEXTGAUGE_LOG_PATH          Explicit log file path
    TEXTGAUGE_LOG_DIR           Log directory
    TEXTGAUGE_MAX_GRADE         Default maximum grade for `readability`
    TEXTGAUGE_TONE_CHAR_CAP     Characters considered by tone scoring
    TEXTGAUGE_GRAMMAR_TIMEOUT_MS
                                Grammar check deadline in milliseconds
";
/// Command-line interface definition for textgauge.
#[derive(Parser)]
#[command(name = "textgauge")]
#[command(about = "Readability, tone and similarity scoring for English prose", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Run readability, tone, similarity and grammar checks together
    Analyze(commands::analyze::AnalyzeArgs),

    /// Score readability with eight formulas and classify the result
    Readability(commands::readability::ReadabilityArgs),

    /// Score tone polarity
    Tone(commands::tone::ToneArgs),

    /// Compare a document against the reference corpus
    Plagiarism(commands::plagiarism::PlagiarismArgs),

    /// Show package information
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn analyze_accepts_comma_separated_checks() {
        let cli = Cli::try_parse_from([
            "textgauge",
            "analyze",
            "essay.txt",
            "--checks",
            "readability,plagiarism",
        ])
        .unwrap();
        let Some(Commands::Analyze(args)) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(
            args.checks,
            vec![
                textgauge_core::Check::Readability,
                textgauge_core::Check::Similarity
            ]
        );
    }

    #[test]
    fn unknown_check_is_rejected() {
        assert!(
            Cli::try_parse_from(["textgauge", "analyze", "essay.txt", "--checks", "spelling"])
                .is_err()
        );
    }
}
