//! Command line argument parsing for the Sentia CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sentia - tweet preprocessing and Naive Bayes sentiment classification
#[derive(Parser, Debug, Clone)]
#[command(name = "sentia")]
#[command(about = "Tweet preprocessing and Naive Bayes sentiment classification")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Sentia Contributors")]
#[command(long_about = None)]
pub struct SentiaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Pipeline configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SENTIA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SentiaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show how one text is normalized, filtered and stemmed
    Analyze(AnalyzeArgs),

    /// Build the vocabulary of a dataset
    Vocabulary(VocabularyArgs),

    /// Train on a dataset and classify texts
    Classify(ClassifyArgs),

    /// Train and score on a held-out split of a dataset
    Evaluate(EvaluateArgs),
}

/// Arguments for analyzing a text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Raw text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for building a vocabulary
#[derive(Parser, Debug, Clone)]
pub struct VocabularyArgs {
    /// Dataset file (JSON array or JSON lines of {"text", "label"})
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Number of most common stems to show
    #[arg(short, long, default_value = "20")]
    pub top: usize,
}

/// Arguments for classifying texts
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Training dataset file
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Texts to classify
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

/// Arguments for evaluating on a held-out split
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Dataset file
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Share of the dataset held out for testing
    #[arg(long, default_value = "0.2")]
    pub test_ratio: f64,

    /// Seed of the train/test shuffle
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Number of most informative features to show
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
