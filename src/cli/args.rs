//! Command line argument parsing for textcat CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::vectorizer::VectorMethod;

/// textcat - turn labeled text into classifier-ready feature vectors
#[derive(Parser, Debug, Clone)]
#[command(name = "textcat")]
#[command(about = "Text vectorization pipeline for category classifiers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextcatArgs {
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
    #[arg(long, value_name = "CONFIG_FILE", env = "TEXTCAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextcatArgs {
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
    /// Normalize a text with the configured rules
    Normalize(NormalizeArgs),

    /// Fit a vocabulary and show corpus statistics
    Fit(FitArgs),

    /// Encode a text into a feature vector
    Encode(EncodeArgs),

    /// Write the training set of a corpus as JSON
    Dataset(DatasetArgs),

    /// Decode a probability distribution into a category
    Decode(DecodeArgs),
}

/// Corpus and encoding options shared by the fitting commands
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Tab-delimited corpus file (category, text)
    #[arg(short, long, value_name = "CORPUS_FILE")]
    pub corpus: Option<PathBuf>,

    /// Feature encoding method
    #[arg(short, long)]
    pub method: Option<VectorMethod>,
}

/// Arguments for normalizing a text
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Raw text
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for fitting a vocabulary
#[derive(Parser, Debug, Clone)]
pub struct FitArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Export the vocabulary, one word per line
    #[arg(long, value_name = "VOCABULARY_FILE")]
    pub vocabulary_out: Option<PathBuf>,
}

/// Arguments for encoding a text
#[derive(Parser, Debug, Clone)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Raw text to encode
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for writing a training set
#[derive(Parser, Debug, Clone)]
pub struct DatasetArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Output file (JSON)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: PathBuf,
}

/// Arguments for decoding a distribution
#[derive(Parser, Debug, Clone)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Comma separated probabilities in category order, e.g. 0.02,0.95,0.03
    #[arg(value_name = "DISTRIBUTION")]
    pub distribution: String,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
