//! CLI command definitions

use clap::{Parser, ValueEnum};
use council_domain::Tier;
use std::path::PathBuf;

/// Output format for consultation results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with the per-role breakdown
    Full,
    /// Only the synthesized answer
    Answer,
    /// JSON output
    Json,
}

/// Consultation tier on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TierArg {
    Quick,
    Standard,
    Deep,
    Expert,
}

impl From<TierArg> for Tier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Quick => Tier::Quick,
            TierArg::Standard => Tier::Standard,
            TierArg::Deep => Tier::Deep,
            TierArg::Expert => Tier::Expert,
        }
    }
}

/// CLI arguments for council
#[derive(Parser, Debug)]
#[command(name = "council")]
#[command(author, version, about = "Tiered advisory council - one question, many perspectives, one answer")]
#[command(long_about = r#"
Council answers a question by consulting a tier-selected panel of advisory
roles, each backed by its own model, and synthesizing their responses into
one answer.

Tiers:
  quick      1 role   (~5-10s)   simple factual questions
  standard   3 roles  (~20-30s)  the default
  deep       5 roles  (~40-60s)  complex analysis
  expert     7 roles  (~60-120s) high-stakes decisions

Without --tier, a complexity classifier picks the tier from the question.

Configuration files are loaded from (in priority order):
1. --config <path>    Explicit config file
2. ./council.toml     Project-level config
3. ~/.config/council/config.toml   Global config

Example:
  council "What is a monad?"
  council --tier deep "Should we migrate the billing system to Rust?"
"#)]
pub struct Cli {
    /// The question to ask the council
    pub question: Option<String>,

    /// Force a tier instead of classifying the question
    #[arg(short, long, value_enum)]
    pub tier: Option<TierArg>,

    /// Only classify the question and print the suggested tier
    #[arg(long)]
    pub suggest: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "answer")]
    pub output: OutputFormat,

    /// Maximum characters per delivered output segment
    #[arg(long, value_name = "CHARS")]
    pub max_segment_len: Option<usize>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
