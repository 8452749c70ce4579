//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for lookup results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Source attribution followed by the cleaned definition
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for carcino_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => carcino_domain::OutputFormat::Text,
            OutputFormat::Json => carcino_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for carcino
#[derive(Parser, Debug)]
#[command(name = "carcino")]
#[command(author, version, about = "Look up plain-language definitions of cancer-related terms")]
#[command(long_about = r#"
Carcino looks up plain-language definitions of medical and cancer-related terms.

Each term is resolved against an ordered list of sources:
1. MedlinePlus (U.S. National Library of Medicine) health topics
2. Wikipedia, when MedlinePlus has no match

The definition is shown with the name of the source that supplied it.

Configuration files are loaded from (in priority order):
1. --config <path>                 Explicit config file
2. ./carcino.toml                  Project-level config
3. CARCINO_<SECTION>__<KEY>        Environment variables
4. ~/.config/carcino/config.toml   Global config

Example:
  carcino "lung cancer"
  carcino --suggest canc
  carcino -o json metastasis
  carcino -i
"#)]
pub struct Cli {
    /// The term to look up (not required in interactive mode)
    pub term: Option<String>,

    /// Start interactive lookup mode
    #[arg(short, long)]
    pub interactive: bool,

    /// List corpus terms matching a partial input instead of looking one up
    #[arg(short, long, value_name = "PARTIAL")]
    pub suggest: Option<String>,

    /// Maximum number of suggestions
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Term list used for suggestions (one term per line)
    #[arg(long, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
