//! Runtime configuration for the ledger binary

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "tiered-ledger", version, about = "Replay an account instruction script")]
pub struct Cli {
    /// Instruction script; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Write a CSV summary of every account to this file after the run
    #[arg(long, value_name = "FILE")]
    pub summary: Option<PathBuf>,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

/// Ledger binary configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub summary: Option<PathBuf>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when RUST_LOG is unset
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            summary: cli.summary,
            logging: LoggingConfig {
                level: cli.log_level,
                json: cli.log_json,
            },
        }
    }
}
