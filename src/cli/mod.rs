//! Command-line surface for the `skills` binary.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod output;

pub use commands::Commands;
pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "skills",
    version,
    about = "Browse, filter and count the skill catalog",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: <config dir>/skill-catalog/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub robot: bool,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Site root serving data/skills.json
    #[arg(long, global = true)]
    pub source_url: Option<String>,

    /// Local catalog JSON file
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Use only the catalog embedded in the binary
    #[arg(long, global = true)]
    pub offline: bool,
}

impl Cli {
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.robot {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}
