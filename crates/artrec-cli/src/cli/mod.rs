use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `artrec` binary.
#[derive(Debug, Parser)]
#[command(name = "artrec", version, about = "Offline article recommendations")]
pub struct Cli {
    /// Defaults to the demo when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format: text, json, table, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interaction log CSV (overrides data.interactions_path)
    #[arg(long, global = true)]
    pub interactions: Option<PathBuf>,

    /// Article catalog CSV (overrides data.articles_path)
    #[arg(long, global = true)]
    pub articles: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            interactions: self.interactions.clone(),
            articles: self.articles.clone(),
        }
    }
}
