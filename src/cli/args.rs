//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Hierarchical exposure limits: roll up transaction amounts and tenors over a product tree and report breaches
#[derive(Parser, Debug)]
#[command(name = "rslimit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Project directory holding .rslimit.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Which transactions to check.
#[derive(Args, Debug, Clone, Default)]
pub struct BatchArgs {
    /// TOML transaction batch (default: built-in sample batch)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub transactions: Option<PathBuf>,

    /// Add the oversized sample transaction (500000 on Product 1A)
    #[arg(long)]
    pub oversized: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the product hierarchy with its limits
    Structure,

    /// Assign transactions and report breaches
    Validate {
        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Structure followed by validation results
    Report {
        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
