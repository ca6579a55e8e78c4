//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tptags")]
#[command(about = "Validate and normalize tracing policy tags", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the tags of a policy file
    Check {
        /// Path to a TOML policy file
        policy: PathBuf,

        /// Wrap each stored tag in double quotes
        #[arg(short, long)]
        quoted: bool,
    },

    /// Validate tags given on the command line
    Validate {
        /// Tags to validate, in order
        tags: Vec<String>,

        /// Wrap each stored tag in double quotes
        #[arg(short, long)]
        quoted: bool,
    },

    /// List the default tags
    Defaults,
}
