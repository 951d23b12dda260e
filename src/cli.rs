//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate markdown documentation pages from a tour of annotated examples
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Examples directory path (relative to project root)
    #[arg(short, long)]
    pub examples: Option<PathBuf>,

    /// Site directory path (relative to project root)
    #[arg(short, long)]
    pub site: Option<PathBuf>,

    /// Config file name (default: tour.toml)
    #[arg(short = 'C', long, default_value = "tour.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a project with an empty tour and a default config
    Init {
        /// the name(path) of project directory, related to `root`
        name: Option<PathBuf>,
    },

    /// Parse every example and write all pages
    Build {
        /// Language tag for the fenced code blocks
        #[arg(long)]
        code_lang: Option<String>,
    },

    /// Parse every example and report problems without writing anything
    Check,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
