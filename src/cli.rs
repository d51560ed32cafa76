use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rowlab")]
#[command(author, version, about = "Database performance demonstration tool")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Populate the test_records table with synthetic rows
    Seed {
        /// Number of rows to insert (defaults to the configured count)
        #[arg(long)]
        count: Option<u64>,
    },

    /// Walk existing records one query at a time and report the elapsed time
    Scan,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
