//! CLI argument definitions for skein

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for people
    #[default]
    Human,
    /// JSON for scripts
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "skein",
    version,
    about = "Graph analysis: paths, cliques, connectivity, influence"
)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "SKEIN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize a graph description file
    Info {
        /// Graph description file
        file: PathBuf,
    },
    /// Test whether the graph admits an Eulerian circuit
    Eulerian {
        /// Graph description file
        file: PathBuf,
        /// Test degrees only, without requiring connectivity
        #[arg(long)]
        skip_connectivity: bool,
    },
    /// Test whether the graph is connected
    Connected {
        /// Graph description file
        file: PathBuf,
    },
    /// Find a path between two vertices
    Path {
        /// Graph description file
        file: PathBuf,
        /// Start vertex id
        from: String,
        /// End vertex id
        to: String,
        /// Return any path (depth-first) instead of the shortest
        #[arg(long)]
        any: bool,
    },
    /// Grow a maximal clique
    Clique {
        /// Graph description file
        file: PathBuf,
        /// Seed vertex id (random when omitted)
        seed: Option<String>,
    },
    /// Rank vertices by influence propagation
    Rank {
        /// Graph description file
        file: PathBuf,
        /// Number of propagation rounds
        #[arg(long, default_value_t = 30)]
        iterations: usize,
    },
}
