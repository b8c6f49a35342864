use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "graphdiscrim",
    version,
    about = "Discriminability of repeated connectome measurements"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the discriminability statistic of one or more datasets
    Stat {
        /// Directories of edge-list files, one dataset each
        #[arg(value_name = "DIR", required = true)]
        dirs: Vec<PathBuf>,
        /// Use raw edge weights instead of pass-to-ranks
        #[arg(long)]
        no_ptr: bool,
        /// Keep samples whose label occurs only once
        #[arg(long)]
        keep_singletons: bool,
        /// Print the per-sample reliability density means
        #[arg(long, short)]
        detail: bool,
    },
    /// Write the feature matrix and label vector as delimited text
    Export {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
        /// Output directory (defaults to the working directory)
        #[arg(long, short, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Output file prefix (defaults to the dataset directory name)
        #[arg(long)]
        name: Option<String>,
        /// Use raw edge weights instead of pass-to-ranks
        #[arg(long)]
        no_ptr: bool,
    },
    /// Show the canonical vertex set and isolates per graph
    Vertices {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
}

/// Arguments for the Stat command (used by handlers)
#[derive(Debug, Clone, Default)]
pub struct StatArgs {
    pub dirs: Vec<PathBuf>,
    pub no_ptr: bool,
    pub keep_singletons: bool,
    pub detail: bool,
}

/// Arguments for the Export command (used by handlers)
#[derive(Debug, Clone, Default)]
pub struct ExportArgs {
    pub dir: PathBuf,
    pub out: Option<PathBuf>,
    pub name: Option<String>,
    pub no_ptr: bool,
}
