//! Root CLI structure for bsp-rs

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bsp-rs")]
#[command(about = "List the assets Source engine maps depend on", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display header, lump and static prop information
    Info {
        /// Path to the BSP file
        file: PathBuf,
    },

    /// Dump the entity lump
    Entities {
        /// Path to the BSP file
        file: PathBuf,

        /// Only show entities with this classname
        #[arg(long)]
        classname: Option<String>,
    },

    /// List every asset the map references
    Assets {
        /// Path to the BSP file
        file: PathBuf,

        /// Key vocabulary file (.json, .yaml or .yml)
        #[arg(short, long, value_name = "FILE")]
        keys: Option<PathBuf>,

        /// Game folder used to resolve slideshow material directories
        #[arg(long, value_name = "DIR", env = "BSP_GAME_DIR")]
        game_dir: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Output format for asset listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Grouped, human readable listing
    Text,
    /// JSON object with one array per list
    Json,
}
