//! Command line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::Millis;

/// Follow a timed multi-speaker script phrase by phrase.
#[derive(Debug, Parser)]
#[command(name = "phrasesync", version, about, long_about = None)]
pub struct Cli {
    /// Log debug output (overridden by PHRASESYNC_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a script in the terminal
    Play {
        /// Script file (defaults to script.default_path from the config)
        script: Option<PathBuf>,

        /// Start playing immediately
        #[arg(long)]
        autoplay: bool,
    },

    /// Print the timeline built from a script
    Timeline {
        /// Script file (defaults to script.default_path from the config)
        script: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the phrase at a position and the rewind/forward targets
    Locate {
        /// Position on the playback clock in milliseconds
        #[arg(value_name = "POSITION_MS")]
        position: Millis,

        /// Script file (defaults to script.default_path from the config)
        script: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Inspect the configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}
