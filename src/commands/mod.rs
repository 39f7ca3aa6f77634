//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod locate;
pub mod play;
pub mod timeline;

use std::path::PathBuf;

use anyhow::{Context, Result};

use phrasesync::{Config, Timeline};

/// Resolve the script argument against the config and build its timeline.
pub fn load_timeline(config: &Config, script: Option<PathBuf>) -> Result<Timeline> {
    let path = config.resolve_script(script)?;
    Timeline::load(&path).with_context(|| format!("Failed to load script: {}", path.display()))
}
