//! Tracing subscriber setup.
//!
//! Logs go to stderr unless a log file is given. The full-screen player
//! owns the terminal, so use a log file to see its output.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "PHRASESYNC_LOG";

/// Filter used when [`LOG_ENV`] is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "phrasesync=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}
