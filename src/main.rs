//! PhraseSync - follow a timed multi-speaker script phrase by phrase

mod commands;

use anyhow::Result;
use clap::Parser;

use phrasesync::cli::{Cli, Commands, ConfigCommands};
use phrasesync::logging;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Play { script, autoplay } => commands::play::handle(script, autoplay),
        Commands::Timeline { script, json } => commands::timeline::handle(script, json),
        Commands::Locate {
            position,
            script,
            json,
        } => commands::locate::handle(position, script, json),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
