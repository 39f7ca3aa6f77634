//! Play subcommand handler

use std::path::PathBuf;

use anyhow::Result;

use phrasesync::player::{play_timeline, PlaybackResult};
use phrasesync::sync::format_clock;
use phrasesync::Config;

use super::load_timeline;

/// Open the terminal player on a script.
#[cfg(not(tarpaulin_include))]
pub fn handle(script: Option<PathBuf>, autoplay: bool) -> Result<()> {
    let config = Config::load()?;
    let timeline = load_timeline(&config, script)?;

    let mut player = config.player.clone();
    player.autoplay |= autoplay;

    match play_timeline(&timeline, &player)? {
        PlaybackResult::Finished => println!("Finished ({})", format_clock(timeline.end_ms())),
        PlaybackResult::Stopped { position_ms } => {
            println!(
                "Stopped at {} / {}",
                format_clock(position_ms),
                format_clock(timeline.end_ms())
            )
        }
    }
    Ok(())
}
