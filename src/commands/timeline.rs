//! Timeline subcommand handler

use std::path::PathBuf;

use anyhow::Result;

use phrasesync::player::render::{pad_to_width, speaker_column_width};
use phrasesync::{Config, Millis, TimedPhrase};

use super::load_timeline;

/// Format milliseconds as `MM:SS.mmm`.
pub fn format_timestamp(ms: Millis) -> String {
    format!("{:02}:{:02}.{:03}", ms / 60_000, (ms / 1000) % 60, ms % 1000)
}

/// One table row: index, start time, speaker and words.
pub fn format_row(index: usize, phrase: &TimedPhrase, speaker_width: usize) -> String {
    let row = format!(
        "{:>3}  {}  {}  {}",
        index,
        format_timestamp(phrase.start_time),
        pad_to_width(&phrase.speaker, speaker_width),
        phrase.words
    );
    row.trim_end().to_string()
}

/// Print the timeline of a script.
#[cfg(not(tarpaulin_include))]
pub fn handle(script: Option<PathBuf>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let timeline = load_timeline(&config, script)?;

    if json {
        println!("{}", serde_json::to_string_pretty(timeline.phrases())?);
        return Ok(());
    }

    if timeline.is_empty() {
        println!("Timeline is empty");
        return Ok(());
    }

    let width = speaker_column_width(timeline.phrases());
    for (index, phrase) in timeline.phrases().iter().enumerate() {
        println!("{}", format_row(index, phrase, width));
    }
    Ok(())
}
