//! Locate subcommand handler

use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;

use phrasesync::sync::format_clock;
use phrasesync::{Config, Millis, Timeline};

use super::load_timeline;
use super::timeline::format_timestamp;

/// Text report of what sits at `position` on the timeline.
pub fn describe(timeline: &Timeline, position: Millis) -> Vec<String> {
    let phrase = match timeline.current_index(position) {
        Some(index) => {
            let phrase = &timeline.phrases()[index];
            format!(
                "#{}  {}  {}  ({})",
                index,
                phrase.speaker,
                phrase.words,
                format_timestamp(phrase.start_time)
            )
        }
        None => "none".to_string(),
    };

    vec![
        format!("position  {}ms  {}", position, format_clock(position)),
        format!("phrase    {}", phrase),
        format!("rewind    {}ms", timeline.rewind(position)),
        format!("forward   {}ms", timeline.forward(position)),
    ]
}

/// JSON report of what sits at `position` on the timeline.
pub fn describe_json(timeline: &Timeline, position: Millis) -> serde_json::Value {
    let index = timeline.current_index(position);
    json!({
        "position": position,
        "index": index,
        "phrase": index.and_then(|i| timeline.get(i)),
        "rewind": timeline.rewind(position),
        "forward": timeline.forward(position),
    })
}

/// Print the phrase at a position and the seek targets around it.
#[cfg(not(tarpaulin_include))]
pub fn handle(position: Millis, script: Option<PathBuf>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let timeline = load_timeline(&config, script)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&describe_json(&timeline, position))?
        );
    } else {
        for line in describe(&timeline, position) {
            println!("{}", line);
        }
    }
    Ok(())
}
