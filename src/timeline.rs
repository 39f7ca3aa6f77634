//! Timeline construction.
//!
//! Turns a multi-speaker script into a single ordered list of phrases,
//! each stamped with its absolute start time on the playback clock.
//! Speakers take turns: turn 0 of every speaker, then turn 1 of every
//! speaker that still has one, and so on.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::script::{Script, ScriptError, Speaker};
use crate::Millis;

/// A phrase stamped with its absolute start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimedPhrase {
    /// Name of the speaker who says this phrase
    pub speaker: String,
    /// Spoken text
    pub words: String,
    /// Absolute start time in milliseconds
    #[serde(rename = "startTime")]
    pub start_time: Millis,
}

/// Build the interleaved, time-stamped phrase list.
///
/// The clock starts at 0 and advances by `phrase.time + pause` after every
/// emitted phrase. Speakers without a phrase for the current turn are
/// skipped and do not move the clock.
pub fn build(speakers: &[Speaker], pause: Millis) -> Vec<TimedPhrase> {
    interleave(speakers, pause).map(|(phrase, _)| phrase).collect()
}

/// Emission-order iterator of `(phrase, spoken duration)`.
fn interleave(
    speakers: &[Speaker],
    pause: Millis,
) -> impl Iterator<Item = (TimedPhrase, Millis)> + '_ {
    let max_turns = speakers.iter().map(|s| s.phrases.len()).max().unwrap_or(0);

    (0..max_turns)
        .flat_map(move |turn| {
            speakers
                .iter()
                .filter_map(move |speaker| speaker.phrases.get(turn).map(|p| (speaker, p)))
        })
        .scan(0, move |clock: &mut Millis, (speaker, phrase)| {
            let start_time = *clock;
            *clock = clock.saturating_add(phrase.time).saturating_add(pause);
            Some((
                TimedPhrase {
                    speaker: speaker.name.clone(),
                    words: phrase.words.clone(),
                    start_time,
                },
                phrase.time,
            ))
        })
}

/// The full, read-only timeline of a session.
///
/// Holds the phrases in emission order together with the parallel list of
/// start times used for interval search.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    phrases: Vec<TimedPhrase>,
    start_times: Vec<Millis>,
    end_ms: Millis,
}

impl Timeline {
    /// Build the timeline for a script.
    pub fn from_script(script: &Script) -> Self {
        let mut phrases = Vec::with_capacity(script.phrase_count());
        let mut end_ms = 0;
        for (phrase, spoken) in interleave(&script.speakers, script.pause) {
            end_ms = phrase.start_time.saturating_add(spoken);
            phrases.push(phrase);
        }
        Self::with_end(phrases, end_ms)
    }

    /// Wrap an already built phrase list. The spoken end is taken to be the
    /// last start time.
    pub fn new(phrases: Vec<TimedPhrase>) -> Self {
        let end_ms = phrases.last().map_or(0, |p| p.start_time);
        Self::with_end(phrases, end_ms)
    }

    fn with_end(phrases: Vec<TimedPhrase>, end_ms: Millis) -> Self {
        let start_times = phrases.iter().map(|p| p.start_time).collect();
        Self {
            phrases,
            start_times,
            end_ms,
        }
    }

    /// Load a script file and build a timeline that passes
    /// [`Timeline::check_keys`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let script = Script::load(path)?;
        let timeline = Self::from_script(&script);
        timeline.check_keys()?;
        tracing::info!(
            phrases = timeline.len(),
            end_ms = timeline.end_ms(),
            "timeline built"
        );
        Ok(timeline)
    }

    /// Verify no two phrases share the same `(start_time, speaker)` pair.
    pub fn check_keys(&self) -> Result<(), ScriptError> {
        let mut seen = HashSet::with_capacity(self.phrases.len());
        for phrase in &self.phrases {
            if !seen.insert((phrase.start_time, phrase.speaker.as_str())) {
                return Err(ScriptError::DuplicatePhraseKey {
                    start_ms: phrase.start_time,
                    speaker: phrase.speaker.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn phrases(&self) -> &[TimedPhrase] {
        &self.phrases
    }

    /// Start times, parallel to [`Timeline::phrases`].
    pub fn start_times(&self) -> &[Millis] {
        &self.start_times
    }

    pub fn get(&self, index: usize) -> Option<&TimedPhrase> {
        self.phrases.get(index)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Time at which the last phrase finishes being spoken (0 when empty).
    pub fn end_ms(&self) -> Millis {
        self.end_ms
    }
}
