//! Phrase identity and the currently selected phrase.
//!
//! Phrases are compared by `(start_time, speaker)` rather than by value or
//! address: the same logical phrase may be cloned out of the timeline many
//! times, and two speakers may start at the same millisecond.

use crate::timeline::TimedPhrase;
use crate::Millis;

/// Identity key of a phrase on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhraseKey<'a> {
    pub start_time: Millis,
    pub speaker: &'a str,
}

impl TimedPhrase {
    pub fn key(&self) -> PhraseKey<'_> {
        PhraseKey {
            start_time: self.start_time,
            speaker: &self.speaker,
        }
    }
}

/// Whether two optional phrases refer to the same timeline entry.
///
/// False if either side is absent.
pub fn phrases_equal(a: Option<&TimedPhrase>, b: Option<&TimedPhrase>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.key() == b.key(),
        _ => false,
    }
}

/// Holder for the currently highlighted phrase.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<TimedPhrase>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&TimedPhrase> {
        self.current.as_ref()
    }

    /// Whether `phrase` is the selected one.
    pub fn is_selected(&self, phrase: &TimedPhrase) -> bool {
        phrases_equal(self.current(), Some(phrase))
    }

    /// Replace the selection unless it already holds an equal phrase.
    ///
    /// Returns true if the selection changed.
    pub fn update(&mut self, phrase: &TimedPhrase) -> bool {
        if self.is_selected(phrase) {
            return false;
        }
        self.current = Some(phrase.clone());
        true
    }

    /// Unconditionally select `phrase`.
    pub fn set(&mut self, phrase: TimedPhrase) {
        self.current = Some(phrase);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
