//! Script input for the timeline builder.
//!
//! A script is the static, read-only description of a conversation:
//! every speaker with their phrases in speaking order, plus the fixed
//! pause inserted after each phrase. It is loaded once from JSON:
//!
//! ```json
//! {
//!   "speakers": [
//!     { "name": "John", "phrases": [{ "words": "Hi", "time": 1000 }] },
//!     { "name": "Jane", "phrases": [{ "words": "Hey", "time": 500 }] }
//!   ],
//!   "pause": 100
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Millis;

/// Errors that can occur while loading or validating a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to read script {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Speaker #{index} has an empty name")]
    EmptySpeakerName { index: usize },

    #[error("Speaker '{name}' is declared more than once")]
    DuplicateSpeaker { name: String },

    #[error("Two phrases by '{speaker}' start at {start_ms}ms")]
    DuplicatePhraseKey { start_ms: Millis, speaker: String },
}

/// A single phrase as authored in the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    /// Spoken text
    pub words: String,
    /// Spoken duration in milliseconds
    pub time: Millis,
}

impl Phrase {
    pub fn new(words: impl Into<String>, time: Millis) -> Self {
        Self {
            words: words.into(),
            time,
        }
    }
}

/// A speaker and their phrases, in speaking order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    /// Identifier, also used as the display label
    pub name: String,
    pub phrases: Vec<Phrase>,
}

impl Speaker {
    pub fn new(name: impl Into<String>, phrases: Vec<Phrase>) -> Self {
        Self {
            name: name.into(),
            phrases,
        }
    }
}

/// The full script: speakers in declaration order plus the pause constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub speakers: Vec<Speaker>,
    /// Silence inserted after every phrase, in milliseconds
    pub pause: Millis,
}

impl Script {
    /// Parse a script from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let script: Script = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    /// Read, parse and validate a script file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            speakers = script.speakers.len(),
            phrases = script.phrase_count(),
            "loaded script"
        );
        Ok(script)
    }

    /// Check the invariants the timeline builder relies on.
    ///
    /// Durations are already non-negative integers by construction, so only
    /// speaker identity needs checking here.
    pub fn validate(&self) -> Result<(), ScriptError> {
        let mut seen = HashSet::new();
        for (index, speaker) in self.speakers.iter().enumerate() {
            if speaker.name.trim().is_empty() {
                return Err(ScriptError::EmptySpeakerName { index });
            }
            if !seen.insert(speaker.name.as_str()) {
                return Err(ScriptError::DuplicateSpeaker {
                    name: speaker.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Total number of phrases across all speakers.
    pub fn phrase_count(&self) -> usize {
        self.speakers.iter().map(|s| s.phrases.len()).sum()
    }
}
