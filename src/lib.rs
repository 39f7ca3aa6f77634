//! PhraseSync - transcript-synchronized playback
//!
//! Builds a timeline from a multi-speaker script and keeps the current
//! phrase in step with a playback position.
//!
//! - [`timeline`]: interleave speakers' phrases and stamp start times
//! - [`tracker`]: which phrase holds a position, previous/next boundary
//! - [`selection`]: phrase identity and the selected phrase
//! - [`sync`]: sampling loop that drives the selection from a transport
//! - [`player`]: full-screen terminal surface
//!
//! ```
//! use phrasesync::{Script, Timeline};
//!
//! let script = Script::from_json(r#"{
//!     "speakers": [
//!         { "name": "John", "phrases": [{ "words": "Hi", "time": 1000 }] },
//!         { "name": "Jane", "phrases": [{ "words": "Hey", "time": 500 }] }
//!     ],
//!     "pause": 100
//! }"#).unwrap();
//! let timeline = Timeline::from_script(&script);
//!
//! assert_eq!(timeline.start_times(), &[0, 1100]);
//! assert_eq!(timeline.current_index(1099), Some(0));
//! assert_eq!(timeline.rewind(0), 1100);
//! assert_eq!(timeline.forward(1100), 0);
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod script;
pub mod selection;
pub mod sync;
pub mod timeline;
pub mod tracker;
pub mod transport;

/// Milliseconds on the playback clock.
pub type Millis = u64;

pub use config::Config;
pub use script::{Phrase, Script, ScriptError, Speaker};
pub use selection::{phrases_equal, PhraseKey, Selection};
pub use sync::{PlaybackSession, SyncUpdate};
pub use timeline::{build, TimedPhrase, Timeline};
pub use transport::{SimulatedTransport, Transport, TransportError, TransportStatus};
