//! Terminal playback surface
//!
//! Draws the transcript with the selected phrase highlighted, a progress
//! bar with phrase boundaries and a status bar, and turns keyboard and
//! mouse input into session actions.
//!
//! # Architecture
//!
//! - `state`: PlayerState struct and shared types (InputResult)
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: Transcript, progress bar, status bar and help overlay
//!
//! # Usage
//!
//! ```no_run
//! use phrasesync::config::PlayerConfig;
//! use phrasesync::player::{play_script, PlaybackResult};
//! use std::path::Path;
//!
//! let result = play_script(Path::new("talk.json"), &PlayerConfig::default()).unwrap();
//! match result {
//!     PlaybackResult::Finished => println!("Finished"),
//!     PlaybackResult::Stopped { position_ms } => println!("Stopped at {}ms", position_ms),
//! }
//! ```

pub(crate) mod input;
mod native;
pub mod render;
pub mod state;

pub use input::handle_event;
pub use native::{play_script, play_timeline, PlaybackResult};
pub use state::{InputResult, PlayerState};
