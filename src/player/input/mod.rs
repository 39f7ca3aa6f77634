//! Input handling for the terminal player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::Event;

use crate::player::state::{InputResult, PlayerState};
use crate::sync::{Clock, PlaybackSession};
use crate::transport::{Transport, TransportError};

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `state` - Mutable reference to player UI state
/// * `session` - The playback session user actions are forwarded to
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event<T: Transport, C: Clock>(
    event: Event,
    state: &mut PlayerState,
    session: &mut PlaybackSession<'_, T, C>,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, state, session),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state, session),
        Event::Resize(new_cols, new_rows) => {
            state.handle_resize(new_cols, new_rows);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, etc.
    }
}

/// Log a transport failure instead of tearing down the player.
pub(crate) fn report<V>(action: &str, result: Result<V, TransportError>) {
    if let Err(err) = result {
        tracing::warn!(action, error = %err, "transport rejected action");
    }
}
