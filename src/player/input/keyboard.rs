//! Keyboard input handling for the terminal player.
//!
//! Handles all keyboard shortcuts including playback controls,
//! phrase navigation and view toggles.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::input::report;
use crate::player::state::{InputResult, PlayerState};
use crate::sync::{Clock, PlaybackSession};
use crate::transport::Transport;

/// Handle a keyboard event.
///
/// This is the main keyboard input handler that processes all key events
/// and updates state or returns control flow signals.
pub fn handle_key_event<T: Transport, C: Clock>(
    key: KeyEvent,
    state: &mut PlayerState,
    session: &mut PlaybackSession<'_, T, C>,
) -> InputResult {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if state.show_help {
        state.show_help = false;
        state.needs_render = true;
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return InputResult::Quit
        }

        // === Toggles ===
        KeyCode::Char('?') => state.toggle_help(),
        KeyCode::Char('f') => state.toggle_follow(),

        // === Playback ===
        KeyCode::Char(' ') => report("toggle play", session.toggle_play()),
        KeyCode::Home => report("restart", session.seek(0)),

        // === Phrase navigation ===
        KeyCode::Left | KeyCode::Char('h') => report("rewind", session.rewind()),
        KeyCode::Right | KeyCode::Char('l') => report("forward", session.forward()),
        KeyCode::Up | KeyCode::Char('k') => state.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => state.cursor_down(),
        KeyCode::Enter => report("jump to phrase", session.tap(state.cursor)),

        _ => return InputResult::Continue,
    }

    state.needs_render = true;
    InputResult::Continue
}
