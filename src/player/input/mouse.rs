//! Mouse input handling for the terminal player.
//!
//! Handles click-to-seek on the progress bar, click-to-jump on transcript
//! rows and wheel scrolling.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::player::input::report;
use crate::player::render::click_fraction;
use crate::player::state::{InputResult, PlayerState};
use crate::sync::{Clock, PlaybackSession};
use crate::transport::Transport;

/// Rows scrolled per wheel step.
const WHEEL_STEP: isize = 3;

/// Handle a mouse event.
pub fn handle_mouse_event<T: Transport, C: Clock>(
    mouse: MouseEvent,
    state: &mut PlayerState,
    session: &mut PlaybackSession<'_, T, C>,
) -> InputResult {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if !state.show_help => {
            if mouse.row == state.progress_row() {
                if let Some(fraction) = click_fraction(state.term_cols, mouse.column) {
                    report("seek", session.seek_fraction(fraction));
                    state.needs_render = true;
                }
            } else if let Some(index) = state.phrase_at_row(mouse.row) {
                state.cursor = index;
                report("jump to phrase", session.tap(index));
                state.needs_render = true;
            }
        }
        MouseEventKind::ScrollUp => state.scroll_by(-WHEEL_STEP),
        MouseEventKind::ScrollDown => state.scroll_by(WHEEL_STEP),
        _ => {}
    }

    InputResult::Continue
}
