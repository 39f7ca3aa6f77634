//! Rendering components for the terminal player.
//!
//! This module contains all the UI rendering functions for the player:
//! transcript list, progress bar, status bar and help overlay.

mod help;
mod progress;
mod status;
mod transcript;

use std::io::{self, Write};

use anyhow::Result;

pub use help::{calc_help_start_col, calc_help_start_row, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{
    build_progress_bar_chars, click_fraction, progress_bar_width, render_progress_bar,
};
pub use status::{phrase_counter, render_separator_line, render_status_bar, StatusInfo};
pub use transcript::{
    format_phrase_line, pad_to_width, render_transcript, speaker_column_width, truncate_to_width,
};

use crate::player::state::PlayerState;
use crate::sync::{Clock, PlaybackSession};
use crate::transport::Transport;

/// Draw a full frame: transcript, separator, progress bar and status bar,
/// or the help overlay when it is open.
pub fn render_frame<T: Transport, C: Clock>(
    stdout: &mut io::Stdout,
    state: &PlayerState,
    session: &PlaybackSession<'_, T, C>,
) -> Result<()> {
    if state.show_help {
        render_help(stdout, state.term_cols, state.term_rows)?;
        stdout.flush()?;
        return Ok(());
    }

    let timeline = session.timeline();
    let selected = session.selected_index();

    render_transcript(
        stdout,
        timeline.phrases(),
        selected,
        state.cursor,
        state.scroll_offset,
        state.view_rows,
        state.term_cols,
    )?;
    render_separator_line(stdout, state.term_cols, state.separator_row())?;

    let boundaries = if state.show_boundaries {
        timeline.start_times()
    } else {
        &[]
    };
    render_progress_bar(
        stdout,
        state.term_cols,
        state.progress_row(),
        &session.view(),
        boundaries,
    )?;

    render_status_bar(
        stdout,
        state.term_cols,
        state.status_row(),
        &StatusInfo {
            playing: session.is_playing(),
            selected,
            phrase_count: timeline.len(),
            speaker: session.selected().map(|p| p.speaker.as_str()),
            follow: state.follow,
        },
    )?;

    stdout.flush()?;
    Ok(())
}
