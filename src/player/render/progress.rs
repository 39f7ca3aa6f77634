//! Progress bar rendering for the terminal player.
//!
//! Displays playback progress with phrase boundary ticks.

use std::io::{self, Write};

use anyhow::Result;

use crate::sync::PlaybackView;
use crate::Millis;

/// Columns taken by padding and the ` MM:SS/MM:SS` time display.
pub const PROGRESS_CHROME_WIDTH: usize = 14;

/// Width of the bar itself for a terminal `width` columns wide.
pub fn progress_bar_width(width: u16) -> usize {
    (width as usize).saturating_sub(PROGRESS_CHROME_WIDTH)
}

/// Build the progress bar character array.
///
/// Creates a visual representation of the progress bar including
/// the playhead position and phrase boundary ticks.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `position_ms` - Current playback position
/// * `duration_ms` - Total duration
/// * `boundaries` - Phrase start times to mark
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where bar_chars contains the visual
/// representation and filled_count is the number of filled positions.
pub fn build_progress_bar_chars(
    bar_width: usize,
    position_ms: Millis,
    duration_ms: Millis,
    boundaries: &[Millis],
) -> (Vec<char>, usize) {
    let progress = if duration_ms > 0 {
        (position_ms as f64 / duration_ms as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    if duration_ms > 0 {
        for &start in boundaries {
            let pos = ((start as f64 / duration_ms as f64) * bar_width as f64) as usize;
            if pos < bar_width && bar[pos] != '⏺' {
                bar[pos] = '┊';
            }
        }
    }

    (bar, filled)
}

/// Render the progress bar with boundary ticks.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `view` - Current playhead snapshot
/// * `boundaries` - Phrase start times to mark (empty to hide)
pub fn render_progress_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    view: &PlaybackView,
    boundaries: &[Millis],
) -> Result<()> {
    let bar_width = progress_bar_width(width);
    let (bar, filled) =
        build_progress_bar_chars(bar_width, view.position_ms, view.duration_ms, boundaries);

    let time_display = format!(" {}/{}", view.elapsed_label(), view.total_label());

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1)); // Move cursor
    output.push_str("\x1b[48;5;236m "); // Dark gray background + padding

    const YELLOW: &str = "\x1b[33m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";
    const BLUE: &str = "\x1b[38;5;111m";

    output.push_str(YELLOW);
    for (i, &c) in bar.iter().enumerate() {
        if i < filled {
            if c == '┊' {
                output.push_str(BLUE);
                output.push(c);
                output.push_str(YELLOW);
            } else {
                output.push('━');
            }
        } else if i == filled {
            output.push_str(WHITE);
            output.push(c);
        } else if c == '┊' {
            output.push_str(BLUE);
            output.push(c);
        } else {
            output.push_str(DARK_GREY);
            output.push(c);
        }
    }

    output.push_str(GREY);
    output.push_str(&time_display);

    // Fill remaining width
    let used_width = 1 + bar_width + time_display.len();
    let remaining = (width as usize).saturating_sub(used_width);
    for _ in 0..remaining {
        output.push(' ');
    }

    output.push_str("\x1b[0m"); // Reset
    write!(stdout, "{}", output)?;

    Ok(())
}

/// Fraction of the bar under a click at `column`, if it hit the bar.
pub fn click_fraction(width: u16, column: u16) -> Option<f64> {
    let bar_start = 1u16;
    let bar_width = progress_bar_width(width);
    if bar_width == 0 || column < bar_start || column >= bar_start + bar_width as u16 {
        return None;
    }
    Some((column - bar_start) as f64 / bar_width as f64)
}
