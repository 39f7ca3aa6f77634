//! Status bar rendering for the terminal player.
//!
//! Displays playback state, the selected phrase and keyboard shortcuts.

use std::io::{self, Write};

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

/// What the status bar shows besides the fixed shortcuts.
#[derive(Debug, Clone, Copy)]
pub struct StatusInfo<'a> {
    pub playing: bool,
    /// 0-based index of the selected phrase
    pub selected: Option<usize>,
    pub phrase_count: usize,
    pub speaker: Option<&'a str>,
    pub follow: bool,
}

/// Phrase counter text, e.g. `2/12` or `-/12`.
pub fn phrase_counter(selected: Option<usize>, phrase_count: usize) -> String {
    match selected {
        Some(index) => format!("{}/{}", index + 1, phrase_count),
        None => format!("-/{}", phrase_count),
    }
}

/// Render a separator line.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
pub fn render_separator_line(stdout: &mut io::Stdout, width: u16, row: u16) -> Result<()> {
    let mut output = String::with_capacity(width as usize * 3 + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1)); // Move + dark gray
    for _ in 0..width {
        output.push('─');
    }
    output.push_str("\x1b[0m");
    write!(stdout, "{}", output)?;
    Ok(())
}

/// Render the status/controls bar.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `info` - Playback details to show
pub fn render_status_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    info: &StatusInfo<'_>,
) -> Result<()> {
    const WHITE: &str = "\x1b[97m";
    const GREEN: &str = "\x1b[32m";
    const DARK_GREY: &str = "\x1b[90m";
    const YELLOW: &str = "\x1b[33m";
    const CYAN: &str = "\x1b[36m";
    const RESET: &str = "\x1b[0m";

    let mut output = String::with_capacity(256);
    let mut visible_len: usize = 0;
    let mut push = |output: &mut String, color: &str, text: &str| {
        output.push_str(color);
        output.push_str(text);
        visible_len += text.width();
    };

    output.push_str(&format!("\x1b[{};1H", row + 1));

    // ▶ when paused (press to play), ⏸ while playing
    let state = if info.playing { " ⏸  " } else { " ▶  " };
    push(&mut output, WHITE, state);

    push(&mut output, DARK_GREY, "phrase:");
    push(
        &mut output,
        WHITE,
        &format!("{} ", phrase_counter(info.selected, info.phrase_count)),
    );

    if let Some(speaker) = info.speaker {
        push(&mut output, YELLOW, &format!("{} ", speaker));
    }

    if info.follow {
        push(&mut output, GREEN, "[follow] ");
    }

    let play_action = if info.playing { ":pause " } else { ":play " };
    push(&mut output, DARK_GREY, "│ ");
    push(&mut output, CYAN, "space");
    push(&mut output, DARK_GREY, play_action);
    push(&mut output, CYAN, "←→");
    push(&mut output, DARK_GREY, ":phrase ");
    push(&mut output, CYAN, "↵");
    push(&mut output, DARK_GREY, ":jump ");
    push(&mut output, CYAN, "f");
    push(&mut output, DARK_GREY, ":fol ");
    push(&mut output, CYAN, "?");
    push(&mut output, DARK_GREY, ":hlp ");
    push(&mut output, CYAN, "q");
    push(&mut output, DARK_GREY, ":quit");

    // Pad to full width to overwrite any leftover content
    let padding = (width as usize).saturating_sub(visible_len);
    for _ in 0..padding {
        output.push(' ');
    }

    output.push_str(RESET);
    write!(stdout, "{}", output)?;

    Ok(())
}
