//! Transcript rendering for the terminal player.
//!
//! One phrase per row: cursor mark, start time, speaker and words. The
//! selected phrase is drawn highlighted.

use std::io::{self, Write};

use anyhow::Result;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::sync::format_clock;
use crate::timeline::TimedPhrase;

/// Widest speaker column before names get truncated.
pub const MAX_SPEAKER_WIDTH: usize = 16;

/// Cut `text` so it fits in `width` display columns, ending with `…` when
/// something was cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pad or cut `text` to exactly `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_to_width(text, width);
    let used = out.width();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// Width of the speaker column for a set of phrases.
pub fn speaker_column_width(phrases: &[TimedPhrase]) -> usize {
    phrases
        .iter()
        .map(|p| p.speaker.width())
        .max()
        .unwrap_or(0)
        .min(MAX_SPEAKER_WIDTH)
}

/// Plain text of one transcript row, at most `width` columns.
pub fn format_phrase_line(
    phrase: &TimedPhrase,
    speaker_width: usize,
    is_cursor: bool,
    width: usize,
) -> String {
    let mark = if is_cursor { '›' } else { ' ' };
    let line = format!(
        "{} {}  {}  {}",
        mark,
        format_clock(phrase.start_time),
        pad_to_width(&phrase.speaker, speaker_width),
        phrase.words
    );
    truncate_to_width(line.trim_end(), width)
}

/// Render the visible part of the transcript.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `phrases` - All phrases of the timeline
/// * `selected` - Index of the selected phrase
/// * `cursor` - Index of the phrase under the keyboard cursor
/// * `scroll_offset` - First phrase to draw
/// * `rows` - Number of transcript rows
/// * `width` - Terminal width
pub fn render_transcript(
    stdout: &mut io::Stdout,
    phrases: &[TimedPhrase],
    selected: Option<usize>,
    cursor: usize,
    scroll_offset: usize,
    rows: usize,
    width: u16,
) -> Result<()> {
    const SELECTED: &str = "\x1b[48;5;24m\x1b[97m\x1b[1m";
    const CURSOR: &str = "\x1b[97m";
    const NORMAL: &str = "\x1b[37m";
    const RESET: &str = "\x1b[0m";

    let width = width as usize;
    let speaker_width = speaker_column_width(phrases);
    let mut output = String::with_capacity(rows * (width + 16));

    for row in 0..rows {
        output.push_str(&format!("\x1b[{};1H", row + 1));
        let index = scroll_offset + row;
        let Some(phrase) = phrases.get(index) else {
            output.push_str("\x1b[2K");
            continue;
        };

        let style = if selected == Some(index) {
            SELECTED
        } else if index == cursor {
            CURSOR
        } else {
            NORMAL
        };
        let line = format_phrase_line(phrase, speaker_width, index == cursor, width);
        output.push_str(style);
        output.push_str(&pad_to_width(&line, width));
        output.push_str(RESET);
    }

    write!(stdout, "{}", output)?;
    Ok(())
}
