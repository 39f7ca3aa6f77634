//! Player UI state
//!
//! Contains the `PlayerState` struct that holds everything the terminal
//! surface tracks on top of the playback session, as well as shared types
//! used across player modules.

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// UI state for the terminal player.
///
/// Playback itself (position, selection, transport) lives in the session;
/// this only tracks layout, the keyboard cursor and overlays.
#[derive(Debug)]
pub struct PlayerState {
    // === Transcript ===
    /// Phrase under the keyboard cursor
    pub cursor: usize,
    /// First phrase shown at the top of the transcript
    pub scroll_offset: usize,
    /// Number of phrases in the timeline
    pub phrase_count: usize,

    // === UI modes ===
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Whether the transcript follows the selected phrase
    pub follow: bool,
    /// Whether phrase boundaries are drawn on the progress bar
    pub show_boundaries: bool,

    // === Layout ===
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// Number of transcript rows (term_rows - status lines)
    pub view_rows: usize,

    // === Rendering flags ===
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl PlayerState {
    /// Number of status/chrome lines (separator + progress + status bar)
    pub const STATUS_LINES: u16 = 3;

    /// Create a new PlayerState.
    ///
    /// # Arguments
    /// * `term_cols` - Terminal width in columns
    /// * `term_rows` - Terminal height in rows
    /// * `phrase_count` - Number of phrases in the timeline
    pub fn new(term_cols: u16, term_rows: u16, phrase_count: usize) -> Self {
        Self {
            cursor: 0,
            scroll_offset: 0,
            phrase_count,

            show_help: false,
            follow: true,
            show_boundaries: true,

            term_cols,
            term_rows,
            view_rows: term_rows.saturating_sub(Self::STATUS_LINES) as usize,

            needs_render: true,
        }
    }

    /// Handle terminal resize event.
    ///
    /// Updates the transcript height and keeps the cursor visible.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.view_rows = new_rows.saturating_sub(Self::STATUS_LINES) as usize;
        self.clamp_scroll();
        self.scroll_to(self.cursor);
        self.needs_render = true;
    }

    /// Row of the progress bar.
    pub fn progress_row(&self) -> u16 {
        self.term_rows.saturating_sub(2)
    }

    /// Row of the status bar.
    pub fn status_row(&self) -> u16 {
        self.term_rows.saturating_sub(1)
    }

    /// Row of the separator above the progress bar.
    pub fn separator_row(&self) -> u16 {
        self.term_rows.saturating_sub(Self::STATUS_LINES)
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.scroll_to(self.cursor);
        self.needs_render = true;
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.phrase_count {
            self.cursor += 1;
        }
        self.scroll_to(self.cursor);
        self.needs_render = true;
    }

    /// Scroll the transcript by `delta` rows without moving the cursor.
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.clamp_scroll();
        self.needs_render = true;
    }

    /// Adjust the scroll offset so `index` is visible.
    pub fn scroll_to(&mut self, index: usize) {
        if self.view_rows == 0 {
            return;
        }
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + self.view_rows {
            self.scroll_offset = index + 1 - self.view_rows;
        }
    }

    fn clamp_scroll(&mut self) {
        let max_offset = self.phrase_count.saturating_sub(self.view_rows);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// Move the cursor onto the newly selected phrase when following.
    pub fn follow_selection(&mut self, selected: Option<usize>) {
        if let (true, Some(index)) = (self.follow, selected) {
            self.cursor = index;
            self.scroll_to(index);
        }
        self.needs_render = true;
    }

    /// Phrase index shown on a transcript row.
    pub fn phrase_at_row(&self, row: u16) -> Option<usize> {
        let row = row as usize;
        if row >= self.view_rows {
            return None;
        }
        let index = self.scroll_offset + row;
        (index < self.phrase_count).then_some(index)
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    /// Toggle following the selected phrase.
    pub fn toggle_follow(&mut self) {
        self.follow = !self.follow;
        self.needs_render = true;
    }
}
