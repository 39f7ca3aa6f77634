//! Full-screen terminal player.
//!
//! Runs a playback session over a simulated transport, redrawing whenever
//! the session reports a change and forwarding input to it.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::config::PlayerConfig;
use crate::player::input::handle_event;
use crate::player::render::render_frame;
use crate::player::state::{InputResult, PlayerState};
use crate::sync::{PlaybackSession, SyncUpdate, SystemClock};
use crate::timeline::Timeline;
use crate::transport::SimulatedTransport;
use crate::Millis;

/// Longest the loop waits for input while nothing is being sampled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// How a player run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// The user quit after playback had run to the end
    Finished,
    /// The user quit at this position
    Stopped { position_ms: Millis },
}

/// Restores the terminal when dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, DisableMouseCapture, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

/// Load a script and play it in the terminal.
pub fn play_script(path: &Path, config: &PlayerConfig) -> Result<PlaybackResult> {
    let timeline = Timeline::load(path)
        .with_context(|| format!("Failed to load script: {}", path.display()))?;
    play_timeline(&timeline, config)
}

/// Play an already built timeline in the terminal.
pub fn play_timeline(timeline: &Timeline, config: &PlayerConfig) -> Result<PlaybackResult> {
    let clock = SystemClock::new();
    let transport = SimulatedTransport::new(clock, timeline.end_ms());
    let mut session = PlaybackSession::new(timeline, transport, clock, config.sample_interval());
    session.open()?;
    if config.autoplay {
        session.play()?;
    }

    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let mut state = PlayerState::new(cols, rows, timeline.len());
    state.follow = config.follow_selection;
    state.show_boundaries = config.show_boundaries;

    let guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    let mut finished = false;

    let outcome = loop {
        match session.tick() {
            SyncUpdate::Selection => state.follow_selection(session.selected_index()),
            SyncUpdate::Finished => {
                finished = true;
                state.needs_render = true;
            }
            update if update.needs_render() => state.needs_render = true,
            _ => {}
        }

        if state.needs_render {
            render_frame(&mut stdout, &state, &session)?;
            state.needs_render = false;
        }

        let timeout = session.next_sample_in().unwrap_or(IDLE_POLL).min(IDLE_POLL);
        if event::poll(timeout)? {
            let result = handle_event(event::read()?, &mut state, &mut session);
            if session.is_playing() {
                finished = false;
            }
            if result == InputResult::Quit {
                break if finished {
                    PlaybackResult::Finished
                } else {
                    PlaybackResult::Stopped {
                        position_ms: session.position_ms(),
                    }
                };
            }
        }
    };

    session.close();
    drop(guard);
    Ok(outcome)
}
