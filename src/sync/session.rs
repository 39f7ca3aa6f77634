//! Keeps the selected phrase in step with the transport.

use std::time::Duration;

use crate::selection::Selection;
use crate::sync::sampler::{SampleTicket, Sampler};
use crate::sync::view::PlaybackView;
use crate::sync::Clock;
use crate::timeline::{Timeline, TimedPhrase};
use crate::transport::{Transport, TransportError, TransportStatus};
use crate::Millis;

/// Outcome of one synchronization step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncUpdate {
    /// No sample was applied (not due, stopped, stale or not loaded)
    Skipped,
    /// The position moved but the same phrase is still selected
    Position,
    /// The position moved into a different phrase
    Selection,
    /// Playback reached the end; selection cleared and position reset
    Finished,
}

impl SyncUpdate {
    /// Whether the surface has something new to draw.
    pub fn needs_render(self) -> bool {
        !matches!(self, SyncUpdate::Skipped)
    }
}

/// One playback session over a timeline.
///
/// Owns the transport and the selected phrase. The host calls
/// [`PlaybackSession::tick`] often (at least as often as the sampling
/// interval) and forwards user actions to the other methods.
#[derive(Debug)]
pub struct PlaybackSession<'a, T: Transport, C: Clock> {
    timeline: &'a Timeline,
    transport: T,
    clock: C,
    sampler: Sampler,
    selection: Selection,
    position_ms: Millis,
    duration_ms: Millis,
    playing: bool,
}

impl<'a, T: Transport, C: Clock> PlaybackSession<'a, T, C> {
    pub fn new(timeline: &'a Timeline, transport: T, clock: C, interval: Duration) -> Self {
        Self {
            timeline,
            transport,
            clock,
            sampler: Sampler::new(interval),
            selection: Selection::new(),
            position_ms: 0,
            duration_ms: 0,
            playing: false,
        }
    }

    /// Load the media and read its duration.
    pub fn open(&mut self) -> Result<(), TransportError> {
        self.transport.load()?;
        let status = self.transport.status();
        if !status.is_loaded {
            return Err(TransportError::NotLoaded);
        }
        self.duration_ms = status.duration_ms;
        tracing::info!(
            duration_ms = self.duration_ms,
            phrases = self.timeline.len(),
            "playback session opened"
        );
        Ok(())
    }

    /// Stop sampling and release the media.
    pub fn close(&mut self) {
        self.sampler.stop();
        self.playing = false;
        self.transport.unload();
        tracing::debug!("playback session closed");
    }

    /// Sample the transport if a sample is due and apply it.
    pub fn tick(&mut self) -> SyncUpdate {
        match self.begin_sample() {
            Some(ticket) => {
                let status = self.transport.status();
                self.apply_sample(ticket, status)
            }
            None => SyncUpdate::Skipped,
        }
    }

    /// Take a ticket for a sample that is due now.
    ///
    /// Hosts that read the transport status asynchronously take a ticket,
    /// fetch the status, then hand both to [`PlaybackSession::apply_sample`].
    pub fn begin_sample(&mut self) -> Option<SampleTicket> {
        self.sampler.poll(self.clock.now())
    }

    /// Apply a transport status read under `ticket`.
    ///
    /// Samples taken before the last pause, seek or finish are dropped.
    pub fn apply_sample(&mut self, ticket: SampleTicket, status: TransportStatus) -> SyncUpdate {
        if !self.sampler.accepts(ticket) {
            tracing::trace!(
                position_ms = status.position_ms,
                "discarding stale sample"
            );
            return SyncUpdate::Skipped;
        }
        if !status.is_loaded {
            return SyncUpdate::Skipped;
        }

        self.duration_ms = status.duration_ms;
        if status.did_just_finish {
            self.finish();
            return SyncUpdate::Finished;
        }

        self.position_ms = status.position_ms;
        if self.sync_to(status.position_ms) {
            SyncUpdate::Selection
        } else {
            SyncUpdate::Position
        }
    }

    /// Select the phrase containing `position`, if it is not already
    /// selected. Returns true if the selection changed.
    ///
    /// A position before the first phrase leaves the selection untouched.
    pub fn sync_to(&mut self, position: Millis) -> bool {
        let Some(phrase) = self.timeline.phrase_at(position) else {
            return false;
        };
        let changed = self.selection.update(phrase);
        if changed {
            tracing::debug!(
                position_ms = position,
                speaker = %phrase.speaker,
                start_ms = phrase.start_time,
                "selected phrase"
            );
        }
        changed
    }

    /// End of media: stop, clear the selection and reset the position.
    pub fn finish(&mut self) {
        self.sampler.stop();
        self.playing = false;
        self.selection.clear();
        self.position_ms = 0;
        tracing::info!("playback finished");
    }

    /// Select the phrase at `index` directly and play from its start.
    ///
    /// Returns the seek target, or `None` if there is no such phrase.
    pub fn tap(&mut self, index: usize) -> Result<Option<Millis>, TransportError> {
        let Some(phrase) = self.timeline.get(index) else {
            return Ok(None);
        };
        let target = phrase.start_time;
        self.selection.set(phrase.clone());
        self.seek(target)?;
        Ok(Some(target))
    }

    /// Jump back to the previous phrase boundary and play from there.
    pub fn rewind(&mut self) -> Result<Millis, TransportError> {
        let target = self.timeline.rewind(self.position_ms);
        self.seek(target)?;
        Ok(target)
    }

    /// Jump to the next phrase boundary and play from there.
    pub fn forward(&mut self) -> Result<Millis, TransportError> {
        let target = self.timeline.forward(self.position_ms);
        self.seek(target)?;
        Ok(target)
    }

    /// Seek to a fraction of the total duration and play from there.
    pub fn seek_fraction(&mut self, fraction: f64) -> Result<Millis, TransportError> {
        let target = (fraction.clamp(0.0, 1.0) * self.duration_ms as f64) as Millis;
        self.seek(target)?;
        Ok(target)
    }

    /// Play from `target`.
    ///
    /// Outstanding samples are invalidated so a position read before the
    /// seek can not drag the selection back.
    pub fn seek(&mut self, target: Millis) -> Result<(), TransportError> {
        self.transport.play(Some(target))?;
        tracing::debug!(from_ms = self.position_ms, to_ms = target, "seek");
        self.position_ms = target;
        self.playing = true;
        self.sampler.start(self.clock.now());
        Ok(())
    }

    /// Resume from the last sampled position.
    pub fn play(&mut self) -> Result<(), TransportError> {
        self.transport.play(Some(self.position_ms))?;
        self.playing = true;
        self.sampler.start(self.clock.now());
        Ok(())
    }

    /// Pause and stop sampling.
    pub fn pause(&mut self) -> Result<(), TransportError> {
        self.transport.pause()?;
        self.playing = false;
        self.sampler.stop();
        Ok(())
    }

    pub fn toggle_play(&mut self) -> Result<(), TransportError> {
        if self.playing {
            self.pause()
        } else {
            self.play()
        }
    }

    pub fn timeline(&self) -> &'a Timeline {
        self.timeline
    }

    pub fn selected(&self) -> Option<&TimedPhrase> {
        self.selection.current()
    }

    /// Index of the selected phrase on the timeline.
    pub fn selected_index(&self) -> Option<usize> {
        self.timeline
            .phrases()
            .iter()
            .position(|p| self.selection.is_selected(p))
    }

    pub fn is_selected(&self, phrase: &TimedPhrase) -> bool {
        self.selection.is_selected(phrase)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position_ms(&self) -> Millis {
        self.position_ms
    }

    pub fn duration_ms(&self) -> Millis {
        self.duration_ms
    }

    pub fn view(&self) -> PlaybackView {
        PlaybackView {
            position_ms: self.position_ms,
            duration_ms: self.duration_ms,
            playing: self.playing,
        }
    }

    /// How long the host may wait before the next [`PlaybackSession::tick`].
    pub fn next_sample_in(&self) -> Option<Duration> {
        self.sampler.time_until_due(self.clock.now())
    }
}
