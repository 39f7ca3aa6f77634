//! Playback transport.
//!
//! The transport is whatever actually plays the media: it knows the current
//! position and total duration, and can play from a position or pause.
//! The session only ever talks to it through [`Transport`].
//!
//! [`SimulatedTransport`] is a virtual playhead that advances with a
//! [`Clock`], used for rehearsing a script without audio and for tests.

use crate::sync::Clock;
use crate::Millis;

/// Errors reported by a transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("No media loaded")]
    NotLoaded,

    #[error("Cannot seek to {position_ms}ms, media is {duration_ms}ms long")]
    SeekOutOfRange {
        position_ms: Millis,
        duration_ms: Millis,
    },
}

/// Snapshot of the transport state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransportStatus {
    /// Whether media is loaded (all other fields are meaningless otherwise)
    pub is_loaded: bool,
    /// Whether the playhead is moving
    pub is_playing: bool,
    /// Current playhead position
    pub position_ms: Millis,
    /// Total media length
    pub duration_ms: Millis,
    /// True exactly once, on the first status after playback reached the end
    pub did_just_finish: bool,
}

/// A media transport the session can drive.
pub trait Transport {
    /// Load the media. Must be called before any other operation.
    fn load(&mut self) -> Result<(), TransportError>;

    /// Release the media.
    fn unload(&mut self);

    /// Start playing, from `from` if given or else from the current position.
    fn play(&mut self, from: Option<Millis>) -> Result<(), TransportError>;

    /// Stop the playhead where it is.
    fn pause(&mut self) -> Result<(), TransportError>;

    /// Current status. Also where end-of-media is detected.
    fn status(&mut self) -> TransportStatus;
}

/// Clock-driven virtual playhead of a fixed length.
#[derive(Debug)]
pub struct SimulatedTransport<C: Clock> {
    clock: C,
    duration_ms: Millis,
    loaded: bool,
    /// Position at the moment `anchor_at` was taken
    anchor_ms: Millis,
    /// Clock reading when playback last started; `None` while paused
    anchor_at: Option<std::time::Duration>,
}

impl<C: Clock> SimulatedTransport<C> {
    pub fn new(clock: C, duration_ms: Millis) -> Self {
        Self {
            clock,
            duration_ms,
            loaded: false,
            anchor_ms: 0,
            anchor_at: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.anchor_at.is_some()
    }

    fn position(&self) -> Millis {
        match self.anchor_at {
            Some(at) => {
                let elapsed = self.clock.now().saturating_sub(at).as_millis() as Millis;
                self.anchor_ms.saturating_add(elapsed)
            }
            None => self.anchor_ms,
        }
    }
}

impl<C: Clock> Transport for SimulatedTransport<C> {
    fn load(&mut self) -> Result<(), TransportError> {
        self.loaded = true;
        self.anchor_ms = 0;
        self.anchor_at = None;
        tracing::debug!(duration_ms = self.duration_ms, "simulated transport loaded");
        Ok(())
    }

    fn unload(&mut self) {
        self.loaded = false;
        self.anchor_ms = 0;
        self.anchor_at = None;
    }

    fn play(&mut self, from: Option<Millis>) -> Result<(), TransportError> {
        if !self.loaded {
            return Err(TransportError::NotLoaded);
        }
        let start = from.unwrap_or_else(|| self.position());
        if start > self.duration_ms {
            return Err(TransportError::SeekOutOfRange {
                position_ms: start,
                duration_ms: self.duration_ms,
            });
        }
        self.anchor_ms = start;
        self.anchor_at = Some(self.clock.now());
        Ok(())
    }

    fn pause(&mut self) -> Result<(), TransportError> {
        if !self.loaded {
            return Err(TransportError::NotLoaded);
        }
        self.anchor_ms = self.position().min(self.duration_ms);
        self.anchor_at = None;
        Ok(())
    }

    fn status(&mut self) -> TransportStatus {
        if !self.loaded {
            return TransportStatus::default();
        }

        let mut did_just_finish = false;
        if self.is_playing() && self.position() >= self.duration_ms {
            self.anchor_ms = 0;
            self.anchor_at = None;
            did_just_finish = true;
        }

        TransportStatus {
            is_loaded: true,
            is_playing: self.is_playing(),
            position_ms: self.position(),
            duration_ms: self.duration_ms,
            did_just_finish,
        }
    }
}
