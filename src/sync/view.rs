//! What a playback surface needs to draw for one frame.

use crate::Millis;

/// Format milliseconds as `MM:SS`.
///
/// Fractional seconds are truncated; minutes are not wrapped into hours.
pub fn format_clock(ms: Millis) -> String {
    let total_secs = ms / 1000;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Snapshot of the playhead for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackView {
    pub position_ms: Millis,
    pub duration_ms: Millis,
    pub playing: bool,
}

impl PlaybackView {
    /// Elapsed time as `MM:SS`.
    pub fn elapsed_label(&self) -> String {
        format_clock(self.position_ms)
    }

    /// Total time as `MM:SS`.
    pub fn total_label(&self) -> String {
        format_clock(self.duration_ms)
    }

    /// Fraction of the media played, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.position_ms as f64 / self.duration_ms.max(1) as f64).clamp(0.0, 1.0)
    }
}
