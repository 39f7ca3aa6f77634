//! Position tracking over phrase boundaries.
//!
//! Pure queries against the ascending list of phrase start times:
//! which phrase contains a position, and where to seek for the
//! previous or next boundary. Nothing here holds state, so the same
//! timeline can be queried from anywhere at any time.

use crate::timeline::{Timeline, TimedPhrase};
use crate::Millis;

/// Index of the phrase interval containing `position`.
///
/// Intervals are half-open: phrase `i` owns `[start[i], start[i + 1])`, and
/// the last phrase owns everything from its start onwards. Returns `None`
/// for an empty list or a position before the first boundary.
pub fn current_index(start_times: &[Millis], position: Millis) -> Option<usize> {
    for (i, pair) in start_times.windows(2).enumerate() {
        if position >= pair[0] && position < pair[1] {
            return Some(i);
        }
    }

    match start_times.last() {
        Some(&last) if position >= last => Some(start_times.len() - 1),
        _ => None,
    }
}

/// Seek target for jumping backwards from `position`.
///
/// Scans from the last boundary down and returns the first one strictly
/// below `position`. Sitting exactly on a boundary jumps to the previous
/// one; sitting on the first boundary wraps around to the last.
/// Returns 0 when `position` is below every boundary or the list is empty.
pub fn rewind(start_times: &[Millis], position: Millis) -> Millis {
    for (i, &start) in start_times.iter().enumerate().rev() {
        if position > start {
            return start;
        }
        if position == start {
            return match i.checked_sub(1) {
                Some(prev) => start_times[prev],
                None => start_times[start_times.len() - 1],
            };
        }
    }
    0
}

/// Seek target for jumping forwards from `position`.
///
/// Returns the first boundary strictly after `position`, wrapping to the
/// first boundary when there is none. An empty list yields 0.
pub fn forward(start_times: &[Millis], position: Millis) -> Millis {
    start_times
        .iter()
        .copied()
        .find(|&start| start > position)
        .or_else(|| start_times.first().copied())
        .unwrap_or(0)
}

impl Timeline {
    /// See [`current_index`].
    pub fn current_index(&self, position: Millis) -> Option<usize> {
        current_index(self.start_times(), position)
    }

    /// The phrase being spoken at `position`, if any.
    pub fn phrase_at(&self, position: Millis) -> Option<&TimedPhrase> {
        self.current_index(position).and_then(|i| self.get(i))
    }

    /// See [`rewind`].
    pub fn rewind(&self, position: Millis) -> Millis {
        rewind(self.start_times(), position)
    }

    /// See [`forward`].
    pub fn forward(&self, position: Millis) -> Millis {
        forward(self.start_times(), position)
    }
}
