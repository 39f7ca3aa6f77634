//! Synchronization between the transport and the selected phrase.
//!
//! The host drives a [`PlaybackSession`] from its event loop. The session
//! samples the transport position on a fixed cadence through a
//! [`Sampler`], maps it onto the timeline and keeps the selection current.
//! Time comes from a [`Clock`], so tests step it with [`ManualClock`].

mod clock;
mod sampler;
mod session;
mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use sampler::{SampleTicket, Sampler, DEFAULT_SAMPLE_INTERVAL};
pub use session::{PlaybackSession, SyncUpdate};
pub use view::{format_clock, PlaybackView};
