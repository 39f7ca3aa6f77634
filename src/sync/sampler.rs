//! Fixed-cadence sampling of the transport position.

use std::time::Duration;

/// Default sampling cadence.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(10);

/// Proof that a sample was requested while the sampler was in a given
/// generation. Samples carrying an old generation are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleTicket {
    generation: u64,
}

/// Decides when the next transport sample is due.
///
/// Every stop or restart starts a new generation, so a sample requested
/// before a pause or seek can be recognised and dropped when it arrives.
#[derive(Debug, Clone)]
pub struct Sampler {
    interval: Duration,
    next_due: Option<Duration>,
    generation: u64,
}

impl Sampler {
    /// Create a stopped sampler. Intervals below 1ms are raised to 1ms.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
            generation: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Start (or restart) sampling with the first sample due immediately.
    pub fn start(&mut self, now: Duration) {
        self.generation += 1;
        self.next_due = Some(now);
    }

    /// Stop sampling and invalidate outstanding tickets.
    pub fn stop(&mut self) {
        self.generation += 1;
        self.next_due = None;
    }

    /// Take a ticket if a sample is due at `now`.
    ///
    /// A sampler that fell behind does not burst: the next sample is
    /// scheduled one interval after `now`.
    pub fn poll(&mut self, now: Duration) -> Option<SampleTicket> {
        let due = self.next_due?;
        if now < due {
            return None;
        }
        let mut next = due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next_due = Some(next);
        Some(SampleTicket {
            generation: self.generation,
        })
    }

    /// Whether a sample taken with `ticket` may still be applied.
    pub fn accepts(&self, ticket: SampleTicket) -> bool {
        self.is_running() && ticket.generation == self.generation
    }

    /// Time left until the next sample, `None` when stopped.
    pub fn time_until_due(&self, now: Duration) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_sub(now))
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_INTERVAL)
    }
}
