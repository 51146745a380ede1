//! Write discipline toward the shared LED sink.
//!
//! An identical command repeated within the minimum interval is dropped
//! instead of resubmitted. Sink failures are logged and swallowed.

use std::sync::Arc;

use embassy_time::{Duration, Instant};
use tracing::{debug, warn};

use crate::LedSink;
use crate::zone::ZoneCommand;

/// Default minimum interval between identical commands.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(25);

const MASK_SLOTS: usize = 16;

/// Deduplicating front for a [`LedSink`]
pub struct RateLimiter {
    sink: Arc<dyn LedSink>,
    min_interval: Duration,
    /// Last submission per mask, indexed by mask bits
    last: [Option<(ZoneCommand, Instant)>; MASK_SLOTS],
    submitted: u64,
    dropped: u64,
    failures: u64,
}

impl RateLimiter {
    pub fn new(sink: Arc<dyn LedSink>, min_interval: Duration) -> Self {
        Self {
            sink,
            min_interval,
            last: [None; MASK_SLOTS],
            submitted: 0,
            dropped: 0,
            failures: 0,
        }
    }

    /// Submit a command unless the same command went out less than the
    /// minimum interval ago. Returns whether it reached the sink.
    pub fn submit(&mut self, command: ZoneCommand, now: Instant) -> bool {
        let slot = &mut self.last[usize::from(command.mask.bits())];
        if let Some((previous, at)) = *slot {
            if previous == command && now.saturating_duration_since(at) < self.min_interval {
                self.dropped += 1;
                debug!(mask = command.mask.bits(), "duplicate command dropped");
                return false;
            }
        }
        *slot = Some((command, now));
        self.send(command);
        true
    }

    /// Submit a command regardless of history.
    pub fn force(&mut self, command: ZoneCommand, now: Instant) {
        self.last[usize::from(command.mask.bits())] = Some((command, now));
        self.send(command);
    }

    fn send(&mut self, command: ZoneCommand) {
        self.submitted += 1;
        if let Err(err) = self.sink.write(command) {
            self.failures += 1;
            if self.failures == 1 {
                warn!(error = %err, "LED sink write failed");
            } else {
                debug!(error = %err, failures = self.failures, "LED sink write failed");
            }
        }
    }

    pub const fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Commands handed to the sink, including failed writes.
    pub const fn submitted(&self) -> u64 {
        self.submitted
    }

    /// Commands suppressed as duplicates.
    pub const fn dropped(&self) -> u64 {
        self.dropped
    }

    pub const fn failures(&self) -> u64 {
        self.failures
    }
}
