//! Last-value-wins handoff from an asynchronous sampler to the tick thread.
//!
//! Each bridge has exactly one writer (the sampler callback, on the
//! sampler's own thread) and one reader (the scheduler). The slot is an
//! [`ArcSwapOption`]: publishing swaps the new sample in, taking swaps `None`
//! in and returns whatever was there. A filled slot is the dirty flag, so
//! test-and-clear is a single atomic swap and no lock is ever taken.
//!
//! A sample published while an earlier one is still unconsumed replaces it;
//! the replaced sample is counted as coalesced and never seen by the reader.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwapOption;

struct Slot<T> {
    latest: ArcSwapOption<T>,
    published: AtomicU64,
    coalesced: AtomicU64,
}

/// Create a connected publisher/receiver pair.
pub fn sample_bridge<T>() -> (SamplePublisher<T>, SampleReceiver<T>) {
    let slot = Arc::new(Slot {
        latest: ArcSwapOption::empty(),
        published: AtomicU64::new(0),
        coalesced: AtomicU64::new(0),
    });
    (
        SamplePublisher {
            slot: Arc::clone(&slot),
        },
        SampleReceiver { slot },
    )
}

/// Writing end of a sample bridge
pub struct SamplePublisher<T> {
    slot: Arc<Slot<T>>,
}

impl<T> SamplePublisher<T> {
    /// Store `sample` as the latest value, replacing any unconsumed one.
    pub fn publish(&self, sample: T) {
        let previous = self.slot.latest.swap(Some(Arc::new(sample)));
        self.slot.published.fetch_add(1, Ordering::Relaxed);
        if previous.is_some() {
            self.slot.coalesced.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Reading end of a sample bridge
pub struct SampleReceiver<T> {
    slot: Arc<Slot<T>>,
}

impl<T: Clone> SampleReceiver<T> {
    /// Take the pending sample, if any, clearing the slot.
    ///
    /// Each published sample is returned at most once.
    pub fn take(&self) -> Option<T> {
        self.slot
            .latest
            .swap(None)
            .map(|sample| Arc::try_unwrap(sample).unwrap_or_else(|shared| (*shared).clone()))
    }
}

impl<T> SampleReceiver<T> {
    /// Whether a sample is waiting.
    pub fn is_dirty(&self) -> bool {
        self.slot.latest.load().is_some()
    }

    /// Total samples published so far.
    pub fn published(&self) -> u64 {
        self.slot.published.load(Ordering::Relaxed)
    }

    /// Samples overwritten before the reader took them.
    pub fn coalesced(&self) -> u64 {
        self.slot.coalesced.load(Ordering::Relaxed)
    }
}
