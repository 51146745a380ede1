//! Bounded control-plane channel.
//!
//! A small multi-sender queue built on `critical-section` and
//! `heapless::Deque`, shared between threads through an [`Arc`]. Besides
//! plain FIFO sends it supports coalescing sends that replace a queued value
//! of the same kind instead of growing the queue.

use core::cell::RefCell;
use std::sync::Arc;

use critical_section::Mutex;
use heapless::Deque;

/// The channel was full; the rejected value is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Nothing was queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Fixed-capacity queue guarded by a critical section.
pub struct Channel<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Move the channel behind an [`Arc`] and hand out both ends.
    pub fn split(self) -> (Sender<T, SIZE>, Receiver<T, SIZE>) {
        let channel = Arc::new(self);
        (
            Sender {
                channel: Arc::clone(&channel),
            },
            Receiver { channel },
        )
    }

    /// Append `value`, or give it back if the queue is full.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(value).map_err(TrySendError)
        })
    }

    /// Replace the first queued value for which `same` holds, or append.
    ///
    /// Returns `Err(TrySendError(value))` only if nothing matched and the
    /// channel is full.
    pub fn send_coalescing(
        &self,
        value: T,
        same: impl Fn(&T, &T) -> bool,
    ) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            if let Some(queued) = queue.iter_mut().find(|queued| same(queued, &value)) {
                *queued = value;
                return Ok(());
            }
            queue.push_back(value).map_err(TrySendError)
        })
    }

    /// Pop the oldest queued value.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer end of a [`Channel`]; cheap to clone.
pub struct Sender<T, const SIZE: usize> {
    channel: Arc<Channel<T, SIZE>>,
}

impl<T, const SIZE: usize> Clone for Sender<T, SIZE> {
    fn clone(&self) -> Self {
        Self {
            channel: Arc::clone(&self.channel),
        }
    }
}

impl<T, const SIZE: usize> Sender<T, SIZE> {
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }

    /// See [`Channel::send_coalescing`].
    pub fn send_coalescing(
        &self,
        value: T,
        same: impl Fn(&T, &T) -> bool,
    ) -> Result<(), TrySendError<T>> {
        self.channel.send_coalescing(value, same)
    }
}

/// The receiving end of a [`Channel`].
///
/// Not cloneable: each channel is drained by a single consumer.
pub struct Receiver<T, const SIZE: usize> {
    channel: Arc<Channel<T, SIZE>>,
}

impl<T, const SIZE: usize> Receiver<T, SIZE> {
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}
