use std::fmt;

use tracing::{debug, trace, warn};

use super::occupancy::Occupancy;
use crate::error::{Result, RingError};

/// Slot count used by callers that have no sizing preference.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Byte queue, the usual shape for serial RX/TX.
pub type CharRing = RingBuffer<u8>;

/// Fixed-capacity FIFO that overwrites its oldest element when full.
///
/// `head` is where the next write lands, `tail` is where the next read comes
/// from, and `count` is the number of unread elements. After every public call
/// `head == (tail + count) % capacity` holds.
///
/// The buffer does no locking. Every mutating call takes `&mut self`, so
/// sharing it with another thread or an interrupt handler needs an outer lock
/// or critical section held around each call.
pub struct RingBuffer<T> {
    storage: Box<[T]>,
    head: usize,
    tail: usize,
    count: usize,
    total_written: u64,
    evicted: u64,
}

impl<T: Copy + Default> RingBuffer<T> {
    /// Allocates `capacity` slots, all set to `T::default()`.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            warn!(requested = 0, "rejecting zero-capacity ring buffer");
            return Err(RingError::InvalidCapacity { requested: 0 });
        }

        debug!(capacity, "ring buffer created");
        Ok(Self {
            storage: vec![T::default(); capacity].into_boxed_slice(),
            head: 0,
            tail: 0,
            count: 0,
            total_written: 0,
            evicted: 0,
        })
    }

    /// Like [`RingBuffer::new`] but takes a signed length, rejecting zero and
    /// negative values.
    pub fn with_len(len: i64) -> Result<Self> {
        let capacity = usize::try_from(len).map_err(|_| {
            warn!(requested = len, "rejecting negative ring buffer capacity");
            RingError::InvalidCapacity { requested: len }
        })?;
        Self::new(capacity)
    }

    /// Appends `value`. If the buffer is full the oldest unread element is
    /// discarded first; the call itself never fails.
    ///
    /// Callers that cannot tolerate loss should check [`RingBuffer::is_full`]
    /// or [`RingBuffer::free_space`] before writing.
    pub fn write(&mut self, value: T) {
        if self.is_full() {
            self.tail = self.advance(self.tail);
            self.count -= 1;
            self.evicted += 1;
            trace!(evicted = self.evicted, "ring buffer full, dropped oldest");
        }

        self.storage[self.head] = value;
        self.head = self.advance(self.head);
        self.count += 1;
        self.total_written += 1;
    }

    /// Takes the oldest element, or returns `T::default()` without touching
    /// any state when the buffer is empty.
    pub fn read(&mut self) -> T {
        self.try_read().unwrap_or_default()
    }

    /// Takes the oldest element, or `None` when the buffer is empty.
    pub fn try_read(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.storage[self.tail];
        self.tail = self.advance(self.tail);
        self.count -= 1;
        Some(value)
    }

    /// Consumes the buffer, returning the unread elements oldest first.
    pub fn into_vec(self) -> Vec<T> {
        self.iter().copied().collect()
    }
}

impl<T> RingBuffer<T> {
    /// The element the next read would return.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self.storage[self.tail])
        }
    }

    /// Drops every unread element. Slot contents are left in place but are no
    /// longer reachable.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Unread elements, oldest first, without consuming them.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.count).map(move |i| &self.storage[(self.tail + i) % capacity])
    }

    /// Number of elements ready to read.
    pub fn available(&self) -> usize {
        self.count
    }

    /// Number of writes that fit before one would evict.
    pub fn free_space(&self) -> usize {
        self.capacity() - self.count
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Every write accepted since construction, evicting or not.
    pub fn total_written(&self) -> u64 {
        self.total_written
    }

    /// Writes that discarded an unread element.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn occupancy(&self) -> Occupancy {
        Occupancy::new(self.capacity(), self.count)
    }

    #[inline]
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }
}

impl<T> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("count", &self.count)
            .finish()
    }
}
