//! Fixed-capacity circular buffer for byte streams such as UART RX/TX queues.
//!
//! Writes never fail: when the buffer is full the oldest unread element is
//! dropped to make room. Reads on an empty buffer return `T::default()`, so
//! check [`RingBuffer::is_empty`] or use [`RingBuffer::try_read`] when a
//! stored zero must be told apart from "nothing there".

pub mod error;
pub mod ring;

pub use error::{Result, RingError};
pub use ring::{CharRing, Occupancy, RingBuffer, DEFAULT_CAPACITY};
