pub mod buffer;
pub mod occupancy;

pub use buffer::{CharRing, RingBuffer, DEFAULT_CAPACITY};
pub use occupancy::Occupancy;
