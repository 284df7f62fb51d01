use serde::{Deserialize, Serialize};

/// Point-in-time view of how much of a ring buffer is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub capacity: usize,
    pub available: usize,
    pub free_space: usize,
    pub full: bool,
    pub empty: bool,
}

impl Occupancy {
    pub(crate) fn new(capacity: usize, count: usize) -> Self {
        Self {
            capacity,
            available: count,
            free_space: capacity - count,
            full: count == capacity,
            empty: count == 0,
        }
    }

    /// Fraction of slots holding unread data, in `[0.0, 1.0]`.
    pub fn fill_ratio(&self) -> f64 {
        self.available as f64 / self.capacity as f64
    }
}
