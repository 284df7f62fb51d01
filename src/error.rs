use thiserror::Error;

pub type Result<T, E = RingError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// Construction was asked for a zero or negative number of slots.
    #[error("invalid ring buffer capacity: {requested} (must be positive)")]
    InvalidCapacity { requested: i64 },
}
