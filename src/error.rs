// src/error.rs

use thiserror::Error;

/// Custom `Error` type for the bounded containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Extraction attempted on an empty container.
    #[error("Underflow: container is empty")]
    Underflow,
    /// Insertion attempted into a non-evicting container that is already full.
    #[error("Overflow: container is full (capacity {capacity})")]
    Overflow { capacity: usize },
    /// Checked index access past the current length.
    #[error("Index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
}
