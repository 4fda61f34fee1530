//! Fixed-capacity containers for embedding in long-lived owners.
//!
//! [`BoundedRing`] keeps the most recent `N` elements and overwrites the oldest
//! on insert; [`LimitedVector`] rejects appends past its bound instead.

pub mod bench;
pub mod circular_buffer;
pub mod config;
pub mod error;
pub mod limited_vector;
pub mod scenarios;

pub use circular_buffer::BoundedRing;
pub use error::Error;
pub use limited_vector::LimitedVector;
