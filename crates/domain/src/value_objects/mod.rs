//! Value objects - Immutable objects defined by their attributes

pub mod appearance;
mod timestamp;

pub use timestamp::Timestamp;
