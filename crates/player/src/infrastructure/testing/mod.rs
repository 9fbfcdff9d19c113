//! Test doubles for infrastructure ports
//!
//! Available in unit tests and behind the `testing` feature.

mod fake_backend;
pub mod fixtures;

pub use fake_backend::FakeBackend;
