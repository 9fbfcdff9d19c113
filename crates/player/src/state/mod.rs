//! State containers for player-side dependency injection
//!
//! This module contains DI containers that aggregate platform adapters.
//! These are concrete implementations, so they live outside the ports layer.

mod platform;

pub use platform::{Platform, PlatformOptions, PlatformStorageAdapter};
