//! Life Sim Player.
//!
//! Client for the life simulation backend: account login, character
//! creation and the adventure dashboard. UI, application logic and
//! infrastructure adapters live in one crate; platform differences are
//! selected at compile time with `cfg`.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use config::{ClientConfig, ShellKind};
pub use ui::{app, use_platform, Platform};
