//! Application layer - Use cases and orchestration

pub mod api;
pub mod dto;
pub mod screen;
pub mod services;

pub use screen::{Screen, ScreenEvent, ScreenState};
