//! Top-level screens, one per [`crate::application::Screen`]

pub mod auth;
pub mod character_creation;
pub mod game;
pub mod loading;

pub use auth::AuthView;
pub use character_creation::CharacterCreationView;
pub use game::GameView;
pub use loading::LoadingView;
