//! Entities - Records created and owned by the game backend

mod action;
mod character;
mod game_object;
mod game_state;
mod place;
mod user;

pub use action::Action;
pub use character::{
    AttributeKind, Character, CharacterAttributes, CharacterCharacteristics, CharacteristicKind,
};
pub use game_object::GameObject;
pub use game_state::GameState;
pub use place::Place;
pub use user::User;
