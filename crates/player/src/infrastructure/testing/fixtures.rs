//! Simple test fixtures used across unit tests.

use lifesim_domain::{
    Action, Character, CharacterAttributes, CharacterCharacteristics, GameObject, GameState,
    Place, Timestamp,
};

use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

pub fn fixed_timestamp() -> Timestamp {
    "2024-05-01T12:00:00".parse().unwrap_or_else(|_| Timestamp::now())
}

pub fn character(id: &str, name: &str) -> Character {
    Character {
        id: id.into(),
        name: name.to_string(),
        attributes: CharacterAttributes::default(),
        characteristics: CharacterCharacteristics::default(),
        image_url: None,
        created_at: fixed_timestamp(),
    }
}

pub fn place(id: &str, name: &str) -> Place {
    Place {
        id: id.into(),
        name: name.to_string(),
        description: format!("A place called {name}"),
        image_url: None,
        created_at: fixed_timestamp(),
    }
}

pub fn game_object(id: &str, name: &str) -> GameObject {
    GameObject {
        id: id.into(),
        name: name.to_string(),
        description: format!("A {name}"),
        image_url: None,
        created_at: fixed_timestamp(),
    }
}

pub fn action(id: &str, description: &str) -> Action {
    Action {
        id: id.into(),
        description: description.to_string(),
        timestamp: fixed_timestamp(),
    }
}

pub fn empty_game_state() -> GameState {
    GameState::new("user-1".into(), fixed_timestamp())
}

pub fn game_state_with_character(name: &str) -> GameState {
    let mut state = empty_game_state();
    state.player_character = Some(character("pc-1", name));
    state
}

/// Serialize a fixture the way the backend would send it
pub fn to_json<T: serde::Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}
