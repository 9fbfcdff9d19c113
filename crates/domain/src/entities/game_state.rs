//! GameState aggregate - The user's whole progress
//!
//! Fetched wholesale after every mutation and replaced, never merged.

use serde::{Deserialize, Serialize};

use crate::entities::{Action, Character, GameObject, Place};
use lifesim_domain::{PlaceId, Timestamp, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub user_id: UserId,
    #[serde(default)]
    pub player_character: Option<Character>,
    #[serde(default)]
    pub current_place: Option<Place>,
    #[serde(default)]
    pub inventory: Vec<GameObject>,
    #[serde(default)]
    pub discovered_characters: Vec<Character>,
    #[serde(default)]
    pub discovered_places: Vec<Place>,
    #[serde(default)]
    pub action_history: Vec<Action>,
    pub last_updated: Timestamp,
}

impl GameState {
    /// Empty state as the backend creates it on registration
    pub fn new(user_id: UserId, last_updated: Timestamp) -> Self {
        Self {
            user_id,
            player_character: None,
            current_place: None,
            inventory: Vec::new(),
            discovered_characters: Vec::new(),
            discovered_places: Vec::new(),
            action_history: Vec::new(),
            last_updated,
        }
    }

    pub fn has_player_character(&self) -> bool {
        self.player_character.is_some()
    }

    pub fn is_current_place(&self, place_id: &PlaceId) -> bool {
        self.current_place
            .as_ref()
            .is_some_and(|place| &place.id == place_id)
    }

    /// Name of the current place, or an empty string when nowhere
    pub fn current_place_name(&self) -> &str {
        self.current_place
            .as_ref()
            .map(|place| place.name.as_str())
            .unwrap_or_default()
    }

    /// Action log, most recent first
    pub fn recent_actions(&self) -> impl Iterator<Item = &Action> {
        self.action_history.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str, name: &str) -> Place {
        Place {
            id: PlaceId::new(id),
            name: name.to_string(),
            description: String::new(),
            image_url: None,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let json = r#"{"user_id": "u-1", "last_updated": "2024-05-01T12:00:00"}"#;
        let state: GameState = serde_json::from_str(json).expect("game state");
        assert!(!state.has_player_character());
        assert!(state.inventory.is_empty());
        assert!(state.action_history.is_empty());
        assert_eq!(state.current_place_name(), "");
    }

    #[test]
    fn is_current_place_compares_ids() {
        let mut state = GameState::new(UserId::new("u-1"), Timestamp::now());
        let forest = place("p-1", "Forest");
        assert!(!state.is_current_place(&forest.id));

        state.current_place = Some(forest.clone());
        assert!(state.is_current_place(&forest.id));
        assert!(!state.is_current_place(&PlaceId::new("p-2")));
        assert_eq!(state.current_place_name(), "Forest");
    }

    #[test]
    fn recent_actions_are_newest_first() {
        let mut state = GameState::new(UserId::new("u-1"), Timestamp::now());
        for (idx, text) in ["first", "second"].iter().enumerate() {
            state.action_history.push(Action {
                id: format!("a-{idx}").into(),
                description: text.to_string(),
                timestamp: Timestamp::now(),
            });
        }
        let order: Vec<_> = state
            .recent_actions()
            .map(|a| a.description.as_str())
            .collect();
        assert_eq!(order, vec!["second", "first"]);
    }
}
