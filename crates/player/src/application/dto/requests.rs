//! Request bodies

use serde::{Deserialize, Serialize};

use lifesim_domain::{CharacterAttributes, CharacterCharacteristics};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of both character create and character preview
///
/// The creation form edits one of these in place; `Default` matches the
/// form's initial values (empty name, every attribute 5, default looks).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterDraft {
    pub name: String,
    pub attributes: CharacterAttributes,
    pub characteristics: CharacterCharacteristics,
}

impl CharacterDraft {
    /// Whether the create button should be enabled
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateActionRequest {
    pub context: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifesim_domain::AttributeKind;

    #[test]
    fn draft_serializes_nested_objects() {
        let mut draft = CharacterDraft {
            name: "Rin".to_string(),
            ..CharacterDraft::default()
        };
        draft.attributes.set(AttributeKind::Agility, 8);

        let value = serde_json::to_value(&draft).expect("json");
        assert_eq!(value["name"], "Rin");
        assert_eq!(value["attributes"]["agility"], 8);
        assert_eq!(value["attributes"]["luck"], 5);
        assert_eq!(value["characteristics"]["hair_color"], "brown");
    }

    #[test]
    fn blank_name_is_not_submittable() {
        let mut draft = CharacterDraft::default();
        assert!(!draft.has_name());
        draft.name = "   ".to_string();
        assert!(!draft.has_name());
        draft.name = "Ash".to_string();
        assert!(draft.has_name());
    }
}
