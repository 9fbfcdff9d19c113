//! Character entity - The player character and the characters they meet
//!
//! Attribute values are plain integers. The creation form offers 1..=10
//! (see [`crate::appearance`]) but neither side of the wire enforces it.

use serde::{Deserialize, Serialize};

use crate::appearance;
use lifesim_domain::{CharacterId, Timestamp};

/// A character record as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub attributes: CharacterAttributes,
    pub characteristics: CharacterCharacteristics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterAttributes {
    pub strength: i32,
    pub intelligence: i32,
    pub charisma: i32,
    pub agility: i32,
    pub luck: i32,
}

impl Default for CharacterAttributes {
    fn default() -> Self {
        Self {
            strength: appearance::ATTRIBUTE_DEFAULT,
            intelligence: appearance::ATTRIBUTE_DEFAULT,
            charisma: appearance::ATTRIBUTE_DEFAULT,
            agility: appearance::ATTRIBUTE_DEFAULT,
            luck: appearance::ATTRIBUTE_DEFAULT,
        }
    }
}

impl CharacterAttributes {
    pub fn get(&self, kind: AttributeKind) -> i32 {
        match kind {
            AttributeKind::Strength => self.strength,
            AttributeKind::Intelligence => self.intelligence,
            AttributeKind::Charisma => self.charisma,
            AttributeKind::Agility => self.agility,
            AttributeKind::Luck => self.luck,
        }
    }

    pub fn set(&mut self, kind: AttributeKind, value: i32) {
        let slot = match kind {
            AttributeKind::Strength => &mut self.strength,
            AttributeKind::Intelligence => &mut self.intelligence,
            AttributeKind::Charisma => &mut self.charisma,
            AttributeKind::Agility => &mut self.agility,
            AttributeKind::Luck => &mut self.luck,
        };
        *slot = value;
    }

    /// Compact `STR: 5 | INT: 5 | CHA: 5` line used in character lists
    pub fn summary(&self) -> String {
        [
            AttributeKind::Strength,
            AttributeKind::Intelligence,
            AttributeKind::Charisma,
        ]
        .iter()
        .map(|kind| format!("{}: {}", kind.abbreviation(), self.get(*kind)))
        .collect::<Vec<_>>()
        .join(" | ")
    }
}

/// The five numeric attributes, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Strength,
    Intelligence,
    Charisma,
    Agility,
    Luck,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 5] = [
        Self::Strength,
        Self::Intelligence,
        Self::Charisma,
        Self::Agility,
        Self::Luck,
    ];

    /// Wire name (also the JSON field name)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Intelligence => "intelligence",
            Self::Charisma => "charisma",
            Self::Agility => "agility",
            Self::Luck => "luck",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Intelligence => "Intelligence",
            Self::Charisma => "Charisma",
            Self::Agility => "Agility",
            Self::Luck => "Luck",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Intelligence => "INT",
            Self::Charisma => "CHA",
            Self::Agility => "AGI",
            Self::Luck => "LCK",
        }
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCharacteristics {
    pub hair_color: String,
    pub eye_color: String,
    pub skin_tone: String,
    pub height: String,
    pub build: String,
}

impl Default for CharacterCharacteristics {
    fn default() -> Self {
        Self {
            hair_color: appearance::DEFAULT_HAIR_COLOR.to_string(),
            eye_color: appearance::DEFAULT_EYE_COLOR.to_string(),
            skin_tone: appearance::DEFAULT_SKIN_TONE.to_string(),
            height: appearance::DEFAULT_HEIGHT.to_string(),
            build: appearance::DEFAULT_BUILD.to_string(),
        }
    }
}

impl CharacterCharacteristics {
    pub fn get(&self, kind: CharacteristicKind) -> &str {
        match kind {
            CharacteristicKind::HairColor => &self.hair_color,
            CharacteristicKind::EyeColor => &self.eye_color,
            CharacteristicKind::SkinTone => &self.skin_tone,
            CharacteristicKind::Height => &self.height,
            CharacteristicKind::Build => &self.build,
        }
    }

    pub fn set(&mut self, kind: CharacteristicKind, value: impl Into<String>) {
        let slot = match kind {
            CharacteristicKind::HairColor => &mut self.hair_color,
            CharacteristicKind::EyeColor => &mut self.eye_color,
            CharacteristicKind::SkinTone => &mut self.skin_tone,
            CharacteristicKind::Height => &mut self.height,
            CharacteristicKind::Build => &mut self.build,
        };
        *slot = value.into();
    }
}

/// The five appearance fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacteristicKind {
    HairColor,
    EyeColor,
    SkinTone,
    Height,
    Build,
}

impl CharacteristicKind {
    pub const ALL: [CharacteristicKind; 5] = [
        Self::HairColor,
        Self::EyeColor,
        Self::SkinTone,
        Self::Height,
        Self::Build,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HairColor => "hair_color",
            Self::EyeColor => "eye_color",
            Self::SkinTone => "skin_tone",
            Self::Height => "height",
            Self::Build => "build",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HairColor => "Hair Color",
            Self::EyeColor => "Eye Color",
            Self::SkinTone => "Skin Tone",
            Self::Height => "Height",
            Self::Build => "Build",
        }
    }

    /// Values offered by the creation form
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::HairColor => appearance::HAIR_COLORS,
            Self::EyeColor => appearance::EYE_COLORS,
            Self::SkinTone => appearance::SKIN_TONES,
            Self::Height => appearance::HEIGHTS,
            Self::Build => appearance::BUILDS,
        }
    }
}

impl std::fmt::Display for CharacteristicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_character() {
        let json = r#"{
            "id": "c-1",
            "name": "Rin",
            "attributes": {"strength": 5, "intelligence": 7, "charisma": 3, "agility": 6, "luck": 2},
            "characteristics": {
                "hair_color": "black", "eye_color": "amber", "skin_tone": "olive",
                "height": "tall", "build": "slim"
            },
            "image_url": "https://example.test/rin.png",
            "created_at": "2024-05-01T12:00:00.000001"
        }"#;

        let character: Character = serde_json::from_str(json).expect("character");
        assert_eq!(character.name, "Rin");
        assert_eq!(character.attributes.get(AttributeKind::Intelligence), 7);
        assert_eq!(character.characteristics.get(CharacteristicKind::Height), "tall");
        assert_eq!(
            character.image_url.as_deref(),
            Some("https://example.test/rin.png")
        );
    }

    #[test]
    fn null_image_url_is_none() {
        let json = r#"{
            "id": "c-2", "name": "Ash",
            "attributes": {"strength": 1, "intelligence": 1, "charisma": 1, "agility": 1, "luck": 1},
            "characteristics": {"hair_color": "red", "eye_color": "blue", "skin_tone": "fair", "height": "short", "build": "heavy"},
            "image_url": null,
            "created_at": "2024-05-01T12:00:00"
        }"#;
        let character: Character = serde_json::from_str(json).expect("character");
        assert!(character.image_url.is_none());
    }

    #[test]
    fn attribute_set_targets_single_field() {
        let mut attrs = CharacterAttributes::default();
        attrs.set(AttributeKind::Luck, 9);
        assert_eq!(attrs.luck, 9);
        assert_eq!(attrs.strength, appearance::ATTRIBUTE_DEFAULT);
    }

    #[test]
    fn attribute_summary_lists_first_three() {
        let attrs = CharacterAttributes {
            strength: 4,
            intelligence: 8,
            charisma: 6,
            agility: 1,
            luck: 1,
        };
        assert_eq!(attrs.summary(), "STR: 4 | INT: 8 | CHA: 6");
    }

    #[test]
    fn kind_wire_names_match_json_fields() {
        let attrs = serde_json::to_value(CharacterAttributes::default()).expect("attributes");
        for kind in AttributeKind::ALL {
            assert_eq!(attrs[kind.as_str()], appearance::ATTRIBUTE_DEFAULT);
        }

        let traits =
            serde_json::to_value(CharacterCharacteristics::default()).expect("characteristics");
        let defaults = CharacterCharacteristics::default();
        for kind in CharacteristicKind::ALL {
            assert_eq!(traits[kind.as_str()], defaults.get(kind));
        }
    }

    #[test]
    fn default_characteristics_match_form_defaults() {
        let defaults = CharacterCharacteristics::default();
        assert_eq!(defaults.hair_color, "brown");
        assert_eq!(defaults.skin_tone, "medium");
        assert_eq!(defaults.build, "athletic");
    }
}
