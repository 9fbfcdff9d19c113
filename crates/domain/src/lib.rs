//! Life Sim domain records.
//!
//! Everything in this crate is created and owned by the game backend. The
//! client keeps disposable copies and never derives state of its own, so
//! these types are plain data with serde mappings that match the wire format.

extern crate self as lifesim_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    Action, AttributeKind, Character, CharacterAttributes, CharacterCharacteristics,
    CharacteristicKind, GameObject, GameState, Place, User,
};

pub use error::DomainError;

pub use ids::{ActionId, CharacterId, ObjectId, PlaceId, UserId};

pub use value_objects::{appearance, Timestamp};
