//! Wire DTOs exchanged with the backend
//!
//! Domain entities (`Character`, `GameState`, ...) are deserialized
//! directly; the types here cover request bodies and the few response
//! envelopes that are not entities.

pub mod requests;
pub mod responses;

pub use requests::{CharacterDraft, GenerateActionRequest, LoginRequest, RegisterRequest};
pub use responses::{AuthToken, GeneratedAction, TravelResult};
