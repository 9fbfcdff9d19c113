//! Application services
//!
//! Services depend on port traits, not concrete infrastructure. REST
//! services are generic over `A: ApiPort`; the UI instantiates them with
//! [`crate::application::api::Api`].

pub mod auth_service;
pub mod character_service;
pub mod game_service;
pub mod session_service;
pub mod token_store;

pub use auth_service::AuthService;
pub use character_service::CharacterService;
pub use game_service::{ActionOutcome, DashboardAction, GameService};
pub use session_service::{BootOutcome, SessionService};
pub use token_store::TokenStore;
