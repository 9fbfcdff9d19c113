//! Service providers for the presentation layer
//!
//! The composition root builds one [`UiServices`] and hands it to Dioxus as
//! context. Components use the hooks below instead of depending on
//! infrastructure adapter types.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::{AuthService, CharacterService, GameService, SessionService};
use crate::ports::outbound::{ApiPort, CredentialPort};

/// Concrete service bundle type used by the UI.
pub type UiServices = Services<Api>;

#[derive(Clone)]
pub struct Services<A: ApiPort> {
    pub auth: Arc<AuthService<A>>,
    pub character: Arc<CharacterService<A>>,
    pub game: Arc<GameService<A>>,
    pub session: Arc<SessionService<A>>,
}

impl<A: ApiPort + Clone> Services<A> {
    /// Create all services over one API port and one credential store
    pub fn new(api: A, credentials: Arc<dyn CredentialPort>) -> Self {
        let auth = Arc::new(AuthService::new(api.clone(), credentials));
        let game = Arc::new(GameService::new(api.clone()));
        Self {
            session: Arc::new(SessionService::new(auth.clone(), game.clone())),
            character: Arc::new(CharacterService::new(api)),
            auth,
            game,
        }
    }
}

/// Hook to access the AuthService from context
pub fn use_auth_service() -> Arc<AuthService<Api>> {
    let services = use_context::<UiServices>();
    services.auth.clone()
}

/// Hook to access the CharacterService from context
pub fn use_character_service() -> Arc<CharacterService<Api>> {
    let services = use_context::<UiServices>();
    services.character.clone()
}

/// Hook to access the GameService from context
pub fn use_game_service() -> Arc<GameService<Api>> {
    let services = use_context::<UiServices>();
    services.game.clone()
}

/// Hook to access the SessionService from context
pub fn use_session_service() -> Arc<SessionService<Api>> {
    let services = use_context::<UiServices>();
    services.session.clone()
}
