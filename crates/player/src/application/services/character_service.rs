//! Character Service - Player character creation
//!
//! `preview` asks the backend to render a draft without saving it and works
//! without a token. `create` persists the draft as the player character of
//! the logged-in user.

use lifesim_domain::Character;

use crate::application::dto::CharacterDraft;
use crate::ports::outbound::{ApiError, ApiPort};

pub struct CharacterService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> CharacterService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn create(&self, draft: &CharacterDraft) -> Result<Character, ApiError> {
        let character: Character = self.api.post("/api/character/create", draft).await?;
        tracing::info!(name = %character.name, "Created player character");
        Ok(character)
    }

    pub async fn preview(&self, draft: &CharacterDraft) -> Result<Character, ApiError> {
        self.api.post("/api/character/preview", draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::api::Api;
    use crate::application::services::{AuthService, GameService, TokenStore};
    use crate::infrastructure::platform::mock::MemoryStorageProvider;
    use crate::infrastructure::testing::FakeBackend;
    use lifesim_domain::AttributeKind;

    fn draft(name: &str) -> CharacterDraft {
        let mut draft = CharacterDraft {
            name: name.to_string(),
            ..CharacterDraft::default()
        };
        draft.attributes.set(AttributeKind::Strength, 7);
        draft
    }

    #[tokio::test]
    async fn created_character_becomes_player_character() {
        let tokens = Arc::new(TokenStore::load(MemoryStorageProvider::default()));
        let api = Api::new(Arc::new(FakeBackend::new(tokens.clone())));
        let auth = AuthService::new(api.clone(), tokens);
        let characters = CharacterService::new(api.clone());
        let game = GameService::new(api);

        auth.register("rin@example.test", "rin", "pw").await.expect("register");
        let created = characters.create(&draft("Rin")).await.expect("create");
        assert_eq!(created.attributes.strength, 7);

        let state = game.game_state().await.expect("state");
        let player = state.player_character.expect("player character");
        assert_eq!(player.name, "Rin");
        assert_eq!(player.id, created.id);
    }

    #[tokio::test]
    async fn preview_needs_no_token_and_saves_nothing() {
        let tokens = Arc::new(TokenStore::load(MemoryStorageProvider::default()));
        let backend = Arc::new(FakeBackend::new(tokens.clone()));
        let api = Api::new(backend.clone());
        let characters = CharacterService::new(api.clone());

        let preview = characters.preview(&draft("Ghost")).await.expect("preview");
        assert_eq!(preview.name, "Ghost");
        assert!(preview.image_url.is_some());

        let auth = AuthService::new(api.clone(), tokens);
        auth.register("g@example.test", "g", "pw").await.expect("register");
        let state = GameService::new(api).game_state().await.expect("state");
        assert!(!state.has_player_character());
    }

    #[tokio::test]
    async fn create_without_token_fails() {
        let tokens = Arc::new(TokenStore::load(MemoryStorageProvider::default()));
        let characters =
            CharacterService::new(Api::new(Arc::new(FakeBackend::new(tokens))));

        let err = characters.create(&draft("Nobody")).await.expect_err("no token");
        assert_eq!(err.message(), "Not authenticated");
    }
}
