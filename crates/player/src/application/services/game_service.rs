//! Game Service - Dashboard operations
//!
//! Each generator mutates the server-side game state and returns only the
//! new entity. The dashboard never patches its local copy; [`GameService::perform`]
//! runs the mutation, builds the message shown to the player, then fetches
//! the whole state again.

use lifesim_domain::{Character, GameObject, GameState, Place, PlaceId};

use crate::application::dto::{GenerateActionRequest, GeneratedAction, TravelResult};
use crate::ports::outbound::{ApiError, ApiPort};

/// A dashboard button press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    MeetCharacter,
    DiscoverPlace,
    FindObject,
    /// Free-form event; `context` is the current place name or empty
    RandomEvent { context: String },
    Travel(PlaceId),
}

impl DashboardAction {
    /// Button label (travel is rendered per place instead)
    pub fn label(&self) -> &'static str {
        match self {
            Self::MeetCharacter => "Meet Character",
            Self::DiscoverPlace => "Discover Place",
            Self::FindObject => "Find Object",
            Self::RandomEvent { .. } => "Random Event",
            Self::Travel(_) => "Travel Here",
        }
    }
}

/// Result of a dashboard action
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    /// Message for the last-action banner
    pub message: String,
    /// State fetched after the mutation; `None` if that fetch failed
    pub state: Option<GameState>,
}

pub struct GameService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> GameService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn game_state(&self) -> Result<GameState, ApiError> {
        self.api.get("/api/game/state").await
    }

    pub async fn generate_character(&self) -> Result<Character, ApiError> {
        self.api.post_empty("/api/game/generate-character").await
    }

    /// Also becomes the current place
    pub async fn generate_place(&self) -> Result<Place, ApiError> {
        self.api.post_empty("/api/game/generate-place").await
    }

    pub async fn generate_object(&self) -> Result<GameObject, ApiError> {
        self.api.post_empty("/api/game/generate-object").await
    }

    pub async fn generate_action(&self, context: &str) -> Result<GeneratedAction, ApiError> {
        let request = GenerateActionRequest {
            context: context.to_string(),
        };
        self.api.post("/api/game/generate-action", &request).await
    }

    pub async fn travel_to_place(&self, place_id: &PlaceId) -> Result<TravelResult, ApiError> {
        let path = format!("/api/game/travel-to-place/{}", place_id);
        self.api.post_empty(&path).await
    }

    /// Run a dashboard action and refresh the game state
    ///
    /// A failed mutation is returned as the error. A failed refresh after a
    /// successful mutation is only logged; the outcome then carries no state
    /// and the caller keeps what it had.
    pub async fn perform(&self, action: DashboardAction) -> Result<ActionOutcome, ApiError> {
        let message = match &action {
            DashboardAction::MeetCharacter => {
                let character = self.generate_character().await?;
                format!("You encountered {}!", character.name)
            }
            DashboardAction::DiscoverPlace => {
                let place = self.generate_place().await?;
                format!("You discovered {}!", place.name)
            }
            DashboardAction::FindObject => {
                let object = self.generate_object().await?;
                format!("You found {}!", object.name)
            }
            DashboardAction::RandomEvent { context } => self.generate_action(context).await?.action,
            DashboardAction::Travel(place_id) => self.travel_to_place(place_id).await?.message,
        };
        tracing::debug!(action = action.label(), %message, "Dashboard action completed");

        let state = match self.game_state().await {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to refresh game state after action");
                None
            }
        };

        Ok(ActionOutcome { message, state })
    }
}
