//! Session Service - Startup verification of a persisted token
//!
//! On launch the client may hold a token from a previous run. Boot checks it
//! against `/api/user/me`, then loads the game state to decide between
//! character creation and the dashboard. Any failure discards the token.

use std::sync::Arc;

use lifesim_domain::User;

use crate::application::services::{AuthService, GameService};
use crate::ports::outbound::ApiPort;

/// Where the client ends up after boot
#[derive(Debug, Clone, PartialEq)]
pub enum BootOutcome {
    /// Nothing persisted
    NoToken,
    /// A token was found but rejected; it has been cleared
    Rejected { reason: String },
    Authenticated { user: User, has_character: bool },
}

impl BootOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn has_character(&self) -> bool {
        matches!(
            self,
            Self::Authenticated {
                has_character: true,
                ..
            }
        )
    }
}

pub struct SessionService<A: ApiPort> {
    auth: Arc<AuthService<A>>,
    game: Arc<GameService<A>>,
}

impl<A: ApiPort> SessionService<A> {
    pub fn new(auth: Arc<AuthService<A>>, game: Arc<GameService<A>>) -> Self {
        Self { auth, game }
    }

    pub async fn boot(&self) -> BootOutcome {
        if !self.auth.is_logged_in() {
            tracing::debug!("No persisted token");
            return BootOutcome::NoToken;
        }

        let user = match self.auth.current_user().await {
            Ok(user) => user,
            Err(e) => return self.reject(e.message()),
        };

        match self.game.game_state().await {
            Ok(state) => {
                tracing::info!(
                    username = %user.username,
                    has_character = state.has_player_character(),
                    "Session restored"
                );
                BootOutcome::Authenticated {
                    user,
                    has_character: state.has_player_character(),
                }
            }
            Err(e) => self.reject(e.message()),
        }
    }

    fn reject(&self, reason: String) -> BootOutcome {
        tracing::warn!(%reason, "Persisted token rejected, clearing it");
        self.auth.logout();
        BootOutcome::Rejected { reason }
    }
}
