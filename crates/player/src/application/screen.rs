//! Top-level screen selection
//!
//! Exactly one of four screens is visible. Which one follows from three
//! flags; events from the screens update the flags.

use crate::application::services::BootOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Auth,
    CharacterCreation,
    Game,
}

impl Screen {
    /// Window/page title for this screen
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Loading => "Life Sim Game",
            Screen::Auth => "Life Sim Game - Login",
            Screen::CharacterCreation => "Life Sim Game - Create Your Character",
            Screen::Game => "Life Sim Game - Adventure",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    BootCompleted(BootOutcome),
    /// Login or registration succeeded
    Authenticated,
    CharacterCreated,
    LoggedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenState {
    pub loading: bool,
    pub is_authenticated: bool,
    pub has_character: bool,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            loading: true,
            is_authenticated: false,
            has_character: false,
        }
    }
}

impl ScreenState {
    pub fn screen(&self) -> Screen {
        match (self.loading, self.is_authenticated, self.has_character) {
            (true, _, _) => Screen::Loading,
            (false, false, _) => Screen::Auth,
            (false, true, false) => Screen::CharacterCreation,
            (false, true, true) => Screen::Game,
        }
    }

    pub fn apply(&mut self, event: ScreenEvent) {
        match event {
            ScreenEvent::BootCompleted(outcome) => {
                self.loading = false;
                self.is_authenticated = outcome.is_authenticated();
                self.has_character = outcome.has_character();
            }
            ScreenEvent::Authenticated => {
                self.loading = false;
                self.is_authenticated = true;
                self.has_character = false;
            }
            ScreenEvent::CharacterCreated => {
                // Only meaningful while logged in
                if self.is_authenticated {
                    self.has_character = true;
                }
            }
            ScreenEvent::LoggedOut => {
                self.loading = false;
                self.is_authenticated = false;
                self.has_character = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures;
    use lifesim_domain::User;

    fn user() -> User {
        User {
            id: "u-1".into(),
            email: "rin@example.test".to_string(),
            username: "rin".to_string(),
            created_at: fixtures::fixed_timestamp(),
        }
    }

    fn booted(outcome: BootOutcome) -> ScreenState {
        let mut state = ScreenState::default();
        state.apply(ScreenEvent::BootCompleted(outcome));
        state
    }

    #[test]
    fn starts_loading() {
        assert_eq!(ScreenState::default().screen(), Screen::Loading);
    }

    #[test]
    fn boot_outcomes_pick_screen() {
        assert_eq!(booted(BootOutcome::NoToken).screen(), Screen::Auth);
        assert_eq!(
            booted(BootOutcome::Rejected {
                reason: "Could not validate credentials".to_string()
            })
            .screen(),
            Screen::Auth
        );
        assert_eq!(
            booted(BootOutcome::Authenticated {
                user: user(),
                has_character: false
            })
            .screen(),
            Screen::CharacterCreation
        );
        assert_eq!(
            booted(BootOutcome::Authenticated {
                user: user(),
                has_character: true
            })
            .screen(),
            Screen::Game
        );
    }

    #[test]
    fn login_then_create_reaches_dashboard() {
        let mut state = booted(BootOutcome::NoToken);

        state.apply(ScreenEvent::Authenticated);
        assert_eq!(state.screen(), Screen::CharacterCreation);

        state.apply(ScreenEvent::CharacterCreated);
        assert_eq!(state.screen(), Screen::Game);
    }

    #[test]
    fn logout_resets_everything() {
        let mut state = booted(BootOutcome::Authenticated {
            user: user(),
            has_character: true,
        });

        state.apply(ScreenEvent::LoggedOut);

        assert_eq!(state.screen(), Screen::Auth);
        assert!(!state.has_character);
        assert!(!state.is_authenticated);
    }

    #[test]
    fn character_created_is_ignored_when_logged_out() {
        let mut state = booted(BootOutcome::NoToken);
        state.apply(ScreenEvent::CharacterCreated);
        assert_eq!(state.screen(), Screen::Auth);
    }

    #[test]
    fn every_screen_has_a_title() {
        for screen in [
            Screen::Loading,
            Screen::Auth,
            Screen::CharacterCreation,
            Screen::Game,
        ] {
            assert!(screen.title().starts_with("Life Sim Game"));
        }
    }
}
