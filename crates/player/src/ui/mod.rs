use dioxus::prelude::*;

use crate::application::{Screen, ScreenEvent, ScreenState};
use crate::infrastructure::spawn_task;

pub mod presentation;

use presentation::services::{use_auth_service, use_session_service};
use presentation::views::{AuthView, CharacterCreationView, GameView, LoadingView};

pub use crate::config::ShellKind;
pub use crate::state::Platform;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/runner.rs`).
    let shell = use_context::<ShellKind>();

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/main.css"),
        }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        ScreenSwitch {}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        ScreenSwitch {}
                    }
                },
            }
        }
    }
}

/// Picks the visible screen from [`ScreenState`]
///
/// Boot runs once on mount. Each screen reports back through an event
/// handler; the screen that emitted it is unmounted when the state moves on,
/// which also drops any request it still had running.
#[component]
fn ScreenSwitch() -> Element {
    let platform = use_platform();
    let session = use_session_service();
    let auth = use_auth_service();

    let mut screen_state = use_signal(ScreenState::default);

    use_effect(move || {
        let session = session.clone();
        spawn_task(async move {
            let outcome = session.boot().await;
            screen_state.write().apply(ScreenEvent::BootCompleted(outcome));
        });
    });

    // Title follows the visible screen
    use_effect(move || {
        let screen = screen_state.read().screen();
        platform.set_page_title(screen.title());
    });

    let screen = screen_state.read().screen();
    tracing::trace!(?screen, "Rendering screen");

    match screen {
        Screen::Loading => rsx! { LoadingView {} },
        Screen::Auth => rsx! {
            AuthView {
                on_authenticated: move |_| screen_state.write().apply(ScreenEvent::Authenticated),
            }
        },
        Screen::CharacterCreation => rsx! {
            CharacterCreationView {
                on_created: move |_| screen_state.write().apply(ScreenEvent::CharacterCreated),
            }
        },
        Screen::Game => rsx! {
            GameView {
                on_logout: move |_| {
                    auth.logout();
                    screen_state.write().apply(ScreenEvent::LoggedOut);
                },
            }
        },
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            class: "shell shell--desktop",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        // Same screens, narrower layout bounds.
        div {
            class: "shell shell--mobile",
            {children}
        }
    }
}
