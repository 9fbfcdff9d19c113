//! Game View - The adventure dashboard
//!
//! Loads the game state on mount and after every action. Only one action can
//! run at a time; the buttons stay disabled until the refresh completes.

use dioxus::prelude::*;
use lifesim_domain::{GameState, PlaceId};

use crate::application::services::DashboardAction;
use crate::infrastructure::spawn_task;
use crate::presentation::components::{AttributeGrid, EntityCard};
use crate::presentation::services::use_game_service;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InfoTab {
    Inventory,
    Characters,
    Places,
}

impl InfoTab {
    const ALL: [InfoTab; 3] = [Self::Inventory, Self::Characters, Self::Places];

    fn label(self) -> &'static str {
        match self {
            Self::Inventory => "Inventory",
            Self::Characters => "Characters",
            Self::Places => "Places",
        }
    }

    fn empty_text(self) -> &'static str {
        match self {
            Self::Inventory => "No items yet",
            Self::Characters => "No characters met yet",
            Self::Places => "No places discovered yet",
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab tab--active"
    } else {
        "tab"
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoadStatus {
    Loading,
    Loaded,
    Failed,
}

#[component]
pub fn GameView(on_logout: EventHandler<()>) -> Element {
    let game = use_game_service();

    let mut state: Signal<Option<GameState>> = use_signal(|| None);
    let mut status = use_signal(|| LoadStatus::Loading);
    let mut busy = use_signal(|| false);
    let mut last_message: Signal<Option<String>> = use_signal(|| None);
    let mut tab = use_signal(|| InfoTab::Inventory);

    // Initial load
    {
        let game = game.clone();
        use_effect(move || {
            let svc = game.clone();
            spawn_task(async move {
                match svc.game_state().await {
                    Ok(loaded) => {
                        state.set(Some(loaded));
                        status.set(LoadStatus::Loaded);
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to load game state");
                        status.set(LoadStatus::Failed);
                    }
                }
            });
        });
    }

    let run_action = use_callback(move |action: DashboardAction| {
        if *busy.read() {
            return;
        }
        let svc = game.clone();
        busy.set(true);
        spawn_task(async move {
            match svc.perform(action).await {
                Ok(outcome) => {
                    last_message.set(Some(outcome.message));
                    if let Some(refreshed) = outcome.state {
                        state.set(Some(refreshed));
                    }
                }
                Err(e) => tracing::error!(error = %e, "Dashboard action failed"),
            }
            busy.set(false);
        });
    });

    match *status.read() {
        LoadStatus::Loading => {
            return rsx! {
                div {
                    class: "screen screen--centered",
                    div { class: "status-text", "Loading game..." }
                }
            };
        }
        LoadStatus::Failed => {
            return rsx! {
                div {
                    class: "screen screen--centered",
                    div { class: "status-text status-text--error", "Failed to load game state" }
                }
            };
        }
        LoadStatus::Loaded => {}
    }

    let Some(current) = state.read().clone() else {
        return rsx! {
            div {
                class: "screen screen--centered",
                div { class: "status-text status-text--error", "Failed to load game state" }
            }
        };
    };

    let is_busy = *busy.read();
    let active_tab = *tab.read();
    let actions: Vec<(&'static str, DashboardAction)> = [
        DashboardAction::MeetCharacter,
        DashboardAction::DiscoverPlace,
        DashboardAction::FindObject,
        DashboardAction::RandomEvent {
            context: current.current_place_name().to_string(),
        },
    ]
    .into_iter()
    .map(|action| (action.label(), action))
    .collect();

    rsx! {
        div {
            class: "screen screen--scroll",
            div {
                class: "page page--wide",

                div {
                    class: "page__header",
                    h1 { class: "page__title", "Life Sim Game" }
                    button {
                        class: "btn btn--outline",
                        onclick: move |_| on_logout.call(()),
                        "Logout"
                    }
                }

                div {
                    class: "dashboard",

                    div {
                        class: "dashboard__main",

                        div {
                            class: "card",
                            h2 { class: "card__title", "Your Character" }
                            if let Some(player) = current.player_character.as_ref() {
                                div {
                                    class: "player-card",
                                    if let Some(src) = player.image_url.as_ref() {
                                        div {
                                            class: "player-card__image",
                                            img { src: "{src}", alt: "{player.name}" }
                                        }
                                    }
                                    div {
                                        h3 { class: "player-card__name", "{player.name}" }
                                        AttributeGrid {
                                            attributes: player.attributes,
                                            abbreviated: true,
                                        }
                                    }
                                }
                            } else {
                                div { class: "muted", "No character created" }
                            }
                        }

                        div {
                            class: "card",
                            h2 { class: "card__title", "Current Location" }
                            if let Some(place) = current.current_place.as_ref() {
                                div {
                                    class: "location",
                                    if let Some(src) = place.image_url.as_ref() {
                                        div {
                                            class: "location__image",
                                            img { src: "{src}", alt: "{place.name}" }
                                        }
                                    }
                                    h3 { class: "location__name", "{place.name}" }
                                    p { class: "muted", "{place.description}" }
                                }
                            } else {
                                div { class: "muted", "No current location" }
                            }
                        }

                        div {
                            class: "card",
                            h2 { class: "card__title", "Actions" }
                            p { class: "card__description", "Generate random events and discoveries" }
                            if let Some(message) = last_message.read().as_ref() {
                                div { class: "action-message", "{message}" }
                            }
                            div {
                                class: "action-grid",
                                for (label, action) in actions {
                                    button {
                                        key: "{label}",
                                        class: "btn btn--primary",
                                        disabled: is_busy,
                                        onclick: move |_| run_action.call(action.clone()),
                                        "{label}"
                                    }
                                }
                            }
                        }

                        div {
                            class: "card",
                            h2 { class: "card__title", "Adventure Log" }
                            if current.action_history.is_empty() {
                                div { class: "muted", "Nothing has happened yet" }
                            } else {
                                ul {
                                    class: "adventure-log",
                                    for entry in current.recent_actions() {
                                        li {
                                            key: "{entry.id}",
                                            span { class: "adventure-log__time", "{entry.timestamp.display_short()}" }
                                            span { "{entry.description}" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "dashboard__side card",
                        h2 { class: "card__title", "Game Info" }
                        div {
                            class: "tab-bar",
                            for info_tab in InfoTab::ALL {
                                button {
                                    key: "{info_tab.label()}",
                                    class: "{tab_class(info_tab == active_tab)}",
                                    onclick: move |_| tab.set(info_tab),
                                    "{info_tab.label()}"
                                }
                            }
                        }
                        div {
                            class: "tab-content",
                            {match active_tab {
                                InfoTab::Inventory if !current.inventory.is_empty() => rsx! {
                                    for item in current.inventory.iter() {
                                        EntityCard {
                                            key: "{item.id}",
                                            name: item.name.clone(),
                                            detail: item.description.clone(),
                                            image_url: item.image_url.clone(),
                                        }
                                    }
                                },
                                InfoTab::Characters if !current.discovered_characters.is_empty() => rsx! {
                                    for character in current.discovered_characters.iter() {
                                        EntityCard {
                                            key: "{character.id}",
                                            name: character.name.clone(),
                                            detail: character.attributes.summary(),
                                            image_url: character.image_url.clone(),
                                        }
                                    }
                                },
                                InfoTab::Places if !current.discovered_places.is_empty() => rsx! {
                                    for place in current.discovered_places.iter() {
                                        div {
                                            key: "{place.id}",
                                            class: "place-entry",
                                            EntityCard {
                                                name: place.name.clone(),
                                                detail: place.description.clone(),
                                                image_url: place.image_url.clone(),
                                            }
                                            if !current.is_current_place(&place.id) {
                                                TravelButton {
                                                    place_id: place.id.clone(),
                                                    disabled: is_busy,
                                                    on_travel: move |id: PlaceId| run_action.call(DashboardAction::Travel(id)),
                                                }
                                            }
                                        }
                                    }
                                },
                                empty => rsx! {
                                    div { class: "empty-state", "{empty.empty_text()}" }
                                },
                            }}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TravelButton(place_id: PlaceId, disabled: bool, on_travel: EventHandler<PlaceId>) -> Element {
    rsx! {
        button {
            class: "btn btn--primary btn--small",
            disabled,
            onclick: move |_| on_travel.call(place_id.clone()),
            "Travel Here"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_has_an_empty_state() {
        let texts: Vec<_> = InfoTab::ALL.iter().map(|t| t.empty_text()).collect();
        assert_eq!(
            texts,
            vec!["No items yet", "No characters met yet", "No places discovered yet"]
        );
    }
}
