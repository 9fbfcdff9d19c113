//! Character Creation View - Build the player character
//!
//! The form edits a [`CharacterDraft`]. Preview renders the draft on the
//! server without saving it; Create saves it and hands control back to the
//! root. Both are disabled while the name is blank or a request is running.

use dioxus::prelude::*;
use lifesim_domain::{AttributeKind, Character, CharacteristicKind};

use crate::application::dto::CharacterDraft;
use crate::infrastructure::spawn_task;
use crate::presentation::components::{AttributeGrid, AttributeSlider, CharacteristicSelect};
use crate::presentation::services::use_character_service;

#[component]
pub fn CharacterCreationView(on_created: EventHandler<()>) -> Element {
    let characters = use_character_service();

    let mut draft = use_signal(CharacterDraft::default);
    let mut preview: Signal<Option<Character>> = use_signal(|| None);
    let mut busy = use_signal(|| false);

    let preview_characters = characters.clone();
    let on_preview = move |_| {
        let request = draft.read().clone();
        let svc = preview_characters.clone();
        busy.set(true);
        spawn_task(async move {
            match svc.preview(&request).await {
                Ok(character) => preview.set(Some(character)),
                Err(e) => tracing::error!(error = %e, "Failed to preview character"),
            }
            busy.set(false);
        });
    };

    let on_create = move |_| {
        let request = draft.read().clone();
        let svc = characters.clone();
        busy.set(true);
        spawn_task(async move {
            match svc.create(&request).await {
                Ok(_) => on_created.call(()),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create character");
                    busy.set(false);
                }
            }
        });
    };

    let current = draft.read().clone();
    let disabled = !current.has_name() || *busy.read();

    rsx! {
        div {
            class: "screen screen--scroll",
            div {
                class: "page",
                h1 { class: "page__title", "Create Your Character" }

                div {
                    class: "two-column",

                    div {
                        class: "card",
                        div {
                            class: "card__header",
                            h2 { class: "card__title", "Character Details" }
                            p { class: "card__description", "Customize your character's appearance and abilities" }
                        }

                        div {
                            class: "field",
                            label { class: "field-label", r#for: "name", "Character Name" }
                            input {
                                id: "name",
                                r#type: "text",
                                placeholder: "Enter character name",
                                value: "{current.name}",
                                oninput: move |e| draft.write().name = e.value(),
                            }
                        }

                        div {
                            class: "section",
                            h3 { class: "section__title", "Attributes" }
                            for kind in AttributeKind::ALL {
                                AttributeSlider {
                                    key: "{kind.as_str()}",
                                    kind,
                                    value: current.attributes.get(kind),
                                    on_change: move |value| draft.write().attributes.set(kind, value),
                                }
                            }
                        }

                        div {
                            class: "section",
                            h3 { class: "section__title", "Appearance" }
                            for kind in CharacteristicKind::ALL {
                                CharacteristicSelect {
                                    key: "{kind.as_str()}",
                                    kind,
                                    value: current.characteristics.get(kind).to_string(),
                                    on_change: move |value: String| draft.write().characteristics.set(kind, value),
                                }
                            }
                        }

                        div {
                            class: "button-row",
                            button {
                                class: "btn btn--primary",
                                disabled,
                                onclick: on_preview,
                                "Preview Character"
                            }
                            button {
                                class: "btn btn--success",
                                disabled,
                                onclick: on_create,
                                "Create Character"
                            }
                        }
                    }

                    div {
                        class: "card",
                        div {
                            class: "card__header",
                            h2 { class: "card__title", "Character Preview" }
                            p { class: "card__description", "See how your character will look" }
                        }
                        if let Some(character) = preview.read().as_ref() {
                            div {
                                class: "preview",
                                if let Some(src) = character.image_url.as_ref() {
                                    div {
                                        class: "preview__image",
                                        img { src: "{src}", alt: "{character.name}" }
                                    }
                                }
                                h3 { class: "preview__name", "{character.name}" }
                                AttributeGrid {
                                    attributes: character.attributes,
                                    abbreviated: false,
                                }
                            }
                        } else {
                            div {
                                class: "placeholder",
                                "Click \"Preview Character\" to see your character"
                            }
                        }
                    }
                }
            }
        }
    }
}
