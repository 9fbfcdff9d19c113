use dioxus::prelude::*;

/// Shown while the persisted token is being verified
#[component]
pub fn LoadingView() -> Element {
    rsx! {
        div {
            class: "screen screen--centered",
            div { class: "status-text", "Loading..." }
        }
    }
}
