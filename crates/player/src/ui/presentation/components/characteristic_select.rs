//! Characteristic Select - Dropdown for one appearance field

use dioxus::prelude::*;
use lifesim_domain::CharacteristicKind;

/// Option text shown for a raw value (`very tall` -> `Very tall`)
fn display_option(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn CharacteristicSelect(
    kind: CharacteristicKind,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "characteristic-select",
            label { class: "field-label", "{kind.label()}" }
            select {
                value: "{value}",
                onchange: move |e| on_change.call(e.value()),
                for choice in kind.options().iter().copied() {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: choice == value.as_str(),
                        "{display_option(choice)}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_are_capitalized_for_display() {
        assert_eq!(display_option("very tall"), "Very tall");
        assert_eq!(display_option("brown"), "Brown");
        assert_eq!(display_option(""), "");
    }
}
