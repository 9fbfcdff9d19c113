//! Attribute Grid - Label/value pairs for all five attributes

use dioxus::prelude::*;
use lifesim_domain::{AttributeKind, CharacterAttributes};

/// `abbreviated` switches labels from `Strength:` to `STR:`
#[component]
pub fn AttributeGrid(attributes: CharacterAttributes, abbreviated: bool) -> Element {
    rsx! {
        div {
            class: "attribute-grid",
            for kind in AttributeKind::ALL {
                div {
                    key: "{kind.as_str()}-label",
                    class: "attribute-grid__label",
                    if abbreviated {
                        "{kind.abbreviation()}:"
                    } else {
                        "{kind.label()}:"
                    }
                }
                div {
                    key: "{kind.as_str()}-value",
                    class: "attribute-grid__value",
                    "{attributes.get(kind)}"
                }
            }
        }
    }
}
