//! Attribute Slider - Range input for one character attribute

use dioxus::prelude::*;
use lifesim_domain::appearance::{clamp_attribute, ATTRIBUTE_MAX, ATTRIBUTE_MIN};
use lifesim_domain::AttributeKind;

/// Parse a range input value, keeping it within the slider bounds
fn parse_slider_value(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().map(clamp_attribute)
}

#[component]
pub fn AttributeSlider(kind: AttributeKind, value: i32, on_change: EventHandler<i32>) -> Element {
    rsx! {
        div {
            class: "attribute-slider",
            div {
                class: "attribute-slider__header",
                label { class: "field-label", "{kind.label()}" }
                span { class: "attribute-slider__value", "{value}" }
            }
            input {
                r#type: "range",
                min: "{ATTRIBUTE_MIN}",
                max: "{ATTRIBUTE_MAX}",
                step: "1",
                value: "{value}",
                oninput: move |e| {
                    if let Some(parsed) = parse_slider_value(&e.value()) {
                        on_change.call(parsed);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_values_are_parsed_and_clamped() {
        assert_eq!(parse_slider_value("7"), Some(7));
        assert_eq!(parse_slider_value("0"), Some(ATTRIBUTE_MIN));
        assert_eq!(parse_slider_value("11"), Some(ATTRIBUTE_MAX));
        assert_eq!(parse_slider_value("abc"), None);
    }
}
