//! Character creation conventions.
//!
//! The backend accepts any integer attribute and any characteristic string.
//! These bounds and option lists are what the creation form offers; they are
//! not validated anywhere.

/// Lowest value offered by the attribute sliders
pub const ATTRIBUTE_MIN: i32 = 1;

/// Highest value offered by the attribute sliders
pub const ATTRIBUTE_MAX: i32 = 10;

/// Starting value of every attribute slider
pub const ATTRIBUTE_DEFAULT: i32 = 5;

pub const HAIR_COLORS: &[&str] = &[
    "black", "brown", "blonde", "red", "white", "gray", "blue", "purple",
];

pub const EYE_COLORS: &[&str] = &["brown", "blue", "green", "hazel", "gray", "amber"];

pub const SKIN_TONES: &[&str] = &[
    "pale", "fair", "light", "medium", "tan", "olive", "brown", "dark",
];

pub const HEIGHTS: &[&str] = &["short", "average", "tall", "very tall"];

pub const BUILDS: &[&str] = &["slim", "athletic", "muscular", "stocky", "heavy"];

pub const DEFAULT_HAIR_COLOR: &str = "brown";
pub const DEFAULT_EYE_COLOR: &str = "brown";
pub const DEFAULT_SKIN_TONE: &str = "medium";
pub const DEFAULT_HEIGHT: &str = "average";
pub const DEFAULT_BUILD: &str = "athletic";

/// Clamp a slider value into the offered range
pub fn clamp_attribute(value: i32) -> i32 {
    value.clamp(ATTRIBUTE_MIN, ATTRIBUTE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_offered_options() {
        assert!(HAIR_COLORS.contains(&DEFAULT_HAIR_COLOR));
        assert!(EYE_COLORS.contains(&DEFAULT_EYE_COLOR));
        assert!(SKIN_TONES.contains(&DEFAULT_SKIN_TONE));
        assert!(HEIGHTS.contains(&DEFAULT_HEIGHT));
        assert!(BUILDS.contains(&DEFAULT_BUILD));
    }

    #[test]
    fn clamp_attribute_keeps_slider_range() {
        assert_eq!(clamp_attribute(0), ATTRIBUTE_MIN);
        assert_eq!(clamp_attribute(7), 7);
        assert_eq!(clamp_attribute(42), ATTRIBUTE_MAX);
    }
}
