//! Reusable UI components

pub mod attribute_grid;
pub mod attribute_slider;
pub mod characteristic_select;
pub mod entity_card;

pub use attribute_grid::AttributeGrid;
pub use attribute_slider::AttributeSlider;
pub use characteristic_select::CharacteristicSelect;
pub use entity_card::EntityCard;
