//! Domain Entities

mod food_item;

pub use food_item::*;
