mod menu_item;
mod recommendation;

pub use menu_item::{
    MenuItem, MenuItemFields, NewMenuItem, RawField, RawIngredients, MENU_CATEGORIES,
};
pub use recommendation::{Recommendation, Severity};
