mod import;
mod store;

pub use import::{export_items, load_menu, MenuFormat};
pub use store::{MenuStore, SharedMenuStore};
