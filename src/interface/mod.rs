pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_action, prompt_new_item, prompt_pick_item, prompt_yes_no, suggest_items, SessionAction,
};
pub use render::{
    display_item_details, display_menu_items, display_recommendations, display_summary,
    print_recommendations_json,
};
