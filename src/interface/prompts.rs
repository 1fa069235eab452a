use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::analytics::AnalysisKind;
use crate::error::Result;
use crate::models::{MenuItem, NewMenuItem, RawField, RawIngredients, MENU_CATEGORIES};

/// Minimum Jaro-Winkler similarity for a fuzzy name suggestion.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy suggestions offered.
pub const MAX_SUGGESTIONS: usize = 5;

/// Actions offered by the interactive session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    AddItem,
    ListItems,
    Summary,
    Report(AnalysisKind),
    Quit,
}

const SESSION_ACTIONS: [(&str, SessionAction); 8] = [
    ("Add menu item", SessionAction::AddItem),
    ("List menu", SessionAction::ListItems),
    ("Menu summary", SessionAction::Summary),
    ("Generate profit analysis", SessionAction::Report(AnalysisKind::Profit)),
    ("Optimize pricing", SessionAction::Report(AnalysisKind::Pricing)),
    ("Identify trends", SessionAction::Report(AnalysisKind::Trends)),
    ("Cost analysis", SessionAction::Report(AnalysisKind::Costs)),
    ("Quit", SessionAction::Quit),
];

/// Prompt for the next session action.
pub fn prompt_action() -> Result<SessionAction> {
    let labels: Vec<&str> = SESSION_ACTIONS.iter().map(|(label, _)| *label).collect();
    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(SESSION_ACTIONS
        .get(selection)
        .map(|(_, action)| *action)
        .unwrap_or(SessionAction::Quit))
}

fn prompt_text(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Prompt for every field of a new menu item.
///
/// Values are collected as raw text; validation happens when the item is
/// added to a store.
pub fn prompt_new_item() -> Result<NewMenuItem> {
    let name = prompt_text("Item name (e.g., Grilled Salmon)")?;

    let category_idx = Select::new()
        .with_prompt("Category")
        .items(&MENU_CATEGORIES)
        .default(0)
        .interact()?;
    let category = MENU_CATEGORIES[category_idx];

    let selling_price = prompt_text("Selling price ($)")?;
    let food_cost = prompt_text("Food cost ($)")?;
    let prep_time = prompt_text("Prep time (minutes)")?;
    let monthly_sales = prompt_text("Monthly sales (units)")?;
    let ingredients = prompt_text("Ingredients (comma-separated, optional)")?;

    Ok(NewMenuItem {
        name: Some(RawField::Text(name)),
        category: Some(category.into()),
        selling_price: Some(RawField::Text(selling_price)),
        food_cost: Some(RawField::Text(food_cost)),
        prep_time: Some(RawField::Text(prep_time)),
        monthly_sales: Some(RawField::Text(monthly_sales)),
        ingredients: Some(RawIngredients::List(
            ingredients.split(',').map(str::to_string).collect(),
        )),
    })
}

/// Items whose names resemble `query`, best match first.
pub fn suggest_items<'a>(items: &'a [MenuItem], query: &str) -> Vec<&'a MenuItem> {
    let query = query.trim().to_lowercase();
    let mut candidates: Vec<(&MenuItem, f64)> = items
        .iter()
        .map(|item| (item, jaro_winkler(&item.key(), &query)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(item, _)| item)
        .collect()
}

/// Let the user pick among fuzzy suggestions. `None` if they decline.
pub fn prompt_pick_item<'a>(query: &str, candidates: &[&'a MenuItem]) -> Result<Option<&'a MenuItem>> {
    if candidates.len() == 1 {
        let item = candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("No exact match for '{}'. Did you mean '{}'?", query, item.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(item));
    }

    let mut options: Vec<String> = candidates.iter().map(|item| item.name.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(candidates.get(selection).copied())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
