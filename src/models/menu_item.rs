use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MenuError, Result};

/// Categories offered when entering items interactively.
///
/// The analytics treat category as an opaque key, so imported menus may use
/// any label.
pub const MENU_CATEGORIES: [&str; 6] = [
    "Appetizers",
    "Main Courses",
    "Desserts",
    "Beverages",
    "Salads",
    "Soups",
];

/// A menu item with its economics and derived metrics.
///
/// Derived fields are computed once when the item is added to a store;
/// `efficiency_score` is only filled in by trend analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub selling_price: f64,
    pub food_cost: f64,
    pub prep_time: u32,
    pub monthly_sales: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub profit_margin: f64,
    pub monthly_profit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency_score: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl MenuItem {
    /// Profit earned on a single unit.
    #[inline]
    pub fn unit_profit(&self) -> f64 {
        self.selling_price - self.food_cost
    }

    /// Monthly revenue (price times units sold).
    #[inline]
    pub fn monthly_revenue(&self) -> f64 {
        self.selling_price * self.monthly_sales as f64
    }

    /// Monthly spend on ingredients.
    #[inline]
    pub fn monthly_food_cost(&self) -> f64 {
        self.food_cost * self.monthly_sales as f64
    }

    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A single raw field value as it arrives at the boundary.
///
/// Numbers may be sent either as JSON numbers or as numeric strings. Any
/// other JSON value is kept as `Other` so validation can name the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
    Other(Value),
}

impl RawField {
    fn is_blank(&self) -> bool {
        matches!(self, RawField::Text(s) if s.trim().is_empty())
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        RawField::Text(value.to_string())
    }
}

impl From<f64> for RawField {
    fn from(value: f64) -> Self {
        RawField::Number(value)
    }
}

impl From<u32> for RawField {
    fn from(value: u32) -> Self {
        RawField::Number(value as f64)
    }
}

/// Ingredients either as a list or as one newline-separated block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawIngredients {
    List(Vec<String>),
    Text(String),
    Other(Value),
}

impl RawIngredients {
    /// Trimmed, non-blank ingredient names in their original order.
    pub fn into_list(self) -> Result<Vec<String>> {
        let entries: Vec<String> = match self {
            RawIngredients::List(list) => list,
            RawIngredients::Text(text) => text.lines().map(str::to_string).collect(),
            RawIngredients::Other(_) => {
                return Err(MenuError::invalid(
                    "ingredients",
                    "must be a list of strings or a text block",
                ));
            }
        };
        Ok(entries
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }
}

/// Unvalidated input for adding a menu item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    #[serde(default)]
    pub name: Option<RawField>,
    #[serde(default)]
    pub category: Option<RawField>,
    #[serde(default)]
    pub selling_price: Option<RawField>,
    #[serde(default)]
    pub food_cost: Option<RawField>,
    #[serde(default)]
    pub prep_time: Option<RawField>,
    #[serde(default)]
    pub monthly_sales: Option<RawField>,
    #[serde(default)]
    pub ingredients: Option<RawIngredients>,
}

/// Typed, validated fields for a new menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemFields {
    pub name: String,
    pub category: String,
    pub selling_price: f64,
    pub food_cost: f64,
    pub prep_time: u32,
    pub monthly_sales: u32,
    pub ingredients: Vec<String>,
}

impl NewMenuItem {
    /// Build a fully-populated input from typed values.
    pub fn new(
        name: &str,
        category: &str,
        selling_price: f64,
        food_cost: f64,
        prep_time: u32,
        monthly_sales: u32,
        ingredients: &[&str],
    ) -> Self {
        Self {
            name: Some(name.into()),
            category: Some(category.into()),
            selling_price: Some(selling_price.into()),
            food_cost: Some(food_cost.into()),
            prep_time: Some(prep_time.into()),
            monthly_sales: Some(monthly_sales.into()),
            ingredients: Some(RawIngredients::List(
                ingredients.iter().map(|s| s.to_string()).collect(),
            )),
        }
    }

    /// Validate and coerce every field.
    ///
    /// Required fields are checked in a fixed order so the reported field is
    /// deterministic when several are wrong.
    pub fn validate(self) -> Result<MenuItemFields> {
        let name = required_text("name", self.name)?;
        let category = required_text("category", self.category)?;
        let selling_price = required_amount("sellingPrice", self.selling_price)?;
        let food_cost = required_amount("foodCost", self.food_cost)?;
        let prep_time = required_count("prepTime", self.prep_time)?;
        let monthly_sales = required_count("monthlySales", self.monthly_sales)?;
        let ingredients = self
            .ingredients
            .map(RawIngredients::into_list)
            .transpose()?
            .unwrap_or_default();

        Ok(MenuItemFields {
            name,
            category,
            selling_price,
            food_cost,
            prep_time,
            monthly_sales,
            ingredients,
        })
    }
}

fn present(field: &str, value: Option<RawField>) -> Result<RawField> {
    match value {
        Some(v) if !v.is_blank() => Ok(v),
        _ => Err(MenuError::missing(field)),
    }
}

fn required_text(field: &str, value: Option<RawField>) -> Result<String> {
    match present(field, value)? {
        RawField::Text(s) => Ok(s.trim().to_string()),
        RawField::Number(n) => Ok(n.to_string()),
        RawField::Other(_) => Err(MenuError::invalid(field, "must be text")),
    }
}

fn required_amount(field: &str, value: Option<RawField>) -> Result<f64> {
    let amount = match present(field, value)? {
        RawField::Number(n) => n,
        RawField::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| MenuError::invalid(field, format!("'{}' is not a number", s.trim())))?,
        RawField::Other(value) => {
            return Err(MenuError::invalid(field, format!("{} is not a number", value)));
        }
    };

    if !amount.is_finite() {
        return Err(MenuError::invalid(field, "must be a finite number"));
    }
    if amount < 0.0 {
        return Err(MenuError::invalid(field, "must not be negative"));
    }
    Ok(amount)
}

fn required_count(field: &str, value: Option<RawField>) -> Result<u32> {
    let count = match present(field, value)? {
        RawField::Number(n) => n,
        RawField::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| MenuError::invalid(field, format!("'{}' is not a number", s.trim())))?,
        RawField::Other(value) => {
            return Err(MenuError::invalid(field, format!("{} is not a number", value)));
        }
    };

    if !count.is_finite() || count.fract() != 0.0 {
        return Err(MenuError::invalid(field, "must be a whole number"));
    }
    if count < 0.0 {
        return Err(MenuError::invalid(field, "must not be negative"));
    }
    if count > u32::MAX as f64 {
        return Err(MenuError::invalid(field, "is too large"));
    }
    Ok(count as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salmon() -> NewMenuItem {
        NewMenuItem::new(
            "Grilled Salmon",
            "Main Courses",
            24.99,
            8.50,
            15,
            120,
            &["Salmon fillet", "Lemon"],
        )
    }

    #[test]
    fn test_validate_typed_input() {
        let fields = salmon().validate().unwrap();
        assert_eq!(fields.name, "Grilled Salmon");
        assert_eq!(fields.prep_time, 15);
        assert_eq!(fields.ingredients, vec!["Salmon fillet", "Lemon"]);
    }

    #[test]
    fn test_validate_numeric_strings() {
        let mut input = salmon();
        input.selling_price = Some(" 12.50 ".into());
        input.monthly_sales = Some("40".into());
        let fields = input.validate().unwrap();
        assert!((fields.selling_price - 12.5).abs() < 1e-9);
        assert_eq!(fields.monthly_sales, 40);
    }

    #[test]
    fn test_missing_and_blank_fields() {
        let mut input = salmon();
        input.category = None;
        let err = input.validate().unwrap_err();
        assert_eq!(err.field(), Some("category"));

        let mut input = salmon();
        input.name = Some("   ".into());
        let err = input.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing field: name");
    }

    #[test]
    fn test_non_numeric_rejected() {
        let mut input = salmon();
        input.food_cost = Some("cheap".into());
        let err = input.validate().unwrap_err();
        assert_eq!(err.field(), Some("foodCost"));

        let mut input = salmon();
        input.prep_time = Some(12.5_f64.into());
        let err = input.validate().unwrap_err();
        assert_eq!(err.field(), Some("prepTime"));
    }

    #[test]
    fn test_negative_rejected() {
        let mut input = salmon();
        input.selling_price = Some((-1.0_f64).into());
        assert_eq!(input.validate().unwrap_err().field(), Some("sellingPrice"));
    }

    #[test]
    fn test_cost_above_price_is_allowed() {
        let mut input = salmon();
        input.food_cost = Some(30.0_f64.into());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_ingredients_from_text_block() {
        let raw = RawIngredients::Text("Salmon fillet\n  Lemon \n\nHerbs".to_string());
        assert_eq!(raw.into_list().unwrap(), vec!["Salmon fillet", "Lemon", "Herbs"]);
    }

    #[test]
    fn test_deserialize_camel_case_payload() {
        let json = r#"{"name": "Tea", "category": "Beverages", "sellingPrice": "3.5",
            "foodCost": 0.4, "prepTime": 2, "monthlySales": 210}"#;
        let input: NewMenuItem = serde_json::from_str(json).unwrap();
        let fields = input.validate().unwrap();
        assert_eq!(fields.category, "Beverages");
        assert!(fields.ingredients.is_empty());
    }

    #[test]
    fn test_non_scalar_values_name_their_field() {
        let json = r#"{"name": "Tea", "category": "Beverages", "sellingPrice": true,
            "foodCost": 0.4, "prepTime": [2], "monthlySales": 210}"#;
        let input: NewMenuItem = serde_json::from_str(json).unwrap();
        let err = input.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid sellingPrice: true is not a number");

        let json = r#"{"name": "Tea", "category": "Beverages", "sellingPrice": 3.5,
            "foodCost": 0.4, "prepTime": 2, "monthlySales": 210, "ingredients": ["Tea", 7]}"#;
        let input: NewMenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(input.validate().unwrap_err().field(), Some("ingredients"));
    }
}
