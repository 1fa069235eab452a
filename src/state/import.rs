use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{MenuError, Result};
use crate::models::{MenuItem, NewMenuItem, RawField, RawIngredients};

/// Supported menu file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFormat {
    Json,
    Csv,
}

impl MenuFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("json") => Ok(MenuFormat::Json),
            Some("csv") => Ok(MenuFormat::Csv),
            _ => Err(MenuError::InvalidInput(format!(
                "unsupported menu file '{}': expected .json or .csv",
                path.display()
            ))),
        }
    }
}

/// One CSV row. Ingredients are `;`-separated.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    name: Option<String>,
    category: Option<String>,
    selling_price: Option<String>,
    food_cost: Option<String>,
    prep_time: Option<String>,
    monthly_sales: Option<String>,
    #[serde(default)]
    ingredients: Option<String>,
}

impl From<CsvRow> for NewMenuItem {
    fn from(row: CsvRow) -> Self {
        NewMenuItem {
            name: row.name.map(RawField::Text),
            category: row.category.map(RawField::Text),
            selling_price: row.selling_price.map(RawField::Text),
            food_cost: row.food_cost.map(RawField::Text),
            prep_time: row.prep_time.map(RawField::Text),
            monthly_sales: row.monthly_sales.map(RawField::Text),
            ingredients: row
                .ingredients
                .map(|s| RawIngredients::List(s.split(';').map(str::to_string).collect())),
        }
    }
}

/// Read unvalidated menu records from a JSON or CSV file.
///
/// JSON files hold an array of records with camelCase keys. Records are not
/// validated here; feed them through a store to get typed items.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<NewMenuItem>> {
    let path = path.as_ref();
    match MenuFormat::from_path(path)? {
        MenuFormat::Json => {
            let content = fs::read_to_string(path)?;
            let records: Vec<NewMenuItem> = serde_json::from_str(&content)?;
            Ok(records)
        }
        MenuFormat::Csv => {
            let mut rdr = csv::Reader::from_path(path)?;
            let mut records = Vec::new();
            for row in rdr.deserialize::<CsvRow>() {
                records.push(row?.into());
            }
            Ok(records)
        }
    }
}

/// Write items, including their derived metrics, as JSON or CSV.
///
/// Stored fields are written at full precision so an exported CSV reloads
/// to the same menu; only derived columns are rounded.
pub fn export_items<P: AsRef<Path>>(path: P, items: &[MenuItem]) -> Result<()> {
    let path = path.as_ref();
    match MenuFormat::from_path(path)? {
        MenuFormat::Json => {
            let json = serde_json::to_string_pretty(items)?;
            fs::write(path, json)?;
        }
        MenuFormat::Csv => {
            let mut wtr = csv::Writer::from_path(path)?;
            wtr.write_record([
                "id",
                "name",
                "category",
                "sellingPrice",
                "foodCost",
                "prepTime",
                "monthlySales",
                "ingredients",
                "profitMargin",
                "monthlyProfit",
                "efficiencyScore",
                "createdAt",
            ])?;

            for item in items {
                wtr.write_record([
                    item.id.to_string(),
                    item.name.clone(),
                    item.category.clone(),
                    item.selling_price.to_string(),
                    item.food_cost.to_string(),
                    item.prep_time.to_string(),
                    item.monthly_sales.to_string(),
                    item.ingredients.join(";"),
                    format!("{:.1}", item.profit_margin),
                    format!("{:.2}", item.monthly_profit),
                    item.efficiency_score
                        .map(|s| format!("{:.2}", s))
                        .unwrap_or_default(),
                    item.created_at.to_rfc3339(),
                ])?;
            }

            wtr.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MenuStore;
    use std::io::Write;
    use tempfile::Builder;

    fn temp_with(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_menu() {
        let file = temp_with(
            ".json",
            r#"[
                {"name": "Grilled Salmon", "category": "Main Courses", "sellingPrice": 24.99,
                 "foodCost": 8.5, "prepTime": 15, "monthlySales": 120,
                 "ingredients": ["Salmon fillet", "Lemon"]},
                {"name": "Tomato Soup", "category": "Soups", "sellingPrice": "6.50",
                 "foodCost": "1.20", "prepTime": "10", "monthlySales": "45",
                 "ingredients": "Tomato\nBasil"}
            ]"#,
        );

        let records = load_menu(file.path()).unwrap();
        assert_eq!(records.len(), 2);

        let mut store = MenuStore::new();
        store.extend(records).unwrap();
        assert_eq!(store.list_items()[1].ingredients, vec!["Tomato", "Basil"]);
    }

    #[test]
    fn test_load_csv_menu() {
        let file = temp_with(
            ".csv",
            "name,category,sellingPrice,foodCost,prepTime,monthlySales,ingredients\n\
             Caesar Salad,Salads,11.00,3.10,8,95,Romaine;Parmesan; Croutons\n\
             Espresso,Beverages,3.00,0.40,2,300,\n",
        );

        let records = load_menu(file.path()).unwrap();
        let mut store = MenuStore::new();
        store.extend(records).unwrap();

        let items = store.list_items();
        assert_eq!(items[0].ingredients, vec!["Romaine", "Parmesan", "Croutons"]);
        assert!(items[1].ingredients.is_empty());
        assert_eq!(items[1].monthly_sales, 300);
    }

    #[test]
    fn test_csv_missing_value_is_validation_error() {
        let file = temp_with(
            ".csv",
            "name,category,sellingPrice,foodCost,prepTime,monthlySales,ingredients\n\
             Espresso,Beverages,,0.40,2,300,\n",
        );

        let records = load_menu(file.path()).unwrap();
        let err = MenuStore::new().extend(records).unwrap_err();
        assert_eq!(err.field(), Some("sellingPrice"));
    }

    #[test]
    fn test_unknown_extension() {
        let file = temp_with(".txt", "");
        assert!(matches!(
            load_menu(file.path()),
            Err(MenuError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_export_roundtrip_json() {
        let mut store = MenuStore::new();
        store
            .add_item(NewMenuItem::new("Tea", "Beverages", 3.0, 0.5, 2, 200, &[]))
            .unwrap();

        let out = Builder::new().suffix(".json").tempfile().unwrap();
        export_items(out.path(), store.list_items()).unwrap();

        let content = fs::read_to_string(out.path()).unwrap();
        let items: Vec<MenuItem> = serde_json::from_str(&content).unwrap();
        assert_eq!(items, store.list_items());
    }

    #[test]
    fn test_export_csv_has_header_and_rows() {
        let mut store = MenuStore::new();
        store
            .add_item(NewMenuItem::new("Tea", "Beverages", 3.0, 0.5, 2, 200, &["Tea"]))
            .unwrap();

        let out = Builder::new().suffix(".csv").tempfile().unwrap();
        export_items(out.path(), store.list_items()).unwrap();

        let content = fs::read_to_string(out.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("id,name,category"));
        assert!(lines[1].starts_with("1,Tea,Beverages,3.00,0.50,2,200,Tea,83.3,500.00"));
    }
}
