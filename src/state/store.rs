use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::info;

use crate::analytics::{self, metrics, AnalysisKind, Thresholds};
use crate::error::{MenuError, Result};
use crate::models::{MenuItem, NewMenuItem, Recommendation};

/// Append-only, in-memory menu.
///
/// Items keep their insertion order; ids start at 1 and are never reused.
#[derive(Debug)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    next_id: u32,
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Validate `input`, compute its derived metrics, and append it.
    pub fn add_item(&mut self, input: NewMenuItem) -> Result<&MenuItem> {
        let fields = input.validate()?;
        let id = self.next_id;

        let item = MenuItem {
            id,
            profit_margin: metrics::profit_margin(fields.selling_price, fields.food_cost),
            monthly_profit: metrics::monthly_profit(
                fields.selling_price,
                fields.food_cost,
                fields.monthly_sales,
            ),
            name: fields.name,
            category: fields.category,
            selling_price: fields.selling_price,
            food_cost: fields.food_cost,
            prep_time: fields.prep_time,
            monthly_sales: fields.monthly_sales,
            ingredients: fields.ingredients,
            efficiency_score: None,
            created_at: Utc::now(),
        };

        info!(id, name = %item.name, category = %item.category, "menu item added");
        self.next_id += 1;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Add several items, stopping at the first invalid one.
    ///
    /// Items before the failing one stay in the store. The error names the
    /// 1-based record position.
    pub fn extend<I>(&mut self, inputs: I) -> Result<usize>
    where
        I: IntoIterator<Item = NewMenuItem>,
    {
        let mut added = 0;
        for (i, input) in inputs.into_iter().enumerate() {
            self.add_item(input).map_err(|e| match e {
                MenuError::Validation { field, reason } => MenuError::Validation {
                    field,
                    reason: format!("{} (record {})", reason, i + 1),
                },
                other => other,
            })?;
            added += 1;
        }
        Ok(added)
    }

    /// All items in insertion order.
    pub fn list_items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Get an item by id.
    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// First item whose name matches (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&MenuItem> {
        let key = name.trim().to_lowercase();
        self.items.iter().find(|item| item.key() == key)
    }

    /// Run a report on the current items.
    ///
    /// Trend analysis also records each item's efficiency score. Scores are
    /// recomputed from unchanged inputs, so repeated runs are idempotent.
    pub fn run(&mut self, kind: AnalysisKind, thresholds: &Thresholds) -> Result<Vec<Recommendation>> {
        if kind != AnalysisKind::Trends {
            return analytics::run_analysis(kind, &self.items, thresholds);
        }

        info!(report = %kind, items = self.items.len(), "running analysis");
        let report = analytics::trends::analyze(&self.items, thresholds)?;
        for (id, score) in &report.efficiency_scores {
            if let Some(item) = self.items.iter_mut().find(|item| item.id == *id) {
                item.efficiency_score = Some(*score);
            }
        }
        Ok(report.recommendations)
    }

    /// Count of items in the store.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A store shared between threads.
///
/// One mutex guards the item list, so appends and snapshot reads never
/// interleave.
#[derive(Debug, Clone, Default)]
pub struct SharedMenuStore {
    inner: Arc<Mutex<MenuStore>>,
}

impl SharedMenuStore {
    pub fn new(store: MenuStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MenuStore> {
        // Each mutation is a single push; poisoning leaves the store consistent.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Validate and append an item, returning a copy of it.
    pub fn add_item(&self, input: NewMenuItem) -> Result<MenuItem> {
        self.lock().add_item(input).cloned()
    }

    /// Point-in-time copy of all items.
    pub fn snapshot(&self) -> Vec<MenuItem> {
        self.lock().list_items().to_vec()
    }

    /// Run a report against the shared items.
    pub fn run(&self, kind: AnalysisKind, thresholds: &Thresholds) -> Result<Vec<Recommendation>> {
        self.lock().run(kind, thresholds)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> NewMenuItem {
        NewMenuItem::new("Iced Tea", "Beverages", 3.5, 0.5, 2, 210, &["Tea", "Lemon"])
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut store = MenuStore::new();
        assert_eq!(store.add_item(tea()).unwrap().id, 1);
        assert_eq!(store.add_item(tea()).unwrap().id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_rejected_item_does_not_consume_id() {
        let mut store = MenuStore::new();
        let mut bad = tea();
        bad.name = None;
        assert!(store.add_item(bad).is_err());
        assert!(store.is_empty());
        assert_eq!(store.add_item(tea()).unwrap().id, 1);
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let mut store = MenuStore::new();
        store.add_item(tea()).unwrap();
        assert!(store.find_by_name("iced tea").is_some());
        assert!(store.find_by_name("ICED TEA ").is_some());
        assert!(store.find_by_name("coffee").is_none());
        assert_eq!(store.get(1).unwrap().name, "Iced Tea");
    }

    #[test]
    fn test_extend_reports_record_position() {
        let mut store = MenuStore::new();
        let mut bad = tea();
        bad.monthly_sales = Some("lots".into());
        let err = store.extend(vec![tea(), bad, tea()]).unwrap_err();
        assert!(err.to_string().contains("record 2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_trend_run_records_efficiency() {
        let mut store = MenuStore::new();
        store.add_item(tea()).unwrap();
        let first = store.run(AnalysisKind::Trends, &Thresholds::default()).unwrap();
        let second = store.run(AnalysisKind::Trends, &Thresholds::default()).unwrap();
        assert_eq!(first, second);
        let score = store.get(1).unwrap().efficiency_score.unwrap();
        assert!((score - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_shared_store_snapshot() {
        let shared = SharedMenuStore::new(MenuStore::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = shared.clone();
                std::thread::spawn(move || store.add_item(tea()).unwrap().id)
            })
            .collect();
        let mut ids: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(shared.snapshot().len(), 4);
    }
}
