use serde::Serialize;

use crate::analytics::aggregate::{first_max_by, group_by_category};
use crate::analytics::constants::{HIGH_MARGIN_BADGE, LOW_MARGIN_BADGE};
use crate::analytics::profit::average_margin;
use crate::models::MenuItem;

/// Margin classification shown next to each item in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarginBadge {
    HighMargin,
    Normal,
    LowMargin,
}

impl MarginBadge {
    pub fn for_margin(margin: f64) -> Self {
        if margin > HIGH_MARGIN_BADGE {
            MarginBadge::HighMargin
        } else if margin < LOW_MARGIN_BADGE {
            MarginBadge::LowMargin
        } else {
            MarginBadge::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarginBadge::HighMargin => "High Margin",
            MarginBadge::Normal => "Normal",
            MarginBadge::LowMargin => "Low Margin",
        }
    }
}

/// Aggregates for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub item_count: usize,
    pub monthly_profit: f64,
    pub monthly_sales: u64,
    pub average_margin: f64,
}

/// Headline statistics for the whole menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuSummary {
    pub item_count: usize,
    pub total_revenue: f64,
    pub total_monthly_profit: f64,
    pub average_margin: f64,
    /// Name of the item with the most monthly sales.
    pub best_seller: Option<String>,
    pub categories: Vec<CategoryBreakdown>,
}

/// Summarize a menu. An empty menu yields zeroes and no best seller.
pub fn summarize(items: &[MenuItem]) -> MenuSummary {
    let categories = group_by_category(items)
        .into_iter()
        .map(|group| CategoryBreakdown {
            category: group.category.to_string(),
            item_count: group.items.len(),
            monthly_profit: group.total(|item| item.monthly_profit),
            monthly_sales: group.items.iter().map(|item| item.monthly_sales as u64).sum(),
            average_margin: average_margin(group.items.iter().copied()),
        })
        .collect();

    MenuSummary {
        item_count: items.len(),
        total_revenue: items.iter().map(MenuItem::monthly_revenue).sum(),
        total_monthly_profit: items.iter().map(|item| item.monthly_profit).sum(),
        average_margin: average_margin(items),
        best_seller: first_max_by(items, |item| item.monthly_sales as f64)
            .map(|item| item.name.clone()),
        categories,
    }
}
