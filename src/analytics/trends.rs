use tracing::{debug, warn};

use crate::analytics::aggregate::{first_max_by, first_min_by, group_by_category};
use crate::analytics::metrics::{efficiency_score, mean};
use crate::analytics::Thresholds;
use crate::error::{MenuError, Result};
use crate::models::{MenuItem, Recommendation};

/// Trend report output.
///
/// Besides the recommendations, carries the efficiency score computed for
/// every item so a store can record it on its items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendReport {
    pub recommendations: Vec<Recommendation>,
    /// `(item id, profit per prep minute)` in menu order.
    pub efficiency_scores: Vec<(u32, f64)>,
}

/// Sales-volume, category, prep-time, and efficiency trends.
///
/// Fails with [`MenuError::Arithmetic`] if any item has a zero prep time or
/// if the quick/slow comparison would divide by zero; no partial report is
/// returned in that case.
pub fn analyze(items: &[MenuItem], thresholds: &Thresholds) -> Result<TrendReport> {
    let mut report = TrendReport::default();
    if items.is_empty() {
        return Ok(report);
    }
    let recommendations = &mut report.recommendations;

    // Sales volume
    let high_volume = items
        .iter()
        .filter(|item| item.monthly_sales > thresholds.high_volume_sales);
    if let Some(top_seller) = first_max_by(high_volume, |item| item.monthly_sales as f64) {
        recommendations.push(Recommendation::normal(
            format!("Trending Item: {}", top_seller.name),
            format!(
                "Selling {} units monthly. This high demand indicates strong customer preference. Consider creating variations or limited-time specials based on this item.",
                top_seller.monthly_sales
            ),
        ));
    }

    let low_volume_count = items
        .iter()
        .filter(|item| item.monthly_sales < thresholds.low_volume_sales)
        .count();
    if low_volume_count > 0 {
        recommendations.push(Recommendation::warning(
            "Low Demand Items",
            format!(
                "{} items selling less than {} units monthly. Review these for menu simplification, better promotion, or removal to focus kitchen resources on popular items.",
                low_volume_count, thresholds.low_volume_sales
            ),
        ));
    }

    // Category sales
    let category_sales: Vec<(&str, u64)> = group_by_category(items)
        .iter()
        .map(|g| {
            let units: u64 = g.items.iter().map(|item| item.monthly_sales as u64).sum();
            (g.category, units)
        })
        .collect();
    let leading = first_max_by(category_sales.iter(), |(_, units)| *units as f64);
    let declining = first_min_by(category_sales.iter(), |(_, units)| *units as f64);

    if let (Some((lead_name, lead_units)), Some((slow_name, slow_units))) = (leading, declining) {
        debug!(leading = *lead_name, declining = *slow_name, "category sales extremes");
        recommendations.push(Recommendation::normal(
            format!("Category Trend: {} Leading", lead_name),
            format!(
                "{} selling {} total units. Customer preference is clear - consider expanding this category with seasonal specials or premium options.",
                lead_name, lead_units
            ),
        ));

        if (*slow_units as f64) < *lead_units as f64 * thresholds.category_decline_ratio {
            recommendations.push(Recommendation::warning(
                format!("Category Decline: {}", slow_name),
                format!(
                    "{} underperforming with only {} units. Consider refreshing recipes, adjusting presentation, or seasonal repositioning.",
                    slow_name, slow_units
                ),
            ));
        }
    }

    // Prep time vs. demand
    let quick_sales: Vec<f64> = items
        .iter()
        .filter(|item| item.prep_time <= thresholds.quick_prep_minutes)
        .map(|item| item.monthly_sales as f64)
        .collect();
    let slow_sales: Vec<f64> = items
        .iter()
        .filter(|item| item.prep_time > thresholds.slow_prep_minutes)
        .map(|item| item.monthly_sales as f64)
        .collect();

    if !quick_sales.is_empty() && !slow_sales.is_empty() {
        let avg_quick = mean(&quick_sales);
        let avg_slow = mean(&slow_sales);

        if avg_quick > avg_slow * thresholds.quick_sales_uplift {
            if avg_slow == 0.0 {
                warn!("slow-prep items have no sales; uplift is undefined");
                return Err(MenuError::Arithmetic(
                    "kitchen efficiency uplift is undefined: slow-prep items average zero sales"
                        .to_string(),
                ));
            }
            let uplift = (avg_quick / avg_slow - 1.0) * 100.0;
            recommendations.push(Recommendation::normal(
                "Kitchen Efficiency Trend",
                format!(
                    "Quick-prep items (≤{} min) outselling complex items by {:.0}%. Focus on streamlined recipes and consider simplifying high-prep items.",
                    thresholds.quick_prep_minutes, uplift
                ),
            ));
        }
    }

    // Profit per prep minute
    for item in items {
        let score = efficiency_score(item.selling_price, item.food_cost, item.prep_time)
            .map_err(|_| {
                warn!(item = %item.name, "zero prep time");
                MenuError::Arithmetic(format!(
                    "efficiency score is undefined for '{}': prep time is 0 minutes",
                    item.name
                ))
            })?;
        report.efficiency_scores.push((item.id, score));
    }

    let champion = items
        .iter()
        .zip(report.efficiency_scores.iter())
        .map(|(item, (_, score))| (item, *score));
    if let Some((item, score)) = first_max_by(champion, |(_, score)| *score) {
        report.recommendations.push(Recommendation::normal(
            format!("Efficiency Champion: {}", item.name),
            format!(
                "Generates ${:.2} profit per minute of prep time. This efficiency model should guide future menu development and staff training priorities.",
                score
            ),
        ));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewMenuItem;
    use crate::state::MenuStore;

    fn store(items: &[(&str, &str, u32, u32)]) -> MenuStore {
        let mut store = MenuStore::new();
        for (name, category, prep, sales) in items {
            store
                .add_item(NewMenuItem::new(name, category, 10.0, 4.0, *prep, *sales, &[]))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_category_decline_reported() {
        let store = store(&[
            ("Burger", "Mains", 15, 200),
            ("Soup", "Soups", 15, 20),
        ]);
        let report = analyze(store.list_items(), &Thresholds::default()).unwrap();
        let titles: Vec<&str> = report
            .recommendations
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert!(titles.contains(&"Category Trend: Mains Leading"));
        assert!(titles.contains(&"Category Decline: Soups"));
    }

    #[test]
    fn test_single_category_never_declines() {
        let store = store(&[("Burger", "Mains", 15, 200)]);
        let report = analyze(store.list_items(), &Thresholds::default()).unwrap();
        assert!(
            !report
                .recommendations
                .iter()
                .any(|r| r.title.starts_with("Category Decline"))
        );
    }

    #[test]
    fn test_kitchen_efficiency_uplift() {
        let store = store(&[("Toast", "Snacks", 5, 120), ("Roast", "Mains", 45, 60)]);
        let report = analyze(store.list_items(), &Thresholds::default()).unwrap();
        let rec = report
            .recommendations
            .iter()
            .find(|r| r.title == "Kitchen Efficiency Trend")
            .unwrap();
        assert!(rec.description.contains("by 100%"));
    }

    #[test]
    fn test_zero_slow_sales_is_arithmetic_error() {
        let store = store(&[("Toast", "Snacks", 5, 120), ("Roast", "Mains", 45, 0)]);
        let err = analyze(store.list_items(), &Thresholds::default()).unwrap_err();
        assert!(matches!(err, MenuError::Arithmetic(_)));
    }

    #[test]
    fn test_efficiency_scores_reported_per_item() {
        let store = store(&[("Toast", "Snacks", 3, 120), ("Roast", "Mains", 6, 60)]);
        let report = analyze(store.list_items(), &Thresholds::default()).unwrap();
        assert_eq!(report.efficiency_scores.len(), 2);
        assert_eq!(report.efficiency_scores[0].0, 1);
        assert!((report.efficiency_scores[0].1 - 2.0).abs() < 1e-9);
        assert_eq!(
            report.recommendations.last().unwrap().title,
            "Efficiency Champion: Toast"
        );
    }
}
