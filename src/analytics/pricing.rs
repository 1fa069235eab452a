use tracing::debug;

use crate::analytics::aggregate::group_by_category;
use crate::analytics::metrics::mean;
use crate::analytics::rules::{self, DecisionRule};
use crate::analytics::Thresholds;
use crate::models::{MenuItem, Recommendation};

/// Per-item pricing rules, highest priority first.
pub static PRICING_RULES: &[DecisionRule<MenuItem>] = &[
    DecisionRule {
        tag: "price-increase",
        condition: |item, t| item.profit_margin < t.price_increase_margin,
        action: price_increase,
    },
    DecisionRule {
        tag: "price-decrease",
        condition: |item, t| {
            item.profit_margin > t.discount_margin && item.monthly_sales > t.discount_min_sales
        },
        action: price_decrease,
    },
    DecisionRule {
        tag: "volume-booster",
        condition: |item, t| {
            item.monthly_sales < t.low_sales && item.profit_margin > t.volume_booster_margin
        },
        action: volume_booster,
    },
    DecisionRule {
        tag: "menu-review",
        condition: |item, t| item.monthly_sales < t.low_sales,
        action: menu_review,
    },
    DecisionRule {
        tag: "hold",
        condition: rules::always,
        action: rules::nothing,
    },
];

fn price_increase(item: &MenuItem, t: &Thresholds) -> Option<Recommendation> {
    let target_price = item.food_cost / t.target_price_divisor();
    let increase = target_price - item.selling_price;
    Some(Recommendation::warning(
        format!("Price Increase Needed: {}", item.name),
        format!(
            "Current margin is only {:.1}%. Increase price from ${:.2} to ${:.2} (+${:.2}) to achieve {:.0}% margin. Monitor sales impact.",
            item.profit_margin, item.selling_price, target_price, increase, t.target_margin
        ),
    ))
}

fn price_decrease(item: &MenuItem, t: &Thresholds) -> Option<Recommendation> {
    let decrease = item.selling_price * t.discount_rate;
    let new_price = item.selling_price - decrease;
    Some(Recommendation::normal(
        format!("Price Optimization Opportunity: {}", item.name),
        format!(
            "High margin ({:.1}%) with strong sales ({} units). Consider reducing price by ${:.2} to ${:.2} to increase volume and competitiveness.",
            item.profit_margin, item.monthly_sales, decrease, new_price
        ),
    ))
}

fn volume_booster(item: &MenuItem, t: &Thresholds) -> Option<Recommendation> {
    let reduction = item.selling_price * t.volume_booster_rate;
    let new_price = item.selling_price - reduction;
    Some(Recommendation::normal(
        format!("Volume Booster: {}", item.name),
        format!(
            "Low sales ({} units) despite good margin. Reduce price from ${:.2} to ${:.2} (-${:.2}) to stimulate demand.",
            item.monthly_sales, item.selling_price, new_price, reduction
        ),
    ))
}

fn menu_review(item: &MenuItem, _: &Thresholds) -> Option<Recommendation> {
    Some(Recommendation::danger(
        format!("Menu Review Required: {}", item.name),
        format!(
            "Low sales ({} units) and poor margin ({:.1}%). Consider removing from menu or complete recipe/pricing overhaul.",
            item.monthly_sales, item.profit_margin
        ),
    ))
}

/// Tag of the pricing rule that applies to `item`.
pub fn pricing_rule_for(item: &MenuItem, thresholds: &Thresholds) -> &'static str {
    rules::first_match(PRICING_RULES, item, thresholds)
        .map(|rule| rule.tag)
        .unwrap_or("hold")
}

/// Pricing report: per-item recommendations in menu order, then category
/// price-consistency warnings in first-seen category order.
pub fn analyze(items: &[MenuItem], thresholds: &Thresholds) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    if items.is_empty() {
        return recommendations;
    }

    for item in items {
        if let Some((tag, Some(rec))) = rules::evaluate(PRICING_RULES, item, thresholds) {
            debug!(item = %item.name, rule = tag, "pricing recommendation");
            recommendations.push(rec);
        }
    }

    for group in group_by_category(items) {
        if group.items.len() < 2 {
            continue;
        }

        let prices: Vec<f64> = group.items.iter().map(|item| item.selling_price).collect();
        let avg_price = mean(&prices);
        let max_price = prices.iter().copied().fold(f64::MIN, f64::max);
        let min_price = prices.iter().copied().fold(f64::MAX, f64::min);

        if max_price > avg_price * thresholds.price_spread_factor {
            debug!(category = group.category, "price spread exceeds limit");
            recommendations.push(Recommendation::warning(
                format!("Price Consistency Check: {}", group.category),
                format!(
                    "Large price variation in {} (${:.2} - ${:.2}). Ensure pricing reflects value differences or consider adjustment.",
                    group.category.to_lowercase(),
                    min_price,
                    max_price
                ),
            ));
        }
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(margin_price: (f64, f64), sales: u32) -> MenuItem {
        let (price, cost) = margin_price;
        MenuItem {
            id: 1,
            name: "Test".to_string(),
            category: "Mains".to_string(),
            selling_price: price,
            food_cost: cost,
            prep_time: 10,
            monthly_sales: sales,
            ingredients: Vec::new(),
            profit_margin: crate::analytics::metrics::profit_margin(price, cost),
            monthly_profit: crate::analytics::metrics::monthly_profit(price, cost, sales),
            efficiency_score: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_rule_priority() {
        let t = Thresholds::default();
        // Low margin wins even when sales are also low.
        assert_eq!(pricing_rule_for(&item((10.0, 7.0), 10), &t), "price-increase");
        assert_eq!(pricing_rule_for(&item((10.0, 1.0), 150), &t), "price-decrease");
        // High margin but only 100 sales: not strictly above the discount floor.
        assert_eq!(pricing_rule_for(&item((10.0, 1.0), 100), &t), "hold");
        assert_eq!(pricing_rule_for(&item((10.0, 3.0), 20), &t), "volume-booster");
        assert_eq!(pricing_rule_for(&item((10.0, 5.0), 20), &t), "menu-review");
        assert_eq!(pricing_rule_for(&item((10.0, 5.0), 80), &t), "hold");
    }

    #[test]
    fn test_price_increase_targets_cost_over_divisor() {
        let rec = price_increase(&item((10.0, 9.0), 60), &Thresholds::default()).unwrap();
        assert!(rec.description.contains("from $10.00 to $15.00 (+$5.00)"));
    }
}
