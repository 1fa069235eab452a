use tracing::{debug, warn};

use crate::analytics::aggregate::{first_max_by, frequency};
use crate::analytics::metrics::food_cost_ratio;
use crate::analytics::rules::{self, DecisionRule};
use crate::analytics::Thresholds;
use crate::error::{MenuError, Result};
use crate::models::{MenuItem, Recommendation};

/// Tone of the overall food cost verdict, keyed on food cost as a percent of revenue.
pub static FOOD_COST_RULES: &[DecisionRule<f64>] = &[
    DecisionRule {
        tag: "food-cost-excellent",
        condition: |pct, t| *pct < t.food_cost_excellent,
        action: |pct, _| Some(food_cost_verdict(*pct, "Excellent cost control!", false)),
    },
    DecisionRule {
        tag: "food-cost-good",
        condition: |pct, t| *pct < t.food_cost_good,
        action: |pct, _| Some(food_cost_verdict(*pct, "Good range", false)),
    },
    DecisionRule {
        tag: "food-cost-high",
        condition: rules::always,
        action: |pct, _| {
            Some(food_cost_verdict(
                *pct,
                "Above target - review supplier costs and portion sizes",
                true,
            ))
        },
    },
];

fn food_cost_verdict(pct: f64, verdict: &str, warning: bool) -> Recommendation {
    let title = format!("Overall Food Cost: {:.1}%", pct);
    let description = format!("Industry target is 28-35%. {}", verdict);
    if warning {
        Recommendation::warning(title, description)
    } else {
        Recommendation::normal(title, description)
    }
}

/// Canonical ingredient key: trimmed and lowercased. `None` for blanks.
pub fn normalize_ingredient(raw: &str) -> Option<String> {
    let key = raw.trim().to_lowercase();
    (!key.is_empty()).then_some(key)
}

/// Ingredient usage counts across the menu, in first-seen order.
pub fn ingredient_frequency(items: &[MenuItem]) -> Vec<(String, usize)> {
    frequency(
        items
            .iter()
            .flat_map(|item| item.ingredients.iter())
            .filter_map(|raw| normalize_ingredient(raw)),
    )
}

/// Capitalize the first letter of every word and lowercase the rest.
///
/// A word starts after any non-alphabetic character, so "sun-dried" becomes
/// "Sun-Dried".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Cost structure report.
///
/// Fails with [`MenuError::Arithmetic`] when total monthly revenue is zero or
/// when an item with a zero selling price has to be checked for its food cost
/// ratio.
pub fn analyze(items: &[MenuItem], thresholds: &Thresholds) -> Result<Vec<Recommendation>> {
    let mut recommendations = Vec::new();
    if items.is_empty() {
        return Ok(recommendations);
    }

    // Overall food cost percentage
    let total_revenue: f64 = items.iter().map(MenuItem::monthly_revenue).sum();
    let total_food_cost: f64 = items.iter().map(MenuItem::monthly_food_cost).sum();
    if total_revenue == 0.0 {
        warn!("menu has no revenue; food cost percentage is undefined");
        return Err(MenuError::Arithmetic(
            "food cost percentage is undefined: total monthly revenue is zero".to_string(),
        ));
    }
    let food_cost_pct = total_food_cost / total_revenue * 100.0;
    if let Some((tag, Some(rec))) = rules::evaluate(FOOD_COST_RULES, &food_cost_pct, thresholds) {
        debug!(rule = tag, pct = food_cost_pct, "overall food cost");
        recommendations.push(rec);
    }

    // Worst food cost ratio
    let mut ratios = Vec::with_capacity(items.len());
    for item in items {
        let ratio = food_cost_ratio(item.selling_price, item.food_cost).map_err(|_| {
            MenuError::Arithmetic(format!(
                "food cost ratio is undefined for '{}': selling price is 0",
                item.name
            ))
        })?;
        ratios.push((item, ratio));
    }
    let high_cost = ratios
        .into_iter()
        .filter(|(_, ratio)| *ratio > thresholds.high_food_cost_ratio);
    if let Some((item, ratio)) = first_max_by(high_cost, |(_, ratio)| *ratio) {
        recommendations.push(Recommendation::danger(
            format!("High Food Cost Alert: {}", item.name),
            format!(
                "Food cost is {:.1}% of selling price. Consider negotiating with suppliers, reducing portion size by 10-15%, or finding substitute ingredients.",
                ratio * 100.0
            ),
        ));
    }

    // Shared ingredients
    let usage = ingredient_frequency(items);
    if let Some((ingredient, count)) = first_max_by(usage.iter(), |(_, count)| *count as f64) {
        recommendations.push(Recommendation::normal(
            format!("Bulk Purchase Opportunity: {}", title_case(ingredient)),
            format!(
                "Used in {} different menu items. Negotiate volume discounts with suppliers or consider buying in larger quantities to reduce per-unit cost.",
                count
            ),
        ));
    }

    // Labor intensity
    let mut by_prep: Vec<&MenuItem> = items.iter().collect();
    by_prep.sort_by(|a, b| b.prep_time.cmp(&a.prep_time));
    by_prep.truncate(crate::analytics::constants::LABOR_INTENSIVE_TOP_N);
    if let Some(most_intensive) = by_prep.first() {
        if most_intensive.prep_time > thresholds.labor_prep_minutes {
            recommendations.push(Recommendation::warning(
                format!("Labor Cost Concern: {}", most_intensive.name),
                format!(
                    "{} minutes prep time significantly impacts labor costs. Consider pre-prep strategies, simplifying recipe, or pricing adjustment to account for labor investment.",
                    most_intensive.prep_time
                ),
            ));
        }
    }

    recommendations.push(Recommendation::normal(
        "Seasonal Cost Planning",
        "Review your menu quarterly for seasonal ingredient price fluctuations. Consider featuring seasonal specials when ingredients are at peak freshness and lowest cost.",
    ));

    // Waste
    let single_use = usage.iter().filter(|(_, count)| *count == 1).count();
    if single_use > thresholds.single_use_ingredient_limit {
        recommendations.push(Recommendation::warning(
            "Ingredient Utilization",
            format!(
                "{} ingredients used in only one dish. Cross-utilize ingredients across multiple menu items to reduce waste and inventory costs.",
                single_use
            ),
        ));
    }

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("olive oil"), "Olive Oil");
        assert_eq!(title_case("sun-dried tomato"), "Sun-Dried Tomato");
        assert_eq!(title_case("LEMON"), "Lemon");
    }

    #[test]
    fn test_normalize_ingredient() {
        assert_eq!(normalize_ingredient("  Lemon "), Some("lemon".to_string()));
        assert_eq!(normalize_ingredient("   "), None);
    }

    #[test]
    fn test_food_cost_tone() {
        let t = Thresholds::default();
        let tag = |pct: f64| rules::first_match(FOOD_COST_RULES, &pct, &t).unwrap().tag;
        assert_eq!(tag(29.9), "food-cost-excellent");
        assert_eq!(tag(30.0), "food-cost-good");
        assert_eq!(tag(35.0), "food-cost-high");
    }
}
