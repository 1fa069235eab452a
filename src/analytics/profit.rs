use tracing::debug;

use crate::analytics::aggregate::{first_max_by, first_min_by, group_by_category};
use crate::analytics::metrics::mean;
use crate::analytics::rules::{self, DecisionRule};
use crate::analytics::Thresholds;
use crate::models::{MenuItem, Recommendation};

/// Menu health verdict based on the average margin (percent).
///
/// Margins between the warning and excellent thresholds produce nothing.
pub static HEALTH_RULES: &[DecisionRule<f64>] = &[
    DecisionRule {
        tag: "excellent-health",
        condition: |avg, t| *avg > t.excellent_average_margin,
        action: |avg, _| {
            Some(Recommendation::normal(
                "Excellent Profit Health",
                format!(
                    "Average margin of {:.1}% is above industry standard (60-70%). Focus on maintaining quality and consider strategic price increases on popular items.",
                    avg
                ),
            ))
        },
    },
    DecisionRule {
        tag: "margin-warning",
        condition: |avg, t| *avg < t.warning_average_margin,
        action: |avg, _| {
            Some(Recommendation::danger(
                "Profit Margin Warning",
                format!(
                    "Average margin of {:.1}% is below recommended 60%. Review food costs, negotiate with suppliers, or adjust pricing across the menu.",
                    avg
                ),
            ))
        },
    },
    DecisionRule {
        tag: "healthy-band",
        condition: rules::always,
        action: rules::nothing,
    },
];

/// Profitability report: star performer, underperformer, category winner,
/// and overall margin health, in that order.
pub fn analyze(items: &[MenuItem], thresholds: &Thresholds) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    if items.is_empty() {
        return recommendations;
    }

    if let Some(star) = first_max_by(items, |item| item.monthly_profit) {
        debug!(item = %star.name, "star performer");
        recommendations.push(Recommendation::normal(
            format!("Star Performer: {}", star.name),
            format!(
                "This item generates ${:.2} monthly profit with {:.1}% margin. Consider featuring it prominently, training staff to upsell it, or creating similar items.",
                star.monthly_profit, star.profit_margin
            ),
        ));
    }

    let underperformers = items
        .iter()
        .filter(|item| item.profit_margin < thresholds.underperformer_margin);
    if let Some(worst) = first_min_by(underperformers, |item| item.profit_margin) {
        debug!(item = %worst.name, "underperformer");
        recommendations.push(Recommendation::warning(
            format!("Underperformer Alert: {}", worst.name),
            format!(
                "Only {:.1}% margin (${:.2}/month). Consider increasing price by 15-20%, reducing portion size, or finding cheaper ingredients.",
                worst.profit_margin, worst.monthly_profit
            ),
        ));
    }

    let categories = group_by_category(items);
    let best_category = first_max_by(
        categories.iter().map(|g| (g.category, g.total(|item| item.monthly_profit))),
        |(_, profit)| *profit,
    );
    if let Some((category, profit)) = best_category {
        recommendations.push(Recommendation::normal(
            format!("Category Winner: {}", category),
            format!(
                "Your {} generate ${:.2} monthly profit. Consider expanding this category with 2-3 similar items to capitalize on success.",
                category.to_lowercase(),
                profit
            ),
        ));
    }

    let avg = average_margin(items);
    if let Some((_, Some(rec))) = rules::evaluate(HEALTH_RULES, &avg, thresholds) {
        recommendations.push(rec);
    }

    recommendations
}

/// Mean of the stored profit margins; 0 for no items.
pub fn average_margin<'a, I>(items: I) -> f64
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let margins: Vec<f64> = items.into_iter().map(|item| item.profit_margin).collect();
    mean(&margins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::rules::first_match;

    fn health_tag(avg: f64) -> &'static str {
        first_match(HEALTH_RULES, &avg, &Thresholds::default())
            .unwrap()
            .tag
    }

    #[test]
    fn test_health_rule_bands() {
        assert_eq!(health_tag(70.0), "excellent-health");
        assert_eq!(health_tag(65.0), "healthy-band");
        assert_eq!(health_tag(50.0), "healthy-band");
        assert_eq!(health_tag(49.9), "margin-warning");
    }

    #[test]
    fn test_average_margin_empty() {
        let empty: Vec<MenuItem> = Vec::new();
        assert_eq!(average_margin(&empty), 0.0);
    }
}
