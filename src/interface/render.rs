use crate::analytics::{AnalysisKind, MarginBadge, MenuSummary};
use crate::error::Result;
use crate::models::{MenuItem, Recommendation, Severity};

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Normal => "[OK]",
        Severity::Warning => "[WARN]",
        Severity::Danger => "[ALERT]",
    }
}

/// Display one report's recommendations.
pub fn display_recommendations(kind: AnalysisKind, recommendations: &[Recommendation]) {
    println!();
    println!("=== {} ===", kind.title());
    println!();

    if recommendations.is_empty() {
        println!("No recommendations (add menu items first).");
        println!();
        return;
    }

    for (i, rec) in recommendations.iter().enumerate() {
        println!("{:>3}. {:<7} {}", i + 1, severity_tag(rec.severity), rec.title);
        println!("     {}", rec.description);
        println!();
    }
}

/// Print recommendations as the `{"recommendations": [...]}` JSON payload.
pub fn print_recommendations_json(recommendations: &[Recommendation]) -> Result<()> {
    let payload = serde_json::json!({ "recommendations": recommendations });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

/// Display the menu in insertion order.
pub fn display_menu_items(items: &[MenuItem]) {
    if items.is_empty() {
        println!("No menu items added yet.");
        return;
    }

    println!();
    println!("=== Current Menu ({} items) ===", items.len());
    println!();

    let max_name_len = items.iter().map(|item| item.name.len()).max().unwrap_or(10);

    for item in items {
        let badge = MarginBadge::for_margin(item.profit_margin);
        println!(
            "{:>3}. {:<width$}  {:<14} ${:>7.2}  cost ${:>6.2}  {:>5.1}%  {:>4} sold  ${:>9.2}/mo  {:>3} min  [{}]",
            item.id,
            item.name,
            item.category,
            item.selling_price,
            item.food_cost,
            item.profit_margin,
            item.monthly_sales,
            item.monthly_profit,
            item.prep_time,
            badge.label(),
            width = max_name_len
        );
    }

    println!();
}

/// Display full details for one item.
pub fn display_item_details(item: &MenuItem) {
    println!();
    println!(
        "=== {} [{}] ===",
        item.name,
        MarginBadge::for_margin(item.profit_margin).label()
    );
    println!("Category:       {}", item.category);
    println!("Price:          ${:.2}", item.selling_price);
    println!("Food Cost:      ${:.2}", item.food_cost);
    println!(
        "Profit:         ${:.2} ({:.1}%)",
        item.unit_profit(),
        item.profit_margin
    );
    println!("Monthly Sales:  {} units", item.monthly_sales);
    println!("Monthly Profit: ${:.2}", item.monthly_profit);
    println!("Prep Time:      {} min", item.prep_time);
    if let Some(score) = item.efficiency_score {
        println!("Efficiency:     ${:.2}/min", score);
    }
    if !item.ingredients.is_empty() {
        println!("Ingredients:    {}", item.ingredients.join(", "));
    }
    println!("Added:          {}", item.created_at.format("%Y-%m-%d %H:%M UTC"));
    println!();
}

/// Display headline statistics and the category breakdown.
pub fn display_summary(summary: &MenuSummary) {
    println!();
    println!("=== Menu Summary ===");
    println!();
    println!("Monthly Revenue:   ${:.2}", summary.total_revenue);
    println!("Monthly Profit:    ${:.2}", summary.total_monthly_profit);
    println!("Menu Items:        {}", summary.item_count);
    println!("Avg Profit Margin: {:.0}%", summary.average_margin);
    println!(
        "Top Seller:        {}",
        summary.best_seller.as_deref().unwrap_or("-")
    );

    if summary.categories.is_empty() {
        println!();
        return;
    }

    println!();
    println!("--- By Category ---");
    let width = summary
        .categories
        .iter()
        .map(|c| c.category.len())
        .max()
        .unwrap_or(10);
    for cat in &summary.categories {
        println!(
            "  {:<width$}  {:>2} items  ${:>10.2}/mo profit  {:>6} units  {:>5.1}% avg margin",
            cat.category,
            cat.item_count,
            cat.monthly_profit,
            cat.monthly_sales,
            cat.average_margin,
            width = width
        );
    }
    println!();
}
