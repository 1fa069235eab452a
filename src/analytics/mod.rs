pub mod aggregate;
pub mod constants;
pub mod costs;
pub mod metrics;
pub mod pricing;
pub mod profit;
pub mod rules;
pub mod summary;
pub mod thresholds;
pub mod trends;

use std::fmt;

use clap::ValueEnum;
use tracing::info;

use crate::error::Result;
use crate::models::{MenuItem, Recommendation};

pub use metrics::{efficiency_score, monthly_profit, profit_margin};
pub use summary::{summarize, CategoryBreakdown, MarginBadge, MenuSummary};
pub use thresholds::{load_thresholds, Thresholds};
pub use trends::TrendReport;

/// The four recommendation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum AnalysisKind {
    Profit,
    Pricing,
    Trends,
    Costs,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 4] = [
        AnalysisKind::Profit,
        AnalysisKind::Pricing,
        AnalysisKind::Trends,
        AnalysisKind::Costs,
    ];

    /// Heading used when rendering the report.
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisKind::Profit => "Profit Analysis",
            AnalysisKind::Pricing => "Pricing Optimization",
            AnalysisKind::Trends => "Trend Analysis",
            AnalysisKind::Costs => "Cost Analysis",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnalysisKind::Profit => "profit",
            AnalysisKind::Pricing => "pricing",
            AnalysisKind::Trends => "trends",
            AnalysisKind::Costs => "costs",
        };
        f.write_str(name)
    }
}

/// Run one report over a snapshot of the menu.
pub fn run_analysis(
    kind: AnalysisKind,
    items: &[MenuItem],
    thresholds: &Thresholds,
) -> Result<Vec<Recommendation>> {
    info!(report = %kind, items = items.len(), "running analysis");
    match kind {
        AnalysisKind::Profit => Ok(profit::analyze(items, thresholds)),
        AnalysisKind::Pricing => Ok(pricing::analyze(items, thresholds)),
        AnalysisKind::Trends => trends::analyze(items, thresholds).map(|r| r.recommendations),
        AnalysisKind::Costs => costs::analyze(items, thresholds),
    }
}

/// Profit report with default thresholds.
pub fn run_profit_analysis(items: &[MenuItem]) -> Result<Vec<Recommendation>> {
    run_analysis(AnalysisKind::Profit, items, &Thresholds::default())
}

/// Pricing report with default thresholds.
pub fn run_pricing_analysis(items: &[MenuItem]) -> Result<Vec<Recommendation>> {
    run_analysis(AnalysisKind::Pricing, items, &Thresholds::default())
}

/// Trend report with default thresholds.
pub fn run_trend_analysis(items: &[MenuItem]) -> Result<Vec<Recommendation>> {
    run_analysis(AnalysisKind::Trends, items, &Thresholds::default())
}

/// Cost report with default thresholds.
pub fn run_cost_analysis(items: &[MenuItem]) -> Result<Vec<Recommendation>> {
    run_analysis(AnalysisKind::Costs, items, &Thresholds::default())
}
