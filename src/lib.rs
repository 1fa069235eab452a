pub mod analytics;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use analytics::{
    run_cost_analysis, run_pricing_analysis, run_profit_analysis, run_trend_analysis,
    AnalysisKind, Thresholds,
};
pub use error::{MenuError, Result};
pub use models::{MenuItem, NewMenuItem, Recommendation, Severity};
pub use state::{MenuStore, SharedMenuStore};
