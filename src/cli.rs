use clap::{ArgAction, Parser, Subcommand};

use crate::analytics::AnalysisKind;

/// Menu Optimizer: profit, pricing, trend, and cost recommendations for a restaurant menu.
#[derive(Parser, Debug)]
#[command(name = "menu_optimizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Menu file to load (.json or .csv).
    #[arg(short, long, default_value = "menu.json", global = true)]
    pub file: String,

    /// JSON file overriding analysis thresholds.
    #[arg(short, long, global = true)]
    pub thresholds: Option<String>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enter items and run reports in an interactive session.
    Interactive,

    /// List menu items with their margins and monthly profit.
    List,

    /// Show headline statistics and a per-category breakdown.
    Summary,

    /// Generate recommendations. Runs every report when none is named.
    Report {
        #[arg(value_enum)]
        kinds: Vec<AnalysisKind>,

        /// Print recommendations as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show details for one item (fuzzy name match).
    Show {
        name: String,
    },

    /// Write the menu with derived metrics to a .json or .csv file.
    Export {
        path: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_kinds() {
        let cli = Cli::parse_from(["menu_optimizer", "report", "profit", "costs", "--json"]);
        match cli.command {
            Some(Command::Report { kinds, json }) => {
                assert_eq!(kinds, vec![AnalysisKind::Profit, AnalysisKind::Costs]);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["menu_optimizer", "-vv", "list", "--file", "menu.csv"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.file, "menu.csv");
        assert!(matches!(cli.command, Some(Command::List)));
    }
}
