use clap::Parser;
use std::path::Path;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use menu_optimizer::analytics::{load_thresholds, summarize, AnalysisKind, Thresholds};
use menu_optimizer::cli::{Cli, Command};
use menu_optimizer::error::{MenuError, Result};
use menu_optimizer::interface::{
    display_item_details, display_menu_items, display_recommendations, display_summary,
    print_recommendations_json, prompt_action, prompt_new_item, prompt_pick_item, prompt_yes_no,
    suggest_items, SessionAction,
};
use menu_optimizer::state::{export_items, load_menu, MenuStore};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let thresholds = match &cli.thresholds {
        Some(path) => load_thresholds(path)?,
        None => Thresholds::default(),
    };
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(&cli.file, &thresholds),
        Command::List => with_menu(&cli.file, |store| {
            display_menu_items(store.list_items());
            Ok(())
        }),
        Command::Summary => with_menu(&cli.file, |store| {
            display_summary(&summarize(store.list_items()));
            Ok(())
        }),
        Command::Report { kinds, json } => {
            with_menu(&cli.file, |store| cmd_report(store, &kinds, json, &thresholds))
        }
        Command::Show { name } => with_menu(&cli.file, |store| cmd_show(store, &name)),
        Command::Export { path } => with_menu(&cli.file, |store| {
            export_items(&path, store.list_items())?;
            println!("Exported {} items to {}", store.len(), path);
            Ok(())
        }),
    }
}

/// Load the menu file into a fresh store.
fn load_store(file_path: &str) -> Result<MenuStore> {
    let records = load_menu(file_path)?;
    let mut store = MenuStore::new();
    store.extend(records)?;
    Ok(store)
}

/// Run `f` against the menu file, or explain that the file is missing.
fn with_menu<F>(file_path: &str, f: F) -> Result<()>
where
    F: FnOnce(&mut MenuStore) -> Result<()>,
{
    if !Path::new(file_path).exists() {
        eprintln!("Menu file not found: {}", file_path);
        eprintln!("Pass --file with a .json or .csv menu, or use 'interactive' to enter items.");
        return Ok(());
    }

    let mut store = load_store(file_path)?;
    f(&mut store)
}

/// Print one or more reports.
fn cmd_report(
    store: &mut MenuStore,
    kinds: &[AnalysisKind],
    json: bool,
    thresholds: &Thresholds,
) -> Result<()> {
    let kinds: &[AnalysisKind] = if kinds.is_empty() {
        &AnalysisKind::ALL
    } else {
        kinds
    };

    if json {
        let mut all = Vec::new();
        for kind in kinds {
            all.extend(store.run(*kind, thresholds)?);
        }
        return print_recommendations_json(&all);
    }

    for kind in kinds {
        match store.run(*kind, thresholds) {
            Ok(recommendations) => display_recommendations(*kind, &recommendations),
            // Keep going so one undefined metric doesn't hide the other reports.
            Err(MenuError::Arithmetic(msg)) if kinds.len() > 1 => {
                warn!(report = %kind, "{}", msg);
                eprintln!("{} skipped: {}", kind.title(), msg);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Show one item, falling back to fuzzy suggestions.
fn cmd_show(store: &MenuStore, name: &str) -> Result<()> {
    if let Some(item) = store.find_by_name(name) {
        display_item_details(item);
        return Ok(());
    }

    let candidates = suggest_items(store.list_items(), name);
    if candidates.is_empty() {
        return Err(MenuError::ItemNotFound(name.to_string()));
    }

    match prompt_pick_item(name, &candidates)? {
        Some(item) => display_item_details(item),
        None => println!("No item selected."),
    }
    Ok(())
}

/// Interactive session. Items entered here live only for the session.
fn cmd_interactive(file_path: &str, thresholds: &Thresholds) -> Result<()> {
    let mut store = if Path::new(file_path).exists() {
        let store = load_store(file_path)?;
        println!("Loaded {} menu items from {}", store.len(), file_path);
        store
    } else {
        MenuStore::new()
    };

    println!("Restaurant Menu Optimizer");
    println!();

    loop {
        match prompt_action()? {
            SessionAction::AddItem => {
                let input = prompt_new_item()?;
                match store.add_item(input) {
                    Ok(item) => println!(
                        "Added '{}' ({:.1}% margin, ${:.2}/month profit).",
                        item.name, item.profit_margin, item.monthly_profit
                    ),
                    Err(e @ MenuError::Validation { .. }) => println!("Error: {}", e),
                    Err(e) => return Err(e),
                }
            }
            SessionAction::ListItems => display_menu_items(store.list_items()),
            SessionAction::Summary => display_summary(&summarize(store.list_items())),
            SessionAction::Report(kind) => {
                if store.is_empty() {
                    println!("Add menu items first to run the {}.", kind.title().to_lowercase());
                    continue;
                }
                match store.run(kind, thresholds) {
                    Ok(recommendations) => display_recommendations(kind, &recommendations),
                    Err(MenuError::Arithmetic(msg)) => println!("{} failed: {}", kind.title(), msg),
                    Err(e) => return Err(e),
                }
            }
            SessionAction::Quit => {
                if store.is_empty() || prompt_yes_no("Quit? Menu items are not saved.", true)? {
                    break;
                }
            }
        }
    }

    Ok(())
}
