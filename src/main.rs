use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ieat_vienna_rs::calculator::{compute_reorder, extract_ingredient_names};
use ieat_vienna_rs::cli::{Cli, Command};
use ieat_vienna_rs::config::{Config, DEFAULT_LOG_FILTER};
use ieat_vienna_rs::error::{CalcError, Result};
use ieat_vienna_rs::export::{write_csv, write_json};
use ieat_vienna_rs::import::import_sheet;
use ieat_vienna_rs::interface::{
    collect_selection, display_event, display_ingredient_names, display_reorder,
    display_shopping_list, format_write, prompt_yes_no,
};
use ieat_vienna_rs::models::{IngredientCatalog, IngredientWrite, RecipeBook};
use ieat_vienna_rs::notify::{notify_reorder, LogNotifier};
use ieat_vienna_rs::state::{
    load_catalog, load_event_state, load_or_empty, load_recipes, load_stock, parse_manual_amount,
    parse_product_quantity, save_event_state, save_reorder, EventStateManager,
};

fn main() {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    init_logging(&config);

    if let Err(e) = run(cli.command.unwrap_or_default(), &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(config: &Config) {
    let filter = match &config.log_override {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Calculate { csv, json } => cmd_calculate(config, csv, json),
        Command::Ingredients => cmd_ingredients(config),
        Command::Show => cmd_show(config),
        Command::Select => cmd_select(config),
        Command::Product {
            name,
            quantity,
            set,
            remove,
            unit,
        } => cmd_product(config, &name, &quantity, set, remove, &unit),
        Command::Adjust {
            ingredient,
            amount,
            set,
            remove,
        } => cmd_adjust(config, &ingredient, amount.as_deref(), set, remove),
        Command::Import {
            sheet,
            delimiter,
            keep_manual,
        } => cmd_import(config, &sheet, delimiter, keep_manual),
        Command::Reorder { stock, out } => cmd_reorder(config, &stock, &out),
        Command::Reset { products, manual } => cmd_reset(config, products, manual),
    }
}

fn recipes(config: &Config) -> RecipeBook {
    load_or_empty(&config.recipes_path, "recipes", |p| load_recipes(p))
}

fn catalog(config: &Config) -> IngredientCatalog {
    load_or_empty(&config.ingredients_path, "ingredient catalog", |p| load_catalog(p))
}

fn load_manager(config: &Config) -> Result<EventStateManager> {
    Ok(EventStateManager::new(load_event_state(&config.event_path)?))
}

fn save_manager(config: &Config, manager: &EventStateManager) -> Result<()> {
    save_event_state(&config.event_path, manager.state())?;
    info!(path = %config.event_path.display(), "Event saved");
    Ok(())
}

/// Calculate and display the shopping list, optionally exporting it.
fn cmd_calculate(
    config: &Config,
    csv: Option<std::path::PathBuf>,
    json: Option<std::path::PathBuf>,
) -> Result<()> {
    let manager = load_manager(config)?;
    let list = manager.shopping_list(&recipes(config), &catalog(config));

    display_shopping_list(&list, manager.details());

    if let Some(path) = csv {
        write_csv(&list, &path)?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = json {
        write_json(&list, &path)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// List the ingredients used across all recipes.
fn cmd_ingredients(config: &Config) -> Result<()> {
    let names = extract_ingredient_names(&recipes(config));
    display_ingredient_names(&names);
    Ok(())
}

fn cmd_show(config: &Config) -> Result<()> {
    let manager = load_manager(config)?;
    display_event(manager.state());
    Ok(())
}

/// Interactive product and manual ingredient selection.
fn cmd_select(config: &Config) -> Result<()> {
    let recipes = recipes(config);
    if recipes.is_empty() {
        println!("No recipes loaded. Products can still be added but add no ingredients.");
    } else {
        println!("Loaded {} recipes", recipes.len());
    }

    let mut manager = load_manager(config)?;
    let names = extract_ingredient_names(&recipes);
    collect_selection(&mut manager, &recipes, &names)?;

    let list = manager.shopping_list(&recipes, &catalog(config));
    display_shopping_list(&list, manager.details());

    if prompt_yes_no("Save event?", true)? {
        save_manager(config, &manager)?;
        println!("Event saved.");
    }
    Ok(())
}

fn cmd_product(
    config: &Config,
    name: &str,
    quantity: &str,
    set: bool,
    remove: bool,
    unit: &str,
) -> Result<()> {
    let mut manager = load_manager(config)?;

    if remove {
        manager.remove_product(name)?;
        println!("Removed {}", name);
    } else {
        let quantity = parse_product_quantity(quantity);
        if set {
            manager.set_product(name, quantity, unit);
            println!("{} x {}", quantity, name);
        } else {
            let total = manager.add_product(name, quantity, unit);
            println!("{} x {}", total, name);
        }
        if recipes(config).get(name).is_none() {
            println!("Note: no recipe for '{}', it adds no ingredients.", name);
        }
    }

    save_manager(config, &manager)
}

fn cmd_adjust(
    config: &Config,
    ingredient: &str,
    amount: Option<&str>,
    set: bool,
    remove: bool,
) -> Result<()> {
    let ingredient = ingredient.trim();
    if ingredient.is_empty() {
        return Err(CalcError::InvalidInput("ingredient name is empty".to_string()));
    }

    let mut manager = load_manager(config)?;

    if remove {
        if manager.remove_manual(ingredient).is_none() {
            return Err(CalcError::InvalidInput(format!(
                "no manual amount for '{}'",
                ingredient
            )));
        }
        println!("Removed manual amount for {}.", ingredient);
        return save_manager(config, &manager);
    }

    let amount = parse_manual_amount(amount.unwrap_or_default());
    let write = if set {
        IngredientWrite::Set(amount)
    } else {
        IngredientWrite::Add(amount)
    };

    let stored = manager.write_manual(ingredient, write);
    println!("{}: {}", ingredient, format_write(&stored));
    save_manager(config, &manager)
}

/// Replace the event's products and details with an imported sheet.
fn cmd_import(
    config: &Config,
    sheet: &std::path::Path,
    delimiter: char,
    keep_manual: bool,
) -> Result<()> {
    let delimiter = u8::try_from(delimiter)
        .map_err(|_| CalcError::InvalidInput(format!("delimiter '{}' is not ASCII", delimiter)))?;
    let imported = import_sheet(sheet, delimiter)?;

    let mut manager = load_manager(config)?;
    manager.reset_products();
    if !keep_manual {
        manager.reset_manual();
    }
    manager.set_details(imported.details);
    for (name, product) in imported.products.iter() {
        manager.set_product(name, product.quantity, &product.unit);
    }

    println!("Imported {} products", manager.product_count());
    display_event(manager.state());
    save_manager(config, &manager)
}

/// Build a reorder from the stock shortfall and notify about it.
fn cmd_reorder(config: &Config, stock: &std::path::Path, out: &std::path::Path) -> Result<()> {
    let manager = load_manager(config)?;
    let catalog = catalog(config);
    let list = manager.shopping_list(&recipes(config), &catalog);
    let stock = load_stock(stock)?;

    let reorder = compute_reorder(&list, &stock, &catalog, manager.details().name.as_deref());
    display_reorder(&reorder);

    if !reorder.is_empty() {
        save_reorder(out, &reorder)?;
        println!("Wrote {}", out.display());
        notify_reorder(&LogNotifier, &reorder);
    }
    Ok(())
}

fn cmd_reset(config: &Config, products: bool, manual: bool) -> Result<()> {
    if !products && !manual {
        println!("Please specify at least one reset option:");
        println!("  --products  Remove all selected products");
        println!("  --manual    Remove all manual ingredients");
        return Ok(());
    }

    let mut manager = load_manager(config)?;
    if products {
        manager.reset_products();
        println!("Removed all products.");
    }
    if manual {
        manager.reset_manual();
        println!("Removed all manual ingredients.");
    }
    save_manager(config, &manager)
}
