use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// I Eat Vienna — turns event menu selections into shopping lists and packaging counts.
#[derive(Parser, Debug)]
#[command(name = "ieat_vienna")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Recipe book JSON (menu item -> ingredient -> amount per unit).
    #[arg(long, env = "IEV_RECIPES", default_value = "recipes.json", global = true)]
    pub recipes: PathBuf,

    /// Ingredient catalog JSON (units and packaging).
    #[arg(long, env = "IEV_INGREDIENTS", default_value = "ingredients.json", global = true)]
    pub ingredients: PathBuf,

    /// Event state JSON (details, selected products, manual ingredients).
    #[arg(short, long, env = "IEV_EVENT", default_value = "event.json", global = true)]
    pub event: PathBuf,

    /// More log output (-v info, -vv debug, -vvv trace). Overrides RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors. Overrides RUST_LOG.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate the shopping list for the current event.
    Calculate {
        /// Also write the list as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Also write the list as JSON.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// List every ingredient used by any recipe.
    Ingredients,

    /// Show the event's details, products and manual ingredients.
    Show,

    /// Interactively select products and manual ingredients.
    Select,

    /// Add to, set, or remove a product of the event.
    Product {
        /// Menu item name.
        name: String,

        /// Quantity (clamped to at least 1).
        #[arg(allow_hyphen_values = true, default_value = "1")]
        quantity: String,

        /// Replace the quantity instead of adding to it.
        #[arg(long)]
        set: bool,

        /// Remove the product from the event.
        #[arg(long, conflicts_with = "set")]
        remove: bool,

        /// Unit the product is ordered in.
        #[arg(long, default_value = "pcs")]
        unit: String,
    },

    /// Enter an ingredient amount manually, bypassing the recipes.
    Adjust {
        /// Ingredient name.
        ingredient: String,

        /// Amount in the ingredient's unit (clamped to at least 0).
        #[arg(allow_hyphen_values = true, required_unless_present = "remove")]
        amount: Option<String>,

        /// Set the total exactly instead of adding to the recipe amount.
        #[arg(long)]
        set: bool,

        /// Drop the manual entry so the recipe amount applies again.
        #[arg(long, conflicts_with_all = ["set", "amount"])]
        remove: bool,
    },

    /// Import an event sheet (CSV export of the worksheet).
    Import {
        /// Sheet file.
        sheet: PathBuf,

        /// Field delimiter of the sheet.
        #[arg(long, default_value_t = ',')]
        delimiter: char,

        /// Keep manual ingredients of the existing event.
        #[arg(long)]
        keep_manual: bool,
    },

    /// Create a reorder (Nachbestellung) for what the stock does not cover.
    Reorder {
        /// Stock JSON (ingredient -> amount on hand).
        #[arg(long)]
        stock: PathBuf,

        /// Where to write the reorder.
        #[arg(long, default_value = "reorder.json")]
        out: PathBuf,
    },

    /// Reset parts of the event state.
    Reset {
        /// Remove all selected products.
        #[arg(long)]
        products: bool,

        /// Remove all manual ingredients.
        #[arg(long)]
        manual: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Calculate {
            csv: None,
            json: None,
        }
    }
}
