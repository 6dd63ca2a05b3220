pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod interface;
pub mod models;
pub mod notify;
pub mod state;

pub use calculator::calculate_shopping_list;
pub use error::{CalcError, ImportError, Result};
pub use models::{CalculatedIngredient, RecipeBook, Selection, ShoppingList};
