mod calculated;
mod catalog;
mod event;
mod quantities;
mod recipe;
mod reorder;
mod selection;
mod unit;

pub use calculated::{CalculatedIngredient, ShoppingList};
pub use catalog::{IngredientCatalog, IngredientSpec, Packaging};
pub use event::{EventDetails, EventState};
pub use quantities::{IngredientTotals, IngredientWrite, ManualEntries};
pub use recipe::{Recipe, RecipeBook};
pub use reorder::{Reorder, ReorderLine};
pub use selection::{SelectedProduct, Selection};
pub use unit::{Dimension, Unit};
