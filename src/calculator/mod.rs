pub mod aggregator;
pub mod constants;
pub mod extractor;
pub mod packaging;
pub mod reorder;

pub use aggregator::{aggregate, aggregate_with_manual, Aggregation};
pub use constants::*;
pub use extractor::extract_ingredient_names;
pub use packaging::{package_ingredient, packages_needed, PackedIngredient};
pub use reorder::compute_reorder;

use tracing::debug;

use crate::models::{IngredientCatalog, ManualEntries, RecipeBook, Selection, ShoppingList};

/// Aggregate a selection and package every resulting ingredient.
///
/// Pure: the same inputs always produce the same list.
pub fn calculate_shopping_list(
    recipes: &RecipeBook,
    catalog: &IngredientCatalog,
    selection: &Selection,
    manual: &ManualEntries,
) -> ShoppingList {
    let aggregation = aggregate_with_manual(recipes, selection, manual);

    let mut list = ShoppingList {
        missing_recipes: aggregation.missing_recipes,
        ..ShoppingList::default()
    };

    for (ingredient, total) in aggregation.totals.iter() {
        let packed = package_ingredient(ingredient, total, catalog);
        if packed.degenerate {
            list.unpackaged.push(ingredient.to_string());
        }
        list.items.insert(ingredient.to_string(), packed.item);
    }

    debug!(
        ingredients = list.len(),
        missing_recipes = list.missing_recipes.len(),
        unpackaged = list.unpackaged.len(),
        "Calculated shopping list"
    );
    list
}
