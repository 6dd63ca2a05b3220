use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::models::{IngredientTotals, IngredientWrite, ManualEntries, RecipeBook, Selection};

/// Per-ingredient totals for a selection plus the products that had no recipe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub totals: IngredientTotals,
    pub missing_recipes: Vec<String>,
}

/// Sum `recipe[item][ingredient] * quantity` over every ordered item.
///
/// Items without a recipe contribute nothing and are reported in
/// `missing_recipes`. Items with quantity zero are skipped entirely.
/// Sums are clamped to zero only once, after every item is counted.
pub fn aggregate(recipes: &RecipeBook, selection: &Selection) -> Aggregation {
    let mut aggregation = Aggregation::default();
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();

    for (product, selected) in selection.ordered() {
        let Some(recipe) = recipes.get(product) else {
            warn!(product, quantity = selected.quantity, "No recipe for selected product");
            aggregation.missing_recipes.push(product.to_string());
            continue;
        };

        let quantity = f64::from(selected.quantity);
        for (ingredient, per_unit) in recipe.ingredients() {
            *sums.entry(ingredient).or_insert(0.0) += per_unit * quantity;
        }
        debug!(product, quantity = selected.quantity, ingredients = recipe.len(), "Aggregated product");
    }

    for (ingredient, sum) in sums {
        aggregation.totals.apply(ingredient, IngredientWrite::Set(sum));
    }
    aggregation
}

/// Like [`aggregate`], then apply manual writes: `Set` replaces the recipe
/// total, `Add` increments it.
///
/// Manual entries need no recipe and appear even if no product uses them.
pub fn aggregate_with_manual(
    recipes: &RecipeBook,
    selection: &Selection,
    manual: &ManualEntries,
) -> Aggregation {
    let mut aggregation = aggregate(recipes, selection);
    manual.apply_to(&mut aggregation.totals);
    aggregation
}
