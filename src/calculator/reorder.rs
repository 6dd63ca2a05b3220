use crate::calculator::constants::PACKAGE_TOLERANCE;
use crate::calculator::packaging::package_ingredient;
use crate::models::{IngredientCatalog, IngredientTotals, Reorder, ReorderLine, ShoppingList};

/// Build a reorder from everything the stock does not cover.
///
/// `stock` is in each ingredient's catalog unit. Ingredients absent from the
/// stock count as zero on hand.
pub fn compute_reorder(
    list: &ShoppingList,
    stock: &IngredientTotals,
    catalog: &IngredientCatalog,
    event: Option<&str>,
) -> Reorder {
    let lines = list
        .items
        .iter()
        .filter_map(|(ingredient, item)| {
            let on_hand = stock.get(ingredient).unwrap_or(0.0);
            let missing = item.total_amount - on_hand;
            if missing <= item.total_amount * PACKAGE_TOLERANCE {
                return None;
            }
            let packed = package_ingredient(ingredient, missing, catalog);
            Some(ReorderLine {
                ingredient: ingredient.clone(),
                missing_amount: missing,
                unit: packed.item.unit,
                packaging: packed.item.packaging,
                packaging_count: packed.item.packaging_count,
            })
        })
        .collect();

    Reorder {
        event: event.map(str::to_string),
        lines,
    }
}
