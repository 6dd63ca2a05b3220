use std::collections::BTreeSet;

use crate::models::RecipeBook;

/// Sorted, de-duplicated ingredient names used by any recipe.
pub fn extract_ingredient_names(recipes: &RecipeBook) -> Vec<String> {
    recipes
        .iter()
        .flat_map(|(_, recipe)| recipe.ingredients().map(|(name, _)| name))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
