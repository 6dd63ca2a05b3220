use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ingredient amounts needed to produce one unit of a menu item.
///
/// Keys are ingredient names (case-sensitive). Amounts are in the unit the
/// ingredient catalog declares for that ingredient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe {
    ingredients: BTreeMap<String, f64>,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with(mut self, ingredient: &str, amount: f64) -> Self {
        self.ingredients.insert(ingredient.to_string(), amount);
        self
    }

    /// Amount of `ingredient` per unit of the menu item.
    pub fn amount(&self, ingredient: &str) -> Option<f64> {
        self.ingredients.get(ingredient).copied()
    }

    pub fn ingredients(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ingredients.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// All amounts finite and positive.
    pub fn is_valid(&self) -> bool {
        self.ingredients
            .values()
            .all(|amount| amount.is_finite() && *amount > 0.0)
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

/// All known recipes keyed by menu item name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeBook {
    recipes: BTreeMap<String, Recipe>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, recipe: Recipe) -> Self {
        self.recipes.insert(name.to_string(), recipe);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// Menu item names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Recipe)> {
        self.recipes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
