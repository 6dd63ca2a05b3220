use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Purchase requirement for one ingredient, derived on every calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedIngredient {
    pub total_amount: f64,
    pub unit: String,

    /// Packaging name, or the unit itself for degenerate packaging.
    pub packaging: String,
    pub packaging_count: u64,

    /// Content of one package, in `unit`.
    pub amount_per_package: f64,
}

/// Result of one calculation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Calculated ingredients keyed (and therefore sorted) by name.
    pub items: BTreeMap<String, CalculatedIngredient>,

    /// Ordered menu items that have no recipe.
    pub missing_recipes: Vec<String>,

    /// Ingredients that fell back to degenerate packaging.
    pub unpackaged: Vec<String>,
}

impl ShoppingList {
    pub fn get(&self, ingredient: &str) -> Option<&CalculatedIngredient> {
        self.items.get(ingredient)
    }

    /// Total number of packages, saturating at `u64::MAX`.
    pub fn package_count(&self) -> u64 {
        self.items
            .values()
            .fold(0u64, |sum, i| sum.saturating_add(i.packaging_count))
    }

    pub fn has_warnings(&self) -> bool {
        !self.missing_recipes.is_empty() || !self.unpackaged.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
