use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A write to an ingredient amount.
///
/// `Add` models "add N more", `Set` models "set to exactly N".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "lowercase")]
pub enum IngredientWrite {
    Add(f64),
    Set(f64),
}

impl IngredientWrite {
    pub fn amount(&self) -> f64 {
        match self {
            IngredientWrite::Add(amount) | IngredientWrite::Set(amount) => *amount,
        }
    }

    /// The amount after applying this write to `current`. Never below zero.
    pub fn applied_to(&self, current: f64) -> f64 {
        let next = match self {
            IngredientWrite::Add(amount) => current + finite_or_zero(*amount),
            IngredientWrite::Set(amount) => finite_or_zero(*amount),
        };
        next.max(0.0)
    }

    /// Collapse two successive writes into one with the same effect.
    ///
    /// A later `Set` wins; a later `Add` keeps the earlier kind.
    pub fn then(self, later: IngredientWrite) -> IngredientWrite {
        match (self, later) {
            (_, IngredientWrite::Set(amount)) => IngredientWrite::Set(finite_or_zero(amount).max(0.0)),
            (IngredientWrite::Add(a), IngredientWrite::Add(b)) => {
                IngredientWrite::Add((finite_or_zero(a) + finite_or_zero(b)).max(0.0))
            }
            (IngredientWrite::Set(a), IngredientWrite::Add(b)) => {
                IngredientWrite::Set(IngredientWrite::Add(b).applied_to(a))
            }
        }
    }
}

impl fmt::Display for IngredientWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngredientWrite::Add(amount) => write!(f, "+{}", amount),
            IngredientWrite::Set(amount) => write!(f, "={}", amount),
        }
    }
}

/// Ingredient name to amount. Amounts never drop below zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientTotals {
    amounts: BTreeMap<String, f64>,
}

impl IngredientTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ingredient: &str) -> Option<f64> {
        self.amounts.get(ingredient).copied()
    }

    /// Apply a write and return the resulting amount.
    ///
    /// Non-finite amounts are treated as zero.
    pub fn apply(&mut self, ingredient: &str, write: IngredientWrite) -> f64 {
        let slot = self.amounts.entry(ingredient.to_string()).or_insert(0.0);
        *slot = write.applied_to(*slot);
        *slot
    }

    /// Additive write; shorthand for `apply(name, Add(amount))`.
    pub fn add(&mut self, ingredient: &str, amount: f64) -> f64 {
        self.apply(ingredient, IngredientWrite::Add(amount))
    }

    /// Entries in ingredient-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.amounts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

/// Manually entered ingredient writes, one collapsed write per ingredient.
///
/// Applied after recipe aggregation: `Set` replaces the aggregated total,
/// `Add` increments it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManualEntries {
    writes: BTreeMap<String, IngredientWrite>,
}

impl ManualEntries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a write, collapsing it with any earlier one. Returns the stored write.
    pub fn write(&mut self, ingredient: &str, write: IngredientWrite) -> IngredientWrite {
        let stored = match self.writes.get(ingredient) {
            Some(earlier) => earlier.then(write),
            None => IngredientWrite::Add(0.0).then(write),
        };
        self.writes.insert(ingredient.to_string(), stored);
        stored
    }

    pub fn remove(&mut self, ingredient: &str) -> Option<IngredientWrite> {
        self.writes.remove(ingredient)
    }

    /// Apply every write on top of `totals`.
    pub fn apply_to(&self, totals: &mut IngredientTotals) {
        for (ingredient, write) in &self.writes {
            totals.apply(ingredient, *write);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, IngredientWrite)> {
        self.writes.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
