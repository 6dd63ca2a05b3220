use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Unit;

/// The container an ingredient is bought in, e.g. a 5 kg bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packaging {
    pub name: String,

    /// Content of one package.
    pub size: f64,

    /// Unit of `size`. Defaults to the ingredient's own unit.
    #[serde(default)]
    pub unit: Option<Unit>,
}

impl Packaging {
    pub fn new(name: &str, size: f64) -> Self {
        Self {
            name: name.to_string(),
            size,
            unit: None,
        }
    }

    pub fn in_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }
}

/// Per-ingredient unit and purchase packaging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientSpec {
    #[serde(default)]
    pub unit: Unit,

    #[serde(default)]
    pub packaging: Option<Packaging>,
}

/// Ingredient catalog keyed by ingredient name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientCatalog {
    entries: BTreeMap<String, IngredientSpec>,
}

impl IngredientCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, ingredient: &str, spec: IngredientSpec) -> Self {
        self.entries.insert(ingredient.to_string(), spec);
        self
    }

    /// Shorthand for an ingredient counted in pieces with the given package size.
    pub fn with_packaging(self, ingredient: &str, packaging: Packaging) -> Self {
        self.with(
            ingredient,
            IngredientSpec {
                unit: Unit::Piece,
                packaging: Some(packaging),
            },
        )
    }

    pub fn get(&self, ingredient: &str) -> Option<&IngredientSpec> {
        self.entries.get(ingredient)
    }

    /// Unit recipe amounts for `ingredient` are expressed in (pieces if unknown).
    pub fn unit_of(&self, ingredient: &str) -> Unit {
        self.entries
            .get(ingredient)
            .map(|spec| spec.unit.clone())
            .unwrap_or_default()
    }

    pub fn packaging_of(&self, ingredient: &str) -> Option<&Packaging> {
        self.entries
            .get(ingredient)
            .and_then(|spec| spec.packaging.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
