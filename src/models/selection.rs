use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn default_unit() -> String {
    "pcs".to_string()
}

/// Planned order quantity of a single menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedProduct {
    /// Number of units ordered. Zero means "listed but not ordered".
    pub quantity: u32,

    #[serde(default = "default_unit")]
    pub unit: String,
}

impl SelectedProduct {
    pub fn new(quantity: u32, unit: &str) -> Self {
        Self {
            quantity,
            unit: unit.to_string(),
        }
    }

    pub fn pieces(quantity: u32) -> Self {
        Self::new(quantity, "pcs")
    }
}

/// The menu items chosen for an event, keyed by product name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    products: BTreeMap<String, SelectedProduct>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, product: SelectedProduct) -> Self {
        self.products.insert(name.to_string(), product);
        self
    }

    pub fn insert(&mut self, name: &str, product: SelectedProduct) {
        self.products.insert(name.to_string(), product);
    }

    pub fn remove(&mut self, name: &str) -> Option<SelectedProduct> {
        self.products.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&SelectedProduct> {
        self.products.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SelectedProduct> {
        self.products.get_mut(name)
    }

    /// Products with a positive quantity.
    pub fn ordered(&self) -> impl Iterator<Item = (&str, &SelectedProduct)> {
        self.products
            .iter()
            .filter(|(_, p)| p.quantity > 0)
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SelectedProduct)> {
        self.products.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
