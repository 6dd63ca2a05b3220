use tracing::debug;

use crate::calculator::{self, MIN_MANUAL_AMOUNT, MIN_PRODUCT_QUANTITY};
use crate::error::{CalcError, Result};
use crate::models::{
    EventDetails, EventState, IngredientCatalog, IngredientWrite, RecipeBook, SelectedProduct,
    ShoppingList,
};

/// Parse a menu-item quantity typed by a user.
///
/// Accepts a decimal comma and rounds fractions. Anything unparseable, zero
/// or negative becomes [`MIN_PRODUCT_QUANTITY`].
pub fn parse_product_quantity(input: &str) -> u32 {
    let parsed = parse_number(input)
        .map(f64::round)
        .filter(|n| *n >= f64::from(MIN_PRODUCT_QUANTITY));

    match parsed {
        Some(n) if n < f64::from(u32::MAX) => n as u32,
        Some(_) => u32::MAX,
        None => {
            debug!(input, "Clamped product quantity");
            MIN_PRODUCT_QUANTITY
        }
    }
}

/// Parse a manual ingredient amount typed by a user. Never below zero.
pub fn parse_manual_amount(input: &str) -> f64 {
    match parse_number(input) {
        Some(n) if n >= MIN_MANUAL_AMOUNT => n,
        _ => {
            debug!(input, "Clamped manual amount");
            MIN_MANUAL_AMOUNT
        }
    }
}

fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Owns the event state for the duration of one command.
pub struct EventStateManager {
    state: EventState,
}

impl EventStateManager {
    pub fn new(state: EventState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &EventState {
        &self.state
    }

    pub fn into_state(self) -> EventState {
        self.state
    }

    pub fn details(&self) -> &EventDetails {
        &self.state.details
    }

    pub fn set_details(&mut self, details: EventDetails) {
        self.state.details = details;
    }

    /// Increase a product's quantity, inserting it if needed. Returns the new quantity.
    pub fn add_product(&mut self, name: &str, quantity: u32, unit: &str) -> u32 {
        match self.state.products.get_mut(name) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(quantity);
                existing.quantity
            }
            None => {
                self.state
                    .products
                    .insert(name, SelectedProduct::new(quantity, unit));
                quantity
            }
        }
    }

    /// Replace a product's quantity.
    pub fn set_product(&mut self, name: &str, quantity: u32, unit: &str) {
        self.state
            .products
            .insert(name, SelectedProduct::new(quantity, unit));
    }

    pub fn remove_product(&mut self, name: &str) -> Result<SelectedProduct> {
        self.state
            .products
            .remove(name)
            .ok_or_else(|| CalcError::UnknownProduct(name.to_string()))
    }

    /// Write a manual ingredient amount. Returns the stored write, collapsed
    /// with any earlier write for the same ingredient.
    pub fn write_manual(&mut self, ingredient: &str, write: IngredientWrite) -> IngredientWrite {
        self.state.manual.write(ingredient, write)
    }

    /// Drop a manual entry so the ingredient falls back to its recipe total.
    pub fn remove_manual(&mut self, ingredient: &str) -> Option<IngredientWrite> {
        self.state.manual.remove(ingredient)
    }

    pub fn reset_products(&mut self) {
        self.state.products.clear();
    }

    pub fn reset_manual(&mut self) {
        self.state.manual.clear();
    }

    /// Shopping list for the current selection and manual entries.
    pub fn shopping_list(&self, recipes: &RecipeBook, catalog: &IngredientCatalog) -> ShoppingList {
        calculator::calculate_shopping_list(
            recipes,
            catalog,
            &self.state.products,
            &self.state.manual,
        )
    }

    pub fn product_count(&self) -> usize {
        self.state.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.products.is_empty() && self.state.manual.is_empty()
    }
}
