use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{EventState, IngredientCatalog, IngredientTotals, RecipeBook, Reorder};

fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a store, degrading to its empty value when it cannot be read.
///
/// The cause is logged so operators can fix the data.
pub fn load_or_empty<T, F>(path: &Path, what: &str, load: F) -> T
where
    T: Default,
    F: FnOnce(&Path) -> Result<T>,
{
    load(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Could not load {what}, continuing with none");
        T::default()
    })
}

/// Load the recipe book. Recipes with non-positive amounts are kept but logged.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<RecipeBook> {
    let book: RecipeBook = read_json(path)?;
    for (name, recipe) in book.iter() {
        if !recipe.is_valid() {
            warn!(recipe = name, "Recipe has non-positive ingredient amounts");
        }
    }
    Ok(book)
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<IngredientCatalog> {
    read_json(path)
}

/// Stock on hand, ingredient name to amount in catalog units.
pub fn load_stock<P: AsRef<Path>>(path: P) -> Result<IngredientTotals> {
    read_json(path)
}

/// Load the event state. A missing file is a fresh, empty event.
pub fn load_event_state<P: AsRef<Path>>(path: P) -> Result<EventState> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "No event file yet, starting empty");
        return Ok(EventState::default());
    }
    read_json(path)
}

pub fn save_event_state<P: AsRef<Path>>(path: P, state: &EventState) -> Result<()> {
    write_json(path, state)
}

pub fn save_reorder<P: AsRef<Path>>(path: P, reorder: &Reorder) -> Result<()> {
    write_json(path, reorder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngredientWrite, SelectedProduct};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_recipes() {
        let json = r#"{"Burger": {"Bun": 1, "Patty": 1}}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let book = load_recipes(file.path()).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Burger").unwrap().amount("Patty"), Some(1.0));
    }

    #[test]
    fn test_load_or_empty_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.json");

        let book = load_or_empty(&path, "recipes", |p| load_recipes(p));
        assert!(book.is_empty());
    }

    #[test]
    fn test_load_or_empty_on_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let catalog = load_or_empty(file.path(), "ingredient catalog", |p| load_catalog(p));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_event_state_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("event.json");

        let fresh = load_event_state(&path).unwrap();
        assert_eq!(fresh, EventState::default());

        let mut state = EventState::default();
        state.details.name = Some("Sommerfest".to_string());
        state.products.insert("Burger", SelectedProduct::pieces(50));
        state.manual.write("Salz", IngredientWrite::Set(2.0));
        save_event_state(&path, &state).unwrap();

        let reloaded = load_event_state(&path).unwrap();
        assert_eq!(reloaded, state);
    }

    #[test]
    fn test_corrupt_event_state_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[1, 2").unwrap();
        assert!(load_event_state(file.path()).is_err());
    }
}
