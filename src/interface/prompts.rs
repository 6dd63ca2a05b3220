use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::calculator::{DEFAULT_PRODUCT_UNIT, FUZZY_MATCH_LIMIT, FUZZY_MATCH_THRESHOLD};
use crate::error::Result;
use crate::interface::render::format_write;
use crate::models::{IngredientWrite, RecipeBook};
use crate::state::{parse_manual_amount, parse_product_quantity, EventStateManager};

/// Outcome of looking up a typed name among known names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductMatch {
    /// Case-insensitive exact hit, with the canonical spelling.
    Exact(String),
    /// Close candidates, best first.
    Fuzzy(Vec<String>),
    None,
}

/// Match `input` against `names`, exactly first and by Jaro-Winkler otherwise.
pub fn match_product<'a, I>(input: &str, names: I) -> ProductMatch
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = input.trim().to_lowercase();
    let names: Vec<&str> = names.into_iter().collect();

    if let Some(exact) = names.iter().find(|n| n.to_lowercase() == needle) {
        return ProductMatch::Exact(exact.to_string());
    }

    let mut candidates: Vec<(&str, f64)> = names
        .iter()
        .map(|n| (*n, jaro_winkler(&n.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        ProductMatch::None
    } else {
        ProductMatch::Fuzzy(
            candidates
                .into_iter()
                .take(FUZZY_MATCH_LIMIT)
                .map(|(n, _)| n.to_string())
                .collect(),
        )
    }
}

/// Prompt for a menu item. Returns `None` when the user finishes.
pub fn prompt_product(recipes: &RecipeBook) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Product (press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        match match_product(input, recipes.names()) {
            ProductMatch::Exact(name) => return Ok(Some(name)),
            ProductMatch::None => {
                println!("No recipe matches '{}'", input);
                if prompt_yes_no("Add it anyway (it will not add ingredients)?", false)? {
                    return Ok(Some(input.to_string()));
                }
            }
            ProductMatch::Fuzzy(options) if options.len() == 1 => {
                if prompt_yes_no(&format!("Did you mean '{}'?", options[0]), true)? {
                    return Ok(options.into_iter().next());
                }
            }
            ProductMatch::Fuzzy(options) => {
                let mut selection_options = options.clone();
                selection_options.push("None of these".to_string());

                let selection = Select::new()
                    .with_prompt("Which did you mean?")
                    .items(&selection_options)
                    .default(0)
                    .interact()?;

                if selection < options.len() {
                    return Ok(Some(options[selection].clone()));
                }
            }
        }
    }
}

/// Prompt for how many units of a product are ordered (at least one).
pub fn prompt_product_quantity(product: &str) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!("How many '{}'?", product))
        .default("1".to_string())
        .interact_text()?;

    Ok(parse_product_quantity(&input))
}

/// Prompt for a manual ingredient write. Returns `None` when the user finishes.
pub fn prompt_manual_entry(known: &[String]) -> Result<Option<(String, IngredientWrite)>> {
    let input: String = Input::new()
        .with_prompt("Manual ingredient (press Enter to finish)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let name = match match_product(input, known.iter().map(String::as_str)) {
        ProductMatch::Exact(name) => name,
        _ => input.to_string(),
    };

    let modes = ["Add to the current amount", "Set to exactly this amount"];
    let mode = Select::new()
        .with_prompt(format!("How should '{}' be written?", name))
        .items(&modes)
        .default(0)
        .interact()?;

    let amount_input: String = Input::new()
        .with_prompt("Amount")
        .default("0".to_string())
        .interact_text()?;
    let amount = parse_manual_amount(&amount_input);

    let write = if mode == 1 {
        IngredientWrite::Set(amount)
    } else {
        IngredientWrite::Add(amount)
    };
    Ok(Some((name, write)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Interactively add products and manual ingredients to an event.
pub fn collect_selection(
    manager: &mut EventStateManager,
    recipes: &RecipeBook,
    ingredient_names: &[String],
) -> Result<()> {
    while let Some(product) = prompt_product(recipes)? {
        let quantity = prompt_product_quantity(&product)?;
        let total = manager.add_product(&product, quantity, DEFAULT_PRODUCT_UNIT);
        println!("{} x {}", total, product);
    }

    if prompt_yes_no("Enter ingredients manually?", false)? {
        while let Some((ingredient, write)) = prompt_manual_entry(ingredient_names)? {
            let stored = manager.write_manual(&ingredient, write);
            println!("{}: {}", ingredient, format_write(&stored));
        }
    }

    Ok(())
}
