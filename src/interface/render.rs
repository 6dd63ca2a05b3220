use crate::models::{EventDetails, EventState, IngredientWrite, Reorder, ShoppingList};

/// Whole numbers without decimals, everything else with two.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// `+n` for an increment on top of the recipes, `=n` for an exact amount.
pub fn format_write(write: &IngredientWrite) -> String {
    match write {
        IngredientWrite::Add(amount) => format!("+{}", format_amount(*amount)),
        IngredientWrite::Set(amount) => format!("={}", format_amount(*amount)),
    }
}

fn display_details(details: &EventDetails) {
    if details.is_empty() {
        return;
    }
    if let Some(name) = &details.name {
        println!("Event:    {}", name);
    }
    if let Some(date) = &details.date {
        println!("Date:     {}", date);
    }
    if let Some(location) = &details.location {
        println!("Location: {}", location);
    }
    if let Some(guests) = details.guests {
        println!("Guests:   {}", guests);
    }
    for (key, value) in &details.extra {
        println!("{}: {}", key, value);
    }
    println!();
}

/// Display the calculated shopping list as a table sorted by ingredient.
pub fn display_shopping_list(list: &ShoppingList, details: &EventDetails) {
    println!();
    display_details(details);

    if list.is_empty() {
        println!("Nothing to buy (no products selected or no recipes found).");
    } else {
        println!("=== Einkaufsliste ===");
        println!();

        let name_width = list.items.keys().map(|k| k.chars().count()).max().unwrap_or(10);

        for (name, item) in &list.items {
            println!(
                "  {:<width$}  {:>10} {:<4} | {:>4} x {} ({} {})",
                name,
                format_amount(item.total_amount),
                item.unit,
                item.packaging_count,
                item.packaging,
                format_amount(item.amount_per_package),
                item.unit,
                width = name_width
            );
        }

        println!();
        println!("--- Summary ---");
        println!("Ingredients: {}", list.len());
        println!("Packages:    {}", list.package_count());
    }

    if list.has_warnings() {
        println!();
        println!("--- Warnings ---");
        for product in &list.missing_recipes {
            println!("  No recipe for '{}', it adds nothing to the list", product);
        }
        for ingredient in &list.unpackaged {
            println!("  No packaging configured for '{}'", ingredient);
        }
    }
    println!();
}

/// Display the distinct ingredient names used by the recipes.
pub fn display_ingredient_names(names: &[String]) {
    if names.is_empty() {
        println!("No ingredients (recipe book is empty).");
        return;
    }

    println!();
    println!("=== Ingredients ({} items) ===", names.len());
    println!();
    for name in names {
        println!("  {}", name);
    }
    println!();
}

/// Display the products and manual entries of an event.
pub fn display_event(state: &EventState) {
    println!();
    display_details(&state.details);

    if state.products.is_empty() {
        println!("Products: (none)");
    } else {
        println!("Products:");
        for (name, product) in state.products.iter() {
            println!("  {:>5} {:<4} {}", product.quantity, product.unit, name);
        }
    }

    if !state.manual.is_empty() {
        println!("Manual ingredients:");
        for (name, write) in state.manual.iter() {
            println!("  {:>9} {}", format_write(&write), name);
        }
    }
    println!();
}

/// Display a reorder ("Nachbestellung").
pub fn display_reorder(reorder: &Reorder) {
    if reorder.is_empty() {
        println!("Stock covers everything, no reorder needed.");
        return;
    }

    println!();
    println!("=== Nachbestellung ===");
    println!();

    let name_width = reorder
        .lines
        .iter()
        .map(|l| l.ingredient.chars().count())
        .max()
        .unwrap_or(10);

    for line in &reorder.lines {
        println!(
            "  {:<width$}  missing {:>10} {:<4} | {:>4} x {}",
            line.ingredient,
            format_amount(line.missing_amount),
            line.unit,
            line.packaging_count,
            line.packaging,
            width = name_width
        );
    }

    println!();
    println!("Total packages: {}", reorder.package_count());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50.0), "50");
        assert_eq!(format_amount(2.5), "2.50");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_format_write_shows_kind() {
        assert_eq!(format_write(&IngredientWrite::Add(2.0)), "+2");
        assert_eq!(format_write(&IngredientWrite::Set(1.5)), "=1.50");
    }
}
