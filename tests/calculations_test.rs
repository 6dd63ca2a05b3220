#[macro_use]
extern crate assert_float_eq;

use ieat_vienna_rs::calculator::{
    aggregate, calculate_shopping_list, extract_ingredient_names, packages_needed,
};
use ieat_vienna_rs::models::{
    CalculatedIngredient, IngredientCatalog, IngredientSpec, IngredientTotals, IngredientWrite,
    ManualEntries, Packaging, Recipe, RecipeBook, Reorder, ReorderLine, SelectedProduct, Selection,
    ShoppingList, Unit,
};

fn burger_book() -> RecipeBook {
    RecipeBook::new().with("Burger", Recipe::new().with("Bun", 1.0).with("Patty", 1.0))
}

fn festival_book() -> RecipeBook {
    RecipeBook::new()
        .with("Burger", Recipe::new().with("Bun", 1.0).with("Patty", 1.0).with("Salat", 0.02))
        .with("Cheeseburger", Recipe::new().with("Bun", 1.0).with("Patty", 1.0).with("Käse", 1.0))
        .with("Pommes", Recipe::new().with("Kartoffeln", 0.25).with("Salz", 0.002))
}

#[test]
fn test_burger_example_end_to_end() {
    let selection = Selection::new().with("Burger", SelectedProduct::new(50, "pcs"));
    let catalog = IngredientCatalog::new().with_packaging("Bun", Packaging::new("Beutel", 12.0));

    let list = calculate_shopping_list(&burger_book(), &catalog, &selection, &ManualEntries::new());

    let bun = list.get("Bun").unwrap();
    assert_eq!(bun.total_amount, 50.0);
    assert_eq!(bun.packaging_count, 5);
    assert_eq!(bun.packaging, "Beutel");

    let patty = list.get("Patty").unwrap();
    assert_eq!(patty.total_amount, 50.0);
    assert_eq!(patty.packaging_count, 1);
    assert_eq!(patty.amount_per_package, 50.0);

    assert_eq!(list.unpackaged, vec!["Patty".to_string()]);
    assert!(list.missing_recipes.is_empty());
}

#[test]
fn test_total_is_sum_over_ordered_items() {
    let book = festival_book();
    let selection = Selection::new()
        .with("Burger", SelectedProduct::pieces(120))
        .with("Cheeseburger", SelectedProduct::pieces(80))
        .with("Pommes", SelectedProduct::pieces(200));

    let result = aggregate(&book, &selection);

    for ingredient in extract_ingredient_names(&book) {
        let expected: f64 = selection
            .ordered()
            .filter_map(|(item, p)| {
                book.get(item)
                    .and_then(|r| r.amount(&ingredient))
                    .map(|a| a * f64::from(p.quantity))
            })
            .sum();
        let actual = result.totals.get(&ingredient).unwrap_or(0.0);
        assert_float_absolute_eq!(actual, expected, 1e-9);
    }
    assert_float_absolute_eq!(result.totals.get("Salat").unwrap(), 2.4, 1e-9);
    assert_float_absolute_eq!(result.totals.get("Kartoffeln").unwrap(), 50.0, 1e-9);
}

#[test]
fn test_recalculation_is_idempotent() {
    let selection = Selection::new()
        .with("Burger", SelectedProduct::pieces(33))
        .with("Pommes", SelectedProduct::pieces(17));
    let catalog = IngredientCatalog::new()
        .with_packaging("Bun", Packaging::new("Beutel", 12.0))
        .with(
            "Kartoffeln",
            IngredientSpec {
                unit: Unit::Kilogram,
                packaging: Some(Packaging::new("Sack", 25.0)),
            },
        );
    let mut manual = ManualEntries::new();
    manual.write("Salz", IngredientWrite::Set(1.0));

    let first = calculate_shopping_list(&festival_book(), &catalog, &selection, &manual);
    let second = calculate_shopping_list(&festival_book(), &catalog, &selection, &manual);
    assert_eq!(first, second);
}

#[test]
fn test_packaging_count_is_monotonic() {
    let mut previous = 0;
    for step in 0..=400 {
        let total = f64::from(step) * 0.25;
        let count = packages_needed(total, 5.0);
        assert!(count >= previous, "count dropped at total {}", total);
        previous = count;
    }
    assert_eq!(previous, 20);
}

#[test]
fn test_ceiling_examples() {
    assert_eq!(packages_needed(11.0, 5.0), 3);
    assert_eq!(packages_needed(10.0, 5.0), 2);
    assert_eq!(packages_needed(0.0, 5.0), 0);
}

#[test]
fn test_additive_and_overwrite_writes() {
    let mut totals = IngredientTotals::new();
    totals.apply("Bun", IngredientWrite::Set(3.0));
    assert_eq!(totals.apply("Bun", IngredientWrite::Add(2.0)), 5.0);

    let mut totals = IngredientTotals::new();
    totals.apply("Bun", IngredientWrite::Set(3.0));
    assert_eq!(totals.apply("Bun", IngredientWrite::Set(2.0)), 2.0);
}

#[test]
fn test_manual_set_replaces_recipe_total() {
    let book = RecipeBook::new().with("Burger", Recipe::new().with("Bun", 1.0));
    let selection = Selection::new().with("Burger", SelectedProduct::pieces(10));

    let mut manual = ManualEntries::new();
    manual.write("Bun", IngredientWrite::Set(2.0));
    let list = calculate_shopping_list(&book, &IngredientCatalog::new(), &selection, &manual);
    assert_eq!(list.get("Bun").unwrap().total_amount, 2.0);

    let mut manual = ManualEntries::new();
    manual.write("Bun", IngredientWrite::Add(2.0));
    let list = calculate_shopping_list(&book, &IngredientCatalog::new(), &selection, &manual);
    assert_eq!(list.get("Bun").unwrap().total_amount, 12.0);
}

#[test]
fn test_negative_recipe_amounts_are_clamped_once() {
    let book = RecipeBook::new()
        .with("Alpha", Recipe::new().with("Bun", -1.0))
        .with("Beta", Recipe::new().with("Bun", 1.0));
    let selection = Selection::new()
        .with("Alpha", SelectedProduct::pieces(5))
        .with("Beta", SelectedProduct::pieces(10));

    assert_eq!(aggregate(&book, &selection).totals.get("Bun"), Some(5.0));
}

#[test]
fn test_large_package_counts_do_not_wrap() {
    assert_eq!(packages_needed(1e10, 1.0), 10_000_000_000);
    assert_eq!(packages_needed(5.0000000001, 5.0), 2);

    let huge = |name: &str| CalculatedIngredient {
        total_amount: 1e300,
        unit: "g".to_string(),
        packaging: name.to_string(),
        packaging_count: u64::MAX,
        amount_per_package: 1.0,
    };
    let mut list = ShoppingList::default();
    list.items.insert("Mehl".to_string(), huge("Sack"));
    list.items.insert("Zucker".to_string(), huge("Sack"));
    assert_eq!(list.package_count(), u64::MAX);

    let line = |name: &str| ReorderLine {
        ingredient: name.to_string(),
        missing_amount: 1e300,
        unit: "g".to_string(),
        packaging: "Sack".to_string(),
        packaging_count: u64::MAX,
    };
    let reorder = Reorder {
        event: None,
        lines: vec![line("Mehl"), line("Zucker")],
    };
    assert_eq!(reorder.package_count(), u64::MAX);
}

#[test]
fn test_missing_recipe_contributes_zero() {
    let selection = Selection::new()
        .with("Burger", SelectedProduct::pieces(10))
        .with("Gulasch", SelectedProduct::pieces(100));

    let list = calculate_shopping_list(
        &burger_book(),
        &IngredientCatalog::new(),
        &selection,
        &ManualEntries::new(),
    );

    assert_eq!(list.len(), 2);
    assert_eq!(list.get("Bun").unwrap().total_amount, 10.0);
    assert_eq!(list.missing_recipes, vec!["Gulasch".to_string()]);
}

#[test]
fn test_packaging_in_other_unit() {
    let book = RecipeBook::new().with("Pommes", Recipe::new().with("Kartoffeln", 250.0));
    let catalog = IngredientCatalog::new().with(
        "Kartoffeln",
        IngredientSpec {
            unit: Unit::Gram,
            packaging: Some(Packaging::new("Sack", 25.0).in_unit(Unit::Kilogram)),
        },
    );
    let selection = Selection::new().with("Pommes", SelectedProduct::pieces(300));

    let list = calculate_shopping_list(&book, &catalog, &selection, &ManualEntries::new());
    let potatoes = list.get("Kartoffeln").unwrap();

    assert_eq!(potatoes.total_amount, 75_000.0);
    assert_eq!(potatoes.unit, "g");
    assert_eq!(potatoes.amount_per_package, 25_000.0);
    assert_eq!(potatoes.packaging_count, 3);
}

#[test]
fn test_empty_inputs() {
    let list = calculate_shopping_list(
        &RecipeBook::new(),
        &IngredientCatalog::new(),
        &Selection::new(),
        &ManualEntries::new(),
    );
    assert!(list.is_empty());
    assert!(!list.has_warnings());
    assert!(extract_ingredient_names(&RecipeBook::new()).is_empty());
}
