use std::path::Path;

use crate::error::Result;
use crate::models::ShoppingList;

/// Round to `decimals` places for output.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write the shopping list as CSV, one row per ingredient in name order.
pub fn write_csv(list: &ShoppingList, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "ingredient",
        "total_amount",
        "unit",
        "packaging",
        "packaging_count",
        "amount_per_package",
    ])?;

    for (name, item) in &list.items {
        wtr.write_record([
            name.clone(),
            truncate(item.total_amount, 3).to_string(),
            item.unit.clone(),
            item.packaging.clone(),
            item.packaging_count.to_string(),
            truncate(item.amount_per_package, 3).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the full shopping list, warnings included, as pretty JSON.
pub fn write_json(list: &ShoppingList, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(list)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CalculatedIngredient;
    use tempfile::TempDir;

    fn list() -> ShoppingList {
        let mut list = ShoppingList::default();
        list.items.insert(
            "Patty".to_string(),
            CalculatedIngredient {
                total_amount: 50.0,
                unit: "pcs".to_string(),
                packaging: "pcs".to_string(),
                packaging_count: 1,
                amount_per_package: 50.0,
            },
        );
        list.items.insert(
            "Bun".to_string(),
            CalculatedIngredient {
                total_amount: 50.0,
                unit: "pcs".to_string(),
                packaging: "Beutel".to_string(),
                packaging_count: 5,
                amount_per_package: 12.0,
            },
        );
        list.unpackaged.push("Patty".to_string());
        list
    }

    #[test]
    fn test_csv_rows_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.csv");
        write_csv(&list(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ingredient,total_amount,unit,packaging,packaging_count,amount_per_package",
                "Bun,50,pcs,Beutel,5,12",
                "Patty,50,pcs,pcs,1,50",
            ]
        );
    }

    #[test]
    fn test_json_uses_camel_case() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.json");
        write_json(&list(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["items"]["Bun"]["packagingCount"], 5);
        assert_eq!(value["unpackaged"][0], "Patty");
    }
}
