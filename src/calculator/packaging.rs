use tracing::warn;

use crate::calculator::constants::PACKAGE_TOLERANCE;
use crate::models::{CalculatedIngredient, IngredientCatalog, Unit};

/// A calculated ingredient and whether it fell back to degenerate packaging.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedIngredient {
    pub item: CalculatedIngredient,
    pub degenerate: bool,
}

/// Minimum whole number of packages holding at least `total`.
///
/// Non-positive totals need no packages. A non-positive package size is
/// degenerate: everything fits into a single package. Counts beyond
/// `u64::MAX` saturate and are logged.
pub fn packages_needed(total: f64, per_package: f64) -> u64 {
    if !(total > 0.0) {
        return 0;
    }
    if !(per_package > 0.0) {
        return 1;
    }
    let ratio = total / per_package;
    let nearest = ratio.round();
    let packages = if (ratio - nearest).abs() <= nearest * PACKAGE_TOLERANCE {
        nearest.max(1.0)
    } else {
        ratio.ceil()
    };
    if packages.is_finite() && packages < u64::MAX as f64 {
        packages as u64
    } else {
        warn!(total, per_package, "Package count exceeds u64, saturating");
        u64::MAX
    }
}

/// Package `total` of `ingredient` according to the catalog.
///
/// The packaging size is converted into the ingredient's unit first. Missing
/// packaging, a non-positive size, or incompatible units all degrade to one
/// package whose size equals the total.
pub fn package_ingredient(
    ingredient: &str,
    total: f64,
    catalog: &IngredientCatalog,
) -> PackedIngredient {
    let total = if total.is_finite() { total.max(0.0) } else { 0.0 };
    let unit = catalog.unit_of(ingredient);

    let Some(packaging) = catalog.packaging_of(ingredient) else {
        return degenerate(total, &unit);
    };

    let packaging_unit = packaging.unit.as_ref().unwrap_or(&unit);
    match packaging_unit.convert(packaging.size, &unit) {
        Some(size) if size.is_finite() && size > 0.0 => PackedIngredient {
            item: CalculatedIngredient {
                total_amount: total,
                unit: unit.to_string(),
                packaging: packaging.name.clone(),
                packaging_count: packages_needed(total, size),
                amount_per_package: size,
            },
            degenerate: false,
        },
        Some(size) => {
            warn!(ingredient, size, "Packaging size is not positive, using degenerate packaging");
            degenerate(total, &unit)
        }
        None => {
            warn!(
                ingredient,
                from = %packaging_unit,
                to = %unit,
                "Packaging unit cannot be converted, using degenerate packaging"
            );
            degenerate(total, &unit)
        }
    }
}

fn degenerate(total: f64, unit: &Unit) -> PackedIngredient {
    PackedIngredient {
        item: CalculatedIngredient {
            total_amount: total,
            unit: unit.to_string(),
            packaging: unit.to_string(),
            packaging_count: if total > 0.0 { 1 } else { 0 },
            amount_per_package: total,
        },
        degenerate: true,
    }
}
