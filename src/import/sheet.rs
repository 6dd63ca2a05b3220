use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::calculator::DEFAULT_PRODUCT_UNIT;
use crate::error::{ImportError, Result};
use crate::models::{EventDetails, SelectedProduct, Selection};
use crate::state::parse_product_quantity;

/// First cell of the row separating event details from product rows.
pub const PRODUCTS_MARKER: &str = "Produkte";

/// First cells recognised as the optional header row under the marker.
const HEADER_CELLS: [&str; 3] = ["produkt", "name", "artikel"];

/// An event sheet: the products ordered and the details above them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportedSheet {
    pub products: Selection,
    pub details: EventDetails,
}

/// Import an event sheet exported as CSV.
pub fn import_sheet<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<ImportedSheet> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let sheet = parse_sheet(file, delimiter)?;
    info!(
        path = %path.display(),
        products = sheet.products.len(),
        "Imported event sheet"
    );
    Ok(sheet)
}

/// Parse an event sheet.
///
/// Layout: `key,value` detail rows, a row starting with [`PRODUCTS_MARKER`],
/// an optional header row, then `name,quantity[,unit]` product rows. Blank
/// rows are ignored everywhere. Empty or zero quantities mean "not ordered";
/// other unparseable quantities are clamped to one. Repeated products add up.
pub fn parse_sheet<R: Read>(reader: R, delimiter: u8) -> std::result::Result<ImportedSheet, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut sheet = ImportedSheet::default();
    let mut in_products = false;
    let mut product_rows = 0usize;

    for (index, record) in rdr.records().enumerate() {
        let row = index + 1;
        let record = record.map_err(|source| ImportError::Row { row, source })?;
        let cell = |i: usize| record.get(i).map(str::trim).unwrap_or("");

        let first = cell(0);
        if first.is_empty() {
            continue;
        }

        if !in_products {
            if first.eq_ignore_ascii_case(PRODUCTS_MARKER) {
                in_products = true;
            } else {
                sheet.details.set(first, cell(1));
            }
            continue;
        }

        if product_rows == 0 && HEADER_CELLS.contains(&first.to_lowercase().as_str()) {
            debug!(row, "Skipping product header row");
            continue;
        }
        product_rows += 1;

        let quantity_cell = cell(1);
        let quantity = match quantity_cell.replace(',', ".").parse::<f64>() {
            _ if quantity_cell.is_empty() => 0,
            Ok(n) if n == 0.0 => 0,
            Ok(n) if n > 0.0 => parse_product_quantity(quantity_cell),
            _ => {
                warn!(row, product = first, quantity = quantity_cell, "Unreadable quantity, using 1");
                parse_product_quantity(quantity_cell)
            }
        };
        if quantity == 0 {
            debug!(row, product = first, "Product not ordered");
            continue;
        }

        let unit = match cell(2) {
            "" => DEFAULT_PRODUCT_UNIT,
            unit => unit,
        };
        match sheet.products.get_mut(first) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => sheet.products.insert(first, SelectedProduct::new(quantity, unit)),
        }
    }

    if !in_products {
        return Err(ImportError::MissingProductsMarker);
    }
    if product_rows == 0 {
        return Err(ImportError::NoProducts);
    }
    Ok(sheet)
}
