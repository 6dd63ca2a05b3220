mod sheet;

pub use sheet::{import_sheet, parse_sheet, ImportedSheet, PRODUCTS_MARKER};
