use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Reasons an event sheet cannot be imported.
///
/// The importer never returns partially parsed data alongside one of these.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("sheet has no \"Produkte\" marker row")]
    MissingProductsMarker,

    #[error("sheet has a \"Produkte\" marker but no product rows after it")]
    NoProducts,

    #[error("unreadable sheet row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, CalcError>;
