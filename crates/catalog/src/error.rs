//! Catalog errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog record {id:?}: {reason}")]
    InvalidRecord { id: String, reason: String },
}
