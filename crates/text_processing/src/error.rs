//! Text processing errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntityError {
    #[error("Invalid {table} keyword {keyword:?}: {source}")]
    InvalidKeyword {
        table: &'static str,
        keyword: String,
        #[source]
        source: regex::Error,
    },
}
