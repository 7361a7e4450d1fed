//! Agent errors
//!
//! Only construction can fail. Interpreting text never returns an error.

use showroom_config::ConfigError;
use showroom_text_processing::EntityError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Lexicon error: {0}")]
    Entity(#[from] EntityError),

    #[error("Invalid {context} pattern {pattern:?}: {source}")]
    Pattern {
        context: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Compile a case-insensitive pattern, tagging failures with where it came from
pub(crate) fn compile_pattern(context: &str, pattern: &str) -> Result<regex::Regex, AgentError> {
    regex::Regex::new(&format!("(?i){}", pattern)).map_err(|source| AgentError::Pattern {
        context: context.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}
