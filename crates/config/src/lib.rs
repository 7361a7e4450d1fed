//! Showroom Configuration
//!
//! Lexicon tables, intent triggers, response templates and ranking weights
//! for the showroom assistant. All of it has built-in defaults;
//! [`AssistantConfig::load`] layers a config file on top.

pub mod constants;
mod error;
pub mod intents;
pub mod lexicon;
pub mod responses;
pub mod settings;

pub use error::ConfigError;
pub use intents::IntentConfig;
pub use lexicon::{KeywordEntry, LexiconConfig};
pub use responses::{ChitchatFamily, ResponseTemplates};
pub use settings::{AssistantConfig, RankingConfig, SearchConfig};
