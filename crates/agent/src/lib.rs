//! Showroom Agent
//!
//! Turns free-form text into a structured result against a vehicle catalog:
//!
//! - [`CommandParser`]: normalization, entity extraction, filter assembly
//! - [`IntentRules`]: the ordered rule table that picks the action
//! - [`ChitchatResponder`]: canned conversational replies
//! - [`Dispatcher`]: catalog query, comparison, ranking and side effects
//! - [`Assistant`]: all of the above behind one facade
//!
//! # Example
//!
//! ```ignore
//! use showroom_agent::Assistant;
//! use showroom_config::AssistantConfig;
//! use showroom_core::InMemoryCollection;
//!
//! let assistant = Assistant::new(AssistantConfig::default())?;
//! let mut garage = InMemoryCollection::new();
//! let envelope = assistant.handle("add corolla to my garage", catalog.vehicles(), Some(&mut garage));
//! ```

pub mod assistant;
pub mod chitchat;
pub mod dispatcher;
mod error;
pub mod intent;
pub mod parser;

pub use assistant::Assistant;
pub use chitchat::ChitchatResponder;
pub use dispatcher::{search_summary, Dispatcher};
pub use error::AgentError;
pub use intent::{IntentRule, IntentRules, RuleInput, RulePredicate};
pub use parser::CommandParser;
