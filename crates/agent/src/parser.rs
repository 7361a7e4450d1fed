//! Command Parser
//!
//! Text in, [`ParsedCommand`] out:
//! normalize -> extract entities -> assemble filters -> classify intent.
//! Every step degrades to "no constraint" rather than failing.

use regex::Regex;
use showroom_config::AssistantConfig;
use showroom_core::{Action, ParsedCommand};
use showroom_text_processing::{assemble_filters, normalize_whitespace, EntityExtractor};

use crate::chitchat::ChitchatResponder;
use crate::error::{compile_pattern, AgentError};
use crate::intent::{IntentRules, RuleInput};

#[derive(Debug, Clone)]
pub struct CommandParser {
    extractor: EntityExtractor,
    compare_patterns: Vec<Regex>,
    rules: IntentRules,
    chitchat: ChitchatResponder,
}

impl CommandParser {
    pub fn new(config: &AssistantConfig) -> Result<Self, AgentError> {
        let compare_patterns = config
            .intents
            .compare
            .iter()
            .map(|p| compile_pattern("compare", p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            extractor: EntityExtractor::new(&config.lexicon)?
                .with_compare_keywords(compare_patterns.clone()),
            compare_patterns,
            rules: IntentRules::from_config(&config.intents)?,
            chitchat: ChitchatResponder::from_config(&config.responses)?,
        })
    }

    pub fn rules(&self) -> &IntentRules {
        &self.rules
    }

    /// `compare` when a compare keyword is present, otherwise `search`
    pub fn base_action(&self, text: &str) -> Action {
        if self.compare_patterns.iter().any(|re| re.is_match(text)) {
            Action::Compare
        } else {
            Action::Search
        }
    }

    pub fn parse(&self, text: &str) -> ParsedCommand {
        let normalized = normalize_whitespace(text);
        let filters = assemble_filters(self.extractor.extract(&normalized));
        let base_action = self.base_action(&normalized);
        let chitchat = self.chitchat.classify(&normalized);

        let action = self.rules.classify(&RuleInput {
            text: &normalized,
            base_action,
            filters: &filters,
            chitchat,
        });

        tracing::debug!(
            text = %normalized,
            action = %action,
            filters = ?filters.present_keys(),
            "Parsed command"
        );

        ParsedCommand {
            action,
            filters,
            chitchat: if action == Action::Chitchat { chitchat } else { None },
        }
    }
}
