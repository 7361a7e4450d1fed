//! Intent Classification
//!
//! One ordered rule table decides the action for a command. Rules are
//! evaluated top to bottom and the first match wins; when nothing matches
//! the command is a search.
//!
//! | # | rule | action |
//! |---|------|--------|
//! | 1 | help trigger | `help` |
//! | 2 | add/save ... garage/collection | `add_to_collection` |
//! | 3 | "recommend" | `recommend` |
//! | 4 | parser saw compare/vs | `compare` |
//! | 5 | chitchat family matched and no entity extracted | `chitchat` |
//! | - | otherwise | `search` |

use regex::Regex;
use showroom_config::IntentConfig;
use showroom_core::{Action, ChitchatKind, Filters};

use crate::error::{compile_pattern, AgentError};

/// Condition a rule checks against one command
#[derive(Debug, Clone)]
pub enum RulePredicate {
    /// Any of the patterns matches the text
    AnyPattern(Vec<Regex>),
    /// The parser's base action equals this one
    BaseAction(Action),
    /// A chitchat family matched and every filter is empty
    ChitchatOnly,
}

#[derive(Debug, Clone)]
pub struct IntentRule {
    pub name: &'static str,
    pub predicate: RulePredicate,
    pub action: Action,
}

/// What the rules see for one command
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub text: &'a str,
    pub base_action: Action,
    pub filters: &'a Filters,
    pub chitchat: Option<ChitchatKind>,
}

impl IntentRule {
    pub fn matches(&self, input: &RuleInput<'_>) -> bool {
        match &self.predicate {
            RulePredicate::AnyPattern(patterns) => patterns.iter().any(|re| re.is_match(input.text)),
            RulePredicate::BaseAction(action) => input.base_action == *action,
            RulePredicate::ChitchatOnly => input.chitchat.is_some() && input.filters.is_empty(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntentRules {
    rules: Vec<IntentRule>,
}

fn any_pattern(context: &str, patterns: &[String]) -> Result<RulePredicate, AgentError> {
    patterns
        .iter()
        .map(|p| compile_pattern(context, p))
        .collect::<Result<Vec<_>, _>>()
        .map(RulePredicate::AnyPattern)
}

impl IntentRules {
    pub fn from_config(config: &IntentConfig) -> Result<Self, AgentError> {
        let rules = vec![
            IntentRule {
                name: "help",
                predicate: any_pattern("help", &config.help)?,
                action: Action::Help,
            },
            IntentRule {
                name: "add_to_collection",
                predicate: any_pattern("add_to_collection", &config.add_to_collection)?,
                action: Action::AddToCollection,
            },
            IntentRule {
                name: "recommend",
                predicate: any_pattern("recommend", &config.recommend)?,
                action: Action::Recommend,
            },
            IntentRule {
                name: "compare",
                predicate: RulePredicate::BaseAction(Action::Compare),
                action: Action::Compare,
            },
            IntentRule {
                name: "chitchat",
                predicate: RulePredicate::ChitchatOnly,
                action: Action::Chitchat,
            },
        ];

        Ok(Self { rules })
    }

    /// The table in evaluation order
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn classify(&self, input: &RuleInput<'_>) -> Action {
        match self.rules.iter().find(|rule| rule.matches(input)) {
            Some(rule) => {
                tracing::debug!(rule = rule.name, action = %rule.action, "Intent rule matched");
                rule.action
            }
            None => Action::Search,
        }
    }
}
