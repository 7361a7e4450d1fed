//! Intent trigger patterns
//!
//! Regexes behind the task rules of the intent table. They are matched
//! case-insensitively against whitespace-normalized text.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn patterns(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|p| p.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentConfig {
    pub help: Vec<String>,
    pub add_to_collection: Vec<String>,
    pub recommend: Vec<String>,
    /// Also decides the parser's base action
    pub compare: Vec<String>,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            help: patterns(&[r"\bhelp\b", r"\bwhat can you do\b"]),
            add_to_collection: patterns(&[r"\b(?:add|save)\b.*\b(?:garage|collection)\b"]),
            recommend: patterns(&[r"recommend"]),
            compare: patterns(&[r"\bcompare\b", r"\bvs\b"]),
        }
    }
}

impl IntentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let groups = [
            ("help", &self.help),
            ("add_to_collection", &self.add_to_collection),
            ("recommend", &self.recommend),
            ("compare", &self.compare),
        ];
        for (name, group) in groups {
            if group.is_empty() || group.iter().any(|p| p.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "intents.{} needs at least one non-empty pattern",
                    name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        assert!(IntentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_group_rejected() {
        let config = IntentConfig {
            recommend: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
