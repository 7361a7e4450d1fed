//! Response Templates Configuration
//!
//! Canned replies for help, chitchat and every "nothing resolved" fallback
//! the dispatcher can produce. Templates use `{variable}` placeholders.

use serde::{Deserialize, Serialize};
use showroom_core::ChitchatKind;

use crate::ConfigError;

/// A chitchat trigger family: any pattern matching selects `reply`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChitchatFamily {
    pub kind: ChitchatKind,
    /// Case-insensitive regexes, matched against lowercased text
    pub patterns: Vec<String>,
    pub reply: String,
}

impl ChitchatFamily {
    fn new(kind: ChitchatKind, patterns: &[&str], reply: &str) -> Self {
        Self {
            kind,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            reply: reply.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTemplates {
    pub help: String,
    /// Families in evaluation order; the first match wins
    pub chitchat: Vec<ChitchatFamily>,
    /// Reply when routed to chitchat but no family matches
    pub generic_reply: String,
    pub compare_needs_two: String,
    pub add_not_found: String,
    /// Variables: `{vehicle}`
    pub added_to_collection: String,
    pub no_recommendations: String,
    pub recommendations_lead_in: String,
    pub soft_search_follow_up: String,
    pub no_matches: String,
    /// Variables: `{count}`
    pub matches_found: String,
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self {
            help: "I can help with: \n- \"show hybrid suvs under 30k\"\n- \"compare camry and corolla\"\n- \"recommend me hybrid sedans\"\n- \"add corolla to my garage\"".to_string(),
            chitchat: default_chitchat(),
            generic_reply: "I can help with search, compare, and recommendations. Try \"hybrid suv under 30k\".".to_string(),
            compare_needs_two: "I need two models to compare, e.g., \"compare camry and corolla\".".to_string(),
            add_not_found: "I could not find that model to add. Try \"add corolla to my garage\".".to_string(),
            added_to_collection: "Added {vehicle} to your garage.".to_string(),
            no_recommendations: "No recommendations matched your request.".to_string(),
            recommendations_lead_in: "Here are a few recommendations for you:".to_string(),
            soft_search_follow_up: "Got it — any budget range in mind?".to_string(),
            no_matches: "No matches found. Try relaxing your filters or changing the region.".to_string(),
            matches_found: "Found {count} match(es). Showing top results:".to_string(),
        }
    }
}

fn default_chitchat() -> Vec<ChitchatFamily> {
    vec![
        ChitchatFamily::new(
            ChitchatKind::Greeting,
            &[r"\b(hi|hello|hey|yo|sup|good (morning|afternoon|evening))\b"],
            "Hello! I can help you search models, compare two cars, or suggest options.",
        ),
        ChitchatFamily::new(
            ChitchatKind::Thanks,
            &[r"\b(thanks|thank you|ty|thx|appreciate)\b"],
            "You’re welcome! Anything else I can help you find?",
        ),
        ChitchatFamily::new(
            ChitchatKind::Farewell,
            &[r"\b(bye|goodbye|see (ya|you)|later|cya)\b"],
            "Goodbye! Come back anytime if you need more help.",
        ),
        ChitchatFamily::new(
            ChitchatKind::Affirmation,
            &[r"\b(yes|yeah|yep|yup|sure|ok|okay|sounds good|great|cool)\b"],
            "Great — tell me what you’d like to search or compare.",
        ),
        ChitchatFamily::new(
            ChitchatKind::Negative,
            &[r"\b(no|nope|nah|not now|never ?mind)\b"],
            "No problem. Ask me anytime.",
        ),
        ChitchatFamily::new(
            ChitchatKind::HowAreYou,
            &[r"how are (you|u)", r"how's it going"],
            "Doing well and ready to help with car searches!",
        ),
        ChitchatFamily::new(
            ChitchatKind::WhoAreYou,
            &[r"who are you", r"what are you"],
            "I’m your assistant for car search, comparisons, and recommendations.",
        ),
    ]
}

impl ResponseTemplates {
    /// Substitute `{name}` placeholders
    pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{}}}", key), value);
        }
        result
    }

    /// Reply configured for a chitchat kind, falling back to the generic one
    pub fn chitchat_reply(&self, kind: ChitchatKind) -> &str {
        self.chitchat
            .iter()
            .find(|f| f.kind == kind)
            .map(|f| f.reply.as_str())
            .unwrap_or(self.generic_reply.as_str())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(family) = self.chitchat.iter().find(|f| f.patterns.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "chitchat family {} has no patterns",
                family.kind.as_str()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let defaults = ResponseTemplates::default();
        assert_eq!(
            ResponseTemplates::render(&defaults.added_to_collection, &[("vehicle", "Toyota Corolla LE")]),
            "Added Toyota Corolla LE to your garage."
        );
        assert_eq!(
            ResponseTemplates::render(&defaults.matches_found, &[("count", "12")]),
            "Found 12 match(es). Showing top results:"
        );
    }

    #[test]
    fn test_chitchat_family_order() {
        let kinds: Vec<_> = ResponseTemplates::default()
            .chitchat
            .iter()
            .map(|f| f.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                ChitchatKind::Greeting,
                ChitchatKind::Thanks,
                ChitchatKind::Farewell,
                ChitchatKind::Affirmation,
                ChitchatKind::Negative,
                ChitchatKind::HowAreYou,
                ChitchatKind::WhoAreYou,
            ]
        );
    }

    #[test]
    fn test_generic_fallback_reply() {
        let templates = ResponseTemplates::default();
        assert_eq!(
            templates.chitchat_reply(ChitchatKind::Generic),
            templates.generic_reply
        );
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "help: \"Ask me about cars\"\n";
        let templates: ResponseTemplates = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(templates.help, "Ask me about cars");
        assert_eq!(templates.chitchat.len(), 7);
    }
}
