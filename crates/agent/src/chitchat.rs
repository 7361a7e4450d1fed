//! Chitchat Responder
//!
//! Ordered regex families mapped to canned replies. Families are tried top
//! to bottom; the first with a matching pattern wins. Routing to chitchat
//! always ends in exactly one reply, the generic one if nothing matched.

use regex::Regex;
use showroom_config::ResponseTemplates;
use showroom_core::ChitchatKind;

use crate::error::{compile_pattern, AgentError};

#[derive(Debug, Clone)]
struct CompiledFamily {
    kind: ChitchatKind,
    patterns: Vec<Regex>,
    reply: String,
}

#[derive(Debug, Clone)]
pub struct ChitchatResponder {
    families: Vec<CompiledFamily>,
    generic_reply: String,
}

impl ChitchatResponder {
    pub fn from_config(templates: &ResponseTemplates) -> Result<Self, AgentError> {
        let families = templates
            .chitchat
            .iter()
            .map(|family| {
                let context = format!("chitchat {}", family.kind.as_str());
                let patterns = family
                    .patterns
                    .iter()
                    .map(|p| compile_pattern(&context, p))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CompiledFamily {
                    kind: family.kind,
                    patterns,
                    reply: family.reply.clone(),
                })
            })
            .collect::<Result<Vec<_>, AgentError>>()?;

        Ok(Self {
            families,
            generic_reply: templates.generic_reply.clone(),
        })
    }

    /// First family with a matching pattern
    pub fn classify(&self, text: &str) -> Option<ChitchatKind> {
        let lower = text.to_lowercase();
        self.families
            .iter()
            .find(|f| f.patterns.iter().any(|re| re.is_match(&lower)))
            .map(|f| f.kind)
    }

    pub fn reply(&self, kind: Option<ChitchatKind>) -> &str {
        kind.and_then(|kind| self.families.iter().find(|f| f.kind == kind))
            .map(|f| f.reply.as_str())
            .unwrap_or(self.generic_reply.as_str())
    }

    /// Classify and reply in one step
    pub fn respond(&self, text: &str) -> &str {
        self.reply(self.classify(text))
    }
}
