//! Parsed commands, response envelopes and side effects

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::collection::CollectionSink;
use crate::filters::Filters;
use crate::vehicle::VehicleRecord;

/// The high-level operation a command requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    #[default]
    Search,
    Compare,
    Recommend,
    AddToCollection,
    Help,
    Chitchat,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Search => "search",
            Action::Compare => "compare",
            Action::Recommend => "recommend",
            Action::AddToCollection => "add_to_collection",
            Action::Help => "help",
            Action::Chitchat => "chitchat",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversational reply families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChitchatKind {
    Greeting,
    Thanks,
    Farewell,
    Affirmation,
    Negative,
    HowAreYou,
    WhoAreYou,
    Generic,
}

impl ChitchatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChitchatKind::Greeting => "greeting",
            ChitchatKind::Thanks => "thanks",
            ChitchatKind::Farewell => "farewell",
            ChitchatKind::Affirmation => "affirmation",
            ChitchatKind::Negative => "negative",
            ChitchatKind::HowAreYou => "how_are_you",
            ChitchatKind::WhoAreYou => "who_are_you",
            ChitchatKind::Generic => "generic",
        }
    }
}

/// Result of interpreting one line of user text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub action: Action,
    pub filters: Filters,
    /// Reply family when `action` is chitchat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chitchat: Option<ChitchatKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeType {
    Text,
    Cars,
    Compare,
    Search,
}

/// What the presentation layer renders for one command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "type")]
    pub kind: EnvelopeType,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cars: Option<Vec<VehicleRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filters>,
}

impl ResponseEnvelope {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            kind: EnvelopeType::Text,
            message: message.into(),
            cars: None,
            filters: None,
        }
    }

    pub fn cars(message: impl Into<String>, cars: Vec<VehicleRecord>) -> Self {
        Self {
            kind: EnvelopeType::Cars,
            message: message.into(),
            cars: Some(cars),
            filters: None,
        }
    }

    pub fn compare(message: impl Into<String>, cars: Vec<VehicleRecord>) -> Self {
        Self {
            kind: EnvelopeType::Compare,
            message: message.into(),
            cars: Some(cars),
            filters: None,
        }
    }

    pub fn search(message: impl Into<String>, filters: Filters) -> Self {
        Self {
            kind: EnvelopeType::Search,
            message: message.into(),
            cars: None,
            filters: Some(filters),
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == EnvelopeType::Text
    }
}

/// Mutation the caller should apply to its own store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "vehicle", rename_all = "snake_case")]
pub enum SideEffect {
    AddToCollection(VehicleRecord),
}

/// Dispatcher output: the envelope plus any pending side effect
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    pub envelope: ResponseEnvelope,
    pub effect: Option<SideEffect>,
}

impl Dispatched {
    pub fn reply(envelope: ResponseEnvelope) -> Self {
        Self {
            envelope,
            effect: None,
        }
    }

    pub fn with_effect(envelope: ResponseEnvelope, effect: SideEffect) -> Self {
        Self {
            envelope,
            effect: Some(effect),
        }
    }

    /// Apply the pending effect (if any) to `sink` and hand back the envelope
    pub fn apply(self, sink: &mut dyn CollectionSink) -> ResponseEnvelope {
        if let Some(SideEffect::AddToCollection(vehicle)) = &self.effect {
            tracing::debug!(vehicle_id = %vehicle.id, "Applying add-to-collection effect");
            sink.add_to_collection(vehicle);
        }
        self.envelope
    }
}
