//! Assistant facade
//!
//! Compiles the parser and dispatcher once from an [`AssistantConfig`] and
//! exposes the text-in, envelope-out interface.

use std::path::Path;

use showroom_config::AssistantConfig;
use showroom_core::{
    CollectionSink, Dispatched, Filters, ParsedCommand, ResponseEnvelope, VehicleRecord,
};

use crate::dispatcher::Dispatcher;
use crate::error::AgentError;
use crate::parser::CommandParser;

/// Stateless command interpreter; safe to share across threads
#[derive(Debug, Clone)]
pub struct Assistant {
    parser: CommandParser,
    dispatcher: Dispatcher,
}

impl Assistant {
    pub fn new(config: AssistantConfig) -> Result<Self, AgentError> {
        config.validate()?;
        Ok(Self {
            parser: CommandParser::new(&config)?,
            dispatcher: Dispatcher::new(&config)?,
        })
    }

    /// Load the config file at `path` and compile it
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self, AgentError> {
        Self::new(AssistantConfig::load(path)?)
    }

    pub fn parser(&self) -> &CommandParser {
        &self.parser
    }

    pub fn interpret(&self, text: &str) -> ParsedCommand {
        self.parser.parse(text)
    }

    /// Interpret and dispatch, leaving any side effect to the caller
    pub fn respond(&self, text: &str, catalog: &[VehicleRecord]) -> Dispatched {
        let command = self.interpret(text);
        self.dispatcher.dispatch(&command, catalog)
    }

    /// Interpret, dispatch and apply the side effect to `sink` when given
    pub fn handle(
        &self,
        text: &str,
        catalog: &[VehicleRecord],
        sink: Option<&mut dyn CollectionSink>,
    ) -> ResponseEnvelope {
        let dispatched = self.respond(text, catalog);
        match sink {
            Some(sink) => dispatched.apply(sink),
            None => {
                if dispatched.effect.is_some() {
                    tracing::warn!("No collection sink given; side effect dropped");
                }
                dispatched.envelope
            }
        }
    }

    /// Execute a `search` envelope's filters against the catalog
    pub fn execute_search(&self, filters: &Filters, catalog: &[VehicleRecord]) -> ResponseEnvelope {
        self.dispatcher.execute_search(filters, catalog)
    }
}
