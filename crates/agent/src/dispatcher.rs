//! Dispatcher
//!
//! Routes a [`ParsedCommand`] to the catalog and ranking engines and builds
//! the response envelope. Every branch has a plain-text fallback, so
//! dispatching never fails. Collection changes are returned as a
//! [`SideEffect`] for the caller to apply.

use showroom_catalog::{
    baseline_order, filter, format_thousands, recommend, resolve_model, resolve_models, Comparison,
};
use showroom_config::constants::limits;
use showroom_config::{AssistantConfig, RankingConfig, ResponseTemplates, SearchConfig};
use showroom_core::{
    Action, Dispatched, Filters, ParsedCommand, ResponseEnvelope, SideEffect, VehicleRecord,
};

use crate::chitchat::ChitchatResponder;
use crate::error::AgentError;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    responses: ResponseTemplates,
    ranking: RankingConfig,
    search: SearchConfig,
    chitchat: ChitchatResponder,
}

/// Model tokens of a command: `models`, or the lone `model` if only that is set
fn model_tokens(filters: &Filters) -> Vec<String> {
    if !filters.models.is_empty() {
        filters.models.clone()
    } else {
        filters.model.iter().cloned().collect()
    }
}

/// Human-readable echo of search filters, e.g.
/// "Searching for Hybrid SUV cars under $30,000 in Canada..."
pub fn search_summary(filters: &Filters) -> String {
    let descriptors: Vec<&str> = [
        filters.drivetrain.map(|d| d.as_str()),
        filters.powertrain.map(|p| p.as_str()),
        filters.body_type.map(|b| b.as_str()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut summary = String::from("Searching for ");
    if !descriptors.is_empty() {
        summary.push_str(&descriptors.join(" "));
        summary.push(' ');
    }
    summary.push_str("cars");

    if !filters.models.is_empty() {
        summary.push_str(&format!(" matching {}", filters.models.join(", ")));
    }
    if let Some(max_price) = filters.max_price {
        summary.push_str(&format!(" under ${}", format_thousands(max_price)));
    }
    if let Some(region) = filters.region {
        summary.push_str(&format!(" in {}", region));
    }
    if let Some(year) = filters.year {
        summary.push_str(&format!(" ({})", year));
    }
    summary.push_str("...");
    summary
}

impl Dispatcher {
    pub fn new(config: &AssistantConfig) -> Result<Self, AgentError> {
        Ok(Self {
            responses: config.responses.clone(),
            ranking: config.ranking.clone(),
            search: config.search.clone(),
            chitchat: ChitchatResponder::from_config(&config.responses)?,
        })
    }

    pub fn dispatch(&self, command: &ParsedCommand, catalog: &[VehicleRecord]) -> Dispatched {
        let dispatched = match command.action {
            Action::Help => Dispatched::reply(ResponseEnvelope::text(self.responses.help.clone())),
            Action::Chitchat => {
                Dispatched::reply(ResponseEnvelope::text(self.chitchat.reply(command.chitchat)))
            }
            Action::Compare => self.compare(&command.filters, catalog),
            Action::AddToCollection => self.add_to_collection(&command.filters, catalog),
            Action::Recommend => self.recommend(&command.filters, catalog),
            Action::Search => self.search(&command.filters),
        };

        tracing::info!(
            action = %command.action,
            envelope = ?dispatched.envelope.kind,
            cars = dispatched.envelope.cars.as_ref().map_or(0, Vec::len),
            side_effect = dispatched.effect.is_some(),
            "Dispatched command"
        );
        dispatched
    }

    fn compare(&self, filters: &Filters, catalog: &[VehicleRecord]) -> Dispatched {
        let tokens = model_tokens(filters);
        let pair = resolve_models(catalog, &tokens, limits::COMPARE_COUNT);

        match pair.as_slice() {
            [first, second] => {
                let summary = Comparison::analyze(first, second).summary();
                Dispatched::reply(ResponseEnvelope::compare(
                    summary,
                    vec![(*first).clone(), (*second).clone()],
                ))
            }
            _ => {
                tracing::debug!(tokens = ?tokens, resolved = pair.len(), "Not enough models to compare");
                Dispatched::reply(ResponseEnvelope::text(self.responses.compare_needs_two.clone()))
            }
        }
    }

    fn add_to_collection(&self, filters: &Filters, catalog: &[VehicleRecord]) -> Dispatched {
        let vehicle = model_tokens(filters)
            .iter()
            .find_map(|token| resolve_model(catalog, token));

        match vehicle {
            Some(vehicle) => {
                let label = vehicle.label();
                let message = ResponseTemplates::render(
                    &self.responses.added_to_collection,
                    &[("vehicle", label.as_str())],
                );
                Dispatched::with_effect(
                    ResponseEnvelope::text(message),
                    SideEffect::AddToCollection(vehicle.clone()),
                )
            }
            None => Dispatched::reply(ResponseEnvelope::text(self.responses.add_not_found.clone())),
        }
    }

    fn recommend(&self, filters: &Filters, catalog: &[VehicleRecord]) -> Dispatched {
        let candidates = filter(catalog, filters);
        let ranked = recommend(&candidates, &self.ranking);

        if ranked.is_empty() {
            return Dispatched::reply(ResponseEnvelope::text(self.responses.no_recommendations.clone()));
        }

        let cars = ranked.into_iter().map(|s| s.vehicle.clone()).collect();
        Dispatched::reply(ResponseEnvelope::cars(self.responses.recommendations_lead_in.clone(), cars))
    }

    fn search(&self, filters: &Filters) -> Dispatched {
        if self.search.require_strong_filter && filters.has_soft_filter() && !filters.has_strong_filter() {
            return Dispatched::reply(ResponseEnvelope::text(self.responses.soft_search_follow_up.clone()));
        }

        Dispatched::reply(ResponseEnvelope::search(search_summary(filters), filters.clone()))
    }

    /// Run a search envelope's filters: baseline ordering, top
    /// `preview_limit` vehicles
    pub fn execute_search(&self, filters: &Filters, catalog: &[VehicleRecord]) -> ResponseEnvelope {
        let mut results = filter(catalog, filters);
        if results.is_empty() {
            return ResponseEnvelope::text(self.responses.no_matches.clone());
        }

        baseline_order(&mut results);
        let count = results.len().to_string();
        let message =
            ResponseTemplates::render(&self.responses.matches_found, &[("count", count.as_str())]);
        let cars = results
            .into_iter()
            .take(self.search.preview_limit)
            .cloned()
            .collect();
        ResponseEnvelope::cars(message, cars)
    }
}
