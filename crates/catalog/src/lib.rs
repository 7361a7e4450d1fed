//! Showroom Catalog
//!
//! Everything that reads the vehicle catalog:
//! - Loading catalog snapshots from JSON
//! - Conjunctive filtering ([`query`])
//! - Model token resolution ([`resolve`])
//! - Baseline ordering and recommendation scoring ([`ranking`])
//! - Two-vehicle comparison prose ([`compare`])

pub mod catalog;
pub mod compare;
mod error;
pub mod format;
pub mod query;
pub mod ranking;
pub mod resolve;

pub use catalog::Catalog;
pub use compare::{Audience, Comparison};
pub use error::CatalogError;
pub use format::{format_currency, format_thousands};
pub use query::filter;
pub use ranking::{baseline_order, recommend, recommendation_score, ScoredVehicle};
pub use resolve::{resolve_model, resolve_models};
