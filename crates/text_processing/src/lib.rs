//! Text processing for vehicle commands
//!
//! Features:
//! - Whitespace normalization
//! - Lexicon-driven slot extraction (region, drivetrain, powertrain, body type)
//! - Price ceiling and model year extraction
//! - Known-model detection with a compare-list fallback
//! - Assembly of extracted slots into sparse search filters

pub mod entities;
mod error;
pub mod normalize;

pub use entities::{
    assemble_filters, CompiledLexicon, EntityExtractor, KeywordMatcher, KnownModel,
    VehicleEntities,
};
pub use error::EntityError;
pub use normalize::normalize_whitespace;
