//! Showroom Core
//!
//! Data types shared by every layer of the showroom command interpreter:
//! catalog records, sparse filters, parsed commands, response envelopes and
//! the side effects the caller applies to its own stores.

pub mod collection;
pub mod command;
pub mod filters;
pub mod vehicle;

pub use collection::{CollectionSink, InMemoryCollection};
pub use command::{
    Action, ChitchatKind, Dispatched, EnvelopeType, ParsedCommand, ResponseEnvelope, SideEffect,
};
pub use filters::Filters;
pub use vehicle::{BodyType, Drivetrain, Efficiency, Inventory, Powertrain, Region, VehicleRecord};
