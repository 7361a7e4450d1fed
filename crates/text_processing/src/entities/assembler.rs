//! Filter assembly
//!
//! Folds extractor output into the sparse [`Filters`] map the dispatcher
//! and catalog query consume.

use showroom_core::Filters;

use super::VehicleEntities;

/// Keys are set only for slots an extractor filled
pub fn assemble_filters(entities: VehicleEntities) -> Filters {
    let model = entities.models.first().cloned();

    Filters {
        models: entities.models,
        model,
        max_price: entities.max_price,
        drivetrain: entities.drivetrain,
        powertrain: entities.powertrain,
        body_type: entities.body_type,
        region: entities.region,
        year: entities.year,
    }
}
