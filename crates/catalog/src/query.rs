//! Catalog Query Engine
//!
//! Conjunctive filtering over catalog records. Absent filter keys impose no
//! constraint; output keeps catalog order.

use showroom_core::{Filters, VehicleRecord};

/// True when `vehicle` satisfies every present key of `filters`.
///
/// Model tokens are not a query constraint; they are resolved separately
/// (see [`crate::resolve`]).
pub fn matches(vehicle: &VehicleRecord, filters: &Filters) -> bool {
    filters.region.map_or(true, |r| vehicle.region == r)
        && filters.body_type.map_or(true, |b| vehicle.body_type == b)
        && filters.powertrain.map_or(true, |p| vehicle.powertrain == p)
        && filters.drivetrain.map_or(true, |d| vehicle.drivetrain == d)
        && filters.year.map_or(true, |y| vehicle.year == y)
        && filters.max_price.map_or(true, |max| vehicle.msrp <= max)
}

/// Vehicles matching `filters`, in catalog order
pub fn filter<'a>(catalog: &'a [VehicleRecord], filters: &Filters) -> Vec<&'a VehicleRecord> {
    let results: Vec<_> = catalog.iter().filter(|v| matches(v, filters)).collect();

    tracing::debug!(
        catalog = catalog.len(),
        matched = results.len(),
        filters = ?filters.present_keys(),
        "Filtered catalog"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::vehicle;
    use showroom_core::{BodyType, Drivetrain, Powertrain, Region};

    fn catalog() -> Vec<VehicleRecord> {
        vec![
            vehicle("rav4-hybrid-ca", "Toyota RAV4", BodyType::Suv, Powertrain::Hybrid, 29500.0),
            vehicle("camry-us", "Toyota Camry", BodyType::Sedan, Powertrain::Hybrid, 28400.0),
            vehicle("highlander-us", "Toyota Highlander", BodyType::Suv, Powertrain::Gas, 39000.0),
            vehicle("corolla-cross-us", "Toyota Corolla Cross", BodyType::Suv, Powertrain::Hybrid, 28500.0),
        ]
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let catalog = catalog();
        assert_eq!(filter(&catalog, &Filters::default()).len(), 4);
    }

    #[test]
    fn test_conjunctive_and_ordered() {
        let catalog = catalog();
        let filters = Filters {
            body_type: Some(BodyType::Suv),
            powertrain: Some(Powertrain::Hybrid),
            max_price: Some(30000.0),
            ..Default::default()
        };
        let ids: Vec<_> = filter(&catalog, &filters).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["rav4-hybrid-ca", "corolla-cross-us"]);
    }

    #[test]
    fn test_max_price_is_inclusive() {
        let catalog = catalog();
        let filters = Filters {
            max_price: Some(28400.0),
            ..Default::default()
        };
        let ids: Vec<_> = filter(&catalog, &filters).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["camry-us"]);
    }

    #[test]
    fn test_exact_match_fields() {
        let mut catalog = catalog();
        catalog[0].region = Region::Canada;
        catalog[0].drivetrain = Drivetrain::Awd;
        catalog[0].year = 2024;

        let filters = Filters {
            region: Some(Region::Canada),
            drivetrain: Some(Drivetrain::Awd),
            year: Some(2024),
            ..Default::default()
        };
        let results = filter(&catalog, &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "rav4-hybrid-ca");
    }

    #[test]
    fn test_model_tokens_do_not_constrain() {
        let catalog = catalog();
        let filters = Filters {
            models: vec!["Prius".to_string()],
            model: Some("Prius".to_string()),
            ..Default::default()
        };
        assert_eq!(filter(&catalog, &filters).len(), 4);
    }
}
