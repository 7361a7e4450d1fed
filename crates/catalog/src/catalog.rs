//! Catalog snapshot
//!
//! The interpreter never fetches vehicles itself. Callers hand it a resident
//! slice, or load one of these from the dealership JSON export.

use std::io::Read;

use showroom_core::VehicleRecord;

use crate::CatalogError;

/// Ordered, read-only set of vehicles. Order is the catalog's own and is
/// what every stable sort falls back to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    vehicles: Vec<VehicleRecord>,
}

impl Catalog {
    pub fn new(vehicles: Vec<VehicleRecord>) -> Self {
        Self { vehicles }
    }

    /// Parse a JSON array of vehicle records
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let vehicles: Vec<VehicleRecord> = serde_json::from_str(json)?;
        Self::checked(vehicles)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let vehicles: Vec<VehicleRecord> = serde_json::from_reader(reader)?;
        Self::checked(vehicles)
    }

    fn checked(vehicles: Vec<VehicleRecord>) -> Result<Self, CatalogError> {
        for vehicle in &vehicles {
            if vehicle.id.trim().is_empty() {
                return Err(CatalogError::InvalidRecord {
                    id: vehicle.id.clone(),
                    reason: "empty id".to_string(),
                });
            }
            if !vehicle.msrp.is_finite() || vehicle.msrp < 0.0 {
                return Err(CatalogError::InvalidRecord {
                    id: vehicle.id.clone(),
                    reason: format!("msrp must be a non-negative number, got {}", vehicle.msrp),
                });
            }
        }

        tracing::debug!(vehicles = vehicles.len(), "Loaded catalog");
        Ok(Self { vehicles })
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn get(&self, id: &str) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl From<Vec<VehicleRecord>> for Catalog {
    fn from(vehicles: Vec<VehicleRecord>) -> Self {
        Self::new(vehicles)
    }
}

impl AsRef<[VehicleRecord]> for Catalog {
    fn as_ref(&self) -> &[VehicleRecord] {
        &self.vehicles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_core::{BodyType, Region};

    const EXPORT: &str = r#"[
        {
            "id": "corolla-le-us-2025",
            "name": "Toyota Corolla",
            "trim": "LE",
            "modelCode": "COROLLA",
            "year": 2025,
            "region": "US",
            "currency": "USD",
            "series": "Sedan",
            "drivetrain": "FWD",
            "powertrain": "Gas",
            "msrp": 22050,
            "efficiency": { "city_mpg": 32, "hwy_mpg": 41 },
            "inventory": { "inStock": 12 }
        },
        {
            "id": "bz4x-xle-ca-2025",
            "name": "Toyota bZ4X",
            "year": 2025,
            "region": "Canada",
            "series": "EV",
            "drivetrain": "AWD",
            "powertrain": "Electric",
            "msrp": 47000
        }
    ]"#;

    #[test]
    fn test_load_export_format() {
        let catalog = Catalog::from_json(EXPORT).unwrap();
        assert_eq!(catalog.len(), 2);

        let corolla = &catalog.vehicles()[0];
        assert_eq!(corolla.display_name, "Toyota Corolla");
        assert_eq!(corolla.model_code.as_deref(), Some("COROLLA"));
        assert_eq!(corolla.body_type, BodyType::Sedan);
        assert_eq!(corolla.efficiency.mpg_sum(), 73.0);
        assert_eq!(corolla.inventory.in_stock, 12);
    }

    #[test]
    fn test_missing_efficiency_and_inventory_default_to_zero() {
        let catalog = Catalog::from_json(EXPORT).unwrap();
        let ev = catalog.get("bz4x-xle-ca-2025").unwrap();
        assert_eq!(ev.region, Region::Canada);
        assert_eq!(ev.efficiency.mpg_sum(), 0.0);
        assert_eq!(ev.inventory.in_stock, 0);
        assert_eq!(ev.currency, "USD");
    }

    #[test]
    fn test_from_reader() {
        let catalog = Catalog::from_reader(EXPORT.as_bytes()).unwrap();
        assert!(catalog.get("corolla-le-us-2025").is_some());
    }

    #[test]
    fn test_negative_msrp_rejected() {
        let json = r#"[{"id":"x","name":"X","year":2025,"region":"US","series":"SUV","drivetrain":"AWD","powertrain":"Gas","msrp":-1}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Parse(_))));
    }
}
