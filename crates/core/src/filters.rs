//! Sparse search filters
//!
//! A key is present only when an extractor matched it. Absent keys impose
//! no constraint.

use serde::{Deserialize, Serialize};

use crate::vehicle::{BodyType, Drivetrain, Powertrain, Region};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    /// Model mentions, deduped, in first-seen order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<String>,
    /// First of `models`, for callers that only need one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drivetrain: Option<Drivetrain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powertrain: Option<Powertrain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<BodyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Filters {
    /// True when no extractor matched anything
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
            && self.max_price.is_none()
            && self.drivetrain.is_none()
            && self.powertrain.is_none()
            && self.body_type.is_none()
            && self.region.is_none()
            && self.year.is_none()
    }

    /// Price, region or year: enough to narrow a search meaningfully
    pub fn has_strong_filter(&self) -> bool {
        self.max_price.is_some() || self.region.is_some() || self.year.is_some()
    }

    /// Powertrain or body type: cosmetic on their own
    pub fn has_soft_filter(&self) -> bool {
        self.powertrain.is_some() || self.body_type.is_some()
    }

    /// Names of the keys that are set, in declaration order
    pub fn present_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if !self.models.is_empty() {
            keys.push("models");
            keys.push("model");
        }
        if self.max_price.is_some() {
            keys.push("maxPrice");
        }
        if self.drivetrain.is_some() {
            keys.push("drivetrain");
        }
        if self.powertrain.is_some() {
            keys.push("powertrain");
        }
        if self.body_type.is_some() {
            keys.push("bodyType");
        }
        if self.region.is_some() {
            keys.push("region");
        }
        if self.year.is_some() {
            keys.push("year");
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_serialize_to_empty_object() {
        let filters = Filters::default();
        assert!(filters.is_empty());
        assert_eq!(serde_json::to_string(&filters).unwrap(), "{}");
    }

    #[test]
    fn test_only_present_keys_serialized() {
        let filters = Filters {
            max_price: Some(30000.0),
            body_type: Some(BodyType::Suv),
            ..Default::default()
        };

        let value = serde_json::to_value(&filters).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["maxPrice"], 30000.0);
        assert_eq!(obj["bodyType"], "SUV");
        assert_eq!(filters.present_keys(), vec!["maxPrice", "bodyType"]);
    }

    #[test]
    fn test_strong_and_soft() {
        let soft = Filters {
            powertrain: Some(Powertrain::Hybrid),
            ..Default::default()
        };
        assert!(soft.has_soft_filter());
        assert!(!soft.has_strong_filter());

        let strong = Filters {
            region: Some(Region::Canada),
            ..soft
        };
        assert!(strong.has_strong_filter());
    }
}
