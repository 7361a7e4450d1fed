//! Vehicle Catalog Records
//!
//! Read-only catalog entries and the canonical enums the lexicons map onto.
//! Field aliases accept the catalog format produced by the dealership data
//! generator (`name`, `series`, `modelCode`, `city_mpg`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sales region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "US")]
    Us,
    Canada,
    #[serde(rename = "EU")]
    Eu,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Canada => "Canada",
            Region::Eu => "EU",
        }
    }
}

/// Body style (the catalog calls this "series")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    #[serde(rename = "SUV")]
    Suv,
    Sedan,
    Truck,
    Crossover,
    Performance,
    Coupe,
    Hatchback,
    Minivan,
    Hybrid,
    #[serde(rename = "EV")]
    Ev,
    Hydrogen,
}

impl BodyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Suv => "SUV",
            BodyType::Sedan => "Sedan",
            BodyType::Truck => "Truck",
            BodyType::Crossover => "Crossover",
            BodyType::Performance => "Performance",
            BodyType::Coupe => "Coupe",
            BodyType::Hatchback => "Hatchback",
            BodyType::Minivan => "Minivan",
            BodyType::Hybrid => "Hybrid",
            BodyType::Ev => "EV",
            BodyType::Hydrogen => "Hydrogen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Drivetrain {
    #[serde(rename = "FWD")]
    Fwd,
    #[serde(rename = "RWD")]
    Rwd,
    #[serde(rename = "AWD")]
    Awd,
    #[serde(rename = "4x4")]
    FourByFour,
}

impl Drivetrain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Drivetrain::Fwd => "FWD",
            Drivetrain::Rwd => "RWD",
            Drivetrain::Awd => "AWD",
            Drivetrain::FourByFour => "4x4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Powertrain {
    Gas,
    Hybrid,
    #[serde(rename = "Plug-in Hybrid")]
    PluginHybrid,
    Electric,
    #[serde(rename = "Fuel Cell")]
    FuelCell,
    #[serde(rename = "Hybrid i-FORCE MAX")]
    HybridIForceMax,
}

impl Powertrain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Powertrain::Gas => "Gas",
            Powertrain::Hybrid => "Hybrid",
            Powertrain::PluginHybrid => "Plug-in Hybrid",
            Powertrain::Electric => "Electric",
            Powertrain::FuelCell => "Fuel Cell",
            Powertrain::HybridIForceMax => "Hybrid i-FORCE MAX",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Region, BodyType, Drivetrain, Powertrain);

/// Fuel economy. Electric vehicles carry range data instead, so both
/// figures default to zero when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Efficiency {
    #[serde(default, alias = "city_mpg")]
    pub city_mpg: f64,
    #[serde(default, alias = "hwy_mpg")]
    pub hwy_mpg: f64,
}

impl Efficiency {
    /// Combined city + highway figure used by comparison and scoring
    pub fn mpg_sum(&self) -> f64 {
        self.city_mpg + self.hwy_mpg
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    #[serde(default, alias = "in_stock")]
    pub in_stock: u32,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Immutable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    #[serde(alias = "name")]
    pub display_name: String,
    #[serde(default)]
    pub trim: String,
    #[serde(default, alias = "model_code", skip_serializing_if = "Option::is_none")]
    pub model_code: Option<String>,
    pub year: i32,
    pub region: Region,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(alias = "series")]
    pub body_type: BodyType,
    pub drivetrain: Drivetrain,
    pub powertrain: Powertrain,
    #[serde(default)]
    pub msrp: f64,
    #[serde(default)]
    pub efficiency: Efficiency,
    #[serde(default)]
    pub inventory: Inventory,
}

impl VehicleRecord {
    /// "Toyota Camry XLE" style label used in generated messages
    pub fn label(&self) -> String {
        format!("{} {}", self.display_name, self.trim).trim().to_string()
    }

    /// Lowercase text that model tokens are matched against
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {}",
            self.display_name,
            self.trim,
            self.model_code.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }
}
