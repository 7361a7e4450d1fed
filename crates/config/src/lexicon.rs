//! Lexicon Configuration
//!
//! Ordered keyword → canonical value tables plus the list of known model
//! names. Table order is significant: extractors scan keywords top to bottom
//! and the first match wins, so multi-word phrases that share a word with a
//! shorter keyword ("plug-in hybrid" vs "hybrid") must come first.

use serde::{Deserialize, Serialize};
use showroom_core::{BodyType, Drivetrain, Powertrain, Region};

use crate::ConfigError;

/// One row of a lexicon table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry<T> {
    /// Lowercase surface keyword, matched on word boundaries
    pub keyword: String,
    /// Canonical value the keyword maps to
    pub value: T,
}

impl<T> KeywordEntry<T> {
    pub fn new(keyword: impl Into<String>, value: T) -> Self {
        Self {
            keyword: keyword.into(),
            value,
        }
    }
}

fn table<T: Copy>(rows: &[(&str, T)]) -> Vec<KeywordEntry<T>> {
    rows.iter().map(|(k, v)| KeywordEntry::new(*k, *v)).collect()
}

/// Keyword tables and model list used by the entity extractors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default = "default_regions")]
    pub regions: Vec<KeywordEntry<Region>>,
    #[serde(default = "default_drivetrains")]
    pub drivetrains: Vec<KeywordEntry<Drivetrain>>,
    #[serde(default = "default_powertrains")]
    pub powertrains: Vec<KeywordEntry<Powertrain>>,
    #[serde(default = "default_body_types")]
    pub body_types: Vec<KeywordEntry<BodyType>>,
    /// Model names as they should be reported (multi-word names allowed)
    #[serde(default = "default_known_models")]
    pub known_models: Vec<String>,
}

fn default_regions() -> Vec<KeywordEntry<Region>> {
    table(&[
        ("us", Region::Us),
        ("usa", Region::Us),
        ("united states", Region::Us),
        ("america", Region::Us),
        ("canada", Region::Canada),
        ("ca", Region::Canada),
        ("eu", Region::Eu),
        ("europe", Region::Eu),
    ])
}

fn default_drivetrains() -> Vec<KeywordEntry<Drivetrain>> {
    table(&[
        ("awd", Drivetrain::Awd),
        ("all-wheel", Drivetrain::Awd),
        ("all wheel", Drivetrain::Awd),
        ("4x4", Drivetrain::FourByFour),
        ("4wd", Drivetrain::FourByFour),
        ("fwd", Drivetrain::Fwd),
        ("front-wheel", Drivetrain::Fwd),
        ("front wheel", Drivetrain::Fwd),
        ("rwd", Drivetrain::Rwd),
        ("rear-wheel", Drivetrain::Rwd),
        ("rear wheel", Drivetrain::Rwd),
    ])
}

fn default_powertrains() -> Vec<KeywordEntry<Powertrain>> {
    table(&[
        ("plug-in hybrid", Powertrain::PluginHybrid),
        ("plug in hybrid", Powertrain::PluginHybrid),
        ("phev", Powertrain::PluginHybrid),
        ("hybrid", Powertrain::Hybrid),
        ("gas", Powertrain::Gas),
        ("gasoline", Powertrain::Gas),
        ("petrol", Powertrain::Gas),
        ("battery electric", Powertrain::Electric),
        ("electric", Powertrain::Electric),
        ("ev", Powertrain::Electric),
        ("fuel cell", Powertrain::FuelCell),
        ("hydrogen", Powertrain::FuelCell),
    ])
}

fn default_body_types() -> Vec<KeywordEntry<BodyType>> {
    table(&[
        ("suv", BodyType::Suv),
        ("suvs", BodyType::Suv),
        ("sedan", BodyType::Sedan),
        ("sedans", BodyType::Sedan),
        ("truck", BodyType::Truck),
        ("trucks", BodyType::Truck),
        ("pickup", BodyType::Truck),
        ("crossover", BodyType::Crossover),
        ("crossovers", BodyType::Crossover),
        ("performance", BodyType::Performance),
        ("sports car", BodyType::Performance),
        ("coupe", BodyType::Coupe),
        ("coupes", BodyType::Coupe),
        ("hatchback", BodyType::Hatchback),
        ("hatchbacks", BodyType::Hatchback),
        ("minivan", BodyType::Minivan),
        ("minivans", BodyType::Minivan),
    ])
}

fn default_known_models() -> Vec<String> {
    [
        "Camry",
        "Corolla",
        "Corolla Cross",
        "Crown",
        "Prius",
        "RAV4",
        "Highlander",
        "Grand Highlander",
        "Sequoia",
        "4Runner",
        "Land Cruiser",
        "Tacoma",
        "Tundra",
        "Sienna",
        "GR Corolla",
        "GR Supra",
        "GR86",
        "Mirai",
        "bZ4X",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            regions: default_regions(),
            drivetrains: default_drivetrains(),
            powertrains: default_powertrains(),
            body_types: default_body_types(),
            known_models: default_known_models(),
        }
    }
}

impl LexiconConfig {
    /// Parse a fixture lexicon. Missing tables fall back to the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let lexicon: Self = serde_yaml::from_str(yaml)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn check<T>(name: &str, rows: &[KeywordEntry<T>]) -> Result<(), ConfigError> {
            if let Some(row) = rows.iter().find(|r| r.keyword.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "empty keyword in {} lexicon (row {:?})",
                    name, row.keyword
                )));
            }
            Ok(())
        }

        check("region", &self.regions)?;
        check("drivetrain", &self.drivetrains)?;
        check("powertrain", &self.powertrains)?;
        check("body type", &self.body_types)?;

        if self.known_models.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "known_models contains an empty name".to_string(),
            ));
        }
        Ok(())
    }
}
