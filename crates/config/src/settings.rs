//! Assistant configuration
//!
//! Everything the interpreter needs, with built-in defaults. A config file
//! (YAML, TOML or JSON, picked by extension) may override any section.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{limits, ranking};
use crate::{ConfigError, IntentConfig, LexiconConfig, ResponseTemplates};

/// Recommendation scoring weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub mpg_weight: f64,
    pub price_divisor: f64,
    pub recommendation_limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            mpg_weight: ranking::MPG_WEIGHT,
            price_divisor: ranking::PRICE_DIVISOR,
            recommendation_limit: ranking::RECOMMENDATION_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Vehicles returned when a search is executed in-line
    pub preview_limit: usize,
    /// Ask for a budget instead of searching on powertrain/body type alone
    pub require_strong_filter: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            preview_limit: limits::SEARCH_PREVIEW,
            require_strong_filter: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub lexicon: LexiconConfig,
    pub intents: IntentConfig,
    pub responses: ResponseTemplates,
    pub ranking: RankingConfig,
    pub search: SearchConfig,
}

impl AssistantConfig {
    /// Load from a config file; absent sections keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let load_err = |source| ConfigError::Load {
            path: path.display().to_string(),
            source,
        };

        let config: Self = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .map_err(load_err)?
            .try_deserialize()
            .map_err(load_err)?;

        config.validate()?;
        tracing::info!(
            path = %path.display(),
            models = config.lexicon.known_models.len(),
            "Loaded assistant config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lexicon.validate()?;
        self.intents.validate()?;
        self.responses.validate()?;

        if self.ranking.recommendation_limit == 0 {
            return Err(ConfigError::Invalid(
                "ranking.recommendation_limit must be at least 1".to_string(),
            ));
        }
        if self.ranking.price_divisor <= 0.0 {
            return Err(ConfigError::Invalid(
                "ranking.price_divisor must be positive".to_string(),
            ));
        }
        if self.search.preview_limit == 0 {
            return Err(ConfigError::Invalid(
                "search.preview_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = AssistantConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ranking.recommendation_limit, 3);
        assert_eq!(config.search.preview_limit, 3);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = AssistantConfig::default();
        config.ranking.recommendation_limit = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_negative_divisor_rejected() {
        let mut config = AssistantConfig::default();
        config.ranking.price_divisor = -1.0;
        assert!(config.validate().is_err());
    }
}
