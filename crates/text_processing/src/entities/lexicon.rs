//! Compiled lexicon tables
//!
//! Turns [`LexiconConfig`] rows into word-boundary regexes once, so the
//! extractors stay pure functions over text.

use regex::Regex;
use showroom_config::{KeywordEntry, LexiconConfig};
use showroom_core::{BodyType, Drivetrain, Powertrain, Region};

use crate::EntityError;

/// Ordered keyword table; the first matching keyword wins
#[derive(Debug, Clone)]
pub struct KeywordMatcher<T> {
    rules: Vec<(Regex, T)>,
}

impl<T: Copy> KeywordMatcher<T> {
    pub fn compile(table: &'static str, rows: &[KeywordEntry<T>]) -> Result<Self, EntityError> {
        let rules = rows
            .iter()
            .map(|row| {
                let keyword = row.keyword.trim().to_lowercase();
                let pattern = format!(r"(?i)\b{}\b", regex::escape(&keyword));
                Regex::new(&pattern)
                    .map(|re| (re, row.value))
                    .map_err(|source| EntityError::InvalidKeyword {
                        table,
                        keyword: row.keyword.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// Scan keywords in table order, ignoring where in the text they occur
    pub fn find(&self, text: &str) -> Option<T> {
        self.rules
            .iter()
            .find(|(re, _)| re.is_match(text))
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A known model name with its lowercase form precomputed
#[derive(Debug, Clone)]
pub struct KnownModel {
    pub name: String,
    pub lower: String,
}

#[derive(Debug, Clone)]
pub struct CompiledLexicon {
    pub regions: KeywordMatcher<Region>,
    pub drivetrains: KeywordMatcher<Drivetrain>,
    pub powertrains: KeywordMatcher<Powertrain>,
    pub body_types: KeywordMatcher<BodyType>,
    pub models: Vec<KnownModel>,
}

impl CompiledLexicon {
    pub fn compile(config: &LexiconConfig) -> Result<Self, EntityError> {
        let models = config
            .known_models
            .iter()
            .map(|name| KnownModel {
                name: name.trim().to_string(),
                lower: name.trim().to_lowercase(),
            })
            .collect();

        let lexicon = Self {
            regions: KeywordMatcher::compile("region", &config.regions)?,
            drivetrains: KeywordMatcher::compile("drivetrain", &config.drivetrains)?,
            powertrains: KeywordMatcher::compile("powertrain", &config.powertrains)?,
            body_types: KeywordMatcher::compile("body type", &config.body_types)?,
            models,
        };

        tracing::debug!(
            regions = lexicon.regions.len(),
            drivetrains = lexicon.drivetrains.len(),
            powertrains = lexicon.powertrains.len(),
            body_types = lexicon.body_types.len(),
            models = lexicon.models.len(),
            "Compiled lexicon"
        );
        Ok(lexicon)
    }
}
