//! Vehicle Entity Extraction
//!
//! One extractor per slot, each a pure function of normalized text and the
//! compiled lexicon:
//! - Region, drivetrain, powertrain, body type (keyword tables)
//! - Year (`20xx` tokens)
//! - Max price ("under 30k", "below $35,000", "<= 40k", "max 28000")
//! - Model mentions (known model list, with a compare-list fallback)
//!
//! An extractor that finds nothing returns `None`; that is never an error.
//!
//! # Example
//!
//! ```ignore
//! use showroom_config::LexiconConfig;
//! use showroom_text_processing::EntityExtractor;
//!
//! let extractor = EntityExtractor::new(&LexiconConfig::default())?;
//! let entities = extractor.extract("hybrid suv under 30k in canada");
//!
//! assert_eq!(entities.max_price, Some(30000.0));
//! assert_eq!(entities.region, Some(Region::Canada));
//! ```

pub mod assembler;
pub mod lexicon;

use std::cmp::Reverse;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use showroom_config::LexiconConfig;
use showroom_core::{BodyType, Drivetrain, Powertrain, Region};

pub use assembler::assemble_filters;
pub use lexicon::{CompiledLexicon, KeywordMatcher, KnownModel};

use crate::EntityError;

static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(20\d{2})\b").expect("static year pattern"));

/// Checked first: "under", "below", "<=", "<"
static PRICE_CEILING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:under|below|<=|<)(\d+)(k)?").expect("static price pattern")
});

/// Checked second: "max", "at most" (spaces are stripped before matching)
static PRICE_MAX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:max|atmost)(\d+)(k)?").expect("static price pattern"));

/// Default compare trigger; callers with configured triggers override it
/// through [`EntityExtractor::with_compare_keywords`]
static COMPARE_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:compare|vs)\b").expect("static compare pattern"));

static LIST_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(?:,|&|\band\b)\s*").expect("static separator pattern"));

/// Everything the extractors found in one utterance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleEntities {
    pub models: Vec<String>,
    pub max_price: Option<f64>,
    pub drivetrain: Option<Drivetrain>,
    pub powertrain: Option<Powertrain>,
    pub body_type: Option<BodyType>,
    pub region: Option<Region>,
    pub year: Option<i32>,
}

impl VehicleEntities {
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
            && self.max_price.is_none()
            && self.drivetrain.is_none()
            && self.powertrain.is_none()
            && self.body_type.is_none()
            && self.region.is_none()
            && self.year.is_none()
    }
}

/// Slot extractor for vehicle commands
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    lexicon: CompiledLexicon,
    compare_keywords: Vec<Regex>,
}

impl EntityExtractor {
    pub fn new(config: &LexiconConfig) -> Result<Self, EntityError> {
        Ok(Self {
            lexicon: CompiledLexicon::compile(config)?,
            compare_keywords: vec![COMPARE_KEYWORD.clone()],
        })
    }

    /// Replace the keywords that open a compare list ("compare a and b").
    /// An empty list disables the compare-list fallback.
    pub fn with_compare_keywords(mut self, keywords: Vec<Regex>) -> Self {
        self.compare_keywords = keywords;
        self
    }

    pub fn lexicon(&self) -> &CompiledLexicon {
        &self.lexicon
    }

    /// Run every extractor over already-normalized text
    pub fn extract(&self, text: &str) -> VehicleEntities {
        let entities = VehicleEntities {
            models: self.extract_models(text),
            max_price: self.extract_max_price(text),
            drivetrain: self.extract_drivetrain(text),
            powertrain: self.extract_powertrain(text),
            body_type: self.extract_body_type(text),
            region: self.extract_region(text),
            year: self.extract_year(text),
        };

        tracing::debug!(
            models = ?entities.models,
            max_price = ?entities.max_price,
            drivetrain = ?entities.drivetrain,
            powertrain = ?entities.powertrain,
            body_type = ?entities.body_type,
            region = ?entities.region,
            year = ?entities.year,
            "Extracted vehicle entities"
        );
        entities
    }

    pub fn extract_region(&self, text: &str) -> Option<Region> {
        self.lexicon.regions.find(&text.to_lowercase())
    }

    pub fn extract_drivetrain(&self, text: &str) -> Option<Drivetrain> {
        self.lexicon.drivetrains.find(&text.to_lowercase())
    }

    pub fn extract_powertrain(&self, text: &str) -> Option<Powertrain> {
        self.lexicon.powertrains.find(&text.to_lowercase())
    }

    pub fn extract_body_type(&self, text: &str) -> Option<BodyType> {
        self.lexicon.body_types.find(&text.to_lowercase())
    }

    /// First standalone `20xx` token. No range check beyond the prefix.
    pub fn extract_year(&self, text: &str) -> Option<i32> {
        YEAR_PATTERN
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Price ceiling, with a `k` suffix meaning thousands
    pub fn extract_max_price(&self, text: &str) -> Option<f64> {
        let compact: String = text
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ',' | '$' | '€' | '£' | '¥') && !c.is_whitespace())
            .collect();

        for pattern in [&*PRICE_CEILING_PATTERN, &*PRICE_MAX_PATTERN] {
            if let Some(caps) = pattern.captures(&compact) {
                let Some(amount) = caps.get(1).and_then(|m| m.as_str().parse::<u64>().ok())
                else {
                    tracing::debug!(text = %compact, "Skipping price - amount out of range");
                    return None;
                };
                let multiplier = if caps.get(2).is_some() { 1_000 } else { 1 };
                return amount.checked_mul(multiplier).map(|v| v as f64);
            }
        }

        None
    }

    /// Known model mentions in first-seen order.
    ///
    /// Punctuation counts as whitespace, so "camry, corolla?" finds both. A
    /// mention that only occurs inside a longer known name ("Corolla" in
    /// "Corolla Cross") is not reported separately.
    pub fn extract_models(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let hay = format!(" {} ", as_words(&lower));

        // (start, end, model index) for every padded occurrence
        let mut spans: Vec<(usize, usize, usize)> = self
            .lexicon
            .models
            .iter()
            .enumerate()
            .flat_map(|(idx, model)| {
                let needle = format!(" {} ", as_words(&model.lower));
                occurrences(&hay, &needle)
                    .into_iter()
                    .map(move |start| (start, start + needle.len(), idx))
            })
            .collect();

        // Longest span first at each start, so a sweep over the running max
        // end tells whether a span sits inside a longer, earlier one.
        spans.sort_unstable_by_key(|&(s, e, idx)| (s, Reverse(e), idx));

        let mut first_seen: Vec<Option<usize>> = vec![None; self.lexicon.models.len()];
        let mut reach = 0;
        let mut i = 0;
        while i < spans.len() {
            let (start, end, _) = spans[i];
            let group_end = spans[i..]
                .iter()
                .position(|&(s, e, _)| (s, e) != (start, end))
                .map_or(spans.len(), |n| i + n);
            if end > reach {
                for &(_, _, idx) in &spans[i..group_end] {
                    first_seen[idx].get_or_insert(start);
                }
                reach = end;
            }
            i = group_end;
        }

        let mut found: Vec<(usize, usize)> = first_seen
            .into_iter()
            .enumerate()
            .filter_map(|(idx, start)| start.map(|s| (s, idx)))
            .collect();
        found.sort_unstable();

        let mut models = Vec::new();
        for (_, idx) in found {
            push_unique(&mut models, &self.lexicon.models[idx].name);
        }

        if models.is_empty() {
            let list_start = self
                .compare_keywords
                .iter()
                .filter_map(|re| re.find_iter(&lower).last())
                .map(|m| m.end())
                .max();
            if let Some(list_start) = list_start {
                for name in self.match_compare_list(&lower[list_start..]) {
                    push_unique(&mut models, name);
                }
                if !models.is_empty() {
                    tracing::debug!(models = ?models, "Recovered models from compare list");
                }
            }
        }

        models
    }

    /// Match "a, b and c" fragments against the model list: exact name,
    /// then prefix, then substring
    fn match_compare_list<'a>(&'a self, remainder: &str) -> Vec<&'a str> {
        LIST_SEPARATOR
            .split(remainder)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .filter_map(|fragment| {
                let models = &self.lexicon.models;
                models
                    .iter()
                    .find(|m| m.lower == fragment)
                    .or_else(|| models.iter().find(|m| m.lower.starts_with(fragment)))
                    .or_else(|| models.iter().find(|m| m.lower.contains(fragment)))
                    .map(|m| m.name.as_str())
            })
            .collect()
    }
}

/// Punctuation to spaces, so names and text tokenize the same way
fn as_words(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect()
}

/// Start offsets of `needle` in `hay`, overlaps included. `needle` starts
/// with an ASCII space, so stepping one byte past a hit stays on a char
/// boundary.
fn occurrences(hay: &str, needle: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut from = 0;
    while let Some(pos) = hay[from..].find(needle) {
        starts.push(from + pos);
        from += pos + 1;
    }
    starts
}

fn push_unique(models: &mut Vec<String>, name: &str) {
    if !models.iter().any(|m| m == name) {
        models.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> EntityExtractor {
        EntityExtractor::new(&LexiconConfig::default()).unwrap()
    }

    // ============================================
    // PRICE EXTRACTION TESTS
    // ============================================

    #[test]
    fn test_price_under_k() {
        assert_eq!(extractor().extract_max_price("hybrid suv under 30k"), Some(30000.0));
    }

    #[test]
    fn test_price_below_plain() {
        assert_eq!(extractor().extract_max_price("sedan below 35000"), Some(35000.0));
    }

    #[test]
    fn test_price_less_equal() {
        assert_eq!(extractor().extract_max_price("<=40k awd"), Some(40000.0));
        assert_eq!(extractor().extract_max_price("< 25k"), Some(25000.0));
    }

    #[test]
    fn test_price_currency_and_commas() {
        assert_eq!(extractor().extract_max_price("under $25,000 please"), Some(25000.0));
    }

    #[test]
    fn test_price_max_and_at_most() {
        assert_eq!(extractor().extract_max_price("max 30k"), Some(30000.0));
        assert_eq!(extractor().extract_max_price("at most 28000"), Some(28000.0));
    }

    #[test]
    fn test_price_unsupported_keyword() {
        assert_eq!(extractor().extract_max_price("over 30k"), None);
        assert_eq!(extractor().extract_max_price("cheap hybrid"), None);
    }

    #[test]
    fn test_price_ceiling_checked_before_max() {
        assert_eq!(extractor().extract_max_price("max 50k but ideally under 40k"), Some(40000.0));
    }

    #[test]
    fn test_price_overflow_is_no_constraint() {
        assert_eq!(extractor().extract_max_price("under 99999999999999999999999k"), None);
    }

    // ============================================
    // YEAR EXTRACTION TESTS
    // ============================================

    #[test]
    fn test_year() {
        assert_eq!(extractor().extract_year("2025 gas sedan"), Some(2025));
        assert_eq!(extractor().extract_year("a 2024 or 2025 model"), Some(2024));
    }

    #[test]
    fn test_year_needs_standalone_20xx() {
        assert_eq!(extractor().extract_year("1999 camry"), None);
        assert_eq!(extractor().extract_year("model 120250"), None);
    }

    // ============================================
    // LEXICON EXTRACTION TESTS
    // ============================================

    #[test]
    fn test_lexicon_slots() {
        let e = extractor();
        assert_eq!(e.extract_region("in Canada"), Some(Region::Canada));
        assert_eq!(e.extract_region("ship to europe"), Some(Region::Eu));
        assert_eq!(e.extract_drivetrain("all wheel drive"), Some(Drivetrain::Awd));
        assert_eq!(e.extract_drivetrain("a 4wd truck"), Some(Drivetrain::FourByFour));
        assert_eq!(e.extract_powertrain("PHEV please"), Some(Powertrain::PluginHybrid));
        assert_eq!(e.extract_powertrain("plug-in hybrid rav4"), Some(Powertrain::PluginHybrid));
        assert_eq!(e.extract_body_type("hybrid sedans"), Some(BodyType::Sedan));
        assert_eq!(e.extract_body_type("cheap suvs"), Some(BodyType::Suv));
    }

    #[test]
    fn test_no_lexicon_match() {
        let e = extractor();
        assert_eq!(e.extract_region("anything at all"), None);
        assert_eq!(e.extract_body_type("something fast"), None);
    }

    // ============================================
    // MODEL EXTRACTION TESTS
    // ============================================

    #[test]
    fn test_models_first_seen_order() {
        assert_eq!(
            extractor().extract_models("compare Corolla and camry"),
            vec!["Corolla", "Camry"]
        );
    }

    #[test]
    fn test_models_multi_word() {
        assert_eq!(
            extractor().extract_models("grand highlander vs land cruiser"),
            vec!["Grand Highlander", "Land Cruiser"]
        );
    }

    #[test]
    fn test_models_nested_name_not_reported_twice() {
        assert_eq!(extractor().extract_models("a corolla cross"), vec!["Corolla Cross"]);
        assert_eq!(
            extractor().extract_models("corolla cross vs corolla"),
            vec!["Corolla Cross", "Corolla"]
        );
    }

    #[test]
    fn test_models_deduped() {
        assert_eq!(extractor().extract_models("camry camry CAMRY"), vec!["Camry"]);
    }

    #[test]
    fn test_models_punctuation() {
        assert_eq!(
            extractor().extract_models("compare camry, corolla?"),
            vec!["Camry", "Corolla"]
        );
    }

    #[test]
    fn test_models_compare_list_fallback() {
        assert_eq!(
            extractor().extract_models("compare cam and tund"),
            vec!["Camry", "Tundra"]
        );
    }

    #[test]
    fn test_models_fallback_only_when_nothing_found() {
        // "high" would prefix-match Highlander, but Prius already matched
        assert_eq!(extractor().extract_models("high vs prius"), vec!["Prius"]);
    }

    #[test]
    fn test_models_fallback_needs_compare_keyword() {
        assert!(extractor().extract_models("cam and tund").is_empty());
        assert!(extractor().extract_models("compare").is_empty());
    }

    #[test]
    fn test_models_configured_compare_keyword() {
        let weigh_up = Regex::new(r"(?i)\bweigh up\b").unwrap();
        let e = extractor().with_compare_keywords(vec![weigh_up]);
        assert_eq!(e.extract_models("weigh up cam and tund"), vec!["Camry", "Tundra"]);
        assert!(e.extract_models("compare cam and tund").is_empty());
        assert!(extractor().extract_models("weigh up cam and tund").is_empty());
    }

    #[test]
    fn test_models_large_nested_input_is_linearithmic() {
        let text = "corolla cross ".repeat(50_000);
        let started = std::time::Instant::now();
        let models = extractor().extract_models(&text);
        let elapsed = started.elapsed();

        assert_eq!(models, vec!["Corolla Cross"]);
        assert!(elapsed.as_secs() < 2, "extraction took {:?}", elapsed);
    }

    #[test]
    fn test_models_nested_and_standalone_mentions() {
        assert_eq!(
            extractor().extract_models("corolla cross corolla cross and a corolla"),
            vec!["Corolla Cross", "Corolla"]
        );
    }

    #[test]
    fn test_full_extraction() {
        let entities = extractor().extract("2025 gas sedan below 35k awd");
        assert_eq!(entities.year, Some(2025));
        assert_eq!(entities.powertrain, Some(Powertrain::Gas));
        assert_eq!(entities.body_type, Some(BodyType::Sedan));
        assert_eq!(entities.max_price, Some(35000.0));
        assert_eq!(entities.drivetrain, Some(Drivetrain::Awd));
        assert_eq!(entities.region, None);
        assert!(entities.models.is_empty());
    }
}
