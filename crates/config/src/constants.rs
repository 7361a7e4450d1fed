//! Centralized constants for the showroom assistant
//!
//! Defaults for ranking and result sizes. Runtime values come from
//! [`RankingConfig`](crate::RankingConfig) and [`SearchConfig`](crate::SearchConfig),
//! which fall back to these.

/// Recommendation scoring: `score = MPG_WEIGHT * (city + hwy) - msrp / PRICE_DIVISOR`
pub mod ranking {
    /// Weight applied to the combined city + highway mpg figure
    pub const MPG_WEIGHT: f64 = 2.0;

    /// MSRP is scaled down by this before being subtracted
    pub const PRICE_DIVISOR: f64 = 1000.0;

    /// Number of recommendations returned
    pub const RECOMMENDATION_LIMIT: usize = 3;
}

/// Result sizes
pub mod limits {
    /// Vehicles resolved for a head-to-head comparison
    pub const COMPARE_COUNT: usize = 2;

    /// Vehicles shown when a search is executed in-line
    pub const SEARCH_PREVIEW: usize = 3;
}

/// Currency used when a record does not carry one
pub const DEFAULT_CURRENCY: &str = "USD";
