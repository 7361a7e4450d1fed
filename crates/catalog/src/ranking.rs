//! Ranking Engine
//!
//! Baseline ordering for plain searches and weighted scoring for
//! recommendations. Both sorts are stable, so equal keys keep catalog order.

use std::cmp::Ordering;

use showroom_config::RankingConfig;
use showroom_core::VehicleRecord;

/// In-stock first (most units first), then cheapest first
pub fn baseline_order(vehicles: &mut [&VehicleRecord]) {
    vehicles.sort_by(|a, b| {
        b.inventory
            .in_stock
            .cmp(&a.inventory.in_stock)
            .then_with(|| a.msrp.partial_cmp(&b.msrp).unwrap_or(Ordering::Equal))
    });
}

/// `mpg_weight * (city + hwy) - msrp / price_divisor`
pub fn recommendation_score(vehicle: &VehicleRecord, ranking: &RankingConfig) -> f64 {
    ranking.mpg_weight * vehicle.efficiency.mpg_sum() - vehicle.msrp / ranking.price_divisor
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredVehicle<'a> {
    pub vehicle: &'a VehicleRecord,
    pub score: f64,
}

/// Score every candidate, highest first, keeping the top
/// `ranking.recommendation_limit`
pub fn recommend<'a>(
    candidates: &[&'a VehicleRecord],
    ranking: &RankingConfig,
) -> Vec<ScoredVehicle<'a>> {
    let mut scored: Vec<ScoredVehicle<'a>> = candidates
        .iter()
        .map(|&vehicle| ScoredVehicle {
            vehicle,
            score: recommendation_score(vehicle, ranking),
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(ranking.recommendation_limit);

    tracing::debug!(
        candidates = candidates.len(),
        top = ?scored.iter().map(|s| s.vehicle.id.as_str()).collect::<Vec<_>>(),
        "Ranked recommendations"
    );
    scored
}
