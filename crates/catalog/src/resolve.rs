//! Model resolution
//!
//! Maps model tokens ("Camry", "corolla cross") to catalog records. A token
//! that names the model exactly beats one that only appears somewhere in a
//! record's name, trim or model code.

use showroom_core::VehicleRecord;

/// How well `token` (lowercase) names `vehicle`: model code, then display
/// name (whole or trailing words), then anywhere in the search haystack
fn match_rank(vehicle: &VehicleRecord, token: &str) -> Option<u8> {
    let compact: String = token.chars().filter(|c| !c.is_whitespace()).collect();
    if vehicle
        .model_code
        .as_deref()
        .is_some_and(|code| code.eq_ignore_ascii_case(&compact))
    {
        return Some(0);
    }

    let name = vehicle.display_name.to_lowercase();
    if name == token || name.ends_with(&format!(" {}", token)) {
        return Some(1);
    }

    vehicle.search_haystack().contains(token).then_some(2)
}

/// Candidates for one token, best rank first, catalog order within a rank
pub fn candidates<'a>(catalog: &'a [VehicleRecord], token: &str) -> Vec<&'a VehicleRecord> {
    let token = token.trim().to_lowercase();
    if token.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(u8, &VehicleRecord)> = catalog
        .iter()
        .filter_map(|v| match_rank(v, &token).map(|rank| (rank, v)))
        .collect();
    ranked.sort_by_key(|(rank, _)| *rank);

    ranked.into_iter().map(|(_, v)| v).collect()
}

/// Best catalog record for a single model token
pub fn resolve_model<'a>(catalog: &'a [VehicleRecord], token: &str) -> Option<&'a VehicleRecord> {
    candidates(catalog, token).into_iter().next()
}

/// Resolve tokens in order, one distinct vehicle per token, stopping at
/// `limit`. A token whose best match was already taken falls through to its
/// next candidate; a token with no candidates is skipped.
pub fn resolve_models<'a>(
    catalog: &'a [VehicleRecord],
    tokens: &[String],
    limit: usize,
) -> Vec<&'a VehicleRecord> {
    let mut resolved: Vec<&VehicleRecord> = Vec::new();

    for token in tokens {
        if resolved.len() >= limit {
            break;
        }
        let next = candidates(catalog, token)
            .into_iter()
            .find(|v| !resolved.iter().any(|r| r.id == v.id));

        match next {
            Some(vehicle) => resolved.push(vehicle),
            None => tracing::debug!(token = %token, "Model token did not resolve"),
        }
    }

    resolved
}
