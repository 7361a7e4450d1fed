//! Catalog loading, filtering and ranking against a JSON export

use showroom_catalog::{
    baseline_order, filter, recommend, resolve_models, Catalog, Comparison,
};
use showroom_config::RankingConfig;
use showroom_core::{BodyType, Filters, Powertrain, Region};

const CATALOG: &str = r#"[
  {"id":"camry-le","name":"Toyota Camry","trim":"LE","modelCode":"CAMRY","year":2025,"region":"US",
   "series":"Sedan","drivetrain":"FWD","powertrain":"Hybrid","msrp":28400,
   "efficiency":{"city_mpg":51,"hwy_mpg":53},"inventory":{"inStock":4}},
  {"id":"corolla-le","name":"Toyota Corolla","trim":"LE","modelCode":"COROLLA","year":2025,"region":"US",
   "series":"Sedan","drivetrain":"FWD","powertrain":"Gas","msrp":22050,
   "efficiency":{"city_mpg":32,"hwy_mpg":41},"inventory":{"inStock":0}},
  {"id":"prius-le","name":"Toyota Prius","trim":"LE","modelCode":"PRIUS","year":2025,"region":"US",
   "series":"Sedan","drivetrain":"FWD","powertrain":"Hybrid","msrp":28400,
   "efficiency":{"city_mpg":53,"hwy_mpg":51},"inventory":{"inStock":4}},
  {"id":"rav4-xle-ca","name":"Toyota RAV4","trim":"XLE","modelCode":"RAV4","year":2025,"region":"Canada",
   "currency":"CAD","series":"SUV","drivetrain":"AWD","powertrain":"Hybrid","msrp":38000,
   "efficiency":{"city_mpg":41,"hwy_mpg":38},"inventory":{"inStock":2}},
  {"id":"bz4x-ca","name":"Toyota bZ4X","trim":"XLE","modelCode":"BZ4X","year":2025,"region":"Canada",
   "currency":"CAD","series":"EV","drivetrain":"AWD","powertrain":"Electric","msrp":29000}
]"#;

fn catalog() -> Catalog {
    Catalog::from_json(CATALOG).unwrap()
}

#[test]
fn hybrid_sedans_rank_with_stable_ties() {
    let catalog = catalog();
    let filters = Filters {
        powertrain: Some(Powertrain::Hybrid),
        body_type: Some(BodyType::Sedan),
        ..Default::default()
    };

    let candidates = filter(catalog.vehicles(), &filters);
    let ranked = recommend(&candidates, &RankingConfig::default());
    let ids: Vec<_> = ranked.iter().map(|s| s.vehicle.id.as_str()).collect();

    // Camry and Prius score identically; catalog order is kept
    assert_eq!(ids, vec!["camry-le", "prius-le"]);
    assert_eq!(ranked[0].score, ranked[1].score);
}

#[test]
fn ev_without_efficiency_scores_on_price_alone() {
    let catalog = catalog();
    let filters = Filters {
        region: Some(Region::Canada),
        ..Default::default()
    };

    let candidates = filter(catalog.vehicles(), &filters);
    let ranked = recommend(&candidates, &RankingConfig::default());
    let bz4x = ranked.iter().find(|s| s.vehicle.id == "bz4x-ca").unwrap();
    assert!((bz4x.score + 29.0).abs() < 1e-9);
}

#[test]
fn baseline_prefers_stock_then_price() {
    let catalog = catalog();
    let mut all = filter(catalog.vehicles(), &Filters::default());
    baseline_order(&mut all);
    let ids: Vec<_> = all.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["camry-le", "prius-le", "rav4-xle-ca", "corolla-le", "bz4x-ca"]);
}

#[test]
fn compare_resolved_pair() {
    let catalog = catalog();
    let tokens = vec!["Camry".to_string(), "Prius".to_string()];
    let pair = resolve_models(catalog.vehicles(), &tokens, 2);
    assert_eq!(pair.len(), 2);

    let summary = Comparison::analyze(pair[0], pair[1]).summary();
    // same price, same mpg sum, same drivetrain and powertrain
    assert_eq!(
        summary,
        "Toyota Camry LE vs Toyota Prius LE: Toyota Camry LE is more budget‑friendly \
         (≈ USD 0 difference). Daily commuters may prefer the sedan for value and efficiency."
    );
}
