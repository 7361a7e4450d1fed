//! Head-to-head comparison of two vehicles
//!
//! [`Comparison::analyze`] computes the facts; [`Comparison::summary`] turns
//! them into the prose shown in a `compare` envelope.

use showroom_config::constants::DEFAULT_CURRENCY;
use showroom_core::{BodyType, VehicleRecord};

use crate::format::format_currency;

/// Who the pair is most likely to suit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// Either vehicle is an SUV
    FamilyAdventure,
    Commuter,
}

impl Audience {
    pub fn sentence(&self) -> &'static str {
        match self {
            Audience::FamilyAdventure => {
                "Families and adventure-focused buyers may prefer the SUV for space and versatility."
            }
            Audience::Commuter => "Daily commuters may prefer the sedan for value and efficiency.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<'a> {
    pub first: &'a VehicleRecord,
    pub second: &'a VehicleRecord,
    /// Absolute MSRP difference
    pub price_difference: f64,
    /// `first` on a tie
    pub cheaper: &'a VehicleRecord,
    /// None when both mpg sums are equal
    pub efficiency_leader: Option<&'a VehicleRecord>,
    pub drivetrains_differ: bool,
    pub powertrains_differ: bool,
    pub audience: Audience,
}

impl<'a> Comparison<'a> {
    pub fn analyze(first: &'a VehicleRecord, second: &'a VehicleRecord) -> Self {
        let mpg_first = first.efficiency.mpg_sum();
        let mpg_second = second.efficiency.mpg_sum();

        let efficiency_leader = if mpg_first > mpg_second {
            Some(first)
        } else if mpg_second > mpg_first {
            Some(second)
        } else {
            None
        };

        let audience = if first.body_type == BodyType::Suv || second.body_type == BodyType::Suv {
            Audience::FamilyAdventure
        } else {
            Audience::Commuter
        };

        Self {
            first,
            second,
            price_difference: (first.msrp - second.msrp).abs(),
            cheaper: if first.msrp <= second.msrp { first } else { second },
            efficiency_leader,
            drivetrains_differ: first.drivetrain != second.drivetrain,
            powertrains_differ: first.powertrain != second.powertrain,
            audience,
        }
    }

    /// Currency the difference is quoted in
    pub fn currency(&self) -> &str {
        [&self.first.currency, &self.second.currency]
            .into_iter()
            .map(|c| c.trim())
            .find(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
    }

    pub fn summary(&self) -> String {
        let a = self.first.label();
        let b = self.second.label();

        let mut prose = format!(
            "{} vs {}: {} is more budget‑friendly (≈ {} difference). ",
            a,
            b,
            self.cheaper.label(),
            format_currency(self.currency(), self.price_difference)
        );

        if let Some(leader) = self.efficiency_leader {
            prose.push_str(&format!("{} tends to be more efficient overall. ", leader.label()));
        }
        if self.drivetrains_differ {
            prose.push_str(&format!(
                "{} is {}, while {} is {}. ",
                a, self.first.drivetrain, b, self.second.drivetrain
            ));
        }
        if self.powertrains_differ {
            prose.push_str(&format!(
                "{} uses {}; {} uses {}. ",
                a, self.first.powertrain, b, self.second.powertrain
            ));
        }
        prose.push_str(self.audience.sentence());
        prose
    }
}
