use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{FundingStage, Sector};

/// The six fixed investor categories, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestorArchetype {
    Pif,
    VcSeriesA,
    VcSeed,
    Corporate,
    Angel,
    Government,
}

impl InvestorArchetype {
    pub const MATCH_ORDER: [InvestorArchetype; 6] = [
        InvestorArchetype::Pif,
        InvestorArchetype::VcSeriesA,
        InvestorArchetype::VcSeed,
        InvestorArchetype::Corporate,
        InvestorArchetype::Angel,
        InvestorArchetype::Government,
    ];

    /// Returned when no archetype clears the match threshold.
    pub const FALLBACK: [InvestorArchetype; 2] =
        [InvestorArchetype::Government, InvestorArchetype::Angel];

    pub fn key(self) -> &'static str {
        match self {
            InvestorArchetype::Pif => "pif",
            InvestorArchetype::VcSeriesA => "vc_series_a",
            InvestorArchetype::VcSeed => "vc_seed",
            InvestorArchetype::Corporate => "corporate",
            InvestorArchetype::Angel => "angel",
            InvestorArchetype::Government => "government",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            InvestorArchetype::Pif => "Public Investment Fund",
            InvestorArchetype::VcSeriesA => "Venture capital (Series A)",
            InvestorArchetype::VcSeed => "Venture capital (Seed)",
            InvestorArchetype::Corporate => "Corporate venture capital",
            InvestorArchetype::Angel => "Angel investors",
            InvestorArchetype::Government => "Government programs",
        }
    }
}

impl fmt::Display for InvestorArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Matching thresholds and deal shape for one archetype.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestorProfile {
    pub archetype: InvestorArchetype,
    pub min_traction: f64,
    pub min_team_quality: f64,
    /// Minimum serviceable market, in millions.
    pub min_market_millions: f64,
    pub min_technical_feasibility: f64,
    pub min_financial_health: f64,
    pub preferred_sectors: Vec<Sector>,
    pub preferred_stages: Vec<FundingStage>,
    pub check_size: (f64, f64),
    pub timeline_months: u32,
}

impl InvestorProfile {
    pub fn check_size_midpoint(&self) -> f64 {
        (self.check_size.0 + self.check_size.1) / 2.0
    }

    pub fn prefers(&self, sector: &Sector, stage: &FundingStage) -> bool {
        self.preferred_sectors.contains(sector) && self.preferred_stages.contains(stage)
    }
}

#[derive(Debug, Clone)]
pub struct InvestorTable {
    profiles: Vec<InvestorProfile>,
}

impl InvestorTable {
    pub fn standard() -> Self {
        use FundingStage::*;
        use Sector::*;

        let profiles = vec![
            InvestorProfile {
                archetype: InvestorArchetype::Pif,
                min_traction: 60.0,
                min_team_quality: 75.0,
                min_market_millions: 500.0,
                min_technical_feasibility: 70.0,
                min_financial_health: 65.0,
                preferred_sectors: vec![
                    RenewableEnergy,
                    SmartAgriculture,
                    DigitalHealth,
                    Fintech,
                    Proptech,
                ],
                preferred_stages: vec![SeriesA, SeriesB, Growth],
                check_size: (5_000_000.0, 50_000_000.0),
                timeline_months: 9,
            },
            InvestorProfile {
                archetype: InvestorArchetype::VcSeriesA,
                min_traction: 50.0,
                min_team_quality: 70.0,
                min_market_millions: 200.0,
                min_technical_feasibility: 70.0,
                min_financial_health: 60.0,
                preferred_sectors: vec![Fintech, Ecommerce, Edtech, DigitalHealth, Proptech, Logistics],
                preferred_stages: vec![SeriesA],
                check_size: (3_000_000.0, 15_000_000.0),
                timeline_months: 6,
            },
            InvestorProfile {
                archetype: InvestorArchetype::VcSeed,
                min_traction: 30.0,
                min_team_quality: 60.0,
                min_market_millions: 100.0,
                min_technical_feasibility: 60.0,
                min_financial_health: 50.0,
                preferred_sectors: vec![
                    Fintech,
                    Ecommerce,
                    Edtech,
                    DigitalHealth,
                    FoodDelivery,
                    Logistics,
                ],
                preferred_stages: vec![PreSeed, Seed],
                check_size: (500_000.0, 3_000_000.0),
                timeline_months: 3,
            },
            InvestorProfile {
                archetype: InvestorArchetype::Corporate,
                min_traction: 40.0,
                min_team_quality: 65.0,
                min_market_millions: 150.0,
                min_technical_feasibility: 65.0,
                min_financial_health: 55.0,
                preferred_sectors: vec![Proptech, RenewableEnergy, DigitalHealth, Fintech, Logistics],
                preferred_stages: vec![Seed, SeriesA],
                check_size: (1_000_000.0, 10_000_000.0),
                timeline_months: 4,
            },
            InvestorProfile {
                archetype: InvestorArchetype::Angel,
                min_traction: 10.0,
                min_team_quality: 50.0,
                min_market_millions: 50.0,
                min_technical_feasibility: 50.0,
                min_financial_health: 40.0,
                preferred_sectors: vec![Fintech, Ecommerce, Edtech, FoodDelivery, Tourism],
                preferred_stages: vec![PreSeed],
                check_size: (100_000.0, 500_000.0),
                timeline_months: 1,
            },
            InvestorProfile {
                archetype: InvestorArchetype::Government,
                min_traction: 5.0,
                min_team_quality: 40.0,
                min_market_millions: 20.0,
                min_technical_feasibility: 50.0,
                min_financial_health: 30.0,
                preferred_sectors: vec![
                    Fintech,
                    Ecommerce,
                    Edtech,
                    DigitalHealth,
                    SmartAgriculture,
                    RenewableEnergy,
                    Tourism,
                    Logistics,
                ],
                preferred_stages: vec![PreSeed, Seed],
                check_size: (50_000.0, 500_000.0),
                timeline_months: 2,
            },
        ];

        Self { profiles }
    }

    /// Profiles in matching order.
    pub fn profiles(&self) -> &[InvestorProfile] {
        &self.profiles
    }

    pub fn profile(&self, archetype: InvestorArchetype) -> Option<&InvestorProfile> {
        self.profiles.iter().find(|p| p.archetype == archetype)
    }
}
