use std::collections::HashMap;

use crate::core::{FundingStage, Organization};

#[derive(Debug, Clone, PartialEq)]
struct StageProfile {
    valuation_base: f64,
    equity_share: f64,
    base_months: Option<f64>,
    milestones: &'static [&'static str],
}

/// Per-stage valuation, dilution, timeline and milestone lookups.
#[derive(Debug, Clone)]
pub struct StageTable {
    profiles: HashMap<FundingStage, StageProfile>,
}

const DEFAULT_VALUATION_BASE: f64 = 2_000_000.0;
const DEFAULT_EQUITY_SHARE: f64 = 0.20;
const DEFAULT_BASE_MONTHS: f64 = 24.0;

const PRE_SEED_MILESTONES: &[&str] = &[
    "Validate problem-solution fit",
    "Launch the first MVP",
    "Secure SAR 500K of initial funding",
    "Form a core team of 5 people",
    "Reach 1,000 active users",
];

const SEED_MILESTONES: &[&str] = &[
    "Reach product-market fit",
    "Close a seed round (SAR 2-5M)",
    "Grow the team to 15 people",
    "Reach 10K active users",
    "Generate monthly revenue of SAR 50K+",
];

const SERIES_A_MILESTONES: &[&str] = &[
    "Close a Series A round (SAR 10-20M)",
    "Reach 100K active users",
    "Grow monthly revenue to SAR 500K+",
    "Expand to 3 cities",
    "Build a team of 50+ people",
];

impl StageTable {
    pub fn standard() -> Self {
        let rows = [
            (FundingStage::PreSeed, 2_000_000.0, 0.15, Some(18.0), PRE_SEED_MILESTONES),
            (FundingStage::Seed, 5_000_000.0, 0.20, Some(24.0), SEED_MILESTONES),
            (FundingStage::SeriesA, 15_000_000.0, 0.25, Some(36.0), SERIES_A_MILESTONES),
            (FundingStage::SeriesB, 50_000_000.0, 0.20, Some(48.0), &[]),
            (FundingStage::Growth, 150_000_000.0, 0.15, None, &[]),
        ];

        let profiles = rows
            .into_iter()
            .map(|(stage, valuation_base, equity_share, base_months, milestones)| {
                (
                    stage,
                    StageProfile {
                        valuation_base,
                        equity_share,
                        base_months,
                        milestones,
                    },
                )
            })
            .collect();

        Self { profiles }
    }

    pub fn valuation_base(&self, stage: &FundingStage) -> f64 {
        self.profiles
            .get(stage)
            .map(|p| p.valuation_base)
            .unwrap_or(DEFAULT_VALUATION_BASE)
    }

    /// Typical equity sold in a round at this stage.
    pub fn equity_share(&self, stage: &FundingStage) -> f64 {
        self.profiles
            .get(stage)
            .map(|p| p.equity_share)
            .unwrap_or(DEFAULT_EQUITY_SHARE)
    }

    /// Months to success before the ICI adjustment.
    pub fn base_months(&self, stage: &FundingStage) -> f64 {
        self.profiles
            .get(stage)
            .and_then(|p| p.base_months)
            .unwrap_or(DEFAULT_BASE_MONTHS)
    }

    pub fn milestones(&self, stage: &FundingStage) -> &'static [&'static str] {
        self.profiles
            .get(stage)
            .map(|p| p.milestones)
            .unwrap_or(&[])
    }
}

/// Team-quality base score by sponsoring organization.
#[derive(Debug, Clone)]
pub struct OrganizationTable {
    base_scores: HashMap<Organization, f64>,
    default_score: f64,
}

impl OrganizationTable {
    pub fn standard() -> Self {
        let base_scores = [
            (Organization::Kaust, 85.0),
            (Organization::Pif, 80.0),
            (Organization::Roshn, 75.0),
            (Organization::Startup, 50.0),
        ]
        .into_iter()
        .collect();

        Self {
            base_scores,
            default_score: 50.0,
        }
    }

    pub fn base_score(&self, organization: &Organization) -> f64 {
        self.base_scores
            .get(organization)
            .copied()
            .unwrap_or(self.default_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_stage_defaults() {
        let table = StageTable::standard();
        let other = FundingStage::Other("bridge".into());
        assert_eq!(table.valuation_base(&other), 2_000_000.0);
        assert_eq!(table.equity_share(&other), 0.20);
        assert_eq!(table.base_months(&other), 24.0);
        assert!(table.milestones(&other).is_empty());
    }

    #[test]
    fn growth_has_no_timeline_entry() {
        let table = StageTable::standard();
        assert_eq!(table.base_months(&FundingStage::Growth), 24.0);
        assert_eq!(table.valuation_base(&FundingStage::Growth), 150_000_000.0);
    }

    #[test]
    fn organization_scores() {
        let table = OrganizationTable::standard();
        assert_eq!(table.base_score(&Organization::Kaust), 85.0);
        assert_eq!(table.base_score(&Organization::Other("mit".into())), 50.0);
    }
}
