//! Investor matching.
//!
//! Scores the project against the six fixed investor archetypes, estimates
//! valuation and funding ranges, and builds one investment scenario per
//! recommended archetype.

pub mod scenarios;

use serde::{Deserialize, Serialize};

use crate::config::Heuristics;
use crate::core::{FundingStage, InvestorAppeal, IrlGrade, ProjectSnapshot, Score0To100, Sector};
use crate::knowledge::{InvestorArchetype, InvestorProfile, KnowledgeBase};
use crate::scoring::{serviceable_market_millions, DimensionScores, IrlScore};

pub use scenarios::{build_scenarios, InvestmentScenario};

/// Share of the six criteria an archetype must satisfy.
const MATCH_THRESHOLD: f64 = 0.6;
const CRITERIA_COUNT: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    fn scale(self, min_factor: f64, max_factor: f64) -> Self {
        Self {
            min: self.min * min_factor,
            max: self.max * max_factor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorReadiness {
    pub irl_score: Score0To100,
    pub irl_grade: IrlGrade,
    pub investor_appeal: InvestorAppeal,
    pub recommended_investor_types: Vec<InvestorArchetype>,
    pub key_strengths: Vec<String>,
    pub key_weaknesses: Vec<String>,
    pub valuation_range: ValueRange,
    pub funding_potential: ValueRange,
    pub readiness_breakdown: DimensionScores,
}

pub struct InvestorMatcher<'a> {
    knowledge: &'a KnowledgeBase,
    heuristics: &'a Heuristics,
}

impl<'a> InvestorMatcher<'a> {
    pub fn new(knowledge: &'a KnowledgeBase, heuristics: &'a Heuristics) -> Self {
        Self {
            knowledge,
            heuristics,
        }
    }

    pub fn assess(&self, snapshot: &ProjectSnapshot, irl: &IrlScore) -> InvestorReadiness {
        let profile = &snapshot.profile;
        let sam = serviceable_market_millions(
            &profile.sector,
            snapshot.metrics.market_demand,
            self.knowledge,
            self.heuristics,
        );

        let recommended =
            self.recommend(&irl.breakdown, sam, &profile.sector, &profile.stage);
        let valuation = self.valuation_range(
            &profile.stage,
            &profile.sector,
            irl.score.value(),
            snapshot.metrics.revenue_growth,
        );
        let funding = self.funding_potential(valuation, &profile.stage, irl.score.value());

        tracing::debug!(
            irl = irl.score.value(),
            matches = recommended.len(),
            "matched investor archetypes"
        );

        InvestorReadiness {
            irl_score: irl.score,
            irl_grade: irl.grade,
            investor_appeal: irl.appeal,
            recommended_investor_types: recommended,
            key_strengths: irl.strengths.clone(),
            key_weaknesses: irl.weaknesses.clone(),
            valuation_range: valuation,
            funding_potential: funding,
            readiness_breakdown: irl.breakdown,
        }
    }

    /// Archetypes satisfying at least 60% of their criteria, in matching
    /// order. Never empty.
    pub fn recommend(
        &self,
        dimensions: &DimensionScores,
        sam_millions: f64,
        sector: &Sector,
        stage: &FundingStage,
    ) -> Vec<InvestorArchetype> {
        let matched: Vec<_> = self
            .knowledge
            .investors
            .profiles()
            .iter()
            .filter(|p| match_fraction(p, dimensions, sam_millions, sector, stage) >= MATCH_THRESHOLD)
            .map(|p| p.archetype)
            .collect();

        if matched.is_empty() {
            InvestorArchetype::FALLBACK.to_vec()
        } else {
            matched
        }
    }

    pub fn valuation_range(
        &self,
        stage: &FundingStage,
        sector: &Sector,
        irl: f64,
        revenue_growth: f64,
    ) -> ValueRange {
        let base = self.knowledge.stages.valuation_base(stage);
        let readiness_factor = 0.5 + irl / 100.0 * 1.5;
        let sector_factor = self.knowledge.sectors.valuation_multiplier(sector);
        let growth_factor = 1.0 + revenue_growth * 0.5;
        let point = base * readiness_factor * sector_factor * growth_factor;

        let spread = self.heuristics.valuation_spread;
        ValueRange {
            min: point * (1.0 - spread),
            max: point * (1.0 + spread),
        }
    }

    pub fn funding_potential(&self, valuation: ValueRange, stage: &FundingStage, irl: f64) -> ValueRange {
        let equity = self.knowledge.stages.equity_share(stage);
        let raw = valuation.scale(equity, equity);

        if irl < 50.0 {
            raw.scale(0.5, 0.7)
        } else if irl > 80.0 {
            raw.scale(1.2, 1.5)
        } else {
            raw
        }
    }
}

fn match_fraction(
    profile: &InvestorProfile,
    dimensions: &DimensionScores,
    sam_millions: f64,
    sector: &Sector,
    stage: &FundingStage,
) -> f64 {
    let criteria = [
        dimensions.traction.value() >= profile.min_traction,
        dimensions.team_quality.value() >= profile.min_team_quality,
        sam_millions >= profile.min_market_millions,
        dimensions.technical_feasibility.value() >= profile.min_technical_feasibility,
        dimensions.financial_health.value() >= profile.min_financial_health,
        profile.prefers(sector, stage),
    ];
    criteria.iter().filter(|met| **met).count() as f64 / CRITERIA_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> InvestorMatcher<'static> {
        static HEURISTICS: once_cell::sync::Lazy<Heuristics> =
            once_cell::sync::Lazy::new(Heuristics::default);
        InvestorMatcher::new(KnowledgeBase::standard(), &HEURISTICS)
    }

    fn dims(values: [f64; 5]) -> DimensionScores {
        DimensionScores {
            traction: Score0To100::new(values[0]),
            team_quality: Score0To100::new(values[1]),
            market_size: Score0To100::new(values[2]),
            technical_feasibility: Score0To100::new(values[3]),
            financial_health: Score0To100::new(values[4]),
        }
    }

    #[test]
    fn all_zero_falls_back_to_default_pair() {
        let recommended = matcher().recommend(
            &dims([0.0; 5]),
            0.0,
            &Sector::Fintech,
            &FundingStage::Seed,
        );
        assert_eq!(
            recommended,
            vec![InvestorArchetype::Government, InvestorArchetype::Angel]
        );
    }

    #[test]
    fn reference_project_matches_early_stage_investors() {
        let recommended = matcher().recommend(
            &dims([23.55, 50.0, 100.0, 75.0, 43.97]),
            2925.0,
            &Sector::Fintech,
            &FundingStage::Seed,
        );
        // angel: traction, team, market, tech, fin = 5/6
        // government: traction, team, market, tech, fin, sector+stage = 6/6
        assert_eq!(
            recommended,
            vec![InvestorArchetype::Angel, InvestorArchetype::Government]
        );
    }

    #[test]
    fn valuation_scales_with_readiness() {
        let m = matcher();
        let low = m.valuation_range(&FundingStage::Seed, &Sector::Tourism, 0.0, 0.0);
        assert!((low.midpoint() - 2_500_000.0).abs() < 1e-6);
        assert!((low.min - 1_750_000.0).abs() < 1e-6);

        let high = m.valuation_range(&FundingStage::Seed, &Sector::Tourism, 100.0, 0.0);
        assert!((high.midpoint() - 10_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn funding_potential_bands() {
        let m = matcher();
        let valuation = ValueRange {
            min: 1_000_000.0,
            max: 2_000_000.0,
        };
        let mid = m.funding_potential(valuation, &FundingStage::Seed, 60.0);
        assert!((mid.min - 200_000.0).abs() < 1e-6);
        assert!((mid.max - 400_000.0).abs() < 1e-6);

        let weak = m.funding_potential(valuation, &FundingStage::Seed, 40.0);
        assert!((weak.min - 100_000.0).abs() < 1e-6);
        assert!((weak.max - 280_000.0).abs() < 1e-6);

        let strong = m.funding_potential(valuation, &FundingStage::Seed, 85.0);
        assert!((strong.min - 240_000.0).abs() < 1e-6);
        assert!((strong.max - 600_000.0).abs() < 1e-6);
    }
}
