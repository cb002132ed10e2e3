use serde::{Deserialize, Serialize};
use std::fmt;

use super::{roi_score, runway_score};
use crate::config::Heuristics;
use crate::core::{weighted_sum, ProjectSnapshot, Score0To100, Sector};
use crate::knowledge::KnowledgeBase;

/// The five readiness dimensions feeding the IRL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Traction,
    TeamQuality,
    MarketSize,
    TechnicalFeasibility,
    FinancialHealth,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Traction,
        Dimension::TeamQuality,
        Dimension::MarketSize,
        Dimension::TechnicalFeasibility,
        Dimension::FinancialHealth,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Dimension::Traction => "traction",
            Dimension::TeamQuality => "team_quality",
            Dimension::MarketSize => "market_size",
            Dimension::TechnicalFeasibility => "technical_feasibility",
            Dimension::FinancialHealth => "financial_health",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Traction => "Traction",
            Dimension::TeamQuality => "Team quality",
            Dimension::MarketSize => "Market size",
            Dimension::TechnicalFeasibility => "Technical feasibility",
            Dimension::FinancialHealth => "Financial health",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub traction: Score0To100,
    pub team_quality: Score0To100,
    pub market_size: Score0To100,
    pub technical_feasibility: Score0To100,
    pub financial_health: Score0To100,
}

impl DimensionScores {
    pub fn compute(
        snapshot: &ProjectSnapshot,
        knowledge: &KnowledgeBase,
        heuristics: &Heuristics,
    ) -> Self {
        Self {
            traction: traction(snapshot, heuristics),
            team_quality: team_quality(snapshot, knowledge),
            market_size: market_size(snapshot, knowledge, heuristics),
            technical_feasibility: Score0To100::new(snapshot.metrics.technical_feasibility),
            financial_health: financial_health(snapshot, heuristics),
        }
    }

    pub fn get(&self, dimension: Dimension) -> Score0To100 {
        match dimension {
            Dimension::Traction => self.traction,
            Dimension::TeamQuality => self.team_quality,
            Dimension::MarketSize => self.market_size,
            Dimension::TechnicalFeasibility => self.technical_feasibility,
            Dimension::FinancialHealth => self.financial_health,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Score0To100)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

fn traction(snapshot: &ProjectSnapshot, heuristics: &Heuristics) -> Score0To100 {
    let m = &snapshot.metrics;
    let users = Score0To100::new(m.user_count / heuristics.user_target * 100.0);
    let revenue = Score0To100::from_fraction(m.revenue_growth);
    let engagement = Score0To100::new(m.user_engagement);
    let share = Score0To100::from_fraction(m.market_share);

    weighted_sum(&[(users, 0.30), (revenue, 0.35), (engagement, 0.20), (share, 0.15)])
}

fn team_size_multiplier(team_size: f64) -> f64 {
    if team_size < 3.0 {
        0.7
    } else if team_size < 5.0 {
        0.85
    } else if team_size < 8.0 {
        1.0
    } else {
        1.1
    }
}

fn team_quality(snapshot: &ProjectSnapshot, knowledge: &KnowledgeBase) -> Score0To100 {
    let base = knowledge
        .organizations
        .base_score(&snapshot.profile.organization);
    Score0To100::new(base * team_size_multiplier(snapshot.metrics.team_size))
}

/// Serviceable market in millions: the sector TAM scaled by demand and the
/// serviceable fraction.
pub fn serviceable_market_millions(
    sector: &Sector,
    market_demand: f64,
    knowledge: &KnowledgeBase,
    heuristics: &Heuristics,
) -> f64 {
    let demand = market_demand.clamp(0.0, 100.0) / 100.0;
    knowledge.sectors.tam_millions(sector) * demand * heuristics.sam_fraction
}

fn market_size(
    snapshot: &ProjectSnapshot,
    knowledge: &KnowledgeBase,
    heuristics: &Heuristics,
) -> Score0To100 {
    let sam = serviceable_market_millions(
        &snapshot.profile.sector,
        snapshot.metrics.market_demand,
        knowledge,
        heuristics,
    );
    let midpoint = heuristics.sam_midpoint_millions;
    let ceiling = heuristics.sam_ceiling_millions;

    // Piecewise linear: [0, midpoint] -> [0, 50], [midpoint, ceiling] -> [50, 100]
    if sam < midpoint {
        Score0To100::new(sam / midpoint * 50.0)
    } else {
        Score0To100::new(50.0 + (sam - midpoint) / (ceiling - midpoint) * 50.0)
    }
}

fn financial_health(snapshot: &ProjectSnapshot, heuristics: &Heuristics) -> Score0To100 {
    let m = &snapshot.metrics;
    weighted_sum(&[
        (runway_score(m, heuristics), 0.40),
        (Score0To100::from_fraction(m.rat_completion_rate), 0.35),
        (roi_score(m), 0.25),
    ])
}
