use serde::{Deserialize, Serialize};

use super::dimensions::{Dimension, DimensionScores};
use crate::config::IrlWeights;
use crate::core::{weighted_sum, InvestorAppeal, IrlGrade, Score0To100};

/// Dimensions at or above this count as strengths, below it as weaknesses.
const STRENGTH_FLOOR: f64 = 60.0;

/// Investor Readiness Level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrlScore {
    pub score: Score0To100,
    /// Weighted dimension composite before blending in success probability.
    pub composite: Score0To100,
    pub grade: IrlGrade,
    pub appeal: InvestorAppeal,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub breakdown: DimensionScores,
}

impl IrlScore {
    pub fn compute(
        dimensions: &DimensionScores,
        success_probability: f64,
        weights: &IrlWeights,
    ) -> Self {
        let composite = weighted_sum(&[
            (dimensions.traction, weights.traction),
            (dimensions.team_quality, weights.team_quality),
            (dimensions.market_size, weights.market_size),
            (dimensions.technical_feasibility, weights.technical_feasibility),
            (dimensions.financial_health, weights.financial_health),
        ]);
        let score = weighted_sum(&[
            (composite, weights.model_blend),
            (Score0To100::new(success_probability), 1.0 - weights.model_blend),
        ]);

        let (strengths, weaknesses) = strengths_and_weaknesses(dimensions);

        Self {
            score,
            composite,
            grade: IrlGrade::from_score(score.value()),
            appeal: InvestorAppeal::from_irl(score.value()),
            strengths,
            weaknesses,
            breakdown: *dimensions,
        }
    }
}

fn describe(dimension: Dimension, score: Score0To100) -> String {
    format!("{} ({:.0}/100)", dimension.label(), score.value())
}

fn strengths_and_weaknesses(dimensions: &DimensionScores) -> (Vec<String>, Vec<String>) {
    let mut ranked: Vec<(Dimension, Score0To100)> = dimensions.iter().collect();
    ranked.sort_by(|a, b| b.1.value().total_cmp(&a.1.value()));

    let strengths = ranked
        .iter()
        .filter(|(_, s)| s.value() >= STRENGTH_FLOOR)
        .take(2)
        .map(|(d, s)| describe(*d, *s))
        .collect();

    let weaknesses = ranked
        .iter()
        .rev()
        .filter(|(_, s)| s.value() < STRENGTH_FLOOR)
        .take(2)
        .map(|(d, s)| describe(*d, *s))
        .collect();

    (strengths, weaknesses)
}
