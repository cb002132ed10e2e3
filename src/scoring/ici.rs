use serde::{Deserialize, Serialize};

use super::{roi_score, runway_score};
use crate::config::{Heuristics, IciWeights};
use crate::core::{weighted_sum, ConfidenceLevel, ProjectSnapshot, Score0To100};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IciComponent {
    SuccessProbability,
    InvestorReadiness,
    MarketFit,
    ExecutionReadiness,
    FinancialSustainability,
}

impl IciComponent {
    pub fn label(self) -> &'static str {
        match self {
            IciComponent::SuccessProbability => "Success probability",
            IciComponent::InvestorReadiness => "Investor readiness",
            IciComponent::MarketFit => "Market fit",
            IciComponent::ExecutionReadiness => "Execution readiness",
            IciComponent::FinancialSustainability => "Financial sustainability",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IciComponents {
    pub success_probability: Score0To100,
    pub investor_readiness: Score0To100,
    pub market_fit: Score0To100,
    pub execution_readiness: Score0To100,
    pub financial_sustainability: Score0To100,
}

impl IciComponents {
    fn ranked(&self) -> [(IciComponent, Score0To100); 5] {
        [
            (IciComponent::SuccessProbability, self.success_probability),
            (IciComponent::InvestorReadiness, self.investor_readiness),
            (IciComponent::MarketFit, self.market_fit),
            (IciComponent::ExecutionReadiness, self.execution_readiness),
            (IciComponent::FinancialSustainability, self.financial_sustainability),
        ]
    }

    /// Highest-scoring component; the earliest wins a tie.
    pub fn strongest(&self) -> IciComponent {
        let ranked = self.ranked();
        ranked[1..]
            .iter()
            .fold(ranked[0], |best, c| if c.1 > best.1 { *c } else { best })
            .0
    }

    /// Lowest-scoring component; the earliest wins a tie.
    pub fn weakest(&self) -> IciComponent {
        let ranked = self.ranked();
        ranked[1..]
            .iter()
            .fold(ranked[0], |worst, c| if c.1 < worst.1 { *c } else { worst })
            .0
    }
}

/// Innovation Confidence Index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IciScore {
    pub score: Score0To100,
    pub confidence: ConfidenceLevel,
    pub components: IciComponents,
}

impl IciScore {
    pub fn compute(
        snapshot: &ProjectSnapshot,
        irl: Score0To100,
        weights: &IciWeights,
        heuristics: &Heuristics,
    ) -> Self {
        let m = &snapshot.metrics;

        let market_fit = weighted_sum(&[
            (Score0To100::new(m.market_demand), 0.40),
            (Score0To100::from_fraction(m.hypothesis_validation_rate), 0.35),
            (Score0To100::new(m.user_engagement), 0.25),
        ]);

        let execution_readiness = weighted_sum(&[
            (
                Score0To100::new(m.team_size / heuristics.team_size_normalizer * 100.0),
                0.30,
            ),
            (Score0To100::new(m.technical_feasibility), 0.40),
            (Score0To100::from_fraction(m.rat_completion_rate), 0.30),
        ]);

        let financial_sustainability = weighted_sum(&[
            (runway_score(m, heuristics), 0.50),
            (Score0To100::from_fraction(m.revenue_growth), 0.30),
            (roi_score(m), 0.20),
        ]);

        let components = IciComponents {
            success_probability: Score0To100::new(snapshot.success_probability),
            investor_readiness: irl,
            market_fit,
            execution_readiness,
            financial_sustainability,
        };

        let score = weighted_sum(&[
            (components.success_probability, weights.success_probability),
            (components.investor_readiness, weights.investor_readiness),
            (components.market_fit, weights.market_fit),
            (components.execution_readiness, weights.execution_readiness),
            (components.financial_sustainability, weights.financial_sustainability),
        ]);

        Self {
            score,
            confidence: ConfidenceLevel::from_score(score.value()),
            components,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeatureVector, ProjectInput};

    #[test]
    fn components_follow_their_formulas() {
        let features: FeatureVector = [
            ("budget", 500_000.0),
            ("team_size", 5.0),
            ("market_demand", 65.0),
            ("technical_feasibility", 75.0),
            ("hypothesis_validation_rate", 0.6),
            ("rat_completion_rate", 0.55),
            ("revenue_growth", 0.15),
            ("user_engagement", 60.0),
            ("roi", 0.10),
        ]
        .into_iter()
        .collect();
        let snapshot =
            ProjectSnapshot::from_input(&ProjectInput::new(features).with_success_probability(65.0));
        let ici = IciScore::compute(
            &snapshot,
            Score0To100::new(57.94),
            &IciWeights::default(),
            &Heuristics::default(),
        );

        // 0.40*65 + 0.35*60 + 0.25*60
        assert!((ici.components.market_fit.value() - 62.0).abs() < 1e-9);
        // 0.30*50 + 0.40*75 + 0.30*55
        assert!((ici.components.execution_readiness.value() - 61.5).abs() < 1e-9);
        // 0.50*55.56 + 0.30*15 + 0.20*10
        assert!((ici.components.financial_sustainability.value() - 34.28).abs() < 0.01);
        assert_eq!(ici.confidence, ConfidenceLevel::Medium);
    }

    #[test]
    fn strongest_and_weakest_prefer_earliest_on_ties() {
        let flat = IciComponents {
            success_probability: Score0To100::new(40.0),
            investor_readiness: Score0To100::new(40.0),
            market_fit: Score0To100::new(40.0),
            execution_readiness: Score0To100::new(40.0),
            financial_sustainability: Score0To100::new(40.0),
        };
        assert_eq!(flat.strongest(), IciComponent::SuccessProbability);
        assert_eq!(flat.weakest(), IciComponent::SuccessProbability);

        let mixed = IciComponents {
            market_fit: Score0To100::new(90.0),
            financial_sustainability: Score0To100::new(5.0),
            ..flat
        };
        assert_eq!(mixed.strongest(), IciComponent::MarketFit);
        assert_eq!(mixed.weakest(), IciComponent::FinancialSustainability);
    }
}
