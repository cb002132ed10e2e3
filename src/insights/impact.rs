use serde::{Deserialize, Serialize};

use crate::config::Heuristics;
use crate::core::{Feature, ImpactTier, ProjectSnapshot};
use crate::knowledge::KnowledgeBase;
use crate::scoring::runway_months;

/// Feature-specific business consequences attached to an insight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BusinessImpact {
    Funding {
        gap_percentage: f64,
        months_to_depletion: u32,
        failure_probability: f64,
        liquidity_risk: ImpactTier,
    },
    Validation {
        product_market_fit_risk: f64,
        pivot_probability: f64,
    },
    Execution {
        budget_overrun_risk: f64,
        execution_failure_probability: f64,
    },
    Demand {
        cac_increase_percentage: f64,
        saturation_risk: ImpactTier,
    },
    Team {
        team_gap: f64,
        delay_risk: ImpactTier,
    },
    Generic {
        attribution_impact: f64,
    },
}

impl BusinessImpact {
    pub fn compute(
        feature: Feature,
        attribution: f64,
        snapshot: &ProjectSnapshot,
        knowledge: &KnowledgeBase,
        heuristics: &Heuristics,
    ) -> Self {
        let metrics = &snapshot.metrics;
        let value = metrics.get(feature);

        match feature {
            Feature::Budget => {
                let benchmark = knowledge.sectors.benchmark(&snapshot.profile.sector);
                let gap_percentage = if benchmark.average_budget > 0.0 {
                    ((benchmark.average_budget - value) / benchmark.average_budget * 100.0)
                        .max(0.0)
                } else {
                    0.0
                };
                let liquidity_risk = if gap_percentage > 50.0 {
                    ImpactTier::VeryHigh
                } else if gap_percentage > 20.0 {
                    ImpactTier::Moderate
                } else {
                    ImpactTier::Low
                };
                BusinessImpact::Funding {
                    gap_percentage,
                    months_to_depletion: runway_months(metrics, heuristics).floor() as u32,
                    failure_probability: (50.0 + attribution.abs() * 100.0).min(95.0),
                    liquidity_risk,
                }
            }
            Feature::HypothesisValidationRate => {
                let missing = 1.0 - value.min(1.0);
                BusinessImpact::Validation {
                    product_market_fit_risk: (40.0 + missing * 100.0).min(95.0),
                    pivot_probability: (30.0 + missing * 80.0).min(90.0),
                }
            }
            Feature::RatCompletionRate => {
                let missing = 1.0 - value.min(1.0);
                BusinessImpact::Execution {
                    budget_overrun_risk: (30.0 + missing * 100.0).min(90.0),
                    execution_failure_probability: (25.0 + missing * 90.0).min(85.0),
                }
            }
            Feature::MarketDemand => {
                let saturation_risk = if value < 30.0 {
                    ImpactTier::High
                } else if value < 60.0 {
                    ImpactTier::Moderate
                } else {
                    ImpactTier::Low
                };
                BusinessImpact::Demand {
                    cac_increase_percentage: ((100.0 - value) * 3.0).max(0.0),
                    saturation_risk,
                }
            }
            Feature::TeamSize => {
                let benchmark = knowledge.sectors.benchmark(&snapshot.profile.sector);
                let team_gap = (benchmark.average_team_size - value).max(0.0);
                let delay_risk = if team_gap > 3.0 {
                    ImpactTier::High
                } else if team_gap > 1.0 {
                    ImpactTier::Moderate
                } else {
                    ImpactTier::Low
                };
                BusinessImpact::Team {
                    team_gap,
                    delay_risk,
                }
            }
            _ => BusinessImpact::Generic {
                attribution_impact: attribution,
            },
        }
    }

    /// One-line rendering for reports.
    pub fn summary(&self) -> String {
        match self {
            BusinessImpact::Funding {
                failure_probability,
                liquidity_risk,
                ..
            } => format!(
                "Failure probability: {:.0}% | Liquidity risk: {}",
                failure_probability,
                liquidity_risk.label()
            ),
            BusinessImpact::Validation {
                product_market_fit_risk,
                ..
            } => format!(
                "Probability of building a product the market does not need: {:.0}%",
                product_market_fit_risk
            ),
            BusinessImpact::Execution {
                budget_overrun_risk,
                execution_failure_probability,
            } => format!(
                "Budget overrun risk: {:.0}% | Execution failure probability: {:.0}%",
                budget_overrun_risk, execution_failure_probability
            ),
            BusinessImpact::Demand {
                cac_increase_percentage,
                saturation_risk,
            } => format!(
                "Expected CAC increase: {:.0}% | Market saturation risk: {}",
                cac_increase_percentage,
                saturation_risk.label()
            ),
            BusinessImpact::Team {
                team_gap,
                delay_risk,
            } => format!(
                "Team shortfall: {:.0} members | Delay risk: {}",
                team_gap,
                delay_risk.label()
            ),
            BusinessImpact::Generic { attribution_impact } => {
                format!("Attribution impact: {:.2}", attribution_impact)
            }
        }
    }

    /// Months until cash runs out, for impacts that carry it.
    pub fn months_to_depletion(&self) -> Option<u32> {
        match self {
            BusinessImpact::Funding {
                months_to_depletion,
                ..
            } => Some(*months_to_depletion),
            _ => None,
        }
    }

    pub fn gap_percentage(&self) -> Option<f64> {
        match self {
            BusinessImpact::Funding { gap_percentage, .. } => Some(*gap_percentage),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeatureVector, ProjectInput};

    fn snapshot(pairs: &[(&str, f64)]) -> ProjectSnapshot {
        let features: FeatureVector = pairs.iter().map(|(k, v)| (*k, *v)).collect();
        ProjectSnapshot::from_input(&ProjectInput::new(features))
    }

    fn compute(feature: Feature, attribution: f64, pairs: &[(&str, f64)]) -> BusinessImpact {
        BusinessImpact::compute(
            feature,
            attribution,
            &snapshot(pairs),
            KnowledgeBase::standard(),
            &Heuristics::default(),
        )
    }

    #[test]
    fn budget_gap_against_fintech_average() {
        let impact = compute(Feature::Budget, -0.25, &[("budget", 150_000.0)]);
        assert_eq!(
            impact,
            BusinessImpact::Funding {
                gap_percentage: 81.25,
                months_to_depletion: 10,
                failure_probability: 75.0,
                liquidity_risk: ImpactTier::VeryHigh,
            }
        );
        assert_eq!(
            impact.summary(),
            "Failure probability: 75% | Liquidity risk: very high"
        );
    }

    #[test]
    fn budget_above_average_has_no_gap() {
        let impact = compute(Feature::Budget, -0.9, &[("budget", 2_000_000.0)]);
        assert_eq!(impact.gap_percentage(), Some(0.0));
        if let BusinessImpact::Funding {
            failure_probability,
            liquidity_risk,
            ..
        } = impact
        {
            assert_eq!(failure_probability, 95.0);
            assert_eq!(liquidity_risk, ImpactTier::Low);
        }
    }

    #[test]
    fn zero_budget_has_zero_runway() {
        let impact = compute(Feature::Budget, -0.35, &[]);
        assert_eq!(impact.months_to_depletion(), Some(0));
    }

    #[test]
    fn demand_and_team_tiers() {
        let demand = compute(Feature::MarketDemand, -0.28, &[("market_demand", 25.0)]);
        assert_eq!(
            demand.summary(),
            "Expected CAC increase: 225% | Market saturation risk: high"
        );

        let team = compute(Feature::TeamSize, -0.25, &[("team_size", 3.0)]);
        assert_eq!(team.summary(), "Team shortfall: 3 members | Delay risk: moderate");
    }

    #[test]
    fn other_features_report_attribution() {
        let impact = compute(Feature::TechnicalFeasibility, -0.3, &[]);
        assert_eq!(impact.summary(), "Attribution impact: -0.30");
    }
}
