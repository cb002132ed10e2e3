use crate::core::{AttributionSet, Feature, ProjectMetrics};

/// Deterministic stand-in for an explainability service: fixed-threshold
/// attributions for the six features an external model would usually score.
pub fn fallback_attributions(metrics: &ProjectMetrics) -> AttributionSet {
    let budget = if metrics.budget < 500_000.0 {
        -0.15
    } else if metrics.budget < 1_000_000.0 {
        -0.05
    } else {
        0.05
    };

    let team = if metrics.team_size < 3.0 {
        -0.08
    } else if metrics.team_size < 5.0 {
        0.0
    } else {
        0.05
    };

    let demand = if metrics.market_demand < 40.0 {
        -0.12
    } else if metrics.market_demand < 60.0 {
        0.0
    } else {
        0.10
    };

    let technical = if metrics.technical_feasibility < 50.0 {
        -0.10
    } else {
        0.05
    };

    let hypothesis = if metrics.hypothesis_validation_rate < 0.5 {
        -0.18
    } else {
        0.08
    };

    let rat = if metrics.rat_completion_rate < 0.5 {
        -0.12
    } else {
        0.06
    };

    [
        (Feature::Budget, budget),
        (Feature::TeamSize, team),
        (Feature::MarketDemand, demand),
        (Feature::TechnicalFeasibility, technical),
        (Feature::HypothesisValidationRate, hypothesis),
        (Feature::RatCompletionRate, rat),
    ]
    .into_iter()
    .map(|(feature, value)| (feature.key(), value))
    .collect()
}
