//! Configuration for the scoring pipeline.
//!
//! Everything tunable lives in one [`PitchmapConfig`], loaded from
//! `.pitchmap.toml` (searched upward from the working directory) or from an
//! explicit path. Every section is optional and falls back to the built-in
//! defaults; a section that fails validation is replaced by its defaults
//! with a warning rather than aborting the run.

pub mod heuristics;
pub mod loader;
pub mod parallel;
pub mod scoring;
pub mod thresholds;

use serde::{Deserialize, Serialize};

pub use heuristics::Heuristics;
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;
pub use scoring::{IciWeights, IrlWeights};
pub use thresholds::{AttributionThresholds, ThresholdBands};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchmapConfig {
    #[serde(default)]
    pub attribution: AttributionThresholds,

    #[serde(default)]
    pub irl_weights: IrlWeights,

    #[serde(default)]
    pub ici_weights: IciWeights,

    #[serde(default)]
    pub heuristics: Heuristics,

    #[serde(default)]
    pub parallel: ParallelConfig,
}

/// Default configuration file written by `pitchmap init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# Pitchmap Configuration

# Attribution magnitude bands per feature group. A magnitude must strictly
# exceed a band to land in it.
[attribution]
insight_cutoff = -0.05

[attribution.critical_process]
high = 0.35
medium = 0.20
low = 0.10

[attribution.financial]
high = 0.30
medium = 0.15
low = 0.08

[attribution.market]
high = 0.25
medium = 0.15
low = 0.08

[attribution.team]
medium = 0.20
low = 0.10

[attribution.technical]
high = 0.25
medium = 0.15

[irl_weights]
traction = 0.30
team_quality = 0.20
market_size = 0.20
technical_feasibility = 0.15
financial_health = 0.15
model_blend = 0.70

[ici_weights]
success_probability = 0.30
investor_readiness = 0.25
market_fit = 0.20
execution_readiness = 0.15
financial_sustainability = 0.10

[heuristics]
burn_fraction = 0.10
runway_target_months = 18.0
user_target = 10000.0
sam_fraction = 0.30
sam_midpoint_millions = 100.0
sam_ceiling_millions = 500.0
team_size_normalizer = 10.0
valuation_spread = 0.30
max_insights = 5

[parallel]
enabled = true
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_template_matches_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(parsed, PitchmapConfig::default());
    }
}
