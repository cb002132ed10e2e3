//! What-if scenarios.
//!
//! A scenario is a named set of feature modifications applied to a baseline
//! project. The engine reruns the full pipeline on the modified project and
//! reports how every score moved. Batches run independently per scenario,
//! in parallel when enabled, and are ranked by ICI improvement afterwards.
//!
//! Before any modification is applied, a baseline without an explicit
//! `monthly_burn` gets its derived burn written in. Capital injected by a
//! scenario then extends runway instead of raising the burn with it.

pub mod impact;
pub mod modification;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, info_span, warn};

use crate::config::ParallelConfig;
use crate::core::{Feature, FeatureVector, ProjectInput, ProjectMetrics, RawValue, RiskLevel};
use crate::pipeline::{Pipeline, StrategicReport};
use crate::scoring::{monthly_burn, Dimension};

pub use impact::ScenarioImpact;
pub use modification::{apply_modification, Modification, ScenarioError};

/// Modification key addressing the success probability instead of a feature.
pub const SUCCESS_PROBABILITY_KEY: &str = "success_probability";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub modifications: BTreeMap<String, RawValue>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            modifications: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.modifications.insert(key.into(), value.into());
        self
    }
}

/// Headline scores of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub ici: f64,
    pub irl: f64,
    pub success_probability: f64,
    pub risk_level: RiskLevel,
}

impl From<&StrategicReport> for ScoreSummary {
    fn from(report: &StrategicReport) -> Self {
        Self {
            ici: report.strategic_dashboard.ici_score.value(),
            irl: report.investor_readiness.irl_score.value(),
            success_probability: report.success_probability,
            risk_level: report.ceo_insights.risk_level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionChange {
    pub dimension: String,
    pub baseline: f64,
    pub modified: f64,
    pub change: f64,
    /// Relative change in percent; zero when the baseline is zero.
    pub change_pct: f64,
}

impl DimensionChange {
    fn new(dimension: &str, baseline: f64, modified: f64) -> Self {
        let change = modified - baseline;
        Self {
            dimension: dimension.to_string(),
            baseline,
            modified,
            change,
            change_pct: if baseline == 0.0 {
                0.0
            } else {
                change / baseline * 100.0
            },
        }
    }
}

/// Baseline against modified scores for a scenario that applied cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub baseline: ScoreSummary,
    pub modified: ScoreSummary,
    pub ici_improvement: f64,
    pub irl_improvement: f64,
    pub success_improvement: f64,
    pub dimension_changes: Vec<DimensionChange>,
    pub impact: ScenarioImpact,
    pub recommendation: String,
    pub modified_features: FeatureVector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario_name: String,
    pub modifications: BTreeMap<String, RawValue>,
    /// Keys left untouched because the baseline has no such value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignored_modifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ScenarioComparison>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScenarioOutcome {
    pub fn ici_improvement(&self) -> Option<f64> {
        self.comparison.as_ref().map(|c| c.ici_improvement)
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// A baseline project with a scenario applied.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedScenario {
    pub input: ProjectInput,
    pub ignored: Vec<String>,
}

pub struct ScenarioEngine<'a> {
    pipeline: Pipeline<'a>,
    parallel: ParallelConfig,
}

impl<'a> ScenarioEngine<'a> {
    pub fn new(pipeline: Pipeline<'a>) -> Self {
        Self {
            parallel: pipeline.config().parallel.clone(),
            pipeline,
        }
    }

    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Apply a scenario's modifications to a copy of the baseline.
    pub fn apply(
        &self,
        baseline: &ProjectInput,
        scenario: &Scenario,
    ) -> Result<AppliedScenario, ScenarioError> {
        let mut input = baseline.clone();
        self.pin_burn(&mut input);

        let mut ignored = Vec::new();
        for (key, raw) in &scenario.modifications {
            let modification = Modification::parse(key, raw)?;

            if key.as_str() == SUCCESS_PROBABILITY_KEY {
                match &input.success_probability {
                    Some(original) => {
                        input.success_probability =
                            Some(apply_modification(key, original, modification)?);
                    }
                    None => ignored.push(key.clone()),
                }
                continue;
            }

            match input.features.get(key) {
                Some(original) => {
                    let updated = apply_modification(key, original, modification)?;
                    input.features.insert(key.clone(), updated);
                }
                None => ignored.push(key.clone()),
            }
        }

        Ok(AppliedScenario { input, ignored })
    }

    fn pin_burn(&self, input: &mut ProjectInput) {
        let key = Feature::MonthlyBurn.key();
        if input.features.contains(key) {
            return;
        }
        let metrics = ProjectMetrics::from_features(&input.features);
        let burn = monthly_burn(&metrics, &self.pipeline.config().heuristics);
        input.features.insert(key, burn);
    }

    /// Run one scenario against a baseline.
    pub fn run(&self, baseline: &ProjectInput, scenario: &Scenario) -> ScenarioOutcome {
        let report = self.pipeline.analyze(baseline);
        self.run_against(baseline, &report, 0, scenario)
    }

    /// Run every scenario against one baseline and rank by ICI improvement.
    /// Scenarios that fail to apply are kept, after all successful ones.
    pub fn run_batch(&self, baseline: &ProjectInput, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        let span = info_span!("whatif", scenarios = scenarios.len());
        let _enter = span.enter();

        let report = self.pipeline.analyze(baseline);
        let run = |(index, scenario): (usize, &Scenario)| {
            self.run_against(baseline, &report, index, scenario)
        };

        let mut outcomes: Vec<ScenarioOutcome> = if self.parallel.enabled && scenarios.len() > 1 {
            self.in_pool(|| scenarios.par_iter().enumerate().map(run).collect())
        } else {
            scenarios.iter().enumerate().map(run).collect()
        };

        rank(&mut outcomes);
        outcomes
    }

    fn in_pool<T: Send>(&self, op: impl FnOnce() -> T + Send) -> T {
        let Some(threads) = self.parallel.max_concurrency.filter(|n| *n > 0) else {
            return op();
        };
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(op),
            Err(e) => {
                warn!(error = %e, "could not build scenario thread pool, using the global pool");
                op()
            }
        }
    }

    fn run_against(
        &self,
        baseline: &ProjectInput,
        baseline_report: &StrategicReport,
        index: usize,
        scenario: &Scenario,
    ) -> ScenarioOutcome {
        let scenario_name = scenario
            .name
            .clone()
            .unwrap_or_else(|| format!("Scenario {}", index + 1));

        let applied = match self.apply(baseline, scenario) {
            Ok(applied) => applied,
            Err(e) => {
                warn!(scenario = %scenario_name, error = %e, "scenario skipped");
                return ScenarioOutcome {
                    scenario_name,
                    modifications: scenario.modifications.clone(),
                    ignored_modifications: Vec::new(),
                    comparison: None,
                    error: Some(e.to_string()),
                };
            }
        };

        let modified_report = self.pipeline.analyze(&applied.input);
        let comparison = compare(baseline_report, &modified_report, applied.input.features);
        debug!(
            scenario = %scenario_name,
            ici_improvement = comparison.ici_improvement,
            impact = %comparison.impact,
            "scenario evaluated"
        );

        ScenarioOutcome {
            scenario_name,
            modifications: scenario.modifications.clone(),
            ignored_modifications: applied.ignored,
            comparison: Some(comparison),
            error: None,
        }
    }
}

fn compare(
    baseline: &StrategicReport,
    modified: &StrategicReport,
    modified_features: FeatureVector,
) -> ScenarioComparison {
    let before = ScoreSummary::from(baseline);
    let after = ScoreSummary::from(modified);
    let ici_improvement = after.ici - before.ici;
    let impact = ScenarioImpact::from_ici_delta(ici_improvement);

    ScenarioComparison {
        baseline: before,
        modified: after,
        ici_improvement,
        irl_improvement: after.irl - before.irl,
        success_improvement: after.success_probability - before.success_probability,
        dimension_changes: dimension_changes(baseline, modified),
        impact,
        recommendation: impact.recommendation(ici_improvement),
        modified_features,
    }
}

fn dimension_changes(baseline: &StrategicReport, modified: &StrategicReport) -> Vec<DimensionChange> {
    let before = &baseline.investor_readiness.readiness_breakdown;
    let after = &modified.investor_readiness.readiness_breakdown;
    let mut changes: Vec<DimensionChange> = Dimension::ALL
        .into_iter()
        .map(|d| DimensionChange::new(d.key(), before.get(d).value(), after.get(d).value()))
        .collect();

    let b = &baseline.strategic_dashboard.ici_breakdown;
    let a = &modified.strategic_dashboard.ici_breakdown;
    changes.extend([
        DimensionChange::new("market_fit", b.market_fit.value(), a.market_fit.value()),
        DimensionChange::new(
            "execution_readiness",
            b.execution_readiness.value(),
            a.execution_readiness.value(),
        ),
        DimensionChange::new(
            "financial_sustainability",
            b.financial_sustainability.value(),
            a.financial_sustainability.value(),
        ),
    ]);
    changes
}

/// Best ICI improvement first; failed scenarios last. Stable, so equal
/// improvements keep their input order.
fn rank(outcomes: &mut [ScenarioOutcome]) {
    outcomes.sort_by(|a, b| match (a.ici_improvement(), b.ici_improvement()) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PitchmapConfig;
    use crate::knowledge::KnowledgeBase;

    fn baseline() -> ProjectInput {
        let mut features = FeatureVector::new();
        features.insert("budget", 500_000i64);
        features.insert("team_size", 5i64);
        features.insert("hypothesis_validation_rate", "60%");
        ProjectInput::new(features).with_success_probability(65.0)
    }

    #[test]
    fn burn_is_pinned_before_modifications() {
        let config = PitchmapConfig::default();
        let engine = ScenarioEngine::new(Pipeline::new(KnowledgeBase::standard(), &config));
        let applied = engine
            .apply(&baseline(), &Scenario::new("cash").with("budget", "+350000"))
            .unwrap();

        assert_eq!(applied.input.features.get("budget"), Some(&RawValue::Integer(850_000)));
        assert_eq!(
            applied.input.features.get("monthly_burn"),
            Some(&RawValue::Float(50_000.0))
        );
    }

    #[test]
    fn absent_keys_are_ignored() {
        let config = PitchmapConfig::default();
        let engine = ScenarioEngine::new(Pipeline::new(KnowledgeBase::standard(), &config));
        let applied = engine
            .apply(&baseline(), &Scenario::new("users").with("user_count", "+1000"))
            .unwrap();
        assert_eq!(applied.ignored, vec!["user_count".to_string()]);
        assert!(!applied.input.features.contains("user_count"));
    }

    #[test]
    fn success_probability_is_modifiable() {
        let config = PitchmapConfig::default();
        let engine = ScenarioEngine::new(Pipeline::new(KnowledgeBase::standard(), &config));
        let outcome = engine.run(
            &baseline(),
            &Scenario::new("confidence").with(SUCCESS_PROBABILITY_KEY, "+10"),
        );
        let comparison = outcome.comparison.unwrap();
        assert!((comparison.success_improvement - 10.0).abs() < 1e-9);
        assert!(comparison.ici_improvement > 0.0);
    }

    #[test]
    fn unnamed_scenarios_get_positional_names() {
        let config = PitchmapConfig::default();
        let engine = ScenarioEngine::new(Pipeline::new(KnowledgeBase::standard(), &config))
            .with_parallel(ParallelConfig::sequential());
        let scenarios = vec![
            Scenario::default(),
            Scenario {
                name: None,
                modifications: [("budget".to_string(), RawValue::from("oops"))]
                    .into_iter()
                    .collect(),
            },
        ];
        let outcomes = engine.run_batch(&baseline(), &scenarios);

        assert_eq!(outcomes[0].scenario_name, "Scenario 1");
        assert_eq!(outcomes[1].scenario_name, "Scenario 2");
        assert!(outcomes[1].error.is_some());
    }

    #[test]
    fn dimension_change_pct_guards_zero() {
        let change = DimensionChange::new("traction", 0.0, 12.0);
        assert_eq!(change.change_pct, 0.0);
        let change = DimensionChange::new("traction", 20.0, 25.0);
        assert_eq!(change.change_pct, 25.0);
    }
}
