//! The scoring pipeline.
//!
//! A strict chain of pure stages over one immutable [`ProjectSnapshot`]:
//!
//! 1. normalize the raw input into a snapshot
//! 2. take the supplied attributions, or synthesize fallback ones
//! 3. synthesize insights
//! 4. assemble roadmaps for the top pressing insights
//! 5. score the five dimensions, the IRL and the ICI
//! 6. match investors and build investment scenarios
//! 7. build the dashboard and the final report
//!
//! [`Pipeline::analyze`] never fails. Malformed values are coerced and
//! recorded on the report instead.

pub mod report;

use tracing::{debug, info_span, warn};

use crate::attribution::fallback_attributions;
use crate::config::PitchmapConfig;
use crate::core::{AttributionSet, ProjectInput, ProjectSnapshot};
use crate::dashboard::build_dashboard;
use crate::insights::InsightSynthesizer;
use crate::investors::{build_scenarios, InvestorMatcher};
use crate::knowledge::KnowledgeBase;
use crate::roadmap::RoadmapAssembler;
use crate::scoring::{DimensionScores, IciScore, IrlScore};

pub use report::{key_recommendations, overall_assessment, AttributionSource, StrategicReport};

/// Scores computed for one snapshot, without the narrative layers.
///
/// The what-if engine compares these between a baseline and a variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub dimensions: DimensionScores,
    pub irl: IrlScore,
    pub ici: IciScore,
}

/// Runs the full analysis against shared, read-only knowledge and config.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    knowledge: &'a KnowledgeBase,
    config: &'a PitchmapConfig,
}

impl<'a> Pipeline<'a> {
    pub fn new(knowledge: &'a KnowledgeBase, config: &'a PitchmapConfig) -> Self {
        Self { knowledge, config }
    }

    pub fn knowledge(&self) -> &'a KnowledgeBase {
        self.knowledge
    }

    pub fn config(&self) -> &'a PitchmapConfig {
        self.config
    }

    pub fn analyze(&self, input: &ProjectInput) -> StrategicReport {
        let snapshot = ProjectSnapshot::from_input(input);
        self.analyze_snapshot(&snapshot, input.attributions.as_ref())
    }

    /// Analyze an already normalized snapshot. Empty or absent attributions
    /// are replaced by the fallback rules.
    pub fn analyze_snapshot(
        &self,
        snapshot: &ProjectSnapshot,
        attributions: Option<&AttributionSet>,
    ) -> StrategicReport {
        let span = info_span!("pipeline", project = %snapshot.profile.id);
        let _enter = span.enter();

        for coercion in &snapshot.metrics.coercions {
            if coercion.reason == crate::core::CoercionReason::Unparsable {
                warn!(
                    feature = %coercion.feature,
                    value = coercion.value,
                    "unparsable feature value coerced"
                );
            }
        }

        let (attributions, attribution_source) = match attributions {
            Some(supplied) if !supplied.is_empty() => (supplied.clone(), AttributionSource::Supplied),
            _ => {
                debug!("no attributions supplied, using fallback rules");
                (
                    fallback_attributions(&snapshot.metrics),
                    AttributionSource::Fallback,
                )
            }
        };

        let config = self.config;
        let insights = InsightSynthesizer::new(self.knowledge, &config.attribution, &config.heuristics)
            .synthesize(snapshot, &attributions);

        let roadmaps =
            RoadmapAssembler::new(self.knowledge).assemble(&insights.critical_insights, snapshot);
        debug!(
            primary = %roadmaps.primary.id,
            supporting = roadmaps.supporting.len(),
            "assembled roadmaps"
        );

        let scores = self.score(snapshot);

        let readiness = InvestorMatcher::new(self.knowledge, &config.heuristics)
            .assess(snapshot, &scores.irl);
        let scenarios = build_scenarios(&readiness, self.knowledge);

        let dashboard = build_dashboard(
            snapshot,
            &insights,
            &scores.ici,
            &roadmaps.primary,
            self.knowledge,
        );

        let overall = overall_assessment(
            scores.ici.score.value(),
            scores.irl.score.value(),
            snapshot.success_probability,
        );
        let recommendations = key_recommendations(&insights, &dashboard);

        debug!(
            ici = scores.ici.score.value(),
            irl = scores.irl.score.value(),
            "report assembled"
        );

        StrategicReport {
            project: snapshot.profile.clone(),
            success_probability: snapshot.success_probability,
            attribution_source,
            ceo_insights: insights,
            investor_readiness: readiness,
            investment_scenarios: scenarios,
            strategic_dashboard: dashboard,
            actionable_roadmap: roadmaps.primary,
            supporting_roadmaps: roadmaps.supporting,
            overall_assessment: overall,
            key_recommendations: recommendations,
            coercions: snapshot.metrics.coercions.clone(),
        }
    }

    /// Dimension, IRL and ICI scores only.
    pub fn score(&self, snapshot: &ProjectSnapshot) -> ScoreCard {
        let config = self.config;
        let dimensions = DimensionScores::compute(snapshot, self.knowledge, &config.heuristics);
        let irl = IrlScore::compute(&dimensions, snapshot.success_probability, &config.irl_weights);
        let ici = IciScore::compute(snapshot, irl.score, &config.ici_weights, &config.heuristics);
        debug!(
            irl = irl.score.value(),
            ici = ici.score.value(),
            "scored snapshot"
        );

        ScoreCard {
            dimensions,
            irl,
            ici,
        }
    }
}
