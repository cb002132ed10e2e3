use serde::{Deserialize, Serialize};

use crate::core::{Coercion, ProjectProfile};
use crate::dashboard::StrategicDashboard;
use crate::insights::CeoInsights;
use crate::investors::{InvestmentScenario, InvestorReadiness};
use crate::roadmap::ActionableRoadmap;

const MAX_KEY_RECOMMENDATIONS: usize = 5;

/// Where the attribution values driving the insights came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributionSource {
    /// Supplied with the project by an external explainability service.
    Supplied,
    /// Synthesized from the fixed fallback rules.
    Fallback,
}

/// The complete analysis of one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicReport {
    pub project: ProjectProfile,
    pub success_probability: f64,
    pub attribution_source: AttributionSource,
    pub ceo_insights: CeoInsights,
    pub investor_readiness: InvestorReadiness,
    pub investment_scenarios: Vec<InvestmentScenario>,
    pub strategic_dashboard: StrategicDashboard,
    pub actionable_roadmap: ActionableRoadmap,
    pub supporting_roadmaps: Vec<ActionableRoadmap>,
    pub overall_assessment: String,
    pub key_recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coercions: Vec<Coercion>,
}

/// One-paragraph verdict from the mean of ICI, IRL and success probability.
pub fn overall_assessment(ici: f64, irl: f64, success_probability: f64) -> String {
    let mean = (ici + irl + success_probability) / 3.0;

    let text = if mean >= 75.0 {
        "The project shows very strong potential with solid fundamentals. \
         Proceed with confidence and focus on execution and growth."
    } else if mean >= 60.0 {
        "The project is promising but faces real challenges. \
         Address the critical risks before scaling."
    } else if mean >= 45.0 {
        "The project faces moderate-to-high challenges. \
         Reassess the strategy and fix the fundamental weaknesses before investing further."
    } else {
        "The project faces major challenges that threaten its viability. \
         A radical restructuring or a pivot is required."
    };
    text.to_string()
}

/// Top two insight titles followed by the dashboard's recommendations.
pub fn key_recommendations(insights: &CeoInsights, dashboard: &StrategicDashboard) -> Vec<String> {
    insights
        .critical_insights
        .iter()
        .take(2)
        .map(|i| i.title.clone())
        .chain(dashboard.strategic_recommendations.iter().take(3).cloned())
        .take(MAX_KEY_RECOMMENDATIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_bands() {
        assert!(overall_assessment(80.0, 75.0, 70.0).starts_with("The project shows very strong"));
        assert!(overall_assessment(60.0, 60.0, 60.0).starts_with("The project is promising"));
        assert!(overall_assessment(45.0, 45.0, 45.0).contains("moderate-to-high"));
        assert!(overall_assessment(44.0, 45.0, 45.0).contains("pivot"));
    }

    #[test]
    fn source_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&AttributionSource::Fallback).unwrap(),
            "\"fallback\""
        );
    }
}
