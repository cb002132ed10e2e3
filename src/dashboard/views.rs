//! Presentation views over the dashboard: the risk heatmap, the executive
//! summary and the roadmap timeline.

use serde::{Deserialize, Serialize};

use crate::core::{ConfidenceLevel, ProjectProfile, Severity};
use crate::insights::Insight;
use crate::roadmap::ActionableRoadmap;
use crate::scoring::IciScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatColor {
    Red,
    Orange,
    Yellow,
    Green,
}

impl From<Severity> for HeatColor {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical => HeatColor::Red,
            Severity::High => HeatColor::Orange,
            Severity::Medium => HeatColor::Yellow,
            Severity::Low => HeatColor::Green,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskCell {
    pub title: String,
    pub severity: Severity,
    pub color: HeatColor,
    pub impact: String,
}

/// One cell per insight, in insight rank order.
pub fn risk_heatmap(insights: &[Insight]) -> Vec<RiskCell> {
    insights
        .iter()
        .map(|insight| RiskCell {
            title: insight.title.clone(),
            severity: insight.severity,
            color: insight.severity.into(),
            impact: insight.impact_summary.clone(),
        })
        .collect()
}

fn tone(ici: f64) -> &'static str {
    if ici >= 70.0 {
        "The project shows strong potential"
    } else if ici >= 50.0 {
        "The project shows promising potential but needs improvement"
    } else {
        "The project faces major challenges that need immediate action"
    }
}

fn confidence_phrase(level: ConfidenceLevel) -> String {
    format!("{} confidence", level.label())
}

/// Dashboard-level executive summary: tone by ICI band, the four derived
/// ICI components, up to three priorities and the time to success.
pub fn executive_summary(
    profile: &ProjectProfile,
    ici: &IciScore,
    success_probability: f64,
    priorities: &[String],
    time_to_success: &str,
) -> String {
    let score = ici.score.value();
    let c = &ici.components;
    let priority_lines: Vec<String> = priorities.iter().take(3).map(|p| format!("- {p}")).collect();

    format!(
        "{title}\n\n\
         {tone}. The Innovation Confidence Index is {score:.1}/100 ({confidence}), \
         with a {success_probability:.0}% probability of success.\n\n\
         Current position:\n\
         - Investor readiness: {readiness:.1}/100\n\
         - Market fit: {market_fit:.1}/100\n\
         - Execution readiness: {execution:.1}/100\n\
         - Financial sustainability: {sustainability:.1}/100\n\n\
         Critical priorities:\n\
         {priorities}\n\n\
         Expected time to success: {time_to_success}",
        title = profile.title,
        tone = tone(score),
        confidence = confidence_phrase(ici.confidence),
        readiness = c.investor_readiness.value(),
        market_fit = c.market_fit.value(),
        execution = c.execution_readiness.value(),
        sustainability = c.financial_sustainability.value(),
        priorities = priority_lines.join("\n"),
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub step: u32,
    pub title: String,
    pub timeline: String,
    pub deliverables: Vec<String>,
    pub cost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapTimeline {
    pub total_duration: String,
    pub phases: Vec<TimelinePhase>,
}

pub fn roadmap_timeline(roadmap: &ActionableRoadmap) -> RoadmapTimeline {
    RoadmapTimeline {
        total_duration: roadmap.total_timeline.clone(),
        phases: roadmap
            .tactical_moves
            .iter()
            .map(|m| TimelinePhase {
                step: m.step,
                title: m.title.clone(),
                timeline: m.timeline.clone(),
                deliverables: m.deliverables.clone(),
                cost: m.cost_estimate.clone(),
            })
            .collect(),
    }
}
