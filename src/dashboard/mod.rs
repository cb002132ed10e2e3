//! Strategic dashboard: the ICI with its breakdown, the critical path and
//! the recommendation lists derived from scores and insights.

mod views;

use serde::{Deserialize, Serialize};

use crate::core::{ConfidenceLevel, InsightCategory, ProjectSnapshot, Score0To100};
use crate::insights::CeoInsights;
use crate::knowledge::KnowledgeBase;
use crate::roadmap::ActionableRoadmap;
use crate::scoring::{
    critical_path, time_to_success, CriticalPathStage, IciComponent, IciComponents, IciScore,
};

pub use views::{
    executive_summary, risk_heatmap, roadmap_timeline, HeatColor, RiskCell, RoadmapTimeline,
    TimelinePhase,
};

const MAX_PRIORITIES: usize = 3;
const MAX_QUICK_WINS: usize = 3;
const MAX_LONG_TERM: usize = 4;
const MAX_RECOMMENDATIONS: usize = 5;

const DEFAULT_PRIORITIES: [&str; 3] = [
    "Improve product-market fit",
    "Secure funding",
    "Build the team",
];

const DEFAULT_QUICK_WINS: [&str; 3] = [
    "Launch a professional landing page",
    "Start building an email list",
    "Set up active social media accounts",
];

const LONG_TERM_INITIATIVES: [&str; 4] = [
    "Develop a regional expansion strategy across the GCC",
    "Build strategic partnerships with large companies",
    "Invest in R&D for innovative features",
    "Launch a customer retention and loyalty program",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicDashboard {
    pub ici_score: Score0To100,
    pub confidence_level: ConfidenceLevel,
    pub ici_breakdown: IciComponents,
    pub strongest_component: IciComponent,
    pub weakest_component: IciComponent,
    pub critical_path: Vec<CriticalPathStage>,
    pub time_to_success: String,
    pub key_milestones: Vec<String>,
    pub top_priorities: Vec<String>,
    pub quick_wins: Vec<String>,
    pub long_term_initiatives: Vec<String>,
    pub strategic_recommendations: Vec<String>,
    pub risk_heatmap: Vec<RiskCell>,
    pub executive_summary: String,
    pub roadmap_timeline: RoadmapTimeline,
}

pub fn build_dashboard(
    snapshot: &ProjectSnapshot,
    insights: &CeoInsights,
    ici: &IciScore,
    roadmap: &ActionableRoadmap,
    knowledge: &KnowledgeBase,
) -> StrategicDashboard {
    let score = ici.score.value();
    let quick_wins = quick_wins(insights);
    let top_priorities = top_priorities(insights);
    let time_to_success = time_to_success(&snapshot.profile.stage, score, knowledge);
    let summary = executive_summary(
        &snapshot.profile,
        ici,
        snapshot.success_probability,
        &top_priorities,
        &time_to_success,
    );

    StrategicDashboard {
        ici_score: ici.score,
        confidence_level: ici.confidence,
        ici_breakdown: ici.components,
        strongest_component: ici.components.strongest(),
        weakest_component: ici.components.weakest(),
        critical_path: critical_path(&insights.critical_insights, score),
        time_to_success,
        key_milestones: knowledge
            .stages
            .milestones(&snapshot.profile.stage)
            .iter()
            .map(|m| m.to_string())
            .collect(),
        top_priorities,
        strategic_recommendations: strategic_recommendations(ici, &quick_wins),
        quick_wins,
        long_term_initiatives: long_term_initiatives(score),
        risk_heatmap: risk_heatmap(&insights.critical_insights),
        executive_summary: summary,
        roadmap_timeline: roadmap_timeline(roadmap),
    }
}

fn top_priorities(insights: &CeoInsights) -> Vec<String> {
    let pressing: Vec<String> = insights
        .pressing()
        .take(MAX_PRIORITIES)
        .map(|i| i.title.clone())
        .collect();

    if pressing.is_empty() {
        DEFAULT_PRIORITIES.iter().map(|s| s.to_string()).collect()
    } else {
        pressing
    }
}

fn quick_win_for(category: InsightCategory) -> Option<&'static str> {
    use InsightCategory::*;
    match category {
        MarketRisk | MarketStrategy | MarketOpportunity => {
            Some("Run a focused marketing campaign (Google Ads and social media)")
        }
        TeamCapacity | TeamPlanning => Some("Hire one full-stack developer immediately"),
        MarketValidation => Some("Hold 20 customer interviews this week"),
        _ => None,
    }
}

fn quick_wins(insights: &CeoInsights) -> Vec<String> {
    let mut wins: Vec<String> = Vec::new();
    for win in insights
        .critical_insights
        .iter()
        .filter_map(|i| quick_win_for(i.category))
    {
        if wins.len() == MAX_QUICK_WINS {
            break;
        }
        if !wins.iter().any(|w| w == win) {
            wins.push(win.to_string());
        }
    }

    if wins.is_empty() {
        DEFAULT_QUICK_WINS.iter().map(|s| s.to_string()).collect()
    } else {
        wins
    }
}

fn long_term_initiatives(ici: f64) -> Vec<String> {
    let culture = (ici < 60.0).then_some("Build a strong company culture");
    culture
        .into_iter()
        .chain(LONG_TERM_INITIATIVES)
        .take(MAX_LONG_TERM)
        .map(String::from)
        .collect()
}

fn strategic_recommendations(ici: &IciScore, quick_wins: &[String]) -> Vec<String> {
    let c = &ici.components;
    let mut recommendations = Vec::new();

    if ici.score.value() < 50.0 {
        recommendations.push(
            "Full strategic reassessment: consider a pivot or a restructuring before investing further"
                .to_string(),
        );
    }
    if c.market_fit.value() < 60.0 {
        recommendations.push(
            "Focus on product-market fit: run 50+ customer interviews within 30 days".to_string(),
        );
    }
    if c.investor_readiness.value() < 60.0 {
        recommendations.push(
            "Improve investor readiness: build a professional pitch deck and apply to 3 accelerators"
                .to_string(),
        );
    }
    if c.financial_sustainability.value() < 50.0 {
        recommendations.push(
            "Address financial sustainability: cut burn by 30% and line up bridge funding"
                .to_string(),
        );
    }
    if c.execution_readiness.value() < 60.0 {
        recommendations
            .push("Strengthen the team: hire 2-3 people into critical roles".to_string());
    }

    let first_wins: Vec<&str> = quick_wins.iter().take(2).map(String::as_str).collect();
    recommendations.push(format!("Quick wins: {}", first_wins.join(", ")));

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
