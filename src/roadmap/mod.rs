//! Roadmap assembly.
//!
//! Each pressing insight maps to a risk family; the family's playbook
//! supplies up to three tactical moves, alternative paths, mitigation
//! steps and success metrics. The first roadmap built is the primary one.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{format_thousands, ProjectSnapshot, RiskType, Severity};
use crate::insights::Insight;
use crate::knowledge::{KnowledgeBase, MoveTemplate, Playbook, Viability};

static DURATION_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

const MAX_MOVES: usize = 3;
const MAX_ROADMAPS: usize = 3;
const WEEKS_PER_MONTH: f64 = 4.0;
const MIN_FUNDING_TARGET: f64 = 500_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticalMove {
    pub step: u32,
    pub title: String,
    pub description: String,
    pub reference: String,
    pub deliverables: Vec<String>,
    pub resources: Vec<String>,
    pub timeline: String,
    pub cost_estimate: String,
    pub success_criteria: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativePath {
    pub title: String,
    pub description: String,
    pub viability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionableRoadmap {
    pub id: String,
    pub title: String,
    pub priority: Severity,
    pub risk_type: Option<RiskType>,
    pub tactical_moves: Vec<TacticalMove>,
    pub total_timeline: String,
    pub success_metrics: Vec<String>,
    pub alternative_paths: Vec<AlternativePath>,
    pub risk_mitigation: Vec<String>,
}

impl ActionableRoadmap {
    /// Fallback used when no insight is critical or high.
    pub fn general() -> Self {
        Self {
            id: "GENERAL".to_string(),
            title: "General improvement plan".to_string(),
            priority: Severity::Medium,
            risk_type: None,
            tactical_moves: Vec::new(),
            total_timeline: total_timeline(&[]),
            success_metrics: Vec::new(),
            alternative_paths: Vec::new(),
            risk_mitigation: Vec::new(),
        }
    }
}

/// Primary roadmap plus the supporting ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapSet {
    pub primary: ActionableRoadmap,
    pub supporting: Vec<ActionableRoadmap>,
}

pub struct RoadmapAssembler<'a> {
    knowledge: &'a KnowledgeBase,
}

impl<'a> RoadmapAssembler<'a> {
    pub fn new(knowledge: &'a KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Roadmaps for the top three critical/high insights.
    pub fn assemble(&self, insights: &[Insight], snapshot: &ProjectSnapshot) -> RoadmapSet {
        let mut roadmaps = insights
            .iter()
            .filter(|i| i.severity.is_pressing())
            .take(MAX_ROADMAPS)
            .map(|insight| self.build(insight, snapshot));

        match roadmaps.next() {
            Some(primary) => RoadmapSet {
                primary,
                supporting: roadmaps.collect(),
            },
            None => RoadmapSet {
                primary: ActionableRoadmap::general(),
                supporting: Vec::new(),
            },
        }
    }

    pub fn build(&self, insight: &Insight, snapshot: &ProjectSnapshot) -> ActionableRoadmap {
        let risk_type = insight.category.risk_type();
        let sector = snapshot.profile.sector.display_name();
        let playbook = self.knowledge.playbooks.get(risk_type);

        let tactical_moves: Vec<TacticalMove> = playbook
            .map(|p| {
                p.moves
                    .iter()
                    .take(MAX_MOVES)
                    .enumerate()
                    .map(|(i, m)| tactical_move(i as u32 + 1, m, sector))
                    .collect()
            })
            .unwrap_or_default();

        let funding_target = MIN_FUNDING_TARGET.max(snapshot.metrics.budget * 2.0);

        ActionableRoadmap {
            id: format!("{}_{}", risk_type.key(), insight.feature.key()).to_uppercase(),
            title: format!("Remediation plan: {}", insight.title),
            priority: insight.severity,
            risk_type: Some(risk_type),
            total_timeline: total_timeline(&tactical_moves),
            tactical_moves,
            success_metrics: playbook
                .map(|p| success_metrics(p, funding_target))
                .unwrap_or_default(),
            alternative_paths: playbook.map(alternative_paths).unwrap_or_default(),
            risk_mitigation: playbook
                .map(|p| p.risk_mitigation.iter().map(|s| s.to_string()).collect())
                .unwrap_or_default(),
        }
    }
}

fn tactical_move(step: u32, template: &MoveTemplate, sector: &str) -> TacticalMove {
    TacticalMove {
        step,
        title: template.title.to_string(),
        description: template.description.to_string(),
        reference: template.reference.to_string(),
        deliverables: template.deliverables.iter().map(|d| d.to_string()).collect(),
        resources: template
            .resources
            .iter()
            .map(|r| r.replace("{sector}", sector))
            .collect(),
        timeline: template.timeline.to_string(),
        cost_estimate: template.cost_estimate.to_string(),
        success_criteria: template.success_criteria.to_string(),
    }
}

fn success_metrics(playbook: &Playbook, funding_target: f64) -> Vec<String> {
    let target = format_thousands(funding_target);
    playbook
        .success_metrics
        .iter()
        .map(|m| m.replace("{funding_target}", &target))
        .collect()
}

fn alternative_paths(playbook: &Playbook) -> Vec<AlternativePath> {
    playbook
        .alternative_paths
        .iter()
        .map(|p| AlternativePath {
            title: p.title.to_string(),
            description: p.description.to_string(),
            viability: match p.viability {
                Viability::High => "high",
                Viability::Medium => "medium",
            }
            .to_string(),
        })
        .collect()
}

/// Weeks contributed by one duration string: the last number it contains,
/// read as weeks or months. Durations naming neither contribute nothing.
pub fn duration_weeks(timeline: &str) -> f64 {
    let lower = timeline.to_lowercase();
    let unit = if lower.contains("week") {
        1.0
    } else if lower.contains("month") {
        WEEKS_PER_MONTH
    } else {
        return 0.0;
    };

    DURATION_NUMBER
        .find_iter(&lower)
        .last()
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(|n| n * unit)
        .unwrap_or(0.0)
}

/// Sum of move durations, as weeks under eight weeks and months otherwise.
pub fn total_timeline(moves: &[TacticalMove]) -> String {
    let weeks: f64 = moves.iter().map(|m| duration_weeks(&m.timeline)).sum();
    if weeks < 8.0 {
        format!("{} weeks", weeks as u32)
    } else {
        format!("{} months", (weeks / WEEKS_PER_MONTH) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribution::ImpactBucket;
    use crate::core::{Feature, FeatureVector, InsightCategory, ProjectInput};
    use crate::insights::BusinessImpact;

    fn insight(feature: Feature, category: InsightCategory, severity: Severity) -> Insight {
        Insight {
            feature,
            category,
            severity,
            bucket: ImpactBucket::NegativeHigh,
            title: "Critical funding gap threatens the scaling phase".to_string(),
            narrative: String::new(),
            business_impact: BusinessImpact::Generic {
                attribution_impact: -0.35,
            },
            impact_summary: String::new(),
            attribution: -0.35,
            raw_value: 0.0,
        }
    }

    fn snapshot(budget: f64) -> ProjectSnapshot {
        let features: FeatureVector = [("budget", budget)].into_iter().collect();
        ProjectSnapshot::from_input(&ProjectInput::new(features).with_sector("edtech"))
    }

    #[test]
    fn duration_parsing() {
        assert_eq!(duration_weeks("2-3 weeks"), 3.0);
        assert_eq!(duration_weeks("1-1.5 months"), 6.0);
        assert_eq!(duration_weeks("Ongoing (2-3 months to start)"), 12.0);
        assert_eq!(duration_weeks("1-2 weeks (setup)"), 2.0);
        assert_eq!(duration_weeks("Ongoing"), 0.0);
    }

    #[test]
    fn financial_roadmap() {
        let assembler = RoadmapAssembler::new(KnowledgeBase::standard());
        let roadmap = assembler.build(
            &insight(Feature::Budget, InsightCategory::FinancialRisk, Severity::High),
            &snapshot(150_000.0),
        );

        assert_eq!(roadmap.id, "FINANCIAL_RISK_BUDGET");
        assert_eq!(roadmap.priority, Severity::High);
        assert_eq!(roadmap.tactical_moves.len(), 3);
        // 3 weeks + 2 months + 1 month = 15 weeks
        assert_eq!(roadmap.total_timeline, "3 months");
        assert_eq!(
            roadmap.success_metrics[0],
            "Secure SAR 500,000 in additional funding"
        );
        assert_eq!(roadmap.alternative_paths.len(), 2);
        assert!(roadmap.tactical_moves[0]
            .resources
            .iter()
            .any(|r| r.contains("education technology")));
    }

    #[test]
    fn funding_target_doubles_large_budgets() {
        let assembler = RoadmapAssembler::new(KnowledgeBase::standard());
        let roadmap = assembler.build(
            &insight(Feature::Budget, InsightCategory::FinancialPlanning, Severity::High),
            &snapshot(400_000.0),
        );
        assert_eq!(
            roadmap.success_metrics[0],
            "Secure SAR 800,000 in additional funding"
        );
    }

    #[test]
    fn no_pressing_insights_gives_general_plan() {
        let assembler = RoadmapAssembler::new(KnowledgeBase::standard());
        let set = assembler.assemble(
            &[insight(Feature::Budget, InsightCategory::FinancialPlanning, Severity::Medium)],
            &snapshot(150_000.0),
        );
        assert_eq!(set.primary.id, "GENERAL");
        assert_eq!(set.primary.total_timeline, "0 weeks");
        assert!(set.supporting.is_empty());
    }

    #[test]
    fn top_three_pressing_insights_get_roadmaps() {
        let assembler = RoadmapAssembler::new(KnowledgeBase::standard());
        let insights = vec![
            insight(
                Feature::HypothesisValidationRate,
                InsightCategory::MarketValidation,
                Severity::Critical,
            ),
            insight(Feature::Budget, InsightCategory::FinancialRisk, Severity::High),
            insight(Feature::MarketDemand, InsightCategory::MarketRisk, Severity::High),
            insight(Feature::RatCompletionRate, InsightCategory::ExecutionRisk, Severity::High),
        ];
        let set = assembler.assemble(&insights, &snapshot(150_000.0));
        assert_eq!(set.primary.id, "MARKET_VALIDATION_HYPOTHESIS_VALIDATION_RATE");
        // 6 weeks + 3 weeks + 3 months = 21 weeks
        assert_eq!(set.primary.total_timeline, "5 months");
        let ids: Vec<_> = set.supporting.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["FINANCIAL_RISK_BUDGET", "MARKET_RISK_MARKET_DEMAND"]);
    }
}
