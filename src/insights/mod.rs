//! Insight synthesis.
//!
//! Turns negative attributions into ranked, narrated insights. For each
//! attribution below the cutoff the feature is classified, a narrative
//! template is looked up by (feature, bucket) and rendered with the raw
//! value, the sector name and the business-impact submetrics. A missing
//! template drops the feature without error.

pub mod impact;
pub mod summary;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::attribution::{classify_feature, ImpactBucket};
use crate::config::{AttributionThresholds, Heuristics};
use crate::core::{
    format_compact, format_thousands, AttributionSet, Feature, InsightCategory, InvestorAppeal,
    ProjectSnapshot, RiskLevel, Severity,
};
use crate::knowledge::{KnowledgeBase, NarrativeTemplate, ValueFormat};

pub use impact::BusinessImpact;
pub use summary::{executive_summary, investor_appeal, risk_level};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\w+)\}").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub feature: Feature,
    pub category: InsightCategory,
    pub severity: Severity,
    pub bucket: ImpactBucket,
    pub title: String,
    pub narrative: String,
    pub business_impact: BusinessImpact,
    pub impact_summary: String,
    pub attribution: f64,
    pub raw_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeoInsights {
    pub executive_summary: String,
    pub critical_insights: Vec<Insight>,
    pub risk_level: RiskLevel,
    pub investor_appeal: InvestorAppeal,
    /// Insights produced before truncation.
    pub total_insights: usize,
    pub critical_count: usize,
    pub high_count: usize,
}

impl CeoInsights {
    /// Critical and high insights, in rank order.
    pub fn pressing(&self) -> impl Iterator<Item = &Insight> {
        self.critical_insights
            .iter()
            .filter(|i| i.severity.is_pressing())
    }
}

pub struct InsightSynthesizer<'a> {
    knowledge: &'a KnowledgeBase,
    thresholds: &'a AttributionThresholds,
    heuristics: &'a Heuristics,
}

impl<'a> InsightSynthesizer<'a> {
    pub fn new(
        knowledge: &'a KnowledgeBase,
        thresholds: &'a AttributionThresholds,
        heuristics: &'a Heuristics,
    ) -> Self {
        Self {
            knowledge,
            thresholds,
            heuristics,
        }
    }

    pub fn synthesize(&self, snapshot: &ProjectSnapshot, attributions: &AttributionSet) -> CeoInsights {
        let mut insights: Vec<Insight> = attributions
            .iter()
            .filter(|(_, value)| *value < self.thresholds.insight_cutoff)
            .filter_map(|(key, value)| self.build_insight(snapshot, key, value))
            .collect();

        insights.sort_by(rank_order);

        let total_insights = insights.len();
        let critical_count = count_severity(&insights, Severity::Critical);
        let high_count = count_severity(&insights, Severity::High);

        insights.truncate(self.heuristics.max_insights);

        let sp = snapshot.success_probability;
        let risk = risk_level(critical_count, high_count, sp);

        tracing::debug!(
            total = total_insights,
            critical = critical_count,
            high = high_count,
            "synthesized insights"
        );

        CeoInsights {
            executive_summary: executive_summary(sp, critical_count + high_count),
            critical_insights: insights,
            risk_level: risk,
            investor_appeal: investor_appeal(risk, sp),
            total_insights,
            critical_count,
            high_count,
        }
    }

    fn build_insight(&self, snapshot: &ProjectSnapshot, key: &str, attribution: f64) -> Option<Insight> {
        let feature = Feature::from_key(key)?;
        let bucket = classify_feature(feature, attribution, self.thresholds);
        if bucket == ImpactBucket::Neutral {
            return None;
        }

        let Some(template) = self.knowledge.narratives.get(feature, bucket) else {
            tracing::trace!(feature = key, bucket = %bucket, "no narrative template, skipping");
            return None;
        };

        let raw_value = snapshot.metrics.get(feature);
        let business_impact =
            BusinessImpact::compute(feature, attribution, snapshot, self.knowledge, self.heuristics);
        let narrative = render(template, raw_value, snapshot, &business_impact);

        Some(Insight {
            feature,
            category: template.category,
            severity: template.severity,
            bucket,
            title: template.title.to_string(),
            narrative,
            impact_summary: business_impact.summary(),
            business_impact,
            attribution,
            raw_value,
        })
    }
}

/// Severity descending, then attribution magnitude descending.
fn rank_order(a: &Insight, b: &Insight) -> Ordering {
    b.severity
        .rank()
        .cmp(&a.severity.rank())
        .then_with(|| b.attribution.abs().total_cmp(&a.attribution.abs()))
}

fn count_severity(insights: &[Insight], severity: Severity) -> usize {
    insights.iter().filter(|i| i.severity == severity).count()
}

fn format_value(format: ValueFormat, value: f64) -> String {
    match format {
        ValueFormat::Currency => format_thousands(value),
        ValueFormat::Percent => format!("{:.0}", value * 100.0),
        ValueFormat::Plain => format_compact(value),
    }
}

fn render(
    template: &NarrativeTemplate,
    raw_value: f64,
    snapshot: &ProjectSnapshot,
    impact: &BusinessImpact,
) -> String {
    PLACEHOLDER
        .replace_all(template.body, |caps: &Captures| {
            let name = &caps[1];
            match name {
                "value" => format_value(template.value_format, raw_value),
                "sector" => snapshot.profile.sector.display_name().to_string(),
                "gap_percentage" => impact
                    .gap_percentage()
                    .map(|g| format!("{:.0}", g))
                    .unwrap_or_else(|| "0".to_string()),
                "months" => impact
                    .months_to_depletion()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "0".to_string()),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}
