use std::collections::HashMap;

use crate::attribution::ImpactBucket;
use crate::core::{Feature, InsightCategory, Severity};

/// How the raw feature value is rendered into `{value}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Thousands-separated whole number, e.g. `150,000`
    Currency,
    /// Fraction shown as a whole percentage, e.g. `22`
    Percent,
    /// Whole number, e.g. `25`
    Plain,
}

/// A narrative keyed by (feature, bucket). Placeholders are `{value}`,
/// `{sector}`, `{gap_percentage}` and `{months}`.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeTemplate {
    pub category: InsightCategory,
    pub severity: Severity,
    pub title: &'static str,
    pub body: &'static str,
    pub value_format: ValueFormat,
}

type TemplateRow = (
    Feature,
    ImpactBucket,
    InsightCategory,
    Severity,
    &'static str,
    &'static str,
    ValueFormat,
);

#[derive(Debug, Clone)]
pub struct NarrativeTable {
    templates: HashMap<(Feature, ImpactBucket), NarrativeTemplate>,
}

impl NarrativeTable {
    pub fn standard() -> Self {
        use ImpactBucket::*;
        use InsightCategory::*;
        use Severity::*;
        use ValueFormat::*;

        let rows: Vec<TemplateRow> = vec![
            (
                Feature::Budget,
                NegativeHigh,
                FinancialRisk,
                High,
                "Critical funding gap threatens the scaling phase",
                "The current budget (SAR {value}) is {gap_percentage}% below the average for successful {sector} projects in the Saudi market. At this level the capital runs out within {months} months of launch, before the product can reach product-market fit.",
                Currency,
            ),
            (
                Feature::Budget,
                NegativeMedium,
                FinancialPlanning,
                Medium,
                "Limited budget requires tight management",
                "The budget (SAR {value}) covers the initial launch but leaves little margin. Cash flow needs strict management and a funding round should be raised within {months} months.",
                Currency,
            ),
            (
                Feature::Budget,
                NegativeLow,
                FinancialOptimization,
                Low,
                "Acceptable budget with room to improve",
                "The budget (SAR {value}) is close to the average for {sector} projects. Additional funding is recommended to accelerate growth.",
                Currency,
            ),
            (
                Feature::HypothesisValidationRate,
                NegativeHigh,
                MarketValidation,
                Critical,
                "No validation of market hypotheses",
                "Only {value}% of the core market hypotheses have been validated. The project risks building a product the market does not need; structured customer discovery must come before any further development spend.",
                Percent,
            ),
            (
                Feature::HypothesisValidationRate,
                NegativeMedium,
                MarketValidation,
                Medium,
                "Partial hypothesis validation needs more work",
                "{value}% of market hypotheses are validated. The remaining assumptions about customers and pricing should be tested before scaling.",
                Percent,
            ),
            (
                Feature::HypothesisValidationRate,
                NegativeLow,
                MarketValidation,
                Low,
                "Good hypothesis validation with room to improve",
                "{value}% of market hypotheses are validated. Closing the remaining gaps will strengthen the investment case.",
                Percent,
            ),
            (
                Feature::RatCompletionRate,
                NegativeHigh,
                ExecutionRisk,
                High,
                "Weak RAT methodology threatens financial planning",
                "Only {value}% of the riskiest assumptions have been tested. Without this the financial plan rests on untested assumptions and budget overruns become likely.",
                Percent,
            ),
            (
                Feature::RatCompletionRate,
                NegativeMedium,
                ExecutionRisk,
                Medium,
                "Partial RAT planning needs improvement",
                "{value}% of the riskiest assumptions have been tested. The remaining high-risk assumptions should be scheduled into the next sprints.",
                Percent,
            ),
            (
                Feature::RatCompletionRate,
                NegativeLow,
                ExecutionPlanning,
                Low,
                "Good RAT planning with room to improve",
                "{value}% of the riskiest assumptions have been tested. Keep the test cadence to protect the plan.",
                Percent,
            ),
            (
                Feature::MarketDemand,
                NegativeHigh,
                MarketRisk,
                High,
                "Weak market demand threatens sustainable growth",
                "Market demand scores {value}/100 in the {sector} sector. At this level customer acquisition cost can rise by up to 300% and growth stalls without a sharper value proposition.",
                Plain,
            ),
            (
                Feature::MarketDemand,
                NegativeMedium,
                MarketStrategy,
                Medium,
                "Moderate demand requires a strong marketing strategy",
                "Market demand scores {value}/100. A focused marketing strategy and clear positioning are needed to convert the existing interest.",
                Plain,
            ),
            (
                Feature::MarketDemand,
                NegativeLow,
                MarketOpportunity,
                Low,
                "Good market demand with growth opportunities",
                "Market demand scores {value}/100. There is room to grow through geographic expansion and adjacent customer segments.",
                Plain,
            ),
            (
                Feature::TeamSize,
                NegativeMedium,
                TeamCapacity,
                Medium,
                "Small team limits execution speed",
                "A team of {value} members is below what successful {sector} projects typically run with. Delivery will slow as soon as the product needs to scale.",
                Plain,
            ),
            (
                Feature::TeamSize,
                NegativeLow,
                TeamPlanning,
                Low,
                "Acceptable team size with room to expand",
                "A team of {value} members can carry the current plan. Plan the next key hires ahead of the growth phase.",
                Plain,
            ),
            (
                Feature::CompetitiveAdvantage,
                NegativeHigh,
                CompetitiveRisk,
                High,
                "No clear competitive advantage",
                "Competitive advantage scores {value}/100. Without a defensible edge, competitors can copy the offering and compress margins.",
                Plain,
            ),
            (
                Feature::CompetitiveAdvantage,
                NegativeMedium,
                CompetitiveStrategy,
                Medium,
                "Weak competitive advantage needs strengthening",
                "Competitive advantage scores {value}/100. Invest in what differentiates the product before competitors close the gap.",
                Plain,
            ),
            (
                Feature::TechnicalFeasibility,
                NegativeHigh,
                TechnicalRisk,
                High,
                "Critical technical challenges threaten execution",
                "Technical feasibility scores {value}/100. Core technical risks must be resolved with a proof of concept before committing the roadmap.",
                Plain,
            ),
            (
                Feature::TechnicalFeasibility,
                NegativeMedium,
                TechnicalPlanning,
                Medium,
                "Moderate, solvable technical challenges",
                "Technical feasibility scores {value}/100. The challenges are solvable; bringing in experienced technical experts will shorten the path.",
                Plain,
            ),
        ];

        let templates = rows
            .into_iter()
            .map(|(feature, bucket, category, severity, title, body, value_format)| {
                (
                    (feature, bucket),
                    NarrativeTemplate {
                        category,
                        severity,
                        title,
                        body,
                        value_format,
                    },
                )
            })
            .collect();

        Self { templates }
    }

    pub fn get(&self, feature: Feature, bucket: ImpactBucket) -> Option<&NarrativeTemplate> {
        self.templates.get(&(feature, bucket))
    }
}
