use serde::{Deserialize, Serialize};

use super::InvestorReadiness;
use crate::knowledge::{InvestorArchetype, KnowledgeBase};

const MIN_DILUTION: f64 = 0.10;
const MAX_DILUTION: f64 = 0.30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentScenario {
    pub scenario_name: String,
    pub investor_type: InvestorArchetype,
    pub probability: f64,
    pub funding_amount: f64,
    pub equity_dilution: f64,
    pub post_money_valuation: f64,
    pub timeline_months: u32,
    pub conditions: Vec<String>,
}

fn closing_probability(irl: f64) -> f64 {
    if irl >= 80.0 {
        0.7
    } else if irl >= 65.0 {
        0.5
    } else if irl >= 50.0 {
        0.3
    } else {
        0.1
    }
}

fn conditions(archetype: InvestorArchetype, irl: f64) -> Vec<String> {
    let mut conditions: Vec<&str> = Vec::new();

    if irl < 60.0 {
        conditions.push("Reach defined traction milestones (e.g. 1,000 active users)");
        conditions.push("Complete the MVP and launch it");
    }

    match archetype {
        InvestorArchetype::VcSeed | InvestorArchetype::VcSeriesA => {
            conditions.push("Pass comprehensive due diligence (financial, legal, technical)");
            conditions.push("Obtain Investment Committee approval");
        }
        InvestorArchetype::Pif => {
            conditions.push("Demonstrate alignment with Vision 2030");
            conditions.push("Pass extended due diligence (3-6 months)");
            conditions.push("Obtain board approval");
        }
        InvestorArchetype::Corporate => {
            conditions.push("Show strategic fit with the parent company's business");
            conditions.push("Demonstrate integration or partnership potential");
        }
        InvestorArchetype::Government => {
            conditions.push("Meet program criteria (e.g. team localization)");
            conditions.push("Submit a detailed business plan");
        }
        InvestorArchetype::Angel => {}
    }

    conditions.into_iter().map(String::from).collect()
}

/// One scenario per recommended archetype, most likely first.
pub fn build_scenarios(
    readiness: &InvestorReadiness,
    knowledge: &KnowledgeBase,
) -> Vec<InvestmentScenario> {
    let irl = readiness.irl_score.value();
    let potential_mid = readiness.funding_potential.midpoint();
    let probability = closing_probability(irl);

    let mut scenarios: Vec<InvestmentScenario> = readiness
        .recommended_investor_types
        .iter()
        .filter_map(|archetype| knowledge.investors.profile(*archetype))
        .map(|profile| {
            let funding_amount = profile.check_size_midpoint();
            let equity_dilution = if potential_mid > 0.0 {
                (funding_amount / potential_mid).clamp(MIN_DILUTION, MAX_DILUTION)
            } else {
                MAX_DILUTION
            };

            InvestmentScenario {
                scenario_name: format!("{} round", profile.archetype.display_name()),
                investor_type: profile.archetype,
                probability,
                funding_amount,
                equity_dilution,
                post_money_valuation: funding_amount / equity_dilution,
                timeline_months: profile.timeline_months,
                conditions: conditions(profile.archetype, irl),
            }
        })
        .collect();

    scenarios.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    scenarios
}
