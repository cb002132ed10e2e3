use std::collections::HashMap;

use crate::core::RiskType;

/// One tactical move in a remediation playbook. `resources` may contain a
/// `{sector}` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub reference: &'static str,
    pub deliverables: &'static [&'static str],
    pub resources: &'static [&'static str],
    pub timeline: &'static str,
    pub cost_estimate: &'static str,
    pub success_criteria: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viability {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlternativePathTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub viability: Viability,
}

/// Everything the roadmap assembler knows about one risk family.
///
/// `success_metrics` may contain a `{funding_target}` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Playbook {
    pub moves: Vec<MoveTemplate>,
    pub alternative_paths: Vec<AlternativePathTemplate>,
    pub risk_mitigation: &'static [&'static str],
    pub success_metrics: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct PlaybookTable {
    playbooks: HashMap<RiskType, Playbook>,
}

impl PlaybookTable {
    pub fn standard() -> Self {
        let playbooks = [
            (RiskType::FinancialRisk, financial_risk()),
            (RiskType::MarketValidation, market_validation()),
            (RiskType::ExecutionRisk, execution_risk()),
            (RiskType::MarketRisk, market_risk()),
            (RiskType::TeamCapacity, team_capacity()),
        ]
        .into_iter()
        .collect();

        Self { playbooks }
    }

    pub fn get(&self, risk_type: RiskType) -> Option<&Playbook> {
        self.playbooks.get(&risk_type)
    }
}

fn financial_risk() -> Playbook {
    Playbook {
        moves: vec![
            MoveTemplate {
                title: "Build a financial model and investor pitch deck",
                description: "Prepare a 36-month financial model with unit economics and a pitch deck that tells the funding story.",
                reference: "Clause 5.2 Innovation Strategy",
                deliverables: &[
                    "36-month financial model",
                    "Investor pitch deck (12-15 slides)",
                    "Unit economics summary",
                ],
                resources: &[
                    "Financial advisor with {sector} experience",
                    "Pitch deck templates from local accelerators",
                ],
                timeline: "2-3 weeks",
                cost_estimate: "SAR 15,000 - 25,000",
                success_criteria: "Model approved by 3 independent advisors",
            },
            MoveTemplate {
                title: "Apply to Saudi accelerators and incubators",
                description: "Target accelerator programs that provide early capital, mentoring and investor access.",
                reference: "Clause 7.4 Collaboration and Partnerships",
                deliverables: &[
                    "Shortlist of 5 matching programs",
                    "Completed applications",
                    "Demo-day ready pitch",
                ],
                resources: &[
                    "Accelerator program directories",
                    "Alumni founders in {sector}",
                ],
                timeline: "1-2 months",
                cost_estimate: "SAR 5,000 - 10,000",
                success_criteria: "Accepted into at least one accelerator",
            },
            MoveTemplate {
                title: "Reduce burn through lean operations",
                description: "Cut non-essential spend and renegotiate fixed costs to extend runway.",
                reference: "Clause 8.3 Innovation Process",
                deliverables: &[
                    "Line-by-line cost review",
                    "Revised monthly budget",
                    "Supplier renegotiation log",
                ],
                resources: &["Bookkeeping tool", "Part-time finance controller"],
                timeline: "1 month",
                cost_estimate: "SAR 10,000 - 15,000",
                success_criteria: "Monthly burn reduced by 30%",
            },
        ],
        alternative_paths: vec![
            AlternativePathTemplate {
                title: "Bootstrap with a revenue-first model",
                description: "Delay outside funding and finance growth from early paying customers.",
                viability: Viability::Medium,
            },
            AlternativePathTemplate {
                title: "Strategic partnership with a large company",
                description: "Trade distribution or equity for funding and market access from an established player.",
                viability: Viability::Medium,
            },
        ],
        risk_mitigation: &[
            "Keep 3 months of runway in reserve",
            "Freeze hiring expansion until funding closes",
            "Negotiate Net 30/60 payment terms with suppliers",
        ],
        success_metrics: &[
            "Secure SAR {funding_target} in additional funding",
            "Extend runway to 18 months",
            "Reduce monthly burn by 30%",
        ],
    }
}

fn market_validation() -> Playbook {
    Playbook {
        moves: vec![
            MoveTemplate {
                title: "Run 50 customer discovery interviews",
                description: "Interview target customers to confirm the problem, its urgency and willingness to pay.",
                reference: "Clause 8.2.2 Idea Assessment",
                deliverables: &[
                    "Interview script",
                    "50 interview notes",
                    "Problem ranking report",
                ],
                resources: &["Customer lists from {sector} communities", "Interview scheduling tool"],
                timeline: "1-1.5 months",
                cost_estimate: "SAR 2,000 - 5,000",
                success_criteria: "Identify 3 key problems shared by 80%+ of interviewees",
            },
            MoveTemplate {
                title: "Launch a landing page with A/B testing",
                description: "Test the value proposition and pricing with real traffic before building more product.",
                reference: "Clause 8.2.3 Concept Development",
                deliverables: &[
                    "Landing page with two variants",
                    "Analytics dashboard",
                    "Email waitlist",
                ],
                resources: &["No-code site builder", "Small paid-ads budget"],
                timeline: "2-3 weeks",
                cost_estimate: "SAR 8,000 - 15,000",
                success_criteria: "Conversion above 5% and 200+ emails collected",
            },
            MoveTemplate {
                title: "Launch an MVP and measure engagement",
                description: "Ship the smallest product that solves the top problem and track retention from day one.",
                reference: "Clause 8.3.4 Validation",
                deliverables: &[
                    "Released MVP",
                    "Retention and engagement metrics",
                    "Feedback backlog",
                ],
                resources: &["Product analytics tool", "Early adopters from {sector}"],
                timeline: "2-3 months",
                cost_estimate: "SAR 30,000 - 60,000",
                success_criteria: "7-day retention above 40%",
            },
        ],
        alternative_paths: vec![AlternativePathTemplate {
            title: "Pivot to B2B instead of B2C",
            description: "Sell the same capability to businesses with clearer budgets and shorter validation cycles.",
            viability: Viability::High,
        }],
        risk_mitigation: &[
            "Run small market tests before a full launch",
            "Keep the product roadmap flexible",
            "Build early relationships with early adopters",
        ],
        success_metrics: &[
            "Complete 50 customer interviews",
            "Landing page conversion above 5%",
            "MVP 7-day retention above 40%",
        ],
    }
}

fn execution_risk() -> Playbook {
    Playbook {
        moves: vec![
            MoveTemplate {
                title: "Adopt Agile/Scrum delivery",
                description: "Introduce two-week sprints with planning, review and retrospective rituals.",
                reference: "Clause 8.3 Innovation Process",
                deliverables: &[
                    "Sprint cadence and rituals",
                    "Prioritized product backlog",
                    "Definition of done",
                ],
                resources: &["Project tracking tool", "Scrum coach (part-time)"],
                timeline: "Ongoing (2-3 months to start)",
                cost_estimate: "SAR 5,000 - 10,000",
                success_criteria: "80%+ of sprint tasks completed",
            },
            MoveTemplate {
                title: "Define KPIs and OKRs",
                description: "Set quarterly objectives with measurable key results tied to the riskiest assumptions.",
                reference: "Clause 9.1 Monitoring and Measurement",
                deliverables: &[
                    "Quarterly OKR set",
                    "KPI dashboard",
                    "Monthly review schedule",
                ],
                resources: &["OKR template", "Dashboard tool"],
                timeline: "1-2 weeks (setup)",
                cost_estimate: "SAR 3,000 - 8,000",
                success_criteria: "70%+ of quarterly OKRs achieved",
            },
            MoveTemplate {
                title: "Hold weekly sprint reviews",
                description: "Review progress and blockers every week and escalate anything stuck.",
                reference: "Clause 10.2 Continual Improvement",
                deliverables: &[
                    "Weekly review notes",
                    "Blocker log",
                    "Action item tracker",
                ],
                resources: &["Team calendar", "Shared review template"],
                timeline: "Ongoing",
                cost_estimate: "SAR 0 (team time)",
                success_criteria: "90%+ of blockers resolved within a week",
            },
        ],
        alternative_paths: vec![AlternativePathTemplate {
            title: "Hire a fractional CTO",
            description: "Bring in senior technical leadership part-time to set architecture and delivery practices.",
            viability: Viability::High,
        }],
        risk_mitigation: &[
            "Add a 20-30% buffer to estimates",
            "Run regular code reviews",
            "Keep backups for key developers",
        ],
        success_metrics: &[
            "80%+ of sprint tasks completed",
            "70%+ of quarterly OKRs achieved",
            "90% of blockers resolved within a week",
        ],
    }
}

fn market_risk() -> Playbook {
    Playbook {
        moves: vec![
            MoveTemplate {
                title: "Run a growth hacking program",
                description: "Test low-cost acquisition channels quickly and double down on the ones that convert.",
                reference: "Clause 5.3 Strategic Direction",
                deliverables: &[
                    "Channel experiment backlog",
                    "Referral program",
                    "Weekly growth report",
                ],
                resources: &["Growth marketer", "Marketing automation tool"],
                timeline: "1-2 months",
                cost_estimate: "SAR 15,000 - 30,000",
                success_criteria: "30% monthly growth in customer acquisition",
            },
            MoveTemplate {
                title: "Form strategic distribution partnerships",
                description: "Partner with companies that already reach the target customers.",
                reference: "Clause 7.4 Collaboration and Partnerships",
                deliverables: &[
                    "Partner shortlist",
                    "Partnership proposal",
                    "Signed agreements",
                ],
                resources: &["Business development lead", "Industry contacts in {sector}"],
                timeline: "2-3 months",
                cost_estimate: "SAR 10,000 - 20,000",
                success_criteria: "2 partnerships bringing 500+ users per month",
            },
            MoveTemplate {
                title: "Make a partial pivot toward product-market fit",
                description: "Refocus the product on the segment and use case with the strongest pull.",
                reference: "Clause 8.2 Ideation",
                deliverables: &[
                    "Segment analysis",
                    "Revised value proposition",
                    "Updated product roadmap",
                ],
                resources: &["Customer analytics", "Product advisor"],
                timeline: "1-2 months",
                cost_estimate: "SAR 25,000 - 50,000",
                success_criteria: "Retention improved by 50%",
            },
        ],
        alternative_paths: Vec::new(),
        risk_mitigation: &[
            "Diversify marketing channels",
            "Build a strong brand",
            "Monitor competitors continuously",
        ],
        success_metrics: &[
            "30% monthly growth in customer acquisition",
            "2 partnerships bringing 500+ users per month",
            "Retention improved by 50%",
        ],
    }
}

fn team_capacity() -> Playbook {
    Playbook {
        moves: vec![
            MoveTemplate {
                title: "Make strategic hires",
                description: "Hire experienced people into the roles that block delivery today.",
                reference: "Clause 7.1 Resources",
                deliverables: &[
                    "Role definitions",
                    "Hiring pipeline",
                    "Onboarding plan",
                ],
                resources: &["Recruitment platforms", "Referrals from {sector} networks"],
                timeline: "2-4 months",
                cost_estimate: "SAR 60,000 - 120,000 (3 months of salaries)",
                success_criteria: "2 experienced team members hired",
            },
            MoveTemplate {
                title: "Use freelancers for peak work",
                description: "Cover specialist and overflow work with vetted freelancers.",
                reference: "Clause 7.2 Competence",
                deliverables: &[
                    "Freelancer bench",
                    "Standard contract",
                    "Delivery checklist",
                ],
                resources: &["Freelance marketplaces", "Project manager"],
                timeline: "Ongoing",
                cost_estimate: "SAR 5,000 - 10,000 per month",
                success_criteria: "80%+ of freelance projects delivered on time",
            },
            MoveTemplate {
                title: "Train the existing team",
                description: "Close skill gaps through targeted courses and mentoring.",
                reference: "Clause 7.3 Awareness",
                deliverables: &[
                    "Skills gap assessment",
                    "Training plan",
                    "Mentoring pairs",
                ],
                resources: &["Online course subscriptions", "Industry mentors"],
                timeline: "2-3 months",
                cost_estimate: "SAR 3,000 - 8,000",
                success_criteria: "Team productivity up 20%",
            },
        ],
        alternative_paths: Vec::new(),
        risk_mitigation: &[],
        success_metrics: &[
            "2 experienced team members hired",
            "80%+ of freelance projects delivered on time",
            "Team productivity up 20%",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_risk_type_has_three_moves() {
        let table = PlaybookTable::standard();
        for risk_type in [
            RiskType::FinancialRisk,
            RiskType::MarketValidation,
            RiskType::ExecutionRisk,
            RiskType::MarketRisk,
            RiskType::TeamCapacity,
        ] {
            let playbook = table.get(risk_type).unwrap();
            assert_eq!(playbook.moves.len(), 3, "{}", risk_type.key());
            assert!(playbook
                .moves
                .iter()
                .all(|m| m.deliverables.len() == 3 && m.resources.len() == 2));
        }
    }

    #[test]
    fn team_capacity_has_no_mitigation() {
        let table = PlaybookTable::standard();
        assert!(table.get(RiskType::TeamCapacity).unwrap().risk_mitigation.is_empty());
    }
}
