use serde::{Deserialize, Serialize};

use crate::core::FundingStage;
use crate::insights::Insight;
use crate::knowledge::KnowledgeBase;

/// Below this ICI the path gains a product-market-fit stage.
const PMF_STAGE_CEILING: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageUrgency {
    Urgent,
    Important,
    Critical,
    Growth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalPathStage {
    pub stage: u32,
    pub name: String,
    pub duration: String,
    pub urgency: StageUrgency,
    pub key_actions: Vec<String>,
}

fn stage(name: &str, duration: &str, urgency: StageUrgency, actions: Vec<String>) -> CriticalPathStage {
    CriticalPathStage {
        stage: 0,
        name: name.to_string(),
        duration: duration.to_string(),
        urgency,
        key_actions: actions,
    }
}

fn canned(actions: &[&str]) -> Vec<String> {
    actions.iter().map(|a| a.to_string()).collect()
}

/// Ordered milestone stages toward success, numbered from 1.
pub fn critical_path(insights: &[Insight], ici: f64) -> Vec<CriticalPathStage> {
    let mut stages = Vec::with_capacity(4);

    let pressing: Vec<String> = insights
        .iter()
        .filter(|i| i.severity.is_pressing())
        .take(3)
        .map(|i| i.title.clone())
        .collect();
    if !pressing.is_empty() {
        stages.push(stage(
            "Address critical risks",
            "1-3 months",
            StageUrgency::Urgent,
            pressing,
        ));
    }

    if ici < PMF_STAGE_CEILING {
        stages.push(stage(
            "Build product-market fit",
            "3-6 months",
            StageUrgency::Important,
            canned(&[
                "Validate core hypotheses through 100 customer interviews",
                "Launch an MVP and measure engagement",
                "Reach product-market fit (NPS above 50)",
            ]),
        ));
    }

    stages.push(stage(
        "Secure funding",
        "2-4 months",
        StageUrgency::Critical,
        canned(&[
            "Prepare a professional pitch deck",
            "Approach 20 potential investors",
            "Close a funding round",
        ]),
    ));

    stages.push(stage(
        "Scale and grow",
        "6-12 months",
        StageUrgency::Growth,
        canned(&[
            "Expand the team with 5-10 hires",
            "Grow the user base 10x",
            "Hit the revenue targets",
        ]),
    ));

    for (i, s) in stages.iter_mut().enumerate() {
        s.stage = i as u32 + 1;
    }
    stages
}

/// Estimated time to success: the stage's base months scaled by ICI.
pub fn time_to_success(stage: &FundingStage, ici: f64, knowledge: &KnowledgeBase) -> String {
    let multiplier = if ici >= 70.0 {
        0.8
    } else if ici >= 50.0 {
        1.0
    } else {
        1.3
    };
    let months = knowledge.stages.base_months(stage) * multiplier;

    if months < 12.0 {
        format!("{} months", months as u32)
    } else {
        format!("{:.1} years", months / 12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_project_skips_risk_and_pmf_stages() {
        let path = critical_path(&[], 75.0);
        let names: Vec<_> = path.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Secure funding", "Scale and grow"]);
        assert_eq!(path[0].stage, 1);
        assert_eq!(path[1].stage, 2);
    }

    #[test]
    fn low_ici_adds_pmf_stage() {
        let path = critical_path(&[], 69.9);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0].urgency, StageUrgency::Important);
    }

    #[test]
    fn time_to_success_formats() {
        let kb = KnowledgeBase::standard();
        assert_eq!(time_to_success(&FundingStage::Seed, 60.0, kb), "2.0 years");
        assert_eq!(time_to_success(&FundingStage::Seed, 75.0, kb), "1.6 years");
        assert_eq!(time_to_success(&FundingStage::SeriesB, 10.0, kb), "5.2 years");
        assert_eq!(
            time_to_success(&FundingStage::Other("bridge".into()), 50.0, kb),
            "2.0 years"
        );
    }
}
