use crate::core::{InvestorAppeal, RiskLevel};

/// Executive summary paragraph for a success-probability band.
pub fn executive_summary(success_probability: f64, pressing_count: usize) -> String {
    let sp = success_probability;
    if sp < 30.0 {
        format!(
            "The project faces critical challenges in {} key areas that threaten its continuity. \
             The current success probability ({:.0}%) is very low and requires immediate \
             intervention on the fundamental risks.",
            pressing_count, sp
        )
    } else if sp < 50.0 {
        format!(
            "The project faces moderate to high challenges in {} areas. The success probability \
             ({:.0}%) needs substantial improvement before launch.",
            pressing_count, sp
        )
    } else if sp < 70.0 {
        format!(
            "The project is on the right track, with {} challenges that need attention. The \
             success probability ({:.0}%) is acceptable but can be improved.",
            pressing_count, sp
        )
    } else {
        format!(
            "The project is in a good position, with {} potential improvement points. The \
             success probability ({:.0}%) is high.",
            pressing_count, sp
        )
    }
}

pub fn risk_level(critical_count: usize, high_count: usize, success_probability: f64) -> RiskLevel {
    if critical_count >= 2 || success_probability < 30.0 {
        RiskLevel::Critical
    } else if critical_count >= 1 || high_count >= 2 || success_probability < 50.0 {
        RiskLevel::High
    } else if high_count >= 1 || success_probability < 70.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Appeal to investors; the risk level takes precedence over the
/// probability bands.
pub fn investor_appeal(risk: RiskLevel, success_probability: f64) -> InvestorAppeal {
    if risk == RiskLevel::Critical || success_probability < 30.0 {
        InvestorAppeal::VeryLow
    } else if risk == RiskLevel::High || success_probability < 50.0 {
        InvestorAppeal::Low
    } else if risk == RiskLevel::Medium || success_probability < 70.0 {
        InvestorAppeal::Medium
    } else if success_probability < 85.0 {
        InvestorAppeal::High
    } else {
        InvestorAppeal::VeryHigh
    }
}
