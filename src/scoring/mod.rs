//! Composite scoring: the five readiness dimensions, the Investor Readiness
//! Level, the Innovation Confidence Index and the critical path.
//!
//! Every division here is zero-guarded and every score is clamped onto the
//! 0-100 scale, so scoring is total over any finite input.

pub mod critical_path;
pub mod dimensions;
pub mod ici;
pub mod irl;

use crate::config::Heuristics;
use crate::core::{ProjectMetrics, Score0To100};

pub use critical_path::{critical_path, time_to_success, CriticalPathStage, StageUrgency};
pub use dimensions::{serviceable_market_millions, Dimension, DimensionScores};
pub use ici::{IciComponent, IciComponents, IciScore};
pub use irl::IrlScore;

/// Monthly burn: the explicit figure when supplied, otherwise a fixed
/// fraction of the budget.
pub fn monthly_burn(metrics: &ProjectMetrics, heuristics: &Heuristics) -> f64 {
    metrics
        .monthly_burn
        .unwrap_or(metrics.budget * heuristics.burn_fraction)
}

/// Months of runway. No budget means no runway; no burn with a budget
/// means the runway target.
pub fn runway_months(metrics: &ProjectMetrics, heuristics: &Heuristics) -> f64 {
    if metrics.budget <= 0.0 {
        return 0.0;
    }
    let burn = monthly_burn(metrics, heuristics);
    if burn <= 0.0 {
        heuristics.runway_target_months
    } else {
        metrics.budget / burn
    }
}

pub fn runway_score(metrics: &ProjectMetrics, heuristics: &Heuristics) -> Score0To100 {
    Score0To100::new(runway_months(metrics, heuristics) / heuristics.runway_target_months * 100.0)
}

pub fn roi_score(metrics: &ProjectMetrics) -> Score0To100 {
    Score0To100::from_fraction(metrics.roi)
}
