//! Attribution classification.
//!
//! Maps a signed per-feature attribution to one of seven impact buckets.
//! Each feature belongs to a threshold group; a magnitude must strictly
//! exceed a group band to land in it. Features outside every group, and
//! magnitudes below the smallest band, are neutral.

pub mod fallback;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{AttributionThresholds, ThresholdBands};
use crate::core::Feature;

pub use fallback::fallback_attributions;

/// Signed impact bucket for one attribution value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactBucket {
    NegativeHigh,
    NegativeMedium,
    NegativeLow,
    Neutral,
    PositiveLow,
    PositiveMedium,
    PositiveHigh,
}

impl ImpactBucket {
    pub fn is_negative(self) -> bool {
        matches!(
            self,
            ImpactBucket::NegativeHigh | ImpactBucket::NegativeMedium | ImpactBucket::NegativeLow
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            ImpactBucket::NegativeHigh => "negative_high",
            ImpactBucket::NegativeMedium => "negative_medium",
            ImpactBucket::NegativeLow => "negative_low",
            ImpactBucket::Neutral => "neutral",
            ImpactBucket::PositiveLow => "positive_low",
            ImpactBucket::PositiveMedium => "positive_medium",
            ImpactBucket::PositiveHigh => "positive_high",
        }
    }
}

impl fmt::Display for ImpactBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Threshold family a feature is classified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdGroup {
    CriticalProcess,
    Financial,
    Market,
    Team,
    Technical,
}

impl ThresholdGroup {
    pub fn of(feature: Feature) -> Option<Self> {
        match feature {
            Feature::HypothesisValidationRate | Feature::RatCompletionRate => {
                Some(ThresholdGroup::CriticalProcess)
            }
            Feature::Budget => Some(ThresholdGroup::Financial),
            Feature::MarketDemand | Feature::CompetitiveAdvantage => Some(ThresholdGroup::Market),
            Feature::TeamSize => Some(ThresholdGroup::Team),
            Feature::TechnicalFeasibility => Some(ThresholdGroup::Technical),
            _ => None,
        }
    }

    fn bands(self, thresholds: &AttributionThresholds) -> &ThresholdBands {
        match self {
            ThresholdGroup::CriticalProcess => &thresholds.critical_process,
            ThresholdGroup::Financial => &thresholds.financial,
            ThresholdGroup::Market => &thresholds.market,
            ThresholdGroup::Team => &thresholds.team,
            ThresholdGroup::Technical => &thresholds.technical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Magnitude {
    High,
    Medium,
    Low,
}

fn exceeds(band: Option<f64>, magnitude: f64) -> bool {
    band.is_some_and(|threshold| magnitude > threshold)
}

fn magnitude_band(bands: &ThresholdBands, magnitude: f64) -> Option<Magnitude> {
    if exceeds(bands.high, magnitude) {
        Some(Magnitude::High)
    } else if exceeds(bands.medium, magnitude) {
        Some(Magnitude::Medium)
    } else if exceeds(bands.low, magnitude) {
        Some(Magnitude::Low)
    } else {
        None
    }
}

/// Classify an attribution for a feature given by name. Unknown names are
/// neutral.
pub fn classify(feature: &str, attribution: f64, thresholds: &AttributionThresholds) -> ImpactBucket {
    Feature::from_key(feature)
        .map(|f| classify_feature(f, attribution, thresholds))
        .unwrap_or(ImpactBucket::Neutral)
}

pub fn classify_feature(
    feature: Feature,
    attribution: f64,
    thresholds: &AttributionThresholds,
) -> ImpactBucket {
    let Some(group) = ThresholdGroup::of(feature) else {
        return ImpactBucket::Neutral;
    };

    // NaN never exceeds a band, so it falls through to neutral
    let band = magnitude_band(group.bands(thresholds), attribution.abs());

    match (attribution < 0.0, band) {
        (_, None) => ImpactBucket::Neutral,
        (true, Some(Magnitude::High)) => ImpactBucket::NegativeHigh,
        (true, Some(Magnitude::Medium)) => ImpactBucket::NegativeMedium,
        (true, Some(Magnitude::Low)) => ImpactBucket::NegativeLow,
        (false, Some(Magnitude::High)) => ImpactBucket::PositiveHigh,
        (false, Some(Magnitude::Medium)) => ImpactBucket::PositiveMedium,
        (false, Some(Magnitude::Low)) => ImpactBucket::PositiveLow,
    }
}
