//! Attribution magnitude thresholds.
//!
//! Each feature belongs to a threshold group. A group defines up to three
//! strictly-exceeded magnitude bands (high, medium, low); a magnitude that
//! clears none of them is neutral.

use serde::{Deserialize, Serialize};

/// Magnitude bands for one threshold group. Absent bands are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBands {
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub medium: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
}

impl ThresholdBands {
    pub const fn new(high: Option<f64>, medium: Option<f64>, low: Option<f64>) -> Self {
        Self { high, medium, low }
    }

    /// Bands must be positive and strictly decreasing from high to low.
    pub fn validate(&self, name: &str) -> Result<(), String> {
        let present: Vec<f64> = [self.high, self.medium, self.low]
            .into_iter()
            .flatten()
            .collect();

        if present.is_empty() {
            return Err(format!("{} thresholds define no bands", name));
        }
        if present.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(format!("{} thresholds must be positive", name));
        }
        if present.windows(2).any(|w| w[0] <= w[1]) {
            return Err(format!(
                "{} thresholds must decrease from high to low",
                name
            ));
        }
        Ok(())
    }
}

fn default_critical_process() -> ThresholdBands {
    ThresholdBands::new(Some(0.35), Some(0.20), Some(0.10))
}

fn default_financial() -> ThresholdBands {
    ThresholdBands::new(Some(0.30), Some(0.15), Some(0.08))
}

fn default_market() -> ThresholdBands {
    ThresholdBands::new(Some(0.25), Some(0.15), Some(0.08))
}

fn default_team() -> ThresholdBands {
    ThresholdBands::new(None, Some(0.20), Some(0.10))
}

fn default_technical() -> ThresholdBands {
    ThresholdBands::new(Some(0.25), Some(0.15), None)
}

fn default_insight_cutoff() -> f64 {
    -0.05
}

/// Threshold configuration for the attribution classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionThresholds {
    /// Hypothesis validation and RAT completion
    #[serde(default = "default_critical_process")]
    pub critical_process: ThresholdBands,

    /// Budget
    #[serde(default = "default_financial")]
    pub financial: ThresholdBands,

    /// Market demand and competitive advantage
    #[serde(default = "default_market")]
    pub market: ThresholdBands,

    /// Team size
    #[serde(default = "default_team")]
    pub team: ThresholdBands,

    /// Technical feasibility
    #[serde(default = "default_technical")]
    pub technical: ThresholdBands,

    /// Only attributions strictly below this value produce insights.
    #[serde(default = "default_insight_cutoff")]
    pub insight_cutoff: f64,
}

impl Default for AttributionThresholds {
    fn default() -> Self {
        Self {
            critical_process: default_critical_process(),
            financial: default_financial(),
            market: default_market(),
            team: default_team(),
            technical: default_technical(),
            insight_cutoff: default_insight_cutoff(),
        }
    }
}

impl AttributionThresholds {
    pub fn validate(&self) -> Result<(), String> {
        self.critical_process.validate("critical_process")?;
        self.financial.validate("financial")?;
        self.market.validate("market")?;
        self.team.validate("team")?;
        self.technical.validate("technical")?;
        if !self.insight_cutoff.is_finite() || self.insight_cutoff > 0.0 {
            return Err("insight_cutoff must be a non-positive number".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AttributionThresholds::default().validate().is_ok());
    }

    #[test]
    fn rejects_unordered_bands() {
        let bands = ThresholdBands::new(Some(0.1), Some(0.2), None);
        assert!(bands.validate("market").is_err());
    }

    #[test]
    fn rejects_empty_bands() {
        let bands = ThresholdBands::new(None, None, None);
        assert!(bands.validate("team").is_err());
    }
}
