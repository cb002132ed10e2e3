use serde::{Deserialize, Serialize};

fn default_burn_fraction() -> f64 {
    0.10
}

fn default_runway_target_months() -> f64 {
    18.0
}

fn default_user_target() -> f64 {
    10_000.0
}

fn default_sam_fraction() -> f64 {
    0.30
}

fn default_sam_midpoint_millions() -> f64 {
    100.0
}

fn default_sam_ceiling_millions() -> f64 {
    500.0
}

fn default_team_size_normalizer() -> f64 {
    10.0
}

fn default_valuation_spread() -> f64 {
    0.30
}

fn default_max_insights() -> usize {
    5
}

/// Named business heuristics behind the scoring formulas.
///
/// None of these are derived from data; they are exposed so that a
/// deployment can tune them without touching code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heuristics {
    /// Monthly burn as a fraction of budget when no burn rate is supplied.
    #[serde(default = "default_burn_fraction")]
    pub burn_fraction: f64,

    /// Runway that earns a full runway score.
    #[serde(default = "default_runway_target_months")]
    pub runway_target_months: f64,

    /// User count that earns a full user score.
    #[serde(default = "default_user_target")]
    pub user_target: f64,

    /// Largest share of TAM treated as serviceable, at full demand.
    #[serde(default = "default_sam_fraction")]
    pub sam_fraction: f64,

    /// SAM (millions) that maps to 50 market-size points.
    #[serde(default = "default_sam_midpoint_millions")]
    pub sam_midpoint_millions: f64,

    /// SAM (millions) that maps to 100 market-size points.
    #[serde(default = "default_sam_ceiling_millions")]
    pub sam_ceiling_millions: f64,

    /// Team size that earns a full execution team score.
    #[serde(default = "default_team_size_normalizer")]
    pub team_size_normalizer: f64,

    /// Half-width of the valuation range around the point estimate.
    #[serde(default = "default_valuation_spread")]
    pub valuation_spread: f64,

    /// Insights kept in a report.
    #[serde(default = "default_max_insights")]
    pub max_insights: usize,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            burn_fraction: default_burn_fraction(),
            runway_target_months: default_runway_target_months(),
            user_target: default_user_target(),
            sam_fraction: default_sam_fraction(),
            sam_midpoint_millions: default_sam_midpoint_millions(),
            sam_ceiling_millions: default_sam_ceiling_millions(),
            team_size_normalizer: default_team_size_normalizer(),
            valuation_spread: default_valuation_spread(),
            max_insights: default_max_insights(),
        }
    }
}

impl Heuristics {
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("burn_fraction", self.burn_fraction),
            ("runway_target_months", self.runway_target_months),
            ("user_target", self.user_target),
            ("sam_fraction", self.sam_fraction),
            ("sam_midpoint_millions", self.sam_midpoint_millions),
            ("sam_ceiling_millions", self.sam_ceiling_millions),
            ("team_size_normalizer", self.team_size_normalizer),
        ];
        if let Some((name, _)) = positive
            .iter()
            .find(|(_, v)| !v.is_finite() || *v <= 0.0)
        {
            return Err(format!("{} must be a positive number", name));
        }
        if self.sam_ceiling_millions <= self.sam_midpoint_millions {
            return Err("sam_ceiling_millions must exceed sam_midpoint_millions".to_string());
        }
        if !self.valuation_spread.is_finite() || !(0.0..1.0).contains(&self.valuation_spread) {
            return Err("valuation_spread must be in [0, 1)".to_string());
        }
        if self.max_insights == 0 {
            return Err("max_insights must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(Heuristics::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_sam_breakpoints() {
        let h = Heuristics {
            sam_ceiling_millions: 50.0,
            ..Heuristics::default()
        };
        assert!(h.validate().is_err());
    }

    #[test]
    fn rejects_zero_burn_fraction() {
        let h = Heuristics {
            burn_fraction: 0.0,
            ..Heuristics::default()
        };
        assert_eq!(h.validate().unwrap_err(), "burn_fraction must be a positive number");
    }

    #[test]
    fn rejects_non_finite_breakpoints() {
        for ceiling in [f64::NAN, f64::INFINITY] {
            let h = Heuristics {
                sam_ceiling_millions: ceiling,
                ..Heuristics::default()
            };
            assert_eq!(
                h.validate().unwrap_err(),
                "sam_ceiling_millions must be a positive number"
            );
        }

        let h = Heuristics {
            valuation_spread: f64::NAN,
            ..Heuristics::default()
        };
        assert!(h.validate().is_err());
    }
}
