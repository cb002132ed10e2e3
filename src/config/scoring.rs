//! Composite score weights.
//!
//! Both composites are weighted sums whose weights must sum to 1.0. Invalid
//! weights in a config file are replaced by the defaults with a warning;
//! valid ones are normalized to an exact sum.

use serde::{Deserialize, Serialize};

/// Sums closer to 1.0 than this are left untouched.
const NORMALIZE_TOLERANCE: f64 = 1e-9;

fn default_traction_weight() -> f64 {
    0.30
}

fn default_team_quality_weight() -> f64 {
    0.20
}

fn default_market_size_weight() -> f64 {
    0.20
}

fn default_technical_weight() -> f64 {
    0.15
}

fn default_financial_health_weight() -> f64 {
    0.15
}

fn default_model_blend() -> f64 {
    0.70
}

// Pure function: Check if a weight is in valid range
fn is_valid_weight(weight: f64) -> bool {
    (0.0..=1.0).contains(&weight)
}

// Pure function: Validate a single weight with name
fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
    if is_valid_weight(weight) {
        Ok(())
    } else {
        Err(format!("{} weight must be between 0.0 and 1.0", name))
    }
}

fn validate_sum(label: &str, sum: f64) -> Result<(), String> {
    if (sum - 1.0).abs() > 0.001 {
        Err(format!("{} weights must sum to 1.0, but sum to {:.3}", label, sum))
    } else {
        Ok(())
    }
}

/// Investor Readiness Level weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrlWeights {
    #[serde(default = "default_traction_weight")]
    pub traction: f64,

    #[serde(default = "default_team_quality_weight")]
    pub team_quality: f64,

    #[serde(default = "default_market_size_weight")]
    pub market_size: f64,

    #[serde(default = "default_technical_weight")]
    pub technical_feasibility: f64,

    #[serde(default = "default_financial_health_weight")]
    pub financial_health: f64,

    /// Share of the dimension composite in the final IRL; the remainder
    /// comes from the supplied success probability.
    #[serde(default = "default_model_blend")]
    pub model_blend: f64,
}

impl Default for IrlWeights {
    fn default() -> Self {
        Self {
            traction: default_traction_weight(),
            team_quality: default_team_quality_weight(),
            market_size: default_market_size_weight(),
            technical_feasibility: default_technical_weight(),
            financial_health: default_financial_health_weight(),
            model_blend: default_model_blend(),
        }
    }
}

impl IrlWeights {
    fn dimension_sum(&self) -> f64 {
        self.traction
            + self.team_quality
            + self.market_size
            + self.technical_feasibility
            + self.financial_health
    }

    /// Validate that weights sum to 1.0 (with small tolerance for floating point)
    pub fn validate(&self) -> Result<(), String> {
        validate_weight(self.traction, "Traction")?;
        validate_weight(self.team_quality, "Team quality")?;
        validate_weight(self.market_size, "Market size")?;
        validate_weight(self.technical_feasibility, "Technical feasibility")?;
        validate_weight(self.financial_health, "Financial health")?;
        validate_weight(self.model_blend, "Model blend")?;
        validate_sum("IRL dimension", self.dimension_sum())
    }

    /// Normalize weights to ensure they sum to 1.0
    pub fn normalize(&mut self) {
        let sum = self.dimension_sum();
        if sum > 0.0 && (sum - 1.0).abs() > NORMALIZE_TOLERANCE {
            self.traction /= sum;
            self.team_quality /= sum;
            self.market_size /= sum;
            self.technical_feasibility /= sum;
            self.financial_health /= sum;
        }
    }
}

fn default_success_weight() -> f64 {
    0.30
}

fn default_readiness_weight() -> f64 {
    0.25
}

fn default_market_fit_weight() -> f64 {
    0.20
}

fn default_execution_weight() -> f64 {
    0.15
}

fn default_sustainability_weight() -> f64 {
    0.10
}

/// Innovation Confidence Index weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IciWeights {
    #[serde(default = "default_success_weight")]
    pub success_probability: f64,

    #[serde(default = "default_readiness_weight")]
    pub investor_readiness: f64,

    #[serde(default = "default_market_fit_weight")]
    pub market_fit: f64,

    #[serde(default = "default_execution_weight")]
    pub execution_readiness: f64,

    #[serde(default = "default_sustainability_weight")]
    pub financial_sustainability: f64,
}

impl Default for IciWeights {
    fn default() -> Self {
        Self {
            success_probability: default_success_weight(),
            investor_readiness: default_readiness_weight(),
            market_fit: default_market_fit_weight(),
            execution_readiness: default_execution_weight(),
            financial_sustainability: default_sustainability_weight(),
        }
    }
}

impl IciWeights {
    fn sum(&self) -> f64 {
        self.success_probability
            + self.investor_readiness
            + self.market_fit
            + self.execution_readiness
            + self.financial_sustainability
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_weight(self.success_probability, "Success probability")?;
        validate_weight(self.investor_readiness, "Investor readiness")?;
        validate_weight(self.market_fit, "Market fit")?;
        validate_weight(self.execution_readiness, "Execution readiness")?;
        validate_weight(self.financial_sustainability, "Financial sustainability")?;
        validate_sum("ICI", self.sum())
    }

    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 && (sum - 1.0).abs() > NORMALIZE_TOLERANCE {
            self.success_probability /= sum;
            self.investor_readiness /= sum;
            self.market_fit /= sum;
            self.execution_readiness /= sum;
            self.financial_sustainability /= sum;
        }
    }
}
