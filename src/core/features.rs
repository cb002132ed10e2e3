use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::normalize::{coerce_raw, Coerced};

/// A raw field value exactly as supplied by the caller.
///
/// Integer and text encodings are kept distinct so that what-if edits can
/// write a modified value back in the same encoding it arrived in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// The canonical project metrics understood by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Budget,
    TeamSize,
    MarketDemand,
    TechnicalFeasibility,
    HypothesisValidationRate,
    RatCompletionRate,
    UserCount,
    RevenueGrowth,
    UserEngagement,
    MarketShare,
    Roi,
    CompetitiveAdvantage,
    MonthlyBurn,
}

impl Feature {
    pub const ALL: [Feature; 13] = [
        Feature::Budget,
        Feature::TeamSize,
        Feature::MarketDemand,
        Feature::TechnicalFeasibility,
        Feature::HypothesisValidationRate,
        Feature::RatCompletionRate,
        Feature::UserCount,
        Feature::RevenueGrowth,
        Feature::UserEngagement,
        Feature::MarketShare,
        Feature::Roi,
        Feature::CompetitiveAdvantage,
        Feature::MonthlyBurn,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Feature::Budget => "budget",
            Feature::TeamSize => "team_size",
            Feature::MarketDemand => "market_demand",
            Feature::TechnicalFeasibility => "technical_feasibility",
            Feature::HypothesisValidationRate => "hypothesis_validation_rate",
            Feature::RatCompletionRate => "rat_completion_rate",
            Feature::UserCount => "user_count",
            Feature::RevenueGrowth => "revenue_growth",
            Feature::UserEngagement => "user_engagement",
            Feature::MarketShare => "market_share",
            Feature::Roi => "roi",
            Feature::CompetitiveAdvantage => "competitive_advantage",
            Feature::MonthlyBurn => "monthly_burn",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Value assumed when the feature is absent from the input.
    ///
    /// `monthly_burn` has no default: it is derived from the budget.
    pub fn default_value(self) -> Option<f64> {
        match self {
            Feature::MarketDemand | Feature::TechnicalFeasibility | Feature::UserEngagement => {
                Some(50.0)
            }
            Feature::HypothesisValidationRate | Feature::RatCompletionRate => Some(0.5),
            Feature::MonthlyBurn => None,
            _ => Some(0.0),
        }
    }

    /// Coerce a raw value for this feature.
    pub fn coerce(self, raw: &RawValue) -> Coerced {
        coerce_raw(raw)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw named metrics in mixed encodings. Unknown keys are carried along
/// untouched and ignored by scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(BTreeMap<String, RawValue>);

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RawValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for FeatureVector {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Why a canonical value differs from what was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoercionReason {
    /// Field absent; the feature default was used.
    Missing,
    /// Field present but not numeric; coerced to zero.
    Unparsable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coercion {
    pub feature: Feature,
    pub reason: CoercionReason,
    pub value: f64,
}

/// Canonical non-negative metrics derived from a [`FeatureVector`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    pub budget: f64,
    pub team_size: f64,
    pub market_demand: f64,
    pub technical_feasibility: f64,
    pub hypothesis_validation_rate: f64,
    pub rat_completion_rate: f64,
    pub user_count: f64,
    pub revenue_growth: f64,
    pub user_engagement: f64,
    pub market_share: f64,
    pub roi: f64,
    pub competitive_advantage: f64,
    /// Explicit monthly burn, when supplied.
    pub monthly_burn: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub coercions: Vec<Coercion>,
}

impl ProjectMetrics {
    pub fn from_features(features: &FeatureVector) -> Self {
        let mut coercions = Vec::new();
        let mut read = |feature: Feature| -> Option<f64> {
            match features.get(feature.key()) {
                Some(raw) => {
                    let coerced = feature.coerce(raw);
                    if coerced.is_defaulted() {
                        coercions.push(Coercion {
                            feature,
                            reason: CoercionReason::Unparsable,
                            value: coerced.value(),
                        });
                    }
                    Some(coerced.value())
                }
                None => {
                    let default = feature.default_value();
                    if let Some(value) = default {
                        coercions.push(Coercion {
                            feature,
                            reason: CoercionReason::Missing,
                            value,
                        });
                    }
                    default
                }
            }
        };

        let budget = read(Feature::Budget).unwrap_or(0.0);
        let team_size = read(Feature::TeamSize).unwrap_or(0.0);
        let market_demand = read(Feature::MarketDemand).unwrap_or(50.0);
        let technical_feasibility = read(Feature::TechnicalFeasibility).unwrap_or(50.0);
        let hypothesis_validation_rate = read(Feature::HypothesisValidationRate).unwrap_or(0.5);
        let rat_completion_rate = read(Feature::RatCompletionRate).unwrap_or(0.5);
        let user_count = read(Feature::UserCount).unwrap_or(0.0);
        let revenue_growth = read(Feature::RevenueGrowth).unwrap_or(0.0);
        let user_engagement = read(Feature::UserEngagement).unwrap_or(50.0);
        let market_share = read(Feature::MarketShare).unwrap_or(0.0);
        let roi = read(Feature::Roi).unwrap_or(0.0);
        let competitive_advantage = read(Feature::CompetitiveAdvantage).unwrap_or(0.0);
        let monthly_burn = read(Feature::MonthlyBurn);

        Self {
            budget,
            team_size,
            market_demand,
            technical_feasibility,
            hypothesis_validation_rate,
            rat_completion_rate,
            user_count,
            revenue_growth,
            user_engagement,
            market_share,
            roi,
            competitive_advantage,
            monthly_burn,
            coercions,
        }
    }

    /// Canonical value of a feature. A missing burn rate reads as zero here;
    /// use the runway helpers for the derived figure.
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Budget => self.budget,
            Feature::TeamSize => self.team_size,
            Feature::MarketDemand => self.market_demand,
            Feature::TechnicalFeasibility => self.technical_feasibility,
            Feature::HypothesisValidationRate => self.hypothesis_validation_rate,
            Feature::RatCompletionRate => self.rat_completion_rate,
            Feature::UserCount => self.user_count,
            Feature::RevenueGrowth => self.revenue_growth,
            Feature::UserEngagement => self.user_engagement,
            Feature::MarketShare => self.market_share,
            Feature::Roi => self.roi,
            Feature::CompetitiveAdvantage => self.competitive_advantage,
            Feature::MonthlyBurn => self.monthly_burn.unwrap_or(0.0),
        }
    }
}
