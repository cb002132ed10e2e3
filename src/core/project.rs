use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::features::{FeatureVector, ProjectMetrics, RawValue};
use super::normalize::coerce_raw;
use super::types::{FundingStage, Organization, Sector};

/// Default success probability (0-100) when none is supplied.
pub const DEFAULT_SUCCESS_PROBABILITY: f64 = 50.0;

/// Signed per-feature contribution scores, roughly in [-1, 1].
///
/// Keys are plain strings: names that are not canonical features are
/// tolerated and classify as neutral.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributionSet(BTreeMap<String, f64>);

impl AttributionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, feature: impl Into<String>, value: f64) {
        self.0.insert(feature.into(), value);
    }

    pub fn get(&self, feature: &str) -> Option<f64> {
        self.0.get(feature).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for AttributionSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// One project as supplied by a caller: identifiers, an optional external
/// attribution set, and every remaining key as a raw feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    /// Externally computed success probability on a 0-100 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_probability: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributions: Option<AttributionSet>,
    #[serde(flatten)]
    pub features: FeatureVector,
}

impl ProjectInput {
    pub fn new(features: FeatureVector) -> Self {
        Self {
            features,
            ..Self::default()
        }
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_success_probability(mut self, probability: f64) -> Self {
        self.success_probability = Some(RawValue::Float(probability));
        self
    }

    pub fn with_attributions(mut self, attributions: AttributionSet) -> Self {
        self.attributions = Some(attributions);
        self
    }
}

/// Identifiers resolved to their typed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectProfile {
    pub id: String,
    pub title: String,
    pub sector: Sector,
    pub organization: Organization,
    pub stage: FundingStage,
}

/// Immutable, fully normalized view of one project. Every stage reads this.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSnapshot {
    pub profile: ProjectProfile,
    pub metrics: ProjectMetrics,
    /// Success probability clamped to [0, 100].
    pub success_probability: f64,
}

impl ProjectSnapshot {
    pub fn from_input(input: &ProjectInput) -> Self {
        let profile = ProjectProfile {
            id: input.id.clone().unwrap_or_else(|| "unknown".to_string()),
            title: input
                .title
                .clone()
                .unwrap_or_else(|| "Untitled project".to_string()),
            sector: input
                .sector
                .as_deref()
                .map(Sector::parse)
                .unwrap_or_default(),
            organization: input
                .organization
                .as_deref()
                .map(Organization::parse)
                .unwrap_or_default(),
            stage: input
                .stage
                .as_deref()
                .map(FundingStage::parse)
                .unwrap_or_default(),
        };

        let success_probability = input
            .success_probability
            .as_ref()
            .map(|raw| coerce_raw(raw).value().min(100.0))
            .unwrap_or(DEFAULT_SUCCESS_PROBABILITY);

        Self {
            profile,
            metrics: ProjectMetrics::from_features(&input.features),
            success_probability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn flat_json_splits_identifiers_from_features() {
        let input: ProjectInput = serde_json::from_str(indoc! {r#"
            {
                "id": "p-1",
                "sector": "fintech",
                "success_probability": 22.0,
                "budget": 150000,
                "team_size": "3",
                "attributions": {"budget": -0.35}
            }
        "#})
        .unwrap();

        assert_eq!(input.id.as_deref(), Some("p-1"));
        assert_eq!(input.features.len(), 2);
        assert!(input.features.contains("budget"));
        assert_eq!(input.attributions.unwrap().get("budget"), Some(-0.35));
    }

    #[test]
    fn snapshot_applies_identifier_defaults() {
        let snapshot = ProjectSnapshot::from_input(&ProjectInput::default());
        assert_eq!(snapshot.profile.sector, Sector::Fintech);
        assert_eq!(snapshot.profile.stage, FundingStage::Seed);
        assert_eq!(snapshot.profile.organization, Organization::Startup);
        assert_eq!(snapshot.success_probability, DEFAULT_SUCCESS_PROBABILITY);
    }

    #[test]
    fn percent_text_is_divided_like_any_other_value() {
        let percent = ProjectInput {
            success_probability: Some(RawValue::from("35%")),
            ..ProjectInput::default()
        };
        let plain = ProjectInput {
            success_probability: Some(RawValue::from("35")),
            ..ProjectInput::default()
        };
        assert_eq!(ProjectSnapshot::from_input(&percent).success_probability, 0.35);
        assert_eq!(ProjectSnapshot::from_input(&plain).success_probability, 35.0);
    }
}
