//! Core data model: raw inputs, their normalized form, and the shared
//! enums every stage speaks.

pub mod features;
pub mod format;
pub mod normalize;
pub mod project;
pub mod scores;
pub mod types;

pub use features::{
    Coercion, CoercionReason, Feature, FeatureVector, ProjectMetrics, RawValue,
};
pub use format::{format_compact, format_thousands};
pub use normalize::{coerce_raw, coerce_text, parse_numeric_text, Coerced, NumericText};
pub use project::{
    AttributionSet, ProjectInput, ProjectProfile, ProjectSnapshot, DEFAULT_SUCCESS_PROBABILITY,
};
pub use scores::{weighted_sum, Score0To100};
pub use types::{
    ConfidenceLevel, FundingStage, ImpactTier, InsightCategory, InvestorAppeal, IrlGrade,
    Organization, RiskLevel, RiskType, Sector, Severity,
};
