use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal insight severity. Sorting uses [`Severity::rank`], highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn rank(self) -> u8 {
        match self {
            Severity::Critical => 3,
            Severity::High => 2,
            Severity::Medium => 1,
            Severity::Low => 0,
        }
    }

    /// Critical and high insights drive roadmaps and the critical path.
    pub fn is_pressing(self) -> bool {
        matches!(self, Severity::Critical | Severity::High)
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Business risk category attached to every insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    FinancialRisk,
    FinancialPlanning,
    FinancialOptimization,
    MarketValidation,
    ExecutionRisk,
    ExecutionPlanning,
    MarketRisk,
    MarketStrategy,
    MarketOpportunity,
    TeamCapacity,
    TeamPlanning,
    CompetitiveRisk,
    CompetitiveStrategy,
    TechnicalRisk,
    TechnicalPlanning,
}

impl InsightCategory {
    /// Roadmap family that addresses this category.
    pub fn risk_type(self) -> RiskType {
        use InsightCategory::*;
        match self {
            FinancialRisk | FinancialPlanning | FinancialOptimization => RiskType::FinancialRisk,
            MarketValidation => RiskType::MarketValidation,
            ExecutionRisk | ExecutionPlanning | TechnicalRisk | TechnicalPlanning => {
                RiskType::ExecutionRisk
            }
            MarketRisk | MarketStrategy | MarketOpportunity | CompetitiveRisk
            | CompetitiveStrategy => RiskType::MarketRisk,
            TeamCapacity | TeamPlanning => RiskType::TeamCapacity,
        }
    }
}

/// Roadmap knowledge-base families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskType {
    FinancialRisk,
    MarketValidation,
    ExecutionRisk,
    MarketRisk,
    TeamCapacity,
}

impl RiskType {
    pub fn key(self) -> &'static str {
        match self {
            RiskType::FinancialRisk => "financial_risk",
            RiskType::MarketValidation => "market_validation",
            RiskType::ExecutionRisk => "execution_risk",
            RiskType::MarketRisk => "market_risk",
            RiskType::TeamCapacity => "team_capacity",
        }
    }
}

/// Overall project risk level derived from insights and success probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Critical => "critical",
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

/// Five-tier appeal scale shared by the insight and readiness stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestorAppeal {
    VeryHigh,
    High,
    Medium,
    Low,
    VeryLow,
}

impl InvestorAppeal {
    /// Appeal implied by an IRL score alone.
    pub fn from_irl(score: f64) -> Self {
        if score >= 80.0 {
            InvestorAppeal::VeryHigh
        } else if score >= 65.0 {
            InvestorAppeal::High
        } else if score >= 50.0 {
            InvestorAppeal::Medium
        } else if score >= 35.0 {
            InvestorAppeal::Low
        } else {
            InvestorAppeal::VeryLow
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InvestorAppeal::VeryHigh => "very high",
            InvestorAppeal::High => "high",
            InvestorAppeal::Medium => "medium",
            InvestorAppeal::Low => "low",
            InvestorAppeal::VeryLow => "very low",
        }
    }
}

/// ICI confidence bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryHigh,
    High,
    Medium,
    Low,
    VeryLow,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            ConfidenceLevel::VeryHigh
        } else if score >= 70.0 {
            ConfidenceLevel::High
        } else if score >= 50.0 {
            ConfidenceLevel::Medium
        } else if score >= 30.0 {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::VeryLow
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::VeryHigh => "very high",
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::VeryLow => "very low",
        }
    }
}

/// Letter grade for an investor readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IrlGrade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D")]
    D,
}

impl IrlGrade {
    const BREAKPOINTS: [(f64, IrlGrade); 9] = [
        (90.0, IrlGrade::APlus),
        (85.0, IrlGrade::A),
        (80.0, IrlGrade::AMinus),
        (75.0, IrlGrade::BPlus),
        (70.0, IrlGrade::B),
        (65.0, IrlGrade::BMinus),
        (60.0, IrlGrade::CPlus),
        (55.0, IrlGrade::C),
        (50.0, IrlGrade::CMinus),
    ];

    pub fn from_score(score: f64) -> Self {
        Self::BREAKPOINTS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, grade)| *grade)
            .unwrap_or(IrlGrade::D)
    }

    pub fn label(self) -> &'static str {
        match self {
            IrlGrade::APlus => "A+",
            IrlGrade::A => "A",
            IrlGrade::AMinus => "A-",
            IrlGrade::BPlus => "B+",
            IrlGrade::B => "B",
            IrlGrade::BMinus => "B-",
            IrlGrade::CPlus => "C+",
            IrlGrade::C => "C",
            IrlGrade::CMinus => "C-",
            IrlGrade::D => "D",
        }
    }
}

impl fmt::Display for IrlGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative tier used inside business-impact submetrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactTier {
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl ImpactTier {
    pub fn label(self) -> &'static str {
        match self {
            ImpactTier::VeryHigh => "very high",
            ImpactTier::High => "high",
            ImpactTier::Moderate => "moderate",
            ImpactTier::Low => "low",
        }
    }
}

fn canonical_key(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace(['-', ' '], "_")
}

macro_rules! string_keyed_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $key:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// Any identifier outside the known set, kept verbatim.
            Other(String),
        }

        impl $name {
            pub fn parse(raw: &str) -> Self {
                match canonical_key(raw).as_str() {
                    $($key => $name::$variant,)+
                    _ => $name::Other(raw.trim().to_string()),
                }
            }

            pub fn key(&self) -> &str {
                match self {
                    $($name::$variant => $key,)+
                    $name::Other(raw) => raw.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::parse(&raw)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.key().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

string_keyed_enum! {
    /// Market sector of a project.
    Sector {
        Fintech => "fintech",
        DigitalHealth => "digital_health",
        SmartAgriculture => "smart_agriculture",
        RenewableEnergy => "renewable_energy",
        Ecommerce => "ecommerce",
        Edtech => "edtech",
        Proptech => "proptech",
        Logistics => "logistics",
        FoodDelivery => "food_delivery",
        Tourism => "tourism",
    }
}

string_keyed_enum! {
    /// Funding stage of a project.
    FundingStage {
        PreSeed => "pre_seed",
        Seed => "seed",
        SeriesA => "series_a",
        SeriesB => "series_b",
        Growth => "growth",
    }
}

string_keyed_enum! {
    /// Sponsoring organization type, used for the team-quality base score.
    Organization {
        Kaust => "kaust",
        Pif => "pif",
        Roshn => "roshn",
        Startup => "startup",
    }
}

impl Sector {
    /// Human-readable sector name used in narratives.
    pub fn display_name(&self) -> &str {
        match self {
            Sector::Fintech => "financial technology",
            Sector::DigitalHealth => "digital health",
            Sector::SmartAgriculture => "smart agriculture",
            Sector::RenewableEnergy => "renewable energy",
            Sector::Ecommerce => "e-commerce",
            Sector::Edtech => "education technology",
            Sector::Proptech => "property technology",
            Sector::Logistics => "logistics",
            Sector::FoodDelivery => "food delivery",
            Sector::Tourism => "tourism",
            Sector::Other(raw) => raw.as_str(),
        }
    }
}

impl Default for Sector {
    fn default() -> Self {
        Sector::Fintech
    }
}

impl Default for FundingStage {
    fn default() -> Self {
        FundingStage::Seed
    }
}

impl Default for Organization {
    fn default() -> Self {
        Organization::Startup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_breakpoints_are_inclusive() {
        assert_eq!(IrlGrade::from_score(90.0), IrlGrade::APlus);
        assert_ne!(IrlGrade::from_score(89.999), IrlGrade::APlus);
        assert_eq!(IrlGrade::from_score(89.999), IrlGrade::A);
        assert_eq!(IrlGrade::from_score(50.0), IrlGrade::CMinus);
        assert_eq!(IrlGrade::from_score(49.999), IrlGrade::D);
    }

    #[test]
    fn confidence_edges() {
        assert_eq!(ConfidenceLevel::from_score(85.0), ConfidenceLevel::VeryHigh);
        assert_eq!(ConfidenceLevel::from_score(84.999), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(70.0), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(69.999), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(30.0), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_score(29.999), ConfidenceLevel::VeryLow);
    }

    #[test]
    fn category_maps_to_roadmap_family() {
        assert_eq!(InsightCategory::FinancialPlanning.risk_type(), RiskType::FinancialRisk);
        assert_eq!(InsightCategory::TechnicalRisk.risk_type(), RiskType::ExecutionRisk);
        assert_eq!(InsightCategory::CompetitiveStrategy.risk_type(), RiskType::MarketRisk);
        assert_eq!(InsightCategory::TeamPlanning.risk_type(), RiskType::TeamCapacity);
    }

    #[test]
    fn identifiers_are_canonicalized() {
        assert_eq!(FundingStage::parse("Pre-Seed"), FundingStage::PreSeed);
        assert_eq!(Sector::parse(" Digital Health "), Sector::DigitalHealth);
        assert_eq!(Sector::parse("spacetech"), Sector::Other("spacetech".into()));
        assert!(!Organization::parse("university").is_known());
    }

    #[test]
    fn grades_serialize_as_labels() {
        assert_eq!(serde_json::to_string(&IrlGrade::BMinus).unwrap(), "\"B-\"");
        assert_eq!(serde_json::to_string(&Sector::FoodDelivery).unwrap(), "\"food_delivery\"");
    }
}
