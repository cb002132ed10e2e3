use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall effect of a scenario, bucketed on the ICI change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScenarioImpact {
    MajorPositive,
    ModeratePositive,
    MinorPositive,
    Negligible,
    MinorNegative,
    ModerateNegative,
    MajorNegative,
}

impl ScenarioImpact {
    pub fn from_ici_delta(delta: f64) -> Self {
        if delta >= 10.0 {
            ScenarioImpact::MajorPositive
        } else if delta >= 5.0 {
            ScenarioImpact::ModeratePositive
        } else if delta >= 1.0 {
            ScenarioImpact::MinorPositive
        } else if delta <= -10.0 {
            ScenarioImpact::MajorNegative
        } else if delta <= -5.0 {
            ScenarioImpact::ModerateNegative
        } else if delta <= -1.0 {
            ScenarioImpact::MinorNegative
        } else {
            ScenarioImpact::Negligible
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(
            self,
            ScenarioImpact::MajorPositive
                | ScenarioImpact::ModeratePositive
                | ScenarioImpact::MinorPositive
        )
    }

    /// Canned advice parameterized by the size of the change.
    pub fn recommendation(self, delta: f64) -> String {
        match self {
            ScenarioImpact::MajorPositive => {
                format!("Major improvement (+{delta:.1}) - strongly recommended")
            }
            ScenarioImpact::ModeratePositive => {
                format!("Notable improvement (+{delta:.1}) - recommended")
            }
            ScenarioImpact::MinorPositive => {
                format!("Slight improvement (+{delta:.1}) - worth considering")
            }
            ScenarioImpact::Negligible => "Negligible impact - no significant benefit".to_string(),
            ScenarioImpact::MinorNegative => format!("Slight negative impact ({delta:.1}) - avoid"),
            ScenarioImpact::ModerateNegative => {
                format!("Notable negative impact ({delta:.1}) - should avoid")
            }
            ScenarioImpact::MajorNegative => {
                format!("Major negative impact ({delta:.1}) - strongly avoid")
            }
        }
    }
}

impl fmt::Display for ScenarioImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScenarioImpact::MajorPositive => "MAJOR_POSITIVE",
            ScenarioImpact::ModeratePositive => "MODERATE_POSITIVE",
            ScenarioImpact::MinorPositive => "MINOR_POSITIVE",
            ScenarioImpact::Negligible => "NEGLIGIBLE",
            ScenarioImpact::MinorNegative => "MINOR_NEGATIVE",
            ScenarioImpact::ModerateNegative => "MODERATE_NEGATIVE",
            ScenarioImpact::MajorNegative => "MAJOR_NEGATIVE",
        };
        f.write_str(label)
    }
}
