// Export modules for library usage
pub mod attribution;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod errors;
pub mod insights;
pub mod investors;
pub mod io;
pub mod knowledge;
pub mod observability;
pub mod pipeline;
pub mod roadmap;
pub mod scoring;
pub mod whatif;

// Re-export commonly used types
pub use crate::config::PitchmapConfig;
pub use crate::core::{AttributionSet, FeatureVector, ProjectInput, ProjectSnapshot, RawValue};
pub use crate::errors::{Error, Result};
pub use crate::knowledge::KnowledgeBase;
pub use crate::pipeline::{Pipeline, StrategicReport};
pub use crate::whatif::{Scenario, ScenarioEngine, ScenarioOutcome};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
