//! CLI command implementations.
//!
//! - **analyze**: run the full pipeline on one project
//! - **whatif**: run a ranked batch of scenarios against one project
//! - **init**: write a default `.pitchmap.toml`

pub mod analyze;
pub mod init;
pub mod whatif;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
pub use whatif::{handle_whatif, WhatIfConfig};

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::{load_config, load_config_from, PitchmapConfig};

/// The explicit config file when given, otherwise the nearest
/// `.pitchmap.toml` above the working directory, otherwise defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<PitchmapConfig> {
    match explicit {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Loading configuration from {}", path.display())),
        None => Ok(load_config()),
    }
}
