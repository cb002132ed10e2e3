use anyhow::{Context, Result};
use std::path::PathBuf;

use super::resolve_config;
use crate::io::{self, create_writer, OutputFormat};
use crate::knowledge::KnowledgeBase;
use crate::pipeline::Pipeline;
use crate::whatif::ScenarioEngine;

#[derive(Debug, Clone)]
pub struct WhatIfConfig {
    pub project: PathBuf,
    pub scenarios: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub no_parallel: bool,
    /// Worker threads; 0 means one per core.
    pub jobs: usize,
}

pub fn handle_whatif(config: WhatIfConfig) -> Result<()> {
    let mut settings = resolve_config(config.config.as_deref())?;
    if config.no_parallel {
        settings.parallel.enabled = false;
    }
    if config.jobs > 0 {
        settings.parallel.max_concurrency = Some(config.jobs);
    }

    let project = io::load_project(&config.project)
        .with_context(|| format!("Loading project {}", config.project.display()))?;
    let scenarios = io::load_scenarios(&config.scenarios)
        .with_context(|| format!("Loading scenarios {}", config.scenarios.display()))?;

    let engine = ScenarioEngine::new(Pipeline::new(KnowledgeBase::standard(), &settings));
    let outcomes = engine.run_batch(&project, &scenarios);

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        tracing::warn!(failed, total = outcomes.len(), "some scenarios could not be applied");
    }

    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_scenarios(&outcomes)?;
    Ok(())
}
