use anyhow::{Context, Result};
use std::path::PathBuf;

use super::resolve_config;
use crate::io::{self, create_writer, OutputFormat};
use crate::knowledge::KnowledgeBase;
use crate::pipeline::Pipeline;

#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub project: PathBuf,
    pub attributions: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;

    let mut project = io::load_project(&config.project)
        .with_context(|| format!("Loading project {}", config.project.display()))?;
    if let Some(path) = &config.attributions {
        let attributions = io::load_attributions(path)
            .with_context(|| format!("Loading attributions {}", path.display()))?;
        project.attributions = Some(attributions);
    }

    let report = Pipeline::new(KnowledgeBase::standard(), &settings).analyze(&project);
    tracing::info!(
        project = %report.project.id,
        ici = report.strategic_dashboard.ici_score.value(),
        irl = report.investor_readiness.irl_score.value(),
        "analysis complete"
    );

    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_report(&report)?;
    Ok(())
}
