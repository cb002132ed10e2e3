use colored::*;
use std::io::Write;

use super::output::OutputWriter;
use crate::core::{format_compact, RiskLevel, Severity};
use crate::pipeline::{AttributionSource, StrategicReport};
use crate::whatif::{ScenarioImpact, ScenarioOutcome};

const RULE: &str = "═══════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────";

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn heading(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", title.bold())?;
        writeln!(self.writer, "{THIN_RULE}")?;
        Ok(())
    }

    fn write_header(&mut self, report: &StrategicReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", RULE.cyan())?;
        writeln!(self.writer, "{}", "        PITCHMAP STRATEGIC REPORT".bold().cyan())?;
        writeln!(self.writer, "{}", RULE.cyan())?;
        writeln!(
            self.writer,
            "{} ({}) · {} · {}",
            report.project.title.bold(),
            report.project.id,
            report.project.sector.display_name(),
            report.project.stage
        )?;
        if report.attribution_source == AttributionSource::Fallback {
            writeln!(
                self.writer,
                "{}",
                "No attributions supplied; insights use the fallback rules.".dimmed()
            )?;
        }
        Ok(())
    }

    fn write_scores(&mut self, report: &StrategicReport) -> anyhow::Result<()> {
        let dashboard = &report.strategic_dashboard;
        let readiness = &report.investor_readiness;

        self.heading("SCORES")?;
        writeln!(
            self.writer,
            "Innovation Confidence Index: {} ({})",
            score_colored(dashboard.ici_score.value()),
            dashboard.confidence_level.label()
        )?;
        writeln!(
            self.writer,
            "Investor Readiness Level:    {} (grade {}, appeal {})",
            score_colored(readiness.irl_score.value()),
            readiness.irl_grade,
            readiness.investor_appeal.label()
        )?;
        writeln!(
            self.writer,
            "Success probability:         {:.1}",
            report.success_probability
        )?;
        writeln!(
            self.writer,
            "Risk level:                  {}",
            risk_colored(report.ceo_insights.risk_level)
        )?;
        writeln!(self.writer)?;
        for (dimension, score) in readiness.readiness_breakdown.iter() {
            writeln!(self.writer, "  {:<24} {:>5.1}", dimension.label(), score.value())?;
        }
        writeln!(
            self.writer,
            "  Strongest ICI component: {}, weakest: {}",
            dashboard.strongest_component.label(),
            dashboard.weakest_component.label()
        )?;
        Ok(())
    }

    fn write_insights(&mut self, report: &StrategicReport) -> anyhow::Result<()> {
        let insights = &report.ceo_insights;
        self.heading("EXECUTIVE SUMMARY")?;
        writeln!(self.writer, "{}", insights.executive_summary)?;
        writeln!(self.writer, "{}", report.overall_assessment.italic())?;

        if insights.critical_insights.is_empty() {
            return Ok(());
        }
        self.heading("CRITICAL INSIGHTS")?;
        for (i, insight) in insights.critical_insights.iter().enumerate() {
            writeln!(
                self.writer,
                "{}. [{}] {}",
                i + 1,
                severity_colored(insight.severity),
                insight.title.bold()
            )?;
            writeln!(self.writer, "   {}", insight.narrative)?;
            writeln!(self.writer, "   {}", insight.impact_summary.dimmed())?;
        }
        Ok(())
    }

    fn write_investors(&mut self, report: &StrategicReport) -> anyhow::Result<()> {
        let readiness = &report.investor_readiness;
        self.heading("INVESTORS")?;
        writeln!(
            self.writer,
            "Valuation range:   SAR {} - {}",
            format_compact(readiness.valuation_range.min),
            format_compact(readiness.valuation_range.max)
        )?;
        writeln!(
            self.writer,
            "Funding potential: SAR {} - {}",
            format_compact(readiness.funding_potential.min),
            format_compact(readiness.funding_potential.max)
        )?;
        for scenario in &report.investment_scenarios {
            writeln!(
                self.writer,
                "  {:<28} SAR {:>7} for {:>4.1}% · p={:.1} · {} months",
                scenario.scenario_name,
                format_compact(scenario.funding_amount),
                scenario.equity_dilution * 100.0,
                scenario.probability,
                scenario.timeline_months
            )?;
        }
        Ok(())
    }

    fn write_plan(&mut self, report: &StrategicReport) -> anyhow::Result<()> {
        let dashboard = &report.strategic_dashboard;
        self.heading("CRITICAL PATH")?;
        for stage in &dashboard.critical_path {
            writeln!(
                self.writer,
                "{}. {} ({})",
                stage.stage,
                stage.name.bold(),
                stage.duration
            )?;
            for action in &stage.key_actions {
                writeln!(self.writer, "   - {action}")?;
            }
        }
        writeln!(self.writer, "Time to success: {}", dashboard.time_to_success)?;

        if !dashboard.risk_heatmap.is_empty() {
            self.heading("RISK HEATMAP")?;
            for cell in &dashboard.risk_heatmap {
                writeln!(
                    self.writer,
                    "[{}] {}: {}",
                    severity_colored(cell.severity),
                    cell.title.bold(),
                    cell.impact
                )?;
            }
        }

        let roadmap = &report.actionable_roadmap;
        self.heading(&format!("ROADMAP: {}", roadmap.title))?;
        for step in &roadmap.tactical_moves {
            writeln!(
                self.writer,
                "{}. {} [{} · {}]",
                step.step,
                step.title.bold(),
                step.timeline,
                step.cost_estimate
            )?;
            writeln!(self.writer, "   {}", step.description)?;
        }
        writeln!(self.writer, "Total timeline: {}", roadmap.total_timeline)?;

        self.heading("KEY RECOMMENDATIONS")?;
        for recommendation in &report.key_recommendations {
            writeln!(self.writer, "  • {recommendation}")?;
        }
        Ok(())
    }

    fn write_coercions(&mut self, report: &StrategicReport) -> anyhow::Result<()> {
        if report.coercions.is_empty() {
            return Ok(());
        }
        writeln!(self.writer)?;
        let notes: Vec<String> = report
            .coercions
            .iter()
            .map(|c| format!("{}={}", c.feature, c.value))
            .collect();
        writeln!(
            self.writer,
            "{} {}",
            "Defaulted inputs:".dimmed(),
            notes.join(", ").dimmed()
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &StrategicReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_scores(report)?;
        self.write_insights(report)?;
        self.write_investors(report)?;
        self.write_plan(report)?;
        self.write_coercions(report)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_scenarios(&mut self, outcomes: &[ScenarioOutcome]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", RULE.cyan())?;
        writeln!(self.writer, "{}", "          WHAT-IF SCENARIOS".bold().cyan())?;
        writeln!(self.writer, "{}", RULE.cyan())?;

        if let Some(baseline) = outcomes.iter().find_map(|o| o.comparison.as_ref()) {
            writeln!(
                self.writer,
                "Baseline: ICI {:.1} · IRL {:.1}",
                baseline.baseline.ici, baseline.baseline.irl
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{:<4} {:<28} {:>8} {:>8} {:<18}",
            "#", "Scenario", "ΔICI", "ΔIRL", "Impact"
        )?;
        writeln!(self.writer, "{THIN_RULE}{THIN_RULE}")?;

        for (rank, outcome) in outcomes.iter().enumerate() {
            match (&outcome.comparison, &outcome.error) {
                (Some(c), _) => {
                    writeln!(
                        self.writer,
                        "{:<4} {:<28} {:>+8.2} {:>+8.2} {}",
                        rank + 1,
                        outcome.scenario_name,
                        c.ici_improvement,
                        c.irl_improvement,
                        impact_colored(c.impact)
                    )?;
                    writeln!(self.writer, "     {}", c.recommendation.dimmed())?;
                }
                (None, error) => {
                    writeln!(
                        self.writer,
                        "{:<4} {:<28} {}",
                        rank + 1,
                        outcome.scenario_name,
                        format!("failed: {}", error.as_deref().unwrap_or("unknown error")).red()
                    )?;
                }
            }
            if !outcome.ignored_modifications.is_empty() {
                writeln!(
                    self.writer,
                    "     {} {}",
                    "ignored (not in baseline):".yellow(),
                    outcome.ignored_modifications.join(", ")
                )?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn score_colored(score: f64) -> ColoredString {
    let text = format!("{score:.1}");
    if score >= 70.0 {
        text.green()
    } else if score >= 50.0 {
        text.yellow()
    } else {
        text.red()
    }
}

fn risk_colored(risk: RiskLevel) -> ColoredString {
    let label = risk.label().to_uppercase();
    match risk {
        RiskLevel::Critical => label.red().bold(),
        RiskLevel::High => label.red(),
        RiskLevel::Medium => label.yellow(),
        RiskLevel::Low => label.green(),
    }
}

fn severity_colored(severity: Severity) -> ColoredString {
    let label = severity.label().to_uppercase();
    match severity {
        Severity::Critical => label.red().bold(),
        Severity::High => label.red(),
        Severity::Medium => label.yellow(),
        Severity::Low => label.normal(),
    }
}

fn impact_colored(impact: ScenarioImpact) -> ColoredString {
    let label = impact.to_string();
    if impact.is_positive() {
        label.green()
    } else if impact == ScenarioImpact::Negligible {
        label.normal()
    } else {
        label.red()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PitchmapConfig;
    use crate::core::{FeatureVector, ProjectInput};
    use crate::knowledge::KnowledgeBase;
    use crate::pipeline::Pipeline;
    use crate::whatif::{Scenario, ScenarioEngine};

    fn project() -> ProjectInput {
        let mut features = FeatureVector::new();
        features.insert("budget", 150_000i64);
        features.insert("team_size", 3i64);
        ProjectInput::new(features)
    }

    #[test]
    fn report_mentions_every_section() {
        colored::control::set_override(false);
        let config = PitchmapConfig::default();
        let report = Pipeline::new(KnowledgeBase::standard(), &config).analyze(&project());

        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer).write_report(&report).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        for section in [
            "SCORES",
            "EXECUTIVE SUMMARY",
            "INVESTORS",
            "CRITICAL PATH",
            "RISK HEATMAP",
            "KEY RECOMMENDATIONS",
        ] {
            assert!(text.contains(section), "missing {section}");
        }
    }

    #[test]
    fn scenario_table_lists_failures() {
        colored::control::set_override(false);
        let config = PitchmapConfig::default();
        let engine = ScenarioEngine::new(Pipeline::new(KnowledgeBase::standard(), &config));
        let outcomes = engine.run_batch(
            &project(),
            &[
                Scenario::new("more cash").with("budget", "+350000"),
                Scenario::new("typo").with("budget", "+lots"),
            ],
        );

        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer).write_scenarios(&outcomes).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("more cash"));
        assert!(text.contains("failed: Malformed modification"));
    }
}
