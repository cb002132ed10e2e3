use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::terminal::TerminalWriter;
use crate::errors::Error;
use crate::pipeline::StrategicReport;
use crate::whatif::ScenarioOutcome;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &StrategicReport) -> anyhow::Result<()>;
    fn write_scenarios(&mut self, outcomes: &[ScenarioOutcome]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_value<T: serde::Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &StrategicReport) -> anyhow::Result<()> {
        self.write_value(report)
    }

    fn write_scenarios(&mut self, outcomes: &[ScenarioOutcome]) -> anyhow::Result<()> {
        self.write_value(outcomes)
    }
}

/// Writer for the chosen format, to a file or stdout. Terminal output to a
/// file is written without color codes.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                Error::file_system_with_source(
                    format!("Failed to create {}", path.display()),
                    path,
                    e,
                )
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => {
            if output.is_some() {
                colored::control::set_override(false);
            }
            Box::new(TerminalWriter::new(sink))
        }
    })
}
