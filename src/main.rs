use anyhow::Result;
use clap::Parser;
use pitchmap::cli::{Cli, Commands};
use pitchmap::commands::{AnalyzeConfig, WhatIfConfig};
use pitchmap::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            project,
            attributions,
            format,
            output,
            config,
            verbosity,
        } => {
            init_tracing(verbosity);
            pitchmap::commands::handle_analyze(AnalyzeConfig {
                project,
                attributions,
                format,
                output,
                config,
            })
        }
        Commands::Whatif {
            project,
            scenarios,
            format,
            output,
            config,
            no_parallel,
            jobs,
            verbosity,
        } => {
            init_tracing(verbosity);
            pitchmap::commands::handle_whatif(WhatIfConfig {
                project,
                scenarios,
                format,
                output,
                config,
                no_parallel,
                jobs,
            })
        }
        Commands::Init { force } => {
            init_tracing(0);
            pitchmap::commands::init_config(force)
        }
    }
}
