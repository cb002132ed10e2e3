use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "pitchmap")]
#[command(about = "Strategic scoring and investor readiness for innovation projects", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a project and produce the full strategic report
    Analyze {
        /// Project JSON file (flat object of identifiers and raw features)
        project: PathBuf,

        /// Attribution JSON file ({feature: value}); overrides any embedded set
        #[arg(long)]
        attributions: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .pitchmap.toml)
        #[arg(short, long, env = "PITCHMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Compare what-if scenarios against a baseline project
    Whatif {
        /// Baseline project JSON file
        project: PathBuf,

        /// Scenario JSON file (array of {name, modifications})
        #[arg(short, long)]
        scenarios: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .pitchmap.toml)
        #[arg(short, long, env = "PITCHMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Run scenarios sequentially
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of worker threads (0 = one per core)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a default .pitchmap.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
