use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::heuristics::Heuristics;
use super::scoring::{IciWeights, IrlWeights};
use super::thresholds::AttributionThresholds;
use super::PitchmapConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".pitchmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a config document.
///
/// Sections that fail validation are reset to their defaults with a warning;
/// only a syntactically broken file is an error.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<PitchmapConfig, String> {
    let mut config = toml::from_str::<PitchmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Err(e) = config.attribution.validate() {
        tracing::warn!("Invalid attribution thresholds: {}. Using defaults.", e);
        config.attribution = AttributionThresholds::default();
    }

    if let Err(e) = config.irl_weights.validate() {
        tracing::warn!("Invalid IRL weights: {}. Using defaults.", e);
        config.irl_weights = IrlWeights::default();
    } else {
        config.irl_weights.normalize();
    }

    if let Err(e) = config.ici_weights.validate() {
        tracing::warn!("Invalid ICI weights: {}. Using defaults.", e);
        config.ici_weights = IciWeights::default();
    } else {
        config.ici_weights.normalize();
    }

    if let Err(e) = config.heuristics.validate() {
        tracing::warn!("Invalid heuristics: {}. Using defaults.", e);
        config.heuristics = Heuristics::default();
    }

    Ok(config)
}

/// Load an explicitly named config file. Unlike [`load_config`], a missing
/// or malformed file is an error.
pub fn load_config_from(path: &Path) -> Result<PitchmapConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::file_system_with_source(
            format!("Failed to read config file {}", path.display()),
            path,
            e,
        )
    })?;
    parse_and_validate_config(&contents).map_err(Error::Configuration)
}

/// Config at `config_path`, or `None` when absent or unreadable.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<PitchmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // absence is the normal case while walking up
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its parents, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search from `start` upward for the nearest config file.
pub fn find_config_from(start: PathBuf) -> Option<PitchmapConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

pub fn load_config() -> PitchmapConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return PitchmapConfig::default();
        }
    };

    find_config_from(current).unwrap_or_else(|| {
        tracing::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        PitchmapConfig::default()
    })
}
