//! `[parallel]` section: how what-if batches spread over threads.

use serde::{Deserialize, Serialize};

fn enabled_by_default() -> bool {
    true
}

/// Scenario batch parallelism.
///
/// Scenarios in a batch are independent pipeline runs, so with `enabled`
/// they are fanned out over rayon. The batch is ranked after merging, which
/// makes the output identical either way.
///
/// ```rust
/// use pitchmap::config::ParallelConfig;
///
/// let capped = ParallelConfig {
///     enabled: true,
///     max_concurrency: Some(4),
/// };
/// assert_eq!(capped.effective_concurrency(), 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParallelConfig {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,

    /// Worker threads for a batch; `None` or `0` means one per core.
    #[serde(default)]
    pub max_concurrency: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: enabled_by_default(),
            max_concurrency: None,
        }
    }
}

impl ParallelConfig {
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            max_concurrency: None,
        }
    }

    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrency
            .filter(|n| *n > 0)
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|p| p.get())
                    .unwrap_or(1)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_enabled() {
        let config: ParallelConfig = toml::from_str("").unwrap();
        assert!(config.enabled);
        assert!(config.effective_concurrency() >= 1);
    }

    #[test]
    fn zero_concurrency_falls_back_to_cores() {
        let config = ParallelConfig {
            enabled: true,
            max_concurrency: Some(0),
        };
        assert!(config.effective_concurrency() >= 1);
        assert!(!ParallelConfig::sequential().enabled);
    }
}
