//! Logging setup for the `pitchmap` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is up
//! to the caller. The binary calls [`init_tracing`] once at startup. Logs
//! go to stderr so that reports written to stdout stay parseable.
//!
//! Filtering follows `PITCHMAP_LOG` (standard `EnvFilter` directives such
//! as `pitchmap=debug`) when set, otherwise the `-v` count:
//!
//! | flags  | level |
//! |--------|-------|
//! | none   | warn  |
//! | `-v`   | info  |
//! | `-vv`  | debug |
//! | `-vvv` | trace |

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "PITCHMAP_LOG";

pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter_for(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_tracing(verbosity: u8) {
    let _ = tracing_subscriber::registry()
        .with(filter_for(verbosity))
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }

    #[test]
    fn repeated_init_does_not_panic() {
        init_tracing(0);
        init_tracing(3);
    }
}
