//! Error type for the shell around the scoring pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pitchmap operations.
///
/// The scoring pipeline itself never fails: malformed numbers are coerced,
/// missing templates are skipped, and a scenario that cannot be applied is
/// reported on its own outcome. These variants cover the shell around it
/// (reading project files, loading configuration, writing reports).
#[derive(Debug, Error)]
pub enum Error {
    /// A project, scenario or config file could not be read or written
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Config file that does not parse
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Project or scenario input that cannot be interpreted at all
    #[error("Input error: {0}")]
    Input(String),

    /// An inner error annotated with what was being attempted
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// File error carrying the path and the io error behind it.
    pub fn file_system_with_source(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    /// Prefix the rendered message with `context`.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// `.context(..)` for [`Result`], mirroring the anyhow helper.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_wraps_message() {
        let result: Result<()> = Err(Error::input("missing budget"));
        let err = result.context("loading project.json").unwrap_err();
        assert_eq!(
            err.to_string(),
            "loading project.json: Input error: missing budget"
        );
    }
}
