use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the wiki generator.
///
/// Every variant is fatal: `main` logs it and exits with a nonzero status.
/// Source lines that no parser recognizes are not errors and never reach here.
#[derive(Debug, Error)]
pub enum WikiError {
    /// A required source file could not be found under any search root.
    #[error("could not find {name} under {}", format_roots(.searched))]
    MissingInput { name: String, searched: Vec<PathBuf> },

    /// Reading a source file or writing an output page failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The JSON dump of the merged records failed.
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results in this crate
pub type WikiResult<T> = Result<T, WikiError>;

impl WikiError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        WikiError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ron::error::SpannedError> for WikiError {
    fn from(err: ron::error::SpannedError) -> Self {
        WikiError::Config(err.to_string())
    }
}

fn format_roots(roots: &[PathBuf]) -> String {
    roots
        .iter()
        .map(|root| root.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
