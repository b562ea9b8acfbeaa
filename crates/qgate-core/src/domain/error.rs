//! Error taxonomy for the quality gate.
//!
//! Missing and malformed reports are not errors; the loader resolves them to
//! fallback scores. Only an unusable results directory surfaces here.

use std::path::PathBuf;

/// Quality gate errors.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("results directory {path:?} is not usable: {source}")]
    ResultsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for quality gate operations.
pub type Result<T> = std::result::Result<T, GateError>;
