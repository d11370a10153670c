//! Error types for ferropy-core

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when selecting a resolver
///
/// Resolution itself never fails: per-file anomalies degrade to absence and
/// the executor surfaces missing sources. Only registry-level refusal and
/// malformed discovery records are errors.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Platform error: {0}")]
    Platform(#[from] ferropy_platform::PlatformError),

    #[error("Invalid interpreter record: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("No resolver registered for {implementation} {version}")]
    UnsupportedInterpreter {
        implementation: String,
        version: String,
    },

    #[error("Store-distributed interpreter is not supported: {0}")]
    StoreDistributed(PathBuf),
}
