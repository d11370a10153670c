//! Error types for ferropy-platform

use thiserror::Error;

/// Errors that can occur in platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Unsupported operating system: {0}")]
    UnsupportedOs(String),
}
