//! ferropy-core: source resolution for isolated IronPython environments
//!
//! This crate decides, for a host interpreter installation, which files must
//! be linked or copied into a new environment so that its launcher
//! executables behave identically to the host interpreter. It produces
//! reference descriptors only; the copy/link executor consuming them lives
//! elsewhere.

mod error;
mod interpreter;
mod refs;
mod registry;
mod resolve;
pub mod testutil;

pub use error::CoreError;
pub use interpreter::{InterpreterInfo, VersionInfo};
pub use refs::{RefMust, RefWhen, ReferenceSource};
pub use registry::{Variant, resolver_for};
pub use resolve::{
    IRONPYTHON, IronPython3Windows, IronPythonPosix, IronPythonWindows, SourceResolver,
    VariantRules,
};

// Re-export platform values for convenience
pub use ferropy_platform::{Capabilities, Os, PlatformError};

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
