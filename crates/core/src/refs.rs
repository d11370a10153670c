//! Reference descriptors: one source file, its destination names, and policy

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use ferropy_platform::Capabilities;

/// Copy-or-link requirement for a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefMust {
    /// A symlink (or equivalent reference) is acceptable
    MayLink,
    /// A hard copy is required
    MustCopy,
    /// No constraint; the executor applies its default policy
    NotApplicable,
}

/// When a reference applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefWhen {
    /// On every platform
    Always,
    /// Only when the destination platform can create symlinks
    IfSymlinkCapable,
    /// Only when the destination platform must copy
    IfCopyOnly,
}

/// One file that must appear in the destination environment
///
/// Descriptors are immutable once produced; ownership transfers fully to the
/// copy/link executor, which performs the action and discards them. A source
/// is not necessarily verified to exist; the executor fails explicitly when
/// it is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSource {
    /// File in the host installation
    pub source: PathBuf,
    /// Destination names, in order; never empty, never duplicated
    pub names: Vec<String>,
    /// Copy-or-link requirement
    pub must: RefMust,
    /// Applicability of this reference
    pub when: RefWhen,
}

impl ReferenceSource {
    /// Descriptor with a single destination name
    pub fn new(source: PathBuf, name: impl Into<String>, must: RefMust, when: RefWhen) -> Self {
        Self {
            source,
            names: vec![name.into()],
            must,
            when,
        }
    }

    /// Descriptor carrying several destination names for one source
    ///
    /// All names reference the same file, so duplicates collapse; order of
    /// first appearance wins.
    pub fn with_names(
        source: PathBuf,
        names: impl IntoIterator<Item = String>,
        must: RefMust,
        when: RefWhen,
    ) -> Self {
        let mut deduped: Vec<String> = Vec::new();
        for name in names {
            if !deduped.contains(&name) {
                deduped.push(name);
            }
        }
        debug_assert!(!deduped.is_empty(), "a reference needs a destination name");

        Self {
            source,
            names: deduped,
            must,
            when,
        }
    }

    /// Whether this reference applies on a platform with the given capabilities
    pub fn applies(&self, caps: &Capabilities) -> bool {
        match self.when {
            RefWhen::Always => true,
            RefWhen::IfSymlinkCapable => caps.supports_symlink(),
            RefWhen::IfCopyOnly => !caps.supports_symlink(),
        }
    }

    /// Get a human-readable description of the reference
    pub fn description(&self) -> String {
        let verb = match self.must {
            RefMust::MayLink => "link",
            RefMust::MustCopy => "copy",
            RefMust::NotApplicable => "materialize",
        };
        format!(
            "{} {} as {}",
            verb,
            self.source.display(),
            self.names.join(", ")
        )
    }
}
