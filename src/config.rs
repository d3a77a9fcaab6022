//! Input manifest: which wrapper-library sources feed each scanner

use crate::error::{Error, Result};
use crate::scan::Strategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Declaration files scanned by default, grouped by platform/category
pub const DEFAULT_DECLARATION_FILES: &[&str] = &[
    "syswrap/ansi.hh",
    "syswrap/posix.hh",
    "syswrap/pthread.hh",
    "syswrap/socket.hh",
    "syswrap/linux.hh",
];

/// Definition files scanned by default, matching the declaration set
pub const DEFAULT_DEFINITION_FILES: &[&str] = &[
    "syswrap/ansi.cc",
    "syswrap/posix.cc",
    "syswrap/pthread.cc",
    "syswrap/socket.cc",
    "syswrap/linux.cc",
];

/// The fixed, ordered lists of input files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Header-like files holding the wrapped prototypes
    pub declarations: Vec<PathBuf>,
    /// Implementation-like files holding the wrapper bodies
    pub definitions: Vec<PathBuf>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            declarations: DEFAULT_DECLARATION_FILES
                .iter()
                .map(PathBuf::from)
                .collect(),
            definitions: DEFAULT_DEFINITION_FILES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl Manifest {
    /// Load a manifest from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::InputRead {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Manifest = toml::from_str(&content)?;
        Ok(manifest)
    }

    /// The file list feeding the given scanner strategy
    pub fn files(&self, strategy: Strategy) -> &[PathBuf] {
        match strategy {
            Strategy::Declarations => &self.declarations,
            Strategy::Definitions => &self.definitions,
        }
    }

    /// Resolve the strategy's file list against a root directory
    ///
    /// Absolute entries are kept as-is.
    pub fn resolved(&self, root: &Path, strategy: Strategy) -> Vec<PathBuf> {
        self.files(strategy)
            .iter()
            .map(|path| {
                if path.is_absolute() {
                    path.clone()
                } else {
                    root.join(path)
                }
            })
            .collect()
    }
}
