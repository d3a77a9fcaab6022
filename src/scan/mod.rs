//! Extraction of wrapped function names from library sources

mod declarations;
mod definitions;
mod names;

pub use declarations::DeclarationScanner;
pub use definitions::DefinitionScanner;
pub use names::NameSet;

use crate::cli::ScanStrategy;
use crate::error::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

/// Capability shared by both scanners: produce the canonical name set from
/// a list of input texts.
pub trait NameSource {
    /// Extract candidate names from a single input text, in discovery order
    fn extract(&self, text: &str) -> Vec<String>;

    /// Scan all inputs and build the deduplicated, sorted name set
    fn names(&self, texts: &[String]) -> NameSet {
        texts.iter().flat_map(|text| self.extract(text)).collect()
    }
}

/// Which scanner implementation feeds the name set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Reconstruct prototypes from header-like files
    Declarations,
    /// Locate function bodies in implementation-like files
    Definitions,
}

impl Strategy {
    /// The scanner implementing this strategy
    pub fn source(self) -> Box<dyn NameSource> {
        match self {
            Strategy::Declarations => Box::new(DeclarationScanner),
            Strategy::Definitions => Box::new(DefinitionScanner),
        }
    }
}

impl From<ScanStrategy> for Strategy {
    fn from(arg: ScanStrategy) -> Self {
        match arg {
            ScanStrategy::Declarations => Strategy::Declarations,
            ScanStrategy::Definitions => Strategy::Definitions,
        }
    }
}

/// Read every input file and scan it with the given strategy.
///
/// Fails on the first unreadable path, before any output is produced, so a
/// generated region is never replaced by a truncated block.
pub fn scan_files(strategy: Strategy, paths: &[PathBuf]) -> Result<NameSet> {
    let mut texts = Vec::with_capacity(paths.len());
    for path in paths {
        debug!("Reading {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| Error::InputRead {
            path: path.clone(),
            source,
        })?;
        texts.push(text);
    }
    let names = strategy.source().names(&texts);
    debug!("Extracted {} wrapped function names", names.len());
    Ok(names)
}
