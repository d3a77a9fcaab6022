//! Wrapgen - boilerplate generator for system-call wrapper libraries
//!
//! Scans the wrapper library's declaration (or definition) files for the
//! set of wrapped functions and prints the matching exception-type
//! boilerplate, so the one-exception-per-system-call mapping never has to
//! be maintained by hand.

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod output;
pub mod scan;

pub use config::Manifest;
pub use error::{Error, Result};
pub use scan::{NameSet, Strategy};
