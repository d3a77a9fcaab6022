//! Definition scanner: function bodies in implementation-like files

use super::NameSource;
use once_cell::sync::Lazy;
use regex::Regex;

/// Leftmost `identifier(` match on a signature line; skips a leading
/// return-type token and pointer/reference markers
static SIGNATURE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\s*\(").unwrap());

/// Scans implementation-like files for function definitions.
///
/// Trusts the formatting convention that a signature and the opening brace
/// of its body sit on separate, adjacent lines; the signature grammar is
/// never parsed. A parenthesised control-flow header directly above a lone
/// brace is picked up too, and function-pointer parameters can misfire the
/// identifier-before-parenthesis pattern.
pub struct DefinitionScanner;

impl NameSource for DefinitionScanner {
    fn extract(&self, text: &str) -> Vec<String> {
        let mut names = Vec::new();
        let mut previous: Option<&str> = None;
        for line in text.lines() {
            if line.trim() == "{" {
                if let Some(signature) = previous {
                    if let Some(captures) = SIGNATURE_NAME.captures(signature) {
                        names.push(captures[1].to_string());
                    }
                }
            }
            previous = Some(line);
        }
        names
    }
}
