//! The canonical set of wrapped function names

use serde::Serialize;
use std::collections::BTreeSet;

/// Deduplicated, lexicographically sorted set of wrapped function names.
///
/// Ordering is sort order, not discovery order, so regenerated blocks stay
/// diff-stable even when input file order changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameSet(Vec<String>);

impl NameSet {
    /// Iterate names in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for NameSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let unique: BTreeSet<String> = iter.into_iter().collect();
        NameSet(unique.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(names: &[&str]) -> NameSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedupe_and_sort() {
        let set = build(&["read", "open", "read", "close"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["close", "open", "read"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_empty() {
        let set = build(&[]);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_order_independent() {
        assert_eq!(build(&["b", "a", "c"]), build(&["c", "b", "a"]));
    }
}
