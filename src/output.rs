//! Formatting for the names listing

use crate::error::Result;
use crate::scan::NameSet;

/// Format the name set for human consumption, one name per line
pub fn format_names_human(names: &NameSet) -> String {
    if names.is_empty() {
        return "No wrapped functions found".to_string();
    }
    names.iter().collect::<Vec<_>>().join("\n")
}

/// Format the name set as a JSON array
pub fn format_names_json(names: &NameSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(names)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> NameSet {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_human_listing() {
        assert_eq!(format_names_human(&names(&["read", "open"])), "open\nread");
    }

    #[test]
    fn test_human_listing_empty() {
        assert_eq!(format_names_human(&names(&[])), "No wrapped functions found");
    }

    #[test]
    fn test_json_listing() {
        let json = format_names_json(&names(&["open", "read"])).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec!["open", "read"]);
    }
}
