use serde::{Deserialize, Serialize};

/// tags that are never reported as unconsumed, matched by exact key or by
/// key prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoredTags {
    pub keys: Vec<String>,
    pub prefixes: Vec<String>,
}

impl Default for IgnoredTags {
    fn default() -> Self {
        let keys = [
            "source",
            "created_by",
            "note",
            "fixme",
            "FIXME",
            "wikidata",
            "wikipedia",
            "alt_name",
            "old_name",
            "loc_name",
            "official_name",
            "short_name",
            "int_name",
            "reg_name",
        ];
        let prefixes = [
            "name:",
            "source:",
            "note:",
            "alt_name:",
            "old_name:",
            "official_name:",
            "wikipedia:",
        ];
        IgnoredTags {
            keys: keys.iter().map(|s| String::from(*s)).collect(),
            prefixes: prefixes.iter().map(|s| String::from(*s)).collect(),
        }
    }
}

impl IgnoredTags {
    pub fn is_ignored(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key) || self.prefixes.iter().any(|p| key.starts_with(p))
    }
}
