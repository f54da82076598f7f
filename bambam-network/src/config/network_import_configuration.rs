use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    algorithm::resolution::AttributeLimits,
    model::{profile::TypeProfileConfig, tags::IgnoredTags, NetworkCliError},
};

/// defines behaviors for a network import. every field is optional in the
/// configuration file and falls back to its default.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct NetworkImportConfiguration {
    /// edges written per sink call
    pub batch_size: usize,
    pub parallelize: bool,
    pub overwrite: bool,
    /// spatial reference id written with edge geometries
    pub srid: u32,
    pub max_attribute_length: usize,
    pub max_name_length: usize,
    /// abort when a way references a node with no position. otherwise such
    /// ways are skipped with a warning.
    pub fail_on_missing_nodes: bool,
    /// write the unconsumed and erroneous tag files
    pub write_audit: bool,
    pub ignored_tags: IgnoredTags,
    /// additions to and replacements of the built-in type profiles
    pub type_profiles: HashMap<String, TypeProfileConfig>,
}

impl Default for NetworkImportConfiguration {
    fn default() -> Self {
        let limits = AttributeLimits::default();
        Self {
            batch_size: 10_000,
            parallelize: true,
            overwrite: false,
            srid: 4326,
            max_attribute_length: limits.max_attribute_length,
            max_name_length: limits.max_name_length,
            fail_on_missing_nodes: false,
            write_audit: true,
            ignored_tags: IgnoredTags::default(),
            type_profiles: HashMap::new(),
        }
    }
}

impl NetworkImportConfiguration {
    pub fn attribute_limits(&self) -> AttributeLimits {
        AttributeLimits {
            max_attribute_length: self.max_attribute_length,
            max_name_length: self.max_name_length,
        }
    }
}

impl TryFrom<&String> for NetworkImportConfiguration {
    type Error = NetworkCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let s = std::fs::read_to_string(f)
            .map_err(|e| NetworkCliError::ConfigurationError(format!("failure reading {f}: {e}")))?;
        if f.ends_with(".toml") {
            toml::from_str(&s).map_err(|e| {
                NetworkCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            serde_json::from_str(&s).map_err(|e| {
                NetworkCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(NetworkCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
