use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::{IgnoredTags, TagReport};
use crate::model::osm::OsmWayId;

/// per-way audit record: tags no step consumed and tags with values that could
/// not be used. advisory only, never changes edge output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagAudit {
    pub unconsumed: BTreeMap<String, String>,
    pub erroneous: BTreeMap<String, String>,
}

impl TagAudit {
    pub fn new(tags: &HashMap<String, String>, report: &TagReport, ignored: &IgnoredTags) -> Self {
        let unconsumed = tags
            .iter()
            .filter(|(k, _)| !report.consumed.contains(k.as_str()) && !ignored.is_ignored(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        TagAudit {
            unconsumed,
            erroneous: report.erroneous.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.unconsumed.is_empty() && self.erroneous.is_empty()
    }
}

/// a single (way, key, value) row of an audit file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagAuditRow {
    pub way_id: OsmWayId,
    pub key: String,
    pub value: String,
}

impl TagAuditRow {
    pub fn rows(way_id: OsmWayId, tags: &BTreeMap<String, String>) -> Vec<TagAuditRow> {
        tags.iter()
            .map(|(k, v)| TagAuditRow {
                way_id,
                key: k.clone(),
                value: v.clone(),
            })
            .collect()
    }
}
