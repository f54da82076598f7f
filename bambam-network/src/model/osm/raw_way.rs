use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{OsmNodeId, OsmWayId};

/// tag keys which make a way a candidate for the network, in precedence order.
pub const NETWORK_CATEGORIES: [&str; 2] = ["highway", "railway"];

/// an OSM way with its ordered node references and tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWay {
    pub id: OsmWayId,
    pub nodes: Vec<OsmNodeId>,
    pub tags: HashMap<String, String>,
}

impl RawWay {
    /// builds a way, collapsing consecutive repeats of a node reference.
    /// non-consecutive repeats (closed rings, lollipops) are kept.
    pub fn new(id: OsmWayId, nodes: Vec<OsmNodeId>, tags: HashMap<String, String>) -> RawWay {
        let mut nodes = nodes;
        nodes.dedup();
        RawWay { id, nodes, tags }
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(|v| v.as_str())
    }

    /// the network category tag found on this way along with its value,
    /// with `highway` taking precedence over `railway`.
    pub fn category(&self) -> Option<(&'static str, &str)> {
        NETWORK_CATEGORIES
            .iter()
            .find_map(|c| self.tag(c).map(|v| (*c, v)))
    }

    /// candidate type profile keys, `<category>_<subtype>`, paired with their
    /// category and in precedence order.
    pub fn type_keys(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        NETWORK_CATEGORIES
            .iter()
            .filter_map(move |c| self.tag(c).map(|v| (*c, format!("{c}_{v}"))))
    }
}

impl From<&osmpbf::elements::Way<'_>> for RawWay {
    fn from(way: &osmpbf::elements::Way) -> Self {
        let nodes = way.refs().map(OsmNodeId).collect_vec();
        if nodes.is_empty() {
            log::warn!("way {} has no node references", way.id());
        }
        let tags = way
            .tags()
            .map(|(k, v)| (String::from(k), String::from(v.trim())))
            .collect::<HashMap<_, _>>();
        RawWay::new(OsmWayId(way.id()), nodes, tags)
    }
}
