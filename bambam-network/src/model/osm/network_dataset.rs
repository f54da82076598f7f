use std::collections::HashMap;

use super::{OsmNodeId, RawNode, RawWay};

pub type RawNodes = HashMap<OsmNodeId, RawNode>;

/// the input to network construction: node positions by id and the
/// candidate ways, in source order.
#[derive(Debug, Clone, Default)]
pub struct NetworkDataset {
    pub nodes: RawNodes,
    pub ways: Vec<RawWay>,
}

impl NetworkDataset {
    pub fn new(nodes: Vec<RawNode>, ways: Vec<RawWay>) -> NetworkDataset {
        let nodes = nodes.into_iter().map(|n| (n.id, n)).collect();
        NetworkDataset { nodes, ways }
    }

    pub fn is_empty(&self) -> bool {
        self.ways.is_empty()
    }
}
