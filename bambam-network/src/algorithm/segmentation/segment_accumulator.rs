use geo::{Coord, LineString};

use crate::model::osm::OsmNodeId;

/// the nodes and coordinates of the segment currently being walked
#[derive(Debug, Default)]
pub struct SegmentAccumulator {
    nodes: Vec<OsmNodeId>,
    coords: Vec<Coord<f64>>,
}

impl SegmentAccumulator {
    pub fn push(&mut self, node: OsmNodeId, coord: Coord<f64>) {
        self.nodes.push(node);
        self.coords.push(coord);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// takes the accumulated segment and starts the next one at its last node
    pub fn split(&mut self) -> (Vec<OsmNodeId>, LineString<f64>) {
        let nodes = std::mem::take(&mut self.nodes);
        let coords = std::mem::take(&mut self.coords);
        if let (Some(n), Some(c)) = (nodes.last(), coords.last()) {
            self.push(*n, *c);
        }
        (nodes, LineString::new(coords))
    }
}
