use geo::Coord;
use serde::{Deserialize, Serialize};

use super::OsmNodeId;

/// a node position as read from the source. only the coordinate is kept,
/// node tags play no role in network construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub id: OsmNodeId,
    pub lat: f64,
    pub lon: f64,
}

impl RawNode {
    pub fn new(id: OsmNodeId, lat: f64, lon: f64) -> RawNode {
        RawNode { id, lat, lon }
    }

    /// position as a geo coordinate with x=lon, y=lat
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

impl From<&osmpbf::elements::Node<'_>> for RawNode {
    fn from(node: &osmpbf::elements::Node) -> Self {
        RawNode::new(OsmNodeId(node.id()), node.lat(), node.lon())
    }
}

impl From<&osmpbf::dense::DenseNode<'_>> for RawNode {
    fn from(node: &osmpbf::dense::DenseNode<'_>) -> Self {
        RawNode::new(OsmNodeId(node.id()), node.lat(), node.lon())
    }
}
