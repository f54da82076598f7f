use geo::{LineString, MultiLineString};
use itertools::Itertools;

use super::{EdgeDirection, EdgeId};
use crate::model::{
    mode::ModeSet,
    osm::OsmNodeId,
    profile::{WayAttributes, WayProfile},
};

/// a directed, atomic piece of a way between two junctions (or way ends),
/// traversable by `modes` in the direction of its node sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkEdge {
    pub id: EdgeId,
    pub src: OsmNodeId,
    pub dst: OsmNodeId,
    pub nodes: Vec<OsmNodeId>,
    pub geometry: LineString<f64>,
    pub modes: ModeSet,
    pub street_type: String,
    pub attributes: WayAttributes,
}

impl NetworkEdge {
    /// builds the edge for one direction of a segment. `nodes` and `geometry`
    /// are given in way order and reversed here for backward edges.
    pub fn new(
        direction: EdgeDirection,
        segment: usize,
        nodes: &[OsmNodeId],
        geometry: &LineString<f64>,
        modes: ModeSet,
        profile: &WayProfile,
    ) -> Option<NetworkEdge> {
        let (nodes, geometry) = match direction {
            EdgeDirection::Forward => (nodes.to_vec(), geometry.clone()),
            EdgeDirection::Backward => {
                let mut line = geometry.clone();
                line.0.reverse();
                (nodes.iter().rev().copied().collect_vec(), line)
            }
        };
        let src = *nodes.first()?;
        let dst = *nodes.last()?;
        Some(NetworkEdge {
            id: EdgeId::new(direction, profile.way_id, segment),
            src,
            dst,
            nodes,
            geometry,
            modes,
            street_type: profile.street_type.clone(),
            attributes: profile.attributes.clone(),
        })
    }

    pub fn direction(&self) -> EdgeDirection {
        self.id.direction
    }

    /// the edge geometry in multi-line form, as stored downstream
    pub fn multi_line_string(&self) -> MultiLineString<f64> {
        MultiLineString::new(vec![self.geometry.clone()])
    }
}
