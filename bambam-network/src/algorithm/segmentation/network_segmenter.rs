use geo::LineString;

use super::{JunctionIndex, SegmentAccumulator};
use crate::model::{
    network::{EdgeDirection, NetworkEdge},
    osm::{OsmNodeId, RawNodes, RawWay},
    profile::WayProfile,
    NetworkError,
};

/// cuts ways into directed edges at junction nodes.
pub struct NetworkSegmenter<'a> {
    junctions: &'a JunctionIndex,
    nodes: &'a RawNodes,
}

impl<'a> NetworkSegmenter<'a> {
    pub fn new(junctions: &'a JunctionIndex, nodes: &'a RawNodes) -> NetworkSegmenter<'a> {
        NetworkSegmenter { junctions, nodes }
    }

    /// walks the nodes of a way, closing a segment at every node after the first
    /// that is a junction. the closing node also opens the next segment. each
    /// segment yields a forward edge if the way has forward modes and a backward
    /// edge (on the reversed node sequence) if it has backward modes.
    ///
    /// a way with k interior junctions produces k+1 segments. ways that cannot
    /// be traversed produce no edges. fails if a node of the way has no position.
    pub fn segment(
        &self,
        way: &RawWay,
        profile: &WayProfile,
    ) -> Result<Vec<NetworkEdge>, NetworkError> {
        if profile.is_impassable() || way.nodes.len() < 2 {
            return Ok(vec![]);
        }
        let mut edges: Vec<NetworkEdge> = vec![];
        let mut acc = SegmentAccumulator::default();
        let mut segment: usize = 0;
        for (idx, node_id) in way.nodes.iter().enumerate() {
            let node = self
                .nodes
                .get(node_id)
                .ok_or_else(|| NetworkError::MissingNode(way.id, *node_id))?;
            acc.push(*node_id, node.coord());
            if idx > 0 && self.junctions.is_junction(node_id) {
                let (nodes, geometry) = acc.split();
                emit(&mut edges, segment, &nodes, &geometry, profile);
                segment += 1;
            }
        }
        if acc.len() > 1 {
            let (nodes, geometry) = acc.split();
            emit(&mut edges, segment, &nodes, &geometry, profile);
        }
        Ok(edges)
    }
}

fn emit(
    edges: &mut Vec<NetworkEdge>,
    segment: usize,
    nodes: &[OsmNodeId],
    geometry: &LineString<f64>,
    profile: &WayProfile,
) {
    let directions = [
        (EdgeDirection::Forward, profile.forward),
        (EdgeDirection::Backward, profile.backward),
    ];
    for (direction, modes) in directions {
        if modes.is_impassable() {
            continue;
        }
        if let Some(edge) = NetworkEdge::new(direction, segment, nodes, geometry, modes, profile) {
            edges.push(edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        mode::ModeSet,
        osm::{OsmWayId, RawNode},
        profile::WayAttributes,
        tags::TagReport,
    };
    use std::collections::HashMap;
    use uom::si::{f64::Velocity, velocity};

    fn way(id: i64, nodes: &[i64]) -> RawWay {
        RawWay::new(
            OsmWayId(id),
            nodes.iter().map(|n| OsmNodeId(*n)).collect(),
            HashMap::new(),
        )
    }

    fn nodes(ids: std::ops::Range<i64>) -> RawNodes {
        ids.map(|i| (OsmNodeId(i), RawNode::new(OsmNodeId(i), 52.0, 13.0 + i as f64 * 0.001)))
            .collect()
    }

    fn profile(way_id: i64, forward: ModeSet, backward: ModeSet) -> WayProfile {
        WayProfile {
            way_id: OsmWayId(way_id),
            street_type: String::from("highway_residential"),
            forward,
            backward,
            attributes: WayAttributes {
                lanes: 1,
                max_speed: Velocity::new::<velocity::kilometer_per_hour>(30.0),
                sidewalk: None,
                cycleway: None,
                surface: None,
                lit: None,
                name: None,
                parking_left: None,
                parking_right: None,
                parking_both: None,
            },
            report: TagReport::default(),
        }
    }

    #[test]
    fn test_two_interior_junctions() {
        // way 1 runs 1..=5, ways 2 and 3 touch it at nodes 2 and 4
        let ways = vec![way(1, &[1, 2, 3, 4, 5]), way(2, &[2, 10]), way(3, &[11, 4])];
        let index = JunctionIndex::build(ways.iter());
        let node_table = nodes(0..12);
        let segmenter = NetworkSegmenter::new(&index, &node_table);
        let p = profile(1, ModeSet::ALL, ModeSet::ALL);
        let edges = segmenter.segment(&ways[0], &p).expect("segmentation should succeed");
        let forward = edges
            .iter()
            .filter(|e| e.direction() == EdgeDirection::Forward)
            .collect::<Vec<_>>();
        let backward = edges
            .iter()
            .filter(|e| e.direction() == EdgeDirection::Backward)
            .collect::<Vec<_>>();
        assert_eq!(forward.len(), 3);
        assert_eq!(backward.len(), 3);
        assert_eq!(forward[0].nodes, vec![OsmNodeId(1), OsmNodeId(2)]);
        assert_eq!(forward[1].nodes, vec![OsmNodeId(2), OsmNodeId(3), OsmNodeId(4)]);
        assert_eq!(forward[2].nodes, vec![OsmNodeId(4), OsmNodeId(5)]);
        assert_eq!(backward[1].nodes, vec![OsmNodeId(4), OsmNodeId(3), OsmNodeId(2)]);
        assert_eq!(backward[1].src, OsmNodeId(4));
        assert_eq!(backward[1].dst, OsmNodeId(2));
        assert_eq!(forward[1].id.to_string(), "f1_1");
        assert_eq!(backward[2].id.to_string(), "b1_2");
        assert_eq!(forward[1].geometry.0.len(), 3);
        assert!(edges.iter().all(|e| e.modes == ModeSet::ALL));
    }

    #[test]
    fn test_shared_endpoints_do_not_split() {
        let ways = vec![way(1, &[1, 2, 3]), way(2, &[3, 4])];
        let index = JunctionIndex::build(ways.iter());
        let node_table = nodes(0..5);
        let segmenter = NetworkSegmenter::new(&index, &node_table);
        let edges = segmenter
            .segment(&ways[0], &profile(1, ModeSet::FOOT, ModeSet::FOOT))
            .expect("segmentation should succeed");
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].nodes.len(), 3);
    }

    #[test]
    fn test_one_direction_only() {
        let ways = vec![way(1, &[1, 2, 3])];
        let index = JunctionIndex::build(ways.iter());
        let node_table = nodes(0..4);
        let segmenter = NetworkSegmenter::new(&index, &node_table);
        let edges = segmenter
            .segment(&ways[0], &profile(1, ModeSet::MOTORISED, ModeSet::empty()))
            .expect("segmentation should succeed");
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].direction(), EdgeDirection::Forward);
    }

    #[test]
    fn test_impassable_way_has_no_edges() {
        let ways = vec![way(1, &[1, 2, 3])];
        let index = JunctionIndex::build(ways.iter());
        let node_table = nodes(0..4);
        let segmenter = NetworkSegmenter::new(&index, &node_table);
        let edges = segmenter
            .segment(&ways[0], &profile(1, ModeSet::empty(), ModeSet::empty()))
            .expect("segmentation should succeed");
        assert!(edges.is_empty());
    }

    #[test]
    fn test_missing_node() {
        let ways = vec![way(1, &[1, 2, 30])];
        let index = JunctionIndex::build(ways.iter());
        let node_table = nodes(0..4);
        let segmenter = NetworkSegmenter::new(&index, &node_table);
        match segmenter.segment(&ways[0], &profile(1, ModeSet::FOOT, ModeSet::FOOT)) {
            Err(NetworkError::MissingNode(w, n)) => {
                assert_eq!(w, OsmWayId(1));
                assert_eq!(n, OsmNodeId(30));
            }
            other => panic!("expected missing node error, found {other:?}"),
        }
    }

    #[test]
    fn test_closed_ring() {
        // a ring touching another way at node 3
        let ways = vec![way(1, &[1, 2, 3, 4, 1]), way(2, &[3, 9])];
        let index = JunctionIndex::build(ways.iter());
        let node_table = nodes(0..10);
        let segmenter = NetworkSegmenter::new(&index, &node_table);
        let edges = segmenter
            .segment(&ways[0], &profile(1, ModeSet::FOOT, ModeSet::empty()))
            .expect("segmentation should succeed");
        // node 1 appears twice in the ring and closes the final segment
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].nodes, vec![OsmNodeId(1), OsmNodeId(2), OsmNodeId(3)]);
        assert_eq!(edges[1].nodes, vec![OsmNodeId(3), OsmNodeId(4), OsmNodeId(1)]);
    }
}
