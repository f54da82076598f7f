use serde::{Serialize, Serializer};
use std::fmt::Display;

use super::EdgeDirection;
use crate::model::osm::OsmWayId;

/// identifies an edge by its way, its segment position along the way and
/// its direction. renders as e.g. `f1234_0` or `b1234_2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    pub direction: EdgeDirection,
    pub way_id: OsmWayId,
    pub segment: usize,
}

impl EdgeId {
    pub fn new(direction: EdgeDirection, way_id: OsmWayId, segment: usize) -> EdgeId {
        EdgeId {
            direction,
            way_id,
            segment,
        }
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}_{}",
            self.direction.marker(),
            self.way_id,
            self.segment
        )
    }
}

impl Serialize for EdgeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
