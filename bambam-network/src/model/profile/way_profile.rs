use super::WayAttributes;
use crate::model::{mode::ModeSet, osm::OsmWayId, tags::TagReport};

/// everything the segmenter needs to know about a way besides its nodes.
/// forward and backward refer to the way's node order.
#[derive(Debug, Clone, PartialEq)]
pub struct WayProfile {
    pub way_id: OsmWayId,
    /// the type profile key, `<category>_<subtype>`
    pub street_type: String,
    pub forward: ModeSet,
    pub backward: ModeSet,
    pub attributes: WayAttributes,
    pub report: TagReport,
}

impl WayProfile {
    /// true if no mode may use the way in either direction
    pub fn is_impassable(&self) -> bool {
        self.forward.is_impassable() && self.backward.is_impassable()
    }
}
