pub mod import_ops;
mod network_dataset;
mod network_source;
mod osm_node_id;
mod osm_way_id;
mod raw_node;
mod raw_way;

pub use network_dataset::{NetworkDataset, RawNodes};
pub use network_source::{NetworkDatasetSerializable, NetworkSource};
pub use osm_node_id::OsmNodeId;
pub use osm_way_id::OsmWayId;
pub use raw_node::RawNode;
pub use raw_way::{RawWay, NETWORK_CATEGORIES};
