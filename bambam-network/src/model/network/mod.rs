mod edge_direction;
mod edge_id;
mod network_edge;

pub use edge_direction::EdgeDirection;
pub use edge_id::EdgeId;
pub use network_edge::NetworkEdge;
