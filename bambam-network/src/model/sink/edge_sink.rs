use crate::model::{network::NetworkEdge, NetworkError};

/// destination for batches of edges. a batch is accepted or rejected as a
/// whole; a rejected batch aborts the import.
pub trait EdgeSink {
    fn insert_edges(&mut self, batch: &[NetworkEdge]) -> Result<(), NetworkError>;

    /// called once after the final batch
    fn finish(&mut self) -> Result<(), NetworkError> {
        Ok(())
    }
}
