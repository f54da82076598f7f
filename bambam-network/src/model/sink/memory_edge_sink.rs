use super::EdgeSink;
use crate::model::{network::NetworkEdge, NetworkError};

/// keeps every batch in memory, in the order received
#[derive(Debug, Default)]
pub struct MemoryEdgeSink {
    pub batches: Vec<Vec<NetworkEdge>>,
    pub finished: bool,
}

impl MemoryEdgeSink {
    pub fn edges(&self) -> impl Iterator<Item = &NetworkEdge> {
        self.batches.iter().flatten()
    }

    pub fn edge_count(&self) -> usize {
        self.batches.iter().map(|b| b.len()).sum()
    }
}

impl EdgeSink for MemoryEdgeSink {
    fn insert_edges(&mut self, batch: &[NetworkEdge]) -> Result<(), NetworkError> {
        self.batches.push(batch.to_vec());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), NetworkError> {
        self.finished = true;
        Ok(())
    }
}
