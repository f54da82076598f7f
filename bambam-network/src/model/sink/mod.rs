mod audit_sink;
mod batch_emitter;
mod csv_edge_sink;
mod edge_row;
mod edge_sink;
mod memory_edge_sink;
pub mod writer_ops;

pub use audit_sink::{
    AuditSink, CsvAuditSink, MemoryAuditSink, ERRONEOUS_FILENAME, UNCONSUMED_FILENAME,
};
pub use batch_emitter::{BatchEmitter, EmitterSummary};
pub use csv_edge_sink::{CsvEdgeSink, EDGES_FILENAME};
pub use edge_row::EdgeRow;
pub use edge_sink::EdgeSink;
pub use memory_edge_sink::MemoryEdgeSink;
