use std::path::Path;

use csv::QuoteStyle;

use super::{
    writer_ops::{self, GzCsvWriter},
    EdgeRow, EdgeSink,
};
use crate::model::{network::NetworkEdge, NetworkError};

pub const EDGES_FILENAME: &str = "edges-network.csv.gz";

/// writes edges as rows of a gzipped CSV edge table. row ids are assigned
/// sequentially from 0 in the order edges arrive.
pub struct CsvEdgeSink {
    writer: Option<GzCsvWriter>,
    srid: u32,
    next_id: u64,
}

impl CsvEdgeSink {
    pub fn new(output_directory: &Path, srid: u32, overwrite: bool) -> Result<Self, NetworkError> {
        writer_ops::create_dirs(output_directory)?;
        let writer = writer_ops::create_writer(
            output_directory,
            EDGES_FILENAME,
            true,
            QuoteStyle::Necessary,
            overwrite,
        )?;
        Ok(CsvEdgeSink {
            writer: Some(writer),
            srid,
            next_id: 0,
        })
    }

    pub fn rows_written(&self) -> u64 {
        self.next_id
    }
}

impl EdgeSink for CsvEdgeSink {
    fn insert_edges(&mut self, batch: &[NetworkEdge]) -> Result<(), NetworkError> {
        let writer = self.writer.as_mut().ok_or_else(|| {
            NetworkError::SinkError(format!("{EDGES_FILENAME} is already closed"))
        })?;
        for edge in batch.iter() {
            let row = EdgeRow::new(self.next_id, edge, self.srid);
            writer
                .serialize(row)
                .map_err(|e| NetworkError::CsvWriteError(String::from(EDGES_FILENAME), e))?;
            self.next_id += 1;
        }
        writer
            .flush()
            .map_err(|e| NetworkError::SinkError(format!("failure flushing {EDGES_FILENAME}: {e}")))
    }

    fn finish(&mut self) -> Result<(), NetworkError> {
        match self.writer.take() {
            Some(writer) => writer_ops::close_writer(writer, EDGES_FILENAME),
            None => Ok(()),
        }
    }
}
