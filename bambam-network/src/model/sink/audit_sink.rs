use std::{collections::BTreeMap, path::Path};

use csv::QuoteStyle;

use super::writer_ops::{self, GzCsvWriter};
use crate::model::{
    osm::OsmWayId,
    tags::{TagAudit, TagAuditRow},
    NetworkError,
};

pub const UNCONSUMED_FILENAME: &str = "tags-unconsumed.csv.gz";
pub const ERRONEOUS_FILENAME: &str = "tags-erroneous.csv.gz";

/// destination for per-way tag audits
pub trait AuditSink {
    fn record(&mut self, way_id: OsmWayId, audit: &TagAudit) -> Result<(), NetworkError>;

    fn finish(&mut self) -> Result<(), NetworkError> {
        Ok(())
    }
}

/// no sink means audits are dropped
impl<T: AuditSink> AuditSink for Option<T> {
    fn record(&mut self, way_id: OsmWayId, audit: &TagAudit) -> Result<(), NetworkError> {
        match self {
            Some(sink) => sink.record(way_id, audit),
            None => Ok(()),
        }
    }

    fn finish(&mut self) -> Result<(), NetworkError> {
        match self {
            Some(sink) => sink.finish(),
            None => Ok(()),
        }
    }
}

/// collects audits keyed by way id
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    pub unconsumed: BTreeMap<OsmWayId, BTreeMap<String, String>>,
    pub erroneous: BTreeMap<OsmWayId, BTreeMap<String, String>>,
}

impl AuditSink for MemoryAuditSink {
    fn record(&mut self, way_id: OsmWayId, audit: &TagAudit) -> Result<(), NetworkError> {
        if !audit.unconsumed.is_empty() {
            self.unconsumed.insert(way_id, audit.unconsumed.clone());
        }
        if !audit.erroneous.is_empty() {
            self.erroneous.insert(way_id, audit.erroneous.clone());
        }
        Ok(())
    }
}

/// writes unconsumed and erroneous tags to two gzipped CSV files with
/// `way_id,key,value` rows
pub struct CsvAuditSink {
    unconsumed: Option<GzCsvWriter>,
    erroneous: Option<GzCsvWriter>,
}

impl CsvAuditSink {
    pub fn new(output_directory: &Path, overwrite: bool) -> Result<CsvAuditSink, NetworkError> {
        writer_ops::create_dirs(output_directory)?;
        let open = |filename: &str| {
            writer_ops::create_writer(
                output_directory,
                filename,
                true,
                QuoteStyle::Necessary,
                overwrite,
            )
        };
        Ok(CsvAuditSink {
            unconsumed: Some(open(UNCONSUMED_FILENAME)?),
            erroneous: Some(open(ERRONEOUS_FILENAME)?),
        })
    }
}

fn write_rows(
    writer: &mut Option<GzCsvWriter>,
    filename: &str,
    rows: Vec<TagAuditRow>,
) -> Result<(), NetworkError> {
    let writer = writer
        .as_mut()
        .ok_or_else(|| NetworkError::SinkError(format!("{filename} is already closed")))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| NetworkError::CsvWriteError(String::from(filename), e))?;
    }
    Ok(())
}

impl AuditSink for CsvAuditSink {
    fn record(&mut self, way_id: OsmWayId, audit: &TagAudit) -> Result<(), NetworkError> {
        write_rows(
            &mut self.unconsumed,
            UNCONSUMED_FILENAME,
            TagAuditRow::rows(way_id, &audit.unconsumed),
        )?;
        write_rows(
            &mut self.erroneous,
            ERRONEOUS_FILENAME,
            TagAuditRow::rows(way_id, &audit.erroneous),
        )
    }

    fn finish(&mut self) -> Result<(), NetworkError> {
        if let Some(writer) = self.unconsumed.take() {
            writer_ops::close_writer(writer, UNCONSUMED_FILENAME)?;
        }
        if let Some(writer) = self.erroneous.take() {
            writer_ops::close_writer(writer, ERRONEOUS_FILENAME)?;
        }
        Ok(())
    }
}
