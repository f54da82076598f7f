use thiserror::Error;

use super::osm::{OsmNodeId, OsmWayId};

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("invalid network import configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading .pbf file: {source}")]
    PbfLibError { source: osmpbf::Error },
    #[error("source does not contain any nodes referenced by network ways")]
    NoNodesFound,
    #[error("source does not contain any highway or railway ways")]
    NoWaysFound,
    #[error("structure of network source data is invalid: {0}")]
    InvalidSourceData(String),
    #[error("way '{0}' references node '{1}' which is not in the source")]
    MissingNode(OsmWayId, OsmNodeId),
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("edge sink failure: {0}")]
    SinkError(String),
    #[error("failure flushing batch {batch} of {edges} edges from {} ways: {source}", .ways.len())]
    BatchFlushError {
        batch: usize,
        edges: usize,
        ways: Vec<OsmWayId>,
        source: Box<NetworkError>,
    },
    #[error("{0}")]
    InternalError(String),
}
