use serde::{Deserialize, Serialize};

use super::{import_ops, NetworkDataset, RawNode, RawWay};
use crate::model::NetworkError;

/// where the raw nodes and ways for a network import come from.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum NetworkSource {
    /// an OSM .pbf extract
    Pbf { pbf_filepath: String },
    /// a JSON document with `nodes` and `ways` arrays of already-extracted records
    Json { json_filepath: String },
}

/// JSON layout accepted by [`NetworkSource::Json`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NetworkDatasetSerializable {
    pub nodes: Vec<RawNode>,
    pub ways: Vec<RawWay>,
}

impl NetworkSource {
    pub fn import(&self) -> Result<NetworkDataset, NetworkError> {
        match self {
            NetworkSource::Pbf { pbf_filepath } => {
                log::info!("reading network source from {pbf_filepath}");
                import_ops::read_pbf(pbf_filepath)
            }
            NetworkSource::Json { json_filepath } => {
                log::info!("reading network source from {json_filepath}");
                let s = std::fs::read_to_string(json_filepath).map_err(|e| {
                    NetworkError::ConfigurationError(format!("failure reading {json_filepath}: {e}"))
                })?;
                let data: NetworkDatasetSerializable = serde_json::from_str(&s).map_err(|e| {
                    NetworkError::InvalidSourceData(format!(
                        "failure decoding {json_filepath}: {e}"
                    ))
                })?;
                let ways = data
                    .ways
                    .into_iter()
                    .map(|w| RawWay::new(w.id, w.nodes, w.tags))
                    .collect();
                Ok(NetworkDataset::new(data.nodes, ways))
            }
        }
    }
}
