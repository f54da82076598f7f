use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use kdam::{term, Bar, BarExt};
use osmpbf::{Element, ElementReader};

use super::{NetworkDataset, OsmNodeId, RawNode, RawWay};
use crate::model::NetworkError;

/// reads a PBF file into a [`NetworkDataset`]. the file is read twice:
/// - the first read keeps the ways tagged with a network category and notes the
///   node ids they reference
/// - the second read keeps only the positions of those referenced nodes
///
/// way order in the result follows the order of the file.
pub fn read_pbf(filepath: &str) -> Result<NetworkDataset, NetworkError> {
    let fp = Path::new(filepath);

    term::hide_cursor().map_err(|e| NetworkError::InternalError(e.to_string()))?;
    let mut ways_bar = Bar::builder()
        .desc("ways retained")
        .position(0)
        .build()
        .map_err(NetworkError::InternalError)?;

    let mut ways: Vec<RawWay> = vec![];
    let mut referenced: HashSet<OsmNodeId> = HashSet::new();
    let mut ways_visited: usize = 0;
    let reader = ElementReader::from_path(fp).map_err(|e| NetworkError::PbfLibError { source: e })?;
    reader
        .for_each(|e| {
            if let Element::Way(way) = e {
                ways_visited += 1;
                let raw = RawWay::from(&way);
                if raw.category().is_some() && !raw.nodes.is_empty() {
                    referenced.extend(raw.nodes.iter().copied());
                    ways.push(raw);
                    let _ = ways_bar.update(1);
                }
            }
        })
        .map_err(|e| NetworkError::PbfLibError { source: e })?;
    eprintln!();
    log::info!(
        "retained {} of {} ways referencing {} nodes",
        ways.len(),
        ways_visited,
        referenced.len()
    );
    if ways.is_empty() {
        return Err(NetworkError::NoWaysFound);
    }

    let mut nodes_bar = Bar::builder()
        .desc("nodes retained")
        .position(0)
        .total(referenced.len())
        .build()
        .map_err(NetworkError::InternalError)?;
    let mut nodes: HashMap<OsmNodeId, RawNode> = HashMap::with_capacity(referenced.len());
    let mut keep = |n: RawNode| {
        if referenced.contains(&n.id) {
            if nodes.insert(n.id, n).is_some() {
                log::warn!("node with OSMID {} occurs more than once in this file", n.id);
            }
            let _ = nodes_bar.update(1);
        }
    };
    let reader = ElementReader::from_path(fp).map_err(|e| NetworkError::PbfLibError { source: e })?;
    reader
        .for_each(|e| match e {
            Element::Node(node) => keep(RawNode::from(&node)),
            Element::DenseNode(node) => keep(RawNode::from(&node)),
            Element::Way(_) | Element::Relation(_) => {}
        })
        .map_err(|e| NetworkError::PbfLibError { source: e })?;
    eprintln!();
    term::show_cursor().map_err(|e| NetworkError::InternalError(e.to_string()))?;

    if nodes.is_empty() {
        return Err(NetworkError::NoNodesFound);
    }
    let missing = referenced.len() - nodes.len();
    if missing > 0 {
        log::warn!("{missing} node references not found in {filepath}");
    }
    Ok(NetworkDataset { nodes, ways })
}
