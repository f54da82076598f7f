use std::collections::HashMap;

use rayon::prelude::*;

use crate::model::osm::{OsmNodeId, RawWay};

/// how many times each node is referenced across the ways of the network.
/// a node referenced more than once is a junction, and ways are split there.
/// the index must be complete before any way is segmented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JunctionIndex {
    counts: HashMap<OsmNodeId, u32>,
}

impl JunctionIndex {
    pub fn build<'a>(ways: impl IntoIterator<Item = &'a RawWay>) -> JunctionIndex {
        let mut index = JunctionIndex::default();
        for way in ways {
            index.add_way(way);
        }
        index
    }

    /// builds the index with one partial count per rayon task, merged at the end
    pub fn build_parallel(ways: &[&RawWay]) -> JunctionIndex {
        ways.par_iter()
            .fold(JunctionIndex::default, |mut acc, way| {
                acc.add_way(way);
                acc
            })
            .reduce(JunctionIndex::default, JunctionIndex::merge)
    }

    pub fn count(&self, node: &OsmNodeId) -> u32 {
        self.counts.get(node).copied().unwrap_or_default()
    }

    pub fn is_junction(&self, node: &OsmNodeId) -> bool {
        self.count(node) > 1
    }

    /// number of distinct junction nodes
    pub fn junction_count(&self) -> usize {
        self.counts.values().filter(|c| **c > 1).count()
    }

    pub fn node_count(&self) -> usize {
        self.counts.len()
    }

    fn add_way(&mut self, way: &RawWay) {
        for node in way.nodes.iter() {
            *self.counts.entry(*node).or_insert(0) += 1;
        }
    }

    fn merge(mut self, other: JunctionIndex) -> JunctionIndex {
        let (mut big, small) = if self.counts.len() >= other.counts.len() {
            (std::mem::take(&mut self.counts), other.counts)
        } else {
            (other.counts, std::mem::take(&mut self.counts))
        };
        for (node, count) in small {
            *big.entry(node).or_insert(0) += count;
        }
        JunctionIndex { counts: big }
    }
}
