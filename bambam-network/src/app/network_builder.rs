use kdam::{Bar, BarExt};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    algorithm::{
        resolution::WayResolver,
        segmentation::{JunctionIndex, NetworkSegmenter},
    },
    config::NetworkImportConfiguration,
    model::{
        network::NetworkEdge,
        osm::{NetworkDataset, OsmWayId, RawWay},
        profile::TypeProfileTable,
        sink::{AuditSink, BatchEmitter, EdgeSink},
        tags::TagAudit,
        NetworkError,
    },
};

/// counts describing a finished network build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub ways_read: usize,
    pub ways_unrecognized: usize,
    pub ways_selected: usize,
    pub ways_impassable: usize,
    pub ways_missing_nodes: usize,
    pub ways_with_erroneous_tags: usize,
    pub ways_with_unconsumed_tags: usize,
    pub junctions: usize,
    pub edges_emitted: usize,
    pub batches_flushed: usize,
}

/// result of resolving and segmenting a single way
struct WayOutcome {
    way_id: OsmWayId,
    impassable: bool,
    edges: Result<Vec<NetworkEdge>, NetworkError>,
    audit: TagAudit,
}

/// builds a directed multimodal network from raw ways and nodes in two passes:
/// 1. count node references of every way with a known type into a [`JunctionIndex`]
/// 2. resolve and segment each way, in parallel chunks, then hand the edges to a
///    [`BatchEmitter`] and the tag audits to an [`AuditSink`] in source order
pub struct NetworkBuilder {
    resolver: WayResolver,
    batch_size: usize,
    parallelize: bool,
    fail_on_missing_nodes: bool,
}

impl TryFrom<&NetworkImportConfiguration> for NetworkBuilder {
    type Error = NetworkError;

    fn try_from(conf: &NetworkImportConfiguration) -> Result<Self, Self::Error> {
        let table = TypeProfileTable::with_overrides(&conf.type_profiles)?;
        let resolver =
            WayResolver::new(table, conf.attribute_limits(), conf.ignored_tags.clone())?;
        Ok(NetworkBuilder::new(resolver, conf))
    }
}

impl NetworkBuilder {
    pub fn new(resolver: WayResolver, conf: &NetworkImportConfiguration) -> NetworkBuilder {
        NetworkBuilder {
            resolver,
            batch_size: conf.batch_size,
            parallelize: conf.parallelize,
            fail_on_missing_nodes: conf.fail_on_missing_nodes,
        }
    }

    pub fn build<S: EdgeSink, A: AuditSink>(
        &self,
        dataset: &NetworkDataset,
        sink: S,
        audit_sink: &mut A,
    ) -> Result<(S, NetworkSummary), NetworkError> {
        let mut emitter = BatchEmitter::new(sink, self.batch_size)?;
        let mut summary = NetworkSummary {
            ways_read: dataset.ways.len(),
            ..Default::default()
        };

        let selected = dataset
            .ways
            .iter()
            .filter(|w| self.resolver.type_profile(w).is_some())
            .collect::<Vec<_>>();
        summary.ways_selected = selected.len();
        summary.ways_unrecognized = summary.ways_read - summary.ways_selected;
        log::info!(
            "selected {} of {} ways with a known highway or railway type",
            summary.ways_selected,
            summary.ways_read
        );

        // pass 1 completes before any way is segmented
        let junctions = if self.parallelize {
            JunctionIndex::build_parallel(&selected)
        } else {
            JunctionIndex::build(selected.iter().copied())
        };
        summary.junctions = junctions.junction_count();
        log::info!(
            "found {} junctions among {} referenced nodes",
            summary.junctions,
            junctions.node_count()
        );

        // pass 2
        let segmenter = NetworkSegmenter::new(&junctions, &dataset.nodes);
        let mut bar = Bar::builder()
            .desc("build network edges")
            .total(selected.len())
            .build()
            .map_err(NetworkError::InternalError)?;
        for chunk in selected.chunks(self.batch_size) {
            let outcomes = if self.parallelize {
                chunk
                    .par_iter()
                    .filter_map(|w| self.process_way(w, &segmenter))
                    .collect::<Vec<_>>()
            } else {
                chunk
                    .iter()
                    .filter_map(|w| self.process_way(w, &segmenter))
                    .collect::<Vec<_>>()
            };
            for outcome in outcomes {
                self.accept(outcome, &mut emitter, audit_sink, &mut summary)?;
            }
            let _ = bar.update(chunk.len());
        }
        eprintln!();

        let (sink, emitted) = emitter.finish()?;
        summary.edges_emitted = emitted.edges;
        summary.batches_flushed = emitted.batches;
        log::info!(
            "emitted {} edges in {} batches",
            summary.edges_emitted,
            summary.batches_flushed
        );
        Ok((sink, summary))
    }

    fn process_way(&self, way: &RawWay, segmenter: &NetworkSegmenter) -> Option<WayOutcome> {
        let profile = self.resolver.resolve(way)?;
        let audit = self.resolver.audit(way, &profile);
        Some(WayOutcome {
            way_id: way.id,
            impassable: profile.is_impassable(),
            edges: segmenter.segment(way, &profile),
            audit,
        })
    }

    fn accept<S: EdgeSink, A: AuditSink>(
        &self,
        outcome: WayOutcome,
        emitter: &mut BatchEmitter<S>,
        audit_sink: &mut A,
        summary: &mut NetworkSummary,
    ) -> Result<(), NetworkError> {
        if !outcome.audit.erroneous.is_empty() {
            summary.ways_with_erroneous_tags += 1;
        }
        if !outcome.audit.unconsumed.is_empty() {
            summary.ways_with_unconsumed_tags += 1;
        }
        if !outcome.audit.is_empty() {
            audit_sink.record(outcome.way_id, &outcome.audit)?;
        }
        if outcome.impassable {
            summary.ways_impassable += 1;
        }
        match outcome.edges {
            Ok(edges) => emitter.push_way(outcome.way_id, edges),
            Err(e @ NetworkError::MissingNode(..)) if !self.fail_on_missing_nodes => {
                log::warn!("skipping way: {e}");
                summary.ways_missing_nodes += 1;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
