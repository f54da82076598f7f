use super::EdgeSink;
use crate::model::{network::NetworkEdge, osm::OsmWayId, NetworkError};

/// totals reported by a [`BatchEmitter`] when it finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitterSummary {
    pub batches: usize,
    pub edges: usize,
}

/// buffers edges and hands them to an [`EdgeSink`] in batches.
///
/// a batch is flushed once it holds at least `batch_size` edges. edges of a
/// single way are never split across batches, so a batch may exceed
/// `batch_size` by the edge count of its last way. a sink failure is returned
/// as [`NetworkError::BatchFlushError`] naming the ways of the failed batch;
/// there is no retry and batches already flushed are left in place.
pub struct BatchEmitter<S: EdgeSink> {
    sink: S,
    batch_size: usize,
    buffer: Vec<NetworkEdge>,
    buffer_ways: Vec<OsmWayId>,
    summary: EmitterSummary,
}

impl<S: EdgeSink> BatchEmitter<S> {
    pub fn new(sink: S, batch_size: usize) -> Result<BatchEmitter<S>, NetworkError> {
        if batch_size == 0 {
            return Err(NetworkError::ConfigurationError(String::from(
                "batch size must be greater than zero",
            )));
        }
        Ok(BatchEmitter {
            sink,
            batch_size,
            buffer: Vec::with_capacity(batch_size),
            buffer_ways: vec![],
            summary: EmitterSummary::default(),
        })
    }

    /// adds the edges of one way, flushing when the buffer is full
    pub fn push_way(&mut self, way_id: OsmWayId, edges: Vec<NetworkEdge>) -> Result<(), NetworkError> {
        if edges.is_empty() {
            return Ok(());
        }
        self.buffer.extend(edges);
        self.buffer_ways.push(way_id);
        if self.buffer.len() >= self.batch_size {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NetworkError> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let result = self.sink.insert_edges(&self.buffer);
        let edges = self.buffer.len();
        let ways = std::mem::take(&mut self.buffer_ways);
        self.buffer.clear();
        match result {
            Ok(()) => {
                log::debug!(
                    "flushed batch {} with {} edges from {} ways",
                    self.summary.batches,
                    edges,
                    ways.len()
                );
                self.summary.batches += 1;
                self.summary.edges += edges;
                Ok(())
            }
            Err(e) => {
                log::error!(
                    "batch {} with {} edges from {} ways was rejected by the sink",
                    self.summary.batches,
                    edges,
                    ways.len()
                );
                Err(NetworkError::BatchFlushError {
                    batch: self.summary.batches,
                    edges,
                    ways,
                    source: Box::new(e),
                })
            }
        }
    }

    /// flushes any remaining edges and closes the sink
    pub fn finish(mut self) -> Result<(S, EmitterSummary), NetworkError> {
        self.flush()?;
        self.sink.finish()?;
        Ok((self.sink, self.summary))
    }

    pub fn summary(&self) -> EmitterSummary {
        self.summary
    }

    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        mode::ModeSet,
        network::EdgeDirection,
        osm::OsmNodeId,
        profile::{WayAttributes, WayProfile},
        sink::MemoryEdgeSink,
        tags::TagReport,
    };
    use geo::{Coord, LineString};
    use uom::si::{f64::Velocity, velocity};

    fn edges(way_id: i64, count: usize) -> Vec<NetworkEdge> {
        let profile = WayProfile {
            way_id: OsmWayId(way_id),
            street_type: String::from("highway_footway"),
            forward: ModeSet::FOOT,
            backward: ModeSet::FOOT,
            attributes: WayAttributes {
                lanes: 1,
                max_speed: Velocity::new::<velocity::kilometer_per_hour>(5.0),
                sidewalk: None,
                cycleway: None,
                surface: None,
                lit: None,
                name: None,
                parking_left: None,
                parking_right: None,
                parking_both: None,
            },
            report: TagReport::default(),
        };
        let nodes = [OsmNodeId(1), OsmNodeId(2)];
        let line = LineString::new(vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }]);
        (0..count)
            .filter_map(|i| {
                NetworkEdge::new(EdgeDirection::Forward, i, &nodes, &line, ModeSet::FOOT, &profile)
            })
            .collect()
    }

    struct RejectingSink {
        accepted: usize,
        calls: usize,
    }

    impl EdgeSink for RejectingSink {
        fn insert_edges(&mut self, _batch: &[NetworkEdge]) -> Result<(), NetworkError> {
            self.calls += 1;
            if self.calls > self.accepted {
                Err(NetworkError::SinkError(String::from("connection lost")))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_batches_flush_at_way_boundaries() {
        let mut emitter =
            BatchEmitter::new(MemoryEdgeSink::default(), 4).expect("valid batch size");
        emitter.push_way(OsmWayId(1), edges(1, 3)).expect("push");
        assert_eq!(emitter.buffered(), 3);
        emitter.push_way(OsmWayId(2), edges(2, 3)).expect("push");
        assert_eq!(emitter.buffered(), 0);
        emitter.push_way(OsmWayId(3), edges(3, 1)).expect("push");
        emitter.push_way(OsmWayId(4), vec![]).expect("push");
        let (sink, summary) = emitter.finish().expect("finish");
        assert_eq!(sink.batches.len(), 2);
        assert_eq!(sink.batches[0].len(), 6);
        assert_eq!(sink.batches[1].len(), 1);
        assert_eq!(summary, EmitterSummary { batches: 2, edges: 7 });
        assert!(sink.finished);
    }

    #[test]
    fn test_sink_failure_reports_ways() {
        let sink = RejectingSink {
            accepted: 1,
            calls: 0,
        };
        let mut emitter = BatchEmitter::new(sink, 2).expect("valid batch size");
        emitter.push_way(OsmWayId(1), edges(1, 2)).expect("first batch accepted");
        emitter.push_way(OsmWayId(2), edges(2, 1)).expect("buffered");
        match emitter.push_way(OsmWayId(3), edges(3, 1)) {
            Err(NetworkError::BatchFlushError {
                batch, edges, ways, ..
            }) => {
                assert_eq!(batch, 1);
                assert_eq!(edges, 2);
                assert_eq!(ways, vec![OsmWayId(2), OsmWayId(3)]);
            }
            other => panic!("expected flush failure, found {other:?}"),
        }
        assert_eq!(emitter.summary().edges, 2);
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        assert!(BatchEmitter::new(MemoryEdgeSink::default(), 0).is_err());
    }
}
