mod junction_index;
mod network_segmenter;
mod segment_accumulator;

pub use junction_index::JunctionIndex;
pub use network_segmenter::NetworkSegmenter;
pub use segment_accumulator::SegmentAccumulator;
