use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// direction of an edge relative to the node order of its way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    Forward,
    Backward,
}

impl EdgeDirection {
    /// single-character marker used in edge identifiers
    pub fn marker(&self) -> char {
        match self {
            EdgeDirection::Forward => 'f',
            EdgeDirection::Backward => 'b',
        }
    }
}

impl Display for EdgeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EdgeDirection::Forward => "forward",
            EdgeDirection::Backward => "backward",
        };
        write!(f, "{s}")
    }
}
