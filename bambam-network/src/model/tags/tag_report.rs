use std::collections::{BTreeMap, BTreeSet};

/// bookkeeping produced by a single resolution step: the tag keys the step
/// looked at and the subset of those whose values it could not use.
/// reports from successive steps are combined with [`TagReport::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagReport {
    pub consumed: BTreeSet<String>,
    pub erroneous: BTreeMap<String, String>,
}

impl TagReport {
    pub fn consume(&mut self, key: &str) {
        self.consumed.insert(String::from(key));
    }

    /// marks a key both consumed and erroneous
    pub fn reject(&mut self, key: &str, value: &str) {
        self.consume(key);
        self.erroneous
            .insert(String::from(key), String::from(value));
    }

    pub fn merge(mut self, other: TagReport) -> TagReport {
        self.consumed.extend(other.consumed);
        self.erroneous.extend(other.erroneous);
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.erroneous.is_empty()
    }
}
