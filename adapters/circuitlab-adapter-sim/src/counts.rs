//! Measurement histograms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome counts keyed by bitstring.
///
/// Keys put the highest classical bit first, so `"10"` means bit 1 read 1 and
/// bit 0 read 0. Iteration is in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts(BTreeMap<String, u64>);

impl Counts {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` observations of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.0.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Observations of `bitstring` (zero if never seen).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Total observations.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(bitstring, count)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Largest single count, zero when empty.
    pub fn max_count(&self) -> u64 {
        self.0.values().copied().max().unwrap_or(0)
    }

    /// Format a basis-state index as a key of `width` bits.
    pub fn bitstring(outcome: usize, width: u32) -> String {
        format!("{:0width$b}", outcome, width = width as usize)
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (k, v) in iter {
            counts.insert(k, v);
        }
        counts
    }
}
