//! Observed marker state and change detection.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::marker::Marker;

/// Markers currently present in the marker directory, in sampling order.
///
/// Duplicates are kept: two archives that are both `deployed` produce two
/// `Deployed` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservedState {
    markers: Vec<&'static Marker>,
}

impl ObservedState {
    /// Create a state from markers in sampling order.
    pub fn new(markers: Vec<&'static Marker>) -> Self {
        Self { markers }
    }

    /// Markers in sampling order.
    pub fn markers(&self) -> &[&'static Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Marker name to number of occurrences.
    fn counts(&self) -> HashMap<&'static str, usize> {
        let mut counts = HashMap::new();
        for marker in &self.markers {
            *counts.entry(marker.name).or_insert(0) += 1;
        }
        counts
    }

    /// Compare two states under the given comparison mode.
    pub fn same_as(&self, other: &Self, comparison: StateComparison) -> bool {
        match comparison {
            StateComparison::Ordered => self.markers == other.markers,
            StateComparison::Unordered => {
                self.len() == other.len() && self.counts() == other.counts()
            }
        }
    }
}

impl<'a> IntoIterator for &'a ObservedState {
    type Item = &'a &'static Marker;
    type IntoIter = std::slice::Iter<'a, &'static Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}

/// How two observed states are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateComparison {
    /// Same markers with the same multiplicity, in any order.
    #[default]
    Unordered,

    /// Same markers in the same order.
    Ordered,
}

/// Whether `current` differs from `previous`.
pub fn has_changed(
    previous: &ObservedState,
    current: &ObservedState,
    comparison: StateComparison,
) -> bool {
    !previous.same_as(current, comparison)
}
