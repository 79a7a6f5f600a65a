//! Notification allow-list.

use std::collections::BTreeSet;

use crate::error::{MonitorError, Result};
use crate::marker::{self, Marker};

/// Marker names the operator wants to be notified about.
///
/// An empty filter lets every marker through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifyFilter {
    names: BTreeSet<&'static str>,
}

impl NotifyFilter {
    /// A filter that allows every marker.
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Build a filter from configured entries.
    ///
    /// Entries may be extension tokens or marker names. An entry that matches
    /// no marker is an error: silently dropping it would notify on
    /// everything, or on nothing the operator asked for.
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let mut names = BTreeSet::new();
        for entry in entries {
            let entry = entry.as_ref();
            let marker =
                marker::find(entry).ok_or_else(|| MonitorError::UnknownMarker(entry.to_string()))?;
            names.insert(marker.name);
        }
        Ok(Self { names })
    }

    /// Whether a notification should be sent for `marker`.
    pub fn allows(&self, marker: &Marker) -> bool {
        self.names.is_empty() || self.names.contains(marker.name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Allowed marker names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }
}
