// src/align.rs
//! Vertex aligner: the canonical vertex ordering shared by a batch.

use crate::types::{GraphRecord, VertexId};
use std::collections::BTreeSet;

/// Ascending, duplicate-free union of every edge endpoint in a batch.
///
/// Only [`align`] constructs one, so the ordering invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VertexSet {
    ids: Vec<VertexId>,
}

impl VertexSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &[VertexId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.ids.iter().copied()
    }

    /// Canonical index of a vertex id, if present.
    #[must_use]
    pub fn index_of(&self, id: VertexId) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    #[must_use]
    pub fn contains(&self, id: VertexId) -> bool {
        self.index_of(id).is_some()
    }
}

/// Unions the endpoints of every record. Independent of record order.
#[must_use]
pub fn align(records: &[GraphRecord]) -> VertexSet {
    let ids: BTreeSet<VertexId> = records.iter().flat_map(GraphRecord::endpoints).collect();
    VertexSet {
        ids: ids.into_iter().collect(),
    }
}

/// Vertices of the batch with no incident edge in `record`.
#[must_use]
pub fn isolates(record: &GraphRecord, vertices: &VertexSet) -> Vec<VertexId> {
    let present: BTreeSet<VertexId> = record.endpoints().collect();
    vertices.iter().filter(|id| !present.contains(id)).collect()
}
