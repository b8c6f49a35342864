// src/types.rs
//! Value types shared across the pipeline stages.

/// Vertex identifier as it appears in an edge-list file.
pub type VertexId = u64;

/// One undirected weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: f64,
}

impl Edge {
    #[must_use]
    pub fn new(u: VertexId, v: VertexId, weight: f64) -> Self {
        Self { u, v, weight }
    }
}

/// A parsed graph file: label, edges in file order, and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphRecord {
    label: String,
    source: String,
    edges: Vec<Edge>,
}

impl GraphRecord {
    #[must_use]
    pub fn new(label: impl Into<String>, source: impl Into<String>, edges: Vec<Edge>) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
            edges,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates over both endpoints of every edge.
    pub fn endpoints(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.edges.iter().flat_map(|e| [e.u, e.v])
    }
}

/// A raw graph-file handle handed over by a file-set resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphFile {
    pub source: String,
    pub label: String,
    pub payload: String,
}

impl GraphFile {
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        label: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            label: label.into(),
            payload: payload.into(),
        }
    }
}
