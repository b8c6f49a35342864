// src/tensor.rs
//! Graph tensor builder: projects records onto the canonical vertex ordering.

use crate::align::VertexSet;
use crate::error::{DiscrimError, Result};
use crate::types::GraphRecord;
use ndarray::{Array2, Array3, ArrayView2, Axis};
use rayon::prelude::*;

/// Stack of dense symmetric adjacency matrices, shape `(n, V, V)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyTensor {
    data: Array3<f64>,
    sources: Vec<String>,
}

impl AdjacencyTensor {
    /// Wraps an existing stack. Each matrix must be square.
    ///
    /// # Errors
    /// Returns [`DiscrimError::Dimensionality`] if the matrices are not square or the
    /// source list does not match the number of matrices.
    pub fn from_parts(data: Array3<f64>, sources: Vec<String>) -> Result<Self> {
        let (n, rows, cols) = data.dim();
        if rows != cols {
            return Err(DiscrimError::Dimensionality {
                expected: "square matrices".into(),
                found: format!("{rows}x{cols}"),
            });
        }
        if sources.len() != n {
            return Err(DiscrimError::Dimensionality {
                expected: format!("{n} sources"),
                found: sources.len().to_string(),
            });
        }
        Ok(Self { data, sources })
    }

    /// `(n_records, V, V)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn matrix(&self, index: usize) -> Option<ArrayView2<'_, f64>> {
        (index < self.len()).then(|| self.data.index_axis(Axis(0), index))
    }

    pub fn matrices(&self) -> impl Iterator<Item = ArrayView2<'_, f64>> {
        self.data.outer_iter()
    }

    #[must_use]
    pub fn as_array(&self) -> &Array3<f64> {
        &self.data
    }

    /// Source references, index-aligned with the matrices.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub(crate) fn with_data(&self, data: Array3<f64>) -> Self {
        Self {
            data,
            sources: self.sources.clone(),
        }
    }
}

/// Builds the `V x V` matrix of one record.
///
/// Both `(i, j)` and `(j, i)` are set. A repeated edge overwrites the earlier weight.
///
/// # Errors
/// Returns [`DiscrimError::Configuration`] for an empty vertex set and
/// [`DiscrimError::Alignment`] if the record references a vertex outside the set.
pub fn build_matrix(record: &GraphRecord, vertices: &VertexSet) -> Result<Array2<f64>> {
    if vertices.is_empty() {
        return Err(DiscrimError::Configuration(
            "cannot build adjacency matrix over an empty vertex set".into(),
        ));
    }

    let n = vertices.len();
    let mut matrix = Array2::<f64>::zeros((n, n));
    for edge in record.edges() {
        let i = locate(record, vertices, edge.u)?;
        let j = locate(record, vertices, edge.v)?;
        matrix[[i, j]] = edge.weight;
        matrix[[j, i]] = edge.weight;
    }
    Ok(matrix)
}

fn locate(record: &GraphRecord, vertices: &VertexSet, id: u64) -> Result<usize> {
    vertices.index_of(id).ok_or_else(|| DiscrimError::Alignment {
        source_ref: record.source().to_string(),
        vertex: id,
    })
}

/// Builds and stacks one matrix per record, in the order given.
///
/// Callers pass records already in canonical source order (see [`crate::pipeline`]).
///
/// # Errors
/// Returns [`DiscrimError::Configuration`] for an empty batch or vertex set, and
/// [`DiscrimError::Alignment`] for an out-of-set vertex.
pub fn build_tensor(records: &[GraphRecord], vertices: &VertexSet) -> Result<AdjacencyTensor> {
    if records.is_empty() {
        return Err(DiscrimError::Configuration(
            "no graph records to build a tensor from".into(),
        ));
    }

    let matrices = records
        .par_iter()
        .map(|r| build_matrix(r, vertices))
        .collect::<Result<Vec<_>>>()?;

    let n = vertices.len();
    let mut data = Array3::<f64>::zeros((records.len(), n, n));
    for (mut slot, matrix) in data.outer_iter_mut().zip(&matrices) {
        slot.assign(matrix);
    }

    let sources = records.iter().map(|r| r.source().to_string()).collect();
    Ok(AdjacencyTensor { data, sources })
}
