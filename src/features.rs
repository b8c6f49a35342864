// src/features.rs
//! Feature matrix builder: one flattened adjacency matrix per row.

use crate::error::{DiscrimError, Result};
use crate::tensor::AdjacencyTensor;
use ndarray::{Array2, ArrayView1, ArrayViewD, Ix2, Ix3};
use tracing::warn;

/// Flattens a `(n, V, V)` array into `(n, V*V)`, row-major.
///
/// A 2-D input is the single-graph case and is returned unreshaped.
///
/// # Errors
/// Returns [`DiscrimError::Dimensionality`] for any rank other than 2 or 3.
pub fn flatten(tensor: ArrayViewD<'_, f64>) -> Result<Array2<f64>> {
    match tensor.ndim() {
        3 => {
            let t = tensor
                .into_dimensionality::<Ix3>()
                .map_err(|e| dimensionality("rank-3 tensor", &e.to_string()))?;
            let (n, rows, cols) = t.dim();
            let flat: Vec<f64> = t.iter().copied().collect();
            Array2::from_shape_vec((n, rows * cols), flat)
                .map_err(|e| dimensionality("(n, V*V) reshape", &e.to_string()))
        }
        2 => {
            warn!("Only one graph in batch; returning its matrix unreshaped");
            let m = tensor
                .into_dimensionality::<Ix2>()
                .map_err(|e| dimensionality("rank-2 matrix", &e.to_string()))?;
            Ok(m.to_owned())
        }
        other => Err(dimensionality("rank 3", &format!("rank {other}"))),
    }
}

/// Feature matrix of a tensor. Row `i` is matrix `i` flattened.
#[must_use]
pub fn features(tensor: &AdjacencyTensor) -> Array2<f64> {
    let (n, v, _) = tensor.shape();
    let mut out = Array2::<f64>::zeros((n, v * v));
    for (mut row, matrix) in out.outer_iter_mut().zip(tensor.matrices()) {
        for (dst, src) in row.iter_mut().zip(matrix.iter()) {
            *dst = *src;
        }
    }
    out
}

/// Rebuilds a `V x V` matrix from one feature row.
///
/// # Errors
/// Returns [`DiscrimError::Dimensionality`] if the row length is not `v * v`.
pub fn unflatten_row(row: ArrayView1<'_, f64>, v: usize) -> Result<Array2<f64>> {
    if row.len() != v * v {
        return Err(dimensionality(
            &format!("row of length {}", v * v),
            &format!("length {}", row.len()),
        ));
    }
    Array2::from_shape_vec((v, v), row.to_vec())
        .map_err(|e| dimensionality("(V, V) reshape", &e.to_string()))
}

fn dimensionality(expected: &str, found: &str) -> DiscrimError {
    DiscrimError::Dimensionality {
        expected: expected.to_string(),
        found: found.to_string(),
    }
}
