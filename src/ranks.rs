// src/ranks.rs
//! Pass-to-ranks normalization.
//!
//! Nonzero weights are replaced by `rank / (nnz + 1)`, where ties share the
//! average of the ranks they occupy. Zeros stay exactly zero. Each graph is
//! ranked against its own nonzero population only.

use crate::tensor::AdjacencyTensor;
use ndarray::{Array2, Array3, ArrayView2};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Returns a new matrix with nonzero entries replaced by their scaled average rank.
#[must_use]
pub fn pass_to_ranks(matrix: &Array2<f64>) -> Array2<f64> {
    pass_to_ranks_view(matrix.view())
}

/// Normalizes every graph of the tensor independently and returns a new tensor.
#[must_use]
pub fn pass_to_ranks_tensor(tensor: &AdjacencyTensor) -> AdjacencyTensor {
    let views: Vec<ArrayView2<'_, f64>> = tensor.matrices().collect();
    let ranked: Vec<Array2<f64>> = views.into_par_iter().map(pass_to_ranks_view).collect();

    let (n, v, _) = tensor.shape();
    let mut data = Array3::<f64>::zeros((n, v, v));
    for (mut slot, matrix) in data.outer_iter_mut().zip(&ranked) {
        slot.assign(matrix);
    }
    tensor.with_data(data)
}

fn pass_to_ranks_view(matrix: ArrayView2<'_, f64>) -> Array2<f64> {
    let nonzero: Vec<f64> = matrix.iter().copied().filter(|w| *w != 0.0).collect();
    let ranks = average_ranks(&nonzero);
    #[allow(clippy::cast_precision_loss)]
    let scale = (nonzero.len() + 1) as f64;

    let mut out = matrix.to_owned();
    let mut next = ranks.into_iter();
    for cell in out.iter_mut().filter(|w| **w != 0.0) {
        if let Some(rank) = next.next() {
            *cell = rank / scale;
        }
    }
    out
}

/// 1-based fractional ranks; tied values receive the mean of their ranks.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // positions start..end hold ranks start+1..=end
        let shared = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = shared;
        }
        start = end;
    }
    ranks
}
