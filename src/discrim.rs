// src/discrim.rs
//! Discriminability engine.
//!
//! For every sample, each distance to another measurement of the same entity is
//! compared against all distances to measurements of other entities:
//!
//! `rdf = 1 - (count(between < d) + 0.5 * count(between == d)) / |between|`
//!
//! The statistic is the mean of every rdf value across all samples.

use crate::error::{DiscrimError, Result};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

/// Policy flags for [`discriminability`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscrimOptions {
    /// Drop samples whose label occurs exactly once.
    pub drop_singletons: bool,
    /// Treat the input as an `n x n` dissimilarity matrix instead of features.
    pub precomputed: bool,
}

impl Default for DiscrimOptions {
    fn default() -> Self {
        Self {
            drop_singletons: true,
            precomputed: false,
        }
    }
}

/// Ragged per-sample reliability density values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RdfTable {
    rows: Vec<Vec<f64>>,
}

impl RdfTable {
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of real (non-padded) entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Rows right-padded with `NaN` to the longest row.
    #[must_use]
    pub fn padded(&self) -> Array2<f64> {
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut out = Array2::from_elem((self.rows.len(), width), f64::NAN);
        for (mut dst, src) in out.outer_iter_mut().zip(&self.rows) {
            for (cell, value) in dst.iter_mut().zip(src) {
                *cell = *value;
            }
        }
        out
    }

    /// Mean over all real entries, `None` if there are none.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Option<f64> {
        let count = self.entry_count();
        if count == 0 {
            return None;
        }
        let sum: f64 = self.rows.iter().flatten().sum();
        Some(sum / count as f64)
    }

    /// Per-sample mean, `None` for samples without entries.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn row_means(&self) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .map(|r| (!r.is_empty()).then(|| r.iter().sum::<f64>() / r.len() as f64))
            .collect()
    }
}

/// Statistic plus the per-sample detail it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscrimReport {
    pub statistic: f64,
    pub rdf: RdfTable,
    /// Input row indices that took part, in input order. `rdf` row `k` belongs to `retained[k]`.
    pub retained: Vec<usize>,
    /// Labels removed because they occur only once.
    pub dropped_labels: Vec<String>,
}

/// Computes the discriminability statistic.
///
/// # Errors
/// See [`discriminability_detailed`].
pub fn discriminability(
    x: ArrayView2<'_, f64>,
    labels: &[String],
    opts: &DiscrimOptions,
) -> Result<f64> {
    discriminability_detailed(x, labels, opts).map(|r| r.statistic)
}

/// Computes the discriminability statistic and the reliability density table.
///
/// # Errors
/// - [`DiscrimError::Validation`] if the row count differs from the label count, a
///   precomputed matrix is not square, or the input contains non-finite values.
/// - [`DiscrimError::InsufficientData`] if no label repeats, fewer than two samples
///   remain, or no within/between comparison exists.
pub fn discriminability_detailed(
    x: ArrayView2<'_, f64>,
    labels: &[String],
    opts: &DiscrimOptions,
) -> Result<DiscrimReport> {
    validate_input(x, labels, opts)?;

    let counts = label_counts(labels);
    let singletons: Vec<String> = counts
        .iter()
        .filter(|(_, c)| **c == 1)
        .map(|(l, _)| (*l).to_string())
        .collect();

    if counts.values().all(|&c| c < 2) {
        return Err(DiscrimError::InsufficientData {
            reason: "every label is unique, so no within-label comparison exists".into(),
            dropped: singletons,
        });
    }

    let retained: Vec<usize> = (0..labels.len())
        .filter(|&i| !opts.drop_singletons || counts[labels[i].as_str()] > 1)
        .collect();
    let dropped_labels = if opts.drop_singletons {
        singletons
    } else {
        Vec::new()
    };

    if retained.len() < 2 {
        return Err(DiscrimError::InsufficientData {
            reason: format!("{} usable sample(s) after filtering, need at least 2", retained.len()),
            dropped: dropped_labels,
        });
    }

    let kept_labels: Vec<&str> = retained.iter().map(|&i| labels[i].as_str()).collect();
    let distances = if opts.precomputed {
        x.select(Axis(0), &retained).select(Axis(1), &retained)
    } else {
        pairwise_euclidean(x.select(Axis(0), &retained).view())
    };
    debug!(samples = retained.len(), "computed dissimilarity matrix");

    let rows: Vec<Vec<f64>> = (0..retained.len())
        .into_par_iter()
        .map(|i| rdf_row(i, distances.row(i), &kept_labels))
        .collect();
    let rdf = RdfTable { rows };

    let Some(statistic) = rdf.mean() else {
        return Err(DiscrimError::InsufficientData {
            reason: "only one distinct label among retained samples, so no between-label comparison exists".into(),
            dropped: dropped_labels,
        });
    };

    Ok(DiscrimReport {
        statistic,
        rdf,
        retained,
        dropped_labels,
    })
}

/// Euclidean distance between every pair of rows. Exactly symmetric with a zero diagonal.
#[must_use]
pub fn pairwise_euclidean(x: ArrayView2<'_, f64>) -> Array2<f64> {
    let n = x.nrows();
    let mut out = Array2::zeros((n, n));
    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let a = x.row(i);
            (0..n)
                .map(|j| if i == j { 0.0 } else { euclidean(a, x.row(j)) })
                .collect()
        })
        .collect();
    for (mut dst, src) in out.outer_iter_mut().zip(rows) {
        for (cell, value) in dst.iter_mut().zip(src) {
            *cell = value;
        }
    }
    out
}

fn euclidean(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(p, q)| (p - q) * (p - q))
        .sum::<f64>()
        .sqrt()
}

/// Reliability density values of sample `i` given its distance row.
#[allow(clippy::cast_precision_loss)]
fn rdf_row(i: usize, row: ArrayView1<'_, f64>, labels: &[&str]) -> Vec<f64> {
    let mut within = Vec::new();
    let mut between = Vec::new();
    for (j, &d) in row.iter().enumerate() {
        if j == i {
            continue;
        }
        if labels[j] == labels[i] {
            within.push(d);
        } else {
            between.push(d);
        }
    }

    if between.is_empty() {
        return Vec::new();
    }

    let total = between.len() as f64;
    within
        .into_iter()
        .map(|d| {
            let less = between.iter().filter(|&&b| b < d).count() as f64;
            let ties = between.iter().filter(|&&b| b == d).count() as f64;
            1.0 - (less + 0.5 * ties) / total
        })
        .collect()
}

fn label_counts(labels: &[String]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for label in labels {
        *counts.entry(label.as_str()).or_insert(0) += 1;
    }
    counts
}

fn validate_input(x: ArrayView2<'_, f64>, labels: &[String], opts: &DiscrimOptions) -> Result<()> {
    if x.nrows() != labels.len() {
        return Err(DiscrimError::Validation(format!(
            "{} rows but {} labels",
            x.nrows(),
            labels.len()
        )));
    }
    if opts.precomputed && x.nrows() != x.ncols() {
        return Err(DiscrimError::Validation(format!(
            "precomputed dissimilarity matrix must be square, got {}x{}",
            x.nrows(),
            x.ncols()
        )));
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(DiscrimError::Validation(
            "input contains NaN or infinite values".into(),
        ));
    }
    Ok(())
}
