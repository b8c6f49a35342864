// src/pipeline.rs
//! Batch ingestion: parse, align, build, flatten.
//!
//! The result is a single immutable [`Ingestion`] value that the later stages
//! borrow from. Normalization is composed explicitly by the caller.

use crate::align::{self, VertexSet};
use crate::discrim::{self, DiscrimOptions, DiscrimReport};
use crate::error::{DiscrimError, Result};
use crate::features;
use crate::parse;
use crate::ranks;
use crate::tensor::{self, AdjacencyTensor};
use crate::types::{GraphFile, GraphRecord};
use ndarray::Array2;
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Everything derived from one batch of graph files.
#[derive(Debug, Clone)]
pub struct Ingestion {
    vertices: VertexSet,
    records: Vec<GraphRecord>,
    tensor: AdjacencyTensor,
    features: Array2<f64>,
}

impl Ingestion {
    #[must_use]
    pub fn vertices(&self) -> &VertexSet {
        &self.vertices
    }

    /// Records in canonical source order.
    #[must_use]
    pub fn records(&self) -> &[GraphRecord] {
        &self.records
    }

    #[must_use]
    pub fn tensor(&self) -> &AdjacencyTensor {
        &self.tensor
    }

    #[must_use]
    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    /// Label vector, row-aligned with [`Ingestion::features`].
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.label().to_string()).collect()
    }

    /// Feature matrix of the pass-to-ranks normalized tensor. The stored tensor is untouched.
    #[must_use]
    pub fn ranked_features(&self) -> Array2<f64> {
        features::features(&ranks::pass_to_ranks_tensor(&self.tensor))
    }

    /// Discriminability over this batch, optionally on ranked edges.
    ///
    /// # Errors
    /// Propagates [`discrim::discriminability_detailed`] errors.
    pub fn discriminability(&self, ranked: bool, opts: &DiscrimOptions) -> Result<DiscrimReport> {
        let labels = self.labels();
        if ranked {
            let x = self.ranked_features();
            discrim::discriminability_detailed(x.view(), &labels, opts)
        } else {
            discrim::discriminability_detailed(self.features.view(), &labels, opts)
        }
    }
}

/// Aligns, builds and flattens a batch of parsed records.
///
/// Records are sorted by source reference first so the output order does not
/// depend on the order they were supplied in.
///
/// # Errors
/// Returns [`DiscrimError::Configuration`] for an empty batch or a batch with no
/// edges, and [`DiscrimError::Alignment`] if the tensor builder meets a vertex
/// outside the aligned set.
pub fn build_from_records(mut records: Vec<GraphRecord>) -> Result<Ingestion> {
    if records.is_empty() {
        return Err(DiscrimError::Configuration("empty batch: no graph records".into()));
    }
    records.sort_by(|a, b| a.source().cmp(b.source()));

    let vertices = align::align(&records);
    if vertices.is_empty() {
        return Err(DiscrimError::Configuration(
            "batch contains no edges, so the vertex set is empty".into(),
        ));
    }
    debug!(vertices = vertices.len(), records = records.len(), "aligned batch");

    let tensor = tensor::build_tensor(&records, &vertices)?;
    let features = features::features(&tensor);

    Ok(Ingestion {
        vertices,
        records,
        tensor,
        features,
    })
}

/// Parses every file, skipping (with a warning) the ones that fail, then builds the batch.
///
/// # Errors
/// Returns [`DiscrimError::Configuration`] if no file survives parsing, otherwise
/// whatever [`build_from_records`] returns.
pub fn ingest(files: &[GraphFile]) -> Result<Ingestion> {
    if files.is_empty() {
        return Err(DiscrimError::Configuration("empty batch: no graph files".into()));
    }

    let parsed: Vec<Result<GraphRecord>> = files.par_iter().map(parse::parse_file).collect();

    let mut records = Vec::with_capacity(parsed.len());
    for (file, outcome) in files.iter().zip(parsed) {
        match outcome {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping {}: {e}", file.source),
        }
    }

    let skipped = files.len() - records.len();
    if records.is_empty() {
        return Err(DiscrimError::Configuration(format!(
            "all {} graph file(s) failed to parse",
            files.len()
        )));
    }
    info!("Parsed {} graph file(s), skipped {skipped}", records.len());

    build_from_records(records)
}
