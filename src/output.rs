// src/output.rs
//! Persistence of the feature matrix and label vector.
//!
//! `<name>_X.csv` holds one fixed-precision row per sample, `<name>_Y.csv` one
//! label per line. Row `i` of both files always describes the same sample.

use crate::config::OutputConfig;
use crate::error::{DiscrimError, Result};
use crate::pipeline::Ingestion;
use crate::types::GraphFile;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths written by [`save_x_and_y`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPaths {
    pub x: PathBuf,
    pub y: PathBuf,
    pub manifest: Option<PathBuf>,
}

/// One row of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub row: usize,
    pub source: String,
    pub label: String,
    /// SHA-256 of the edge-list payload, when it was available.
    pub sha256: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub n_vertices: usize,
    pub rows: Vec<ManifestEntry>,
}

impl Manifest {
    /// Builds the manifest of an ingested batch. `files` supplies payload digests.
    #[must_use]
    pub fn from_ingestion(name: &str, ingestion: &Ingestion, files: &[GraphFile]) -> Self {
        let digests: HashMap<&str, String> = files
            .iter()
            .map(|f| (f.source.as_str(), payload_digest(&f.payload)))
            .collect();

        let rows = ingestion
            .records()
            .iter()
            .enumerate()
            .map(|(row, r)| ManifestEntry {
                row,
                source: r.source().to_string(),
                label: r.label().to_string(),
                sha256: digests.get(r.source()).cloned(),
            })
            .collect();

        Self {
            name: name.to_string(),
            n_vertices: ingestion.vertices().len(),
            rows,
        }
    }
}

/// Writes `<name>_X.csv` and `<name>_Y.csv` into `dir`, creating it if needed.
///
/// # Errors
/// Returns [`DiscrimError::Validation`] if row counts differ or a label is empty
/// or spans lines, or an I/O error.
pub fn save_x_and_y(
    features: ArrayView2<'_, f64>,
    labels: &[String],
    dir: &Path,
    name: &str,
    opts: &OutputConfig,
) -> Result<SavedPaths> {
    if features.nrows() != labels.len() {
        return Err(DiscrimError::Validation(format!(
            "{} feature rows but {} labels",
            features.nrows(),
            labels.len()
        )));
    }
    if let Some((row, label)) = labels
        .iter()
        .enumerate()
        .find(|(_, l)| l.is_empty() || l.contains(['\n', '\r']))
    {
        return Err(DiscrimError::Validation(format!(
            "label of row {row} must be a non-empty single line, got {label:?}"
        )));
    }
    fs::create_dir_all(dir).map_err(|e| DiscrimError::io(e, dir))?;

    let x = dir.join(format!("{name}_X.csv"));
    let y = dir.join(format!("{name}_Y.csv"));
    write_file(&x, &render_features(features, opts))?;
    write_file(&y, &render_labels(labels))?;

    Ok(SavedPaths { x, y, manifest: None })
}

/// [`save_x_and_y`] plus the optional JSON manifest.
///
/// # Errors
/// Returns error if any file cannot be written.
pub fn save_batch(
    ingestion: &Ingestion,
    features: ArrayView2<'_, f64>,
    files: &[GraphFile],
    dir: &Path,
    name: &str,
    opts: &OutputConfig,
) -> Result<SavedPaths> {
    let mut saved = save_x_and_y(features, &ingestion.labels(), dir, name, opts)?;
    if opts.manifest {
        let manifest = Manifest::from_ingestion(name, ingestion, files);
        let path = dir.join(format!("{name}_manifest.json"));
        let json = serde_json::to_string_pretty(&manifest)
            .map_err(|e| DiscrimError::Validation(format!("cannot serialize manifest: {e}")))?;
        write_file(&path, &json)?;
        saved.manifest = Some(path);
    }
    Ok(saved)
}

/// Reads back a pair written by [`save_x_and_y`].
///
/// # Errors
/// Returns [`DiscrimError::Parse`] for a malformed number,
/// [`DiscrimError::Validation`] for ragged rows or misaligned files.
pub fn load_x_and_y(x: &Path, y: &Path, delimiter: &str) -> Result<(Array2<f64>, Vec<String>)> {
    let x_text = fs::read_to_string(x).map_err(|e| DiscrimError::io(e, x))?;
    let y_text = fs::read_to_string(y).map_err(|e| DiscrimError::io(e, y))?;

    // One label per line, verbatim. Saved labels are never empty.
    let labels: Vec<String> = y_text
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    let mut values = Vec::new();
    let mut width = None;
    let mut rows = 0;
    for (idx, line) in x_text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = parse_row(line, delimiter, x, idx + 1)?;
        match width {
            None => width = Some(row.len()),
            Some(w) if w != row.len() => {
                return Err(DiscrimError::Validation(format!(
                    "{} line {}: expected {w} columns, found {}",
                    x.display(),
                    idx + 1,
                    row.len()
                )));
            }
            Some(_) => {}
        }
        values.extend(row);
        rows += 1;
    }

    if rows != labels.len() {
        return Err(DiscrimError::Validation(format!(
            "{rows} feature rows but {} labels",
            labels.len()
        )));
    }

    let matrix = Array2::from_shape_vec((rows, width.unwrap_or(0)), values).map_err(|e| {
        DiscrimError::Dimensionality {
            expected: format!("{rows} rows"),
            found: e.to_string(),
        }
    })?;
    Ok((matrix, labels))
}

fn parse_row(line: &str, delimiter: &str, path: &Path, line_no: usize) -> Result<Vec<f64>> {
    line.split(delimiter)
        .map(|tok| {
            tok.trim().parse::<f64>().map_err(|_| DiscrimError::Parse {
                source_ref: path.display().to_string(),
                line: line_no,
                message: format!("invalid number '{}'", tok.trim()),
            })
        })
        .collect()
}

fn render_features(features: ArrayView2<'_, f64>, opts: &OutputConfig) -> String {
    let mut out = String::new();
    for row in features.outer_iter() {
        let mut first = true;
        for value in row {
            if !first {
                out.push_str(&opts.delimiter);
            }
            first = false;
            let _ = write!(out, "{value:.prec$}", prec = opts.precision);
        }
        out.push('\n');
    }
    out
}

fn render_labels(labels: &[String]) -> String {
    let mut out = String::new();
    for label in labels {
        out.push_str(label);
        out.push('\n');
    }
    out
}

/// Hex SHA-256 of a payload. CRLF line endings hash the same as LF.
#[must_use]
pub fn payload_digest(payload: &str) -> String {
    let mut hasher = Sha256::new();
    for line in payload.lines() {
        hasher.update(line.trim_end_matches('\r').as_bytes());
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| DiscrimError::io(e, path))
}
