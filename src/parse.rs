// src/parse.rs
//! Edge list parser.
//!
//! Accepts three columns per data line (source vertex, target vertex, weight)
//! separated by commas, whitespace, or a mix of both. Blank lines and `#`
//! comments are skipped.

use crate::error::{DiscrimError, Result};
use crate::types::{Edge, GraphFile, GraphRecord, VertexId};

/// Parses one edge-list payload into a [`GraphRecord`].
///
/// # Errors
/// Returns [`DiscrimError::Parse`] on the first malformed line.
pub fn parse_edgelist(label: &str, source: &str, payload: &str) -> Result<GraphRecord> {
    let mut edges = Vec::new();

    for (idx, raw) in payload.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let edge = parse_line(line).map_err(|message| DiscrimError::Parse {
            source_ref: source.to_string(),
            line: idx + 1,
            message,
        })?;
        edges.push(edge);
    }

    Ok(GraphRecord::new(label, source, edges))
}

/// Parses a [`GraphFile`] handle.
///
/// # Errors
/// Returns [`DiscrimError::Parse`] on the first malformed line.
pub fn parse_file(file: &GraphFile) -> Result<GraphRecord> {
    parse_edgelist(&file.label, &file.source, &file.payload)
}

fn parse_line(line: &str) -> std::result::Result<Edge, String> {
    let cols: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    let [u, v, w] = cols.as_slice() else {
        return Err(format!("expected 3 columns, found {}", cols.len()));
    };

    Ok(Edge::new(parse_vertex(u)?, parse_vertex(v)?, parse_weight(w)?))
}

fn parse_vertex(tok: &str) -> std::result::Result<VertexId, String> {
    tok.parse::<VertexId>()
        .map_err(|_| format!("invalid vertex id '{tok}'"))
}

fn parse_weight(tok: &str) -> std::result::Result<f64, String> {
    let w: f64 = tok
        .parse()
        .map_err(|_| format!("invalid weight '{tok}'"))?;
    if !w.is_finite() {
        return Err(format!("non-finite weight '{tok}'"));
    }
    if w < 0.0 {
        return Err(format!("negative weight '{tok}'"));
    }
    Ok(w)
}
