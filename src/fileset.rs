// src/fileset.rs
//! Local file-set resolver.
//!
//! Walks a directory, keeps edge-list files whose names match the configured
//! suffixes and keywords, and pairs each payload with a label pulled from its
//! file name. Everything here runs before the numeric core sees any data.

use crate::config::{Config, InputConfig};
use crate::error::{DiscrimError, Result};
use crate::types::GraphFile;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Lists matching graph files under `dir`, sorted by path.
///
/// # Errors
/// Returns [`DiscrimError::Configuration`] if `dir` is not a directory and
/// [`DiscrimError::Io`] if the walk fails.
pub fn discover(dir: &Path, input: &InputConfig) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(DiscrimError::Configuration(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let depth = if input.recursive { usize::MAX } else { 1 };
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).max_depth(depth).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_file() && is_graph(entry.path(), input) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

/// True if the file name ends in an accepted suffix and contains every keyword.
#[must_use]
pub fn is_graph(path: &Path, input: &InputConfig) -> bool {
    let name = path.file_name().map_or("", |f| f.to_str().unwrap_or(""));
    let suffix_ok = input.suffixes.iter().any(|s| name.ends_with(s.as_str()));
    let keywords_ok = input.keywords.iter().all(|k| name.contains(k.as_str()));
    suffix_ok && keywords_ok
}

/// Capture group 1 of `pattern` applied to the file name.
#[must_use]
pub fn extract_label(path: &Path, pattern: &Regex) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    pattern
        .captures(name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Discovers, reads and labels every graph file under `dir`.
///
/// Files that cannot be read or labelled are skipped with a warning.
///
/// # Errors
/// Returns error if discovery fails or the label pattern is invalid.
pub fn resolve(dir: &Path, config: &Config) -> Result<Vec<GraphFile>> {
    let pattern = config.label_regex()?;
    let paths = discover(dir, &config.input)?;

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(label) = extract_label(&path, &pattern) else {
            warn!("Skipping {}: no label matches '{}'", path.display(), pattern.as_str());
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(payload) => files.push(GraphFile::new(path.to_string_lossy(), label, payload)),
            Err(e) => warn!("Skipping {}: {e}", path.display()),
        }
    }
    Ok(files)
}

/// Dataset name used for output files: the directory's final component.
#[must_use]
pub fn dataset_name(dir: &Path) -> String {
    dir.canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .or_else(|| dir.file_name())
        .map_or_else(|| "dataset".to_string(), |n| n.to_string_lossy().into_owned())
}
