// src/config/io.rs
use super::types::{Config, GraphDiscrimToml};
use crate::error::{DiscrimError, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

pub const CONFIG_FILE: &str = "graphdiscrim.toml";

/// Loads `graphdiscrim.toml` from `dir` if it exists. A malformed file is
/// reported and ignored.
pub fn load_toml_config(config: &mut Config, dir: &Path) {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return;
    }
    match fs::read_to_string(&path) {
        Ok(content) => parse_toml(config, &content),
        Err(e) => warn!("Cannot read {}: {e}", path.display()),
    }
}

pub fn parse_toml(config: &mut Config, content: &str) {
    match toml::from_str::<GraphDiscrimToml>(content) {
        Ok(parsed) => {
            config.input = parsed.input;
            config.stats = parsed.stats;
            config.output = parsed.output;
        }
        Err(e) => warn!("Ignoring malformed {CONFIG_FILE}: {e}"),
    }
}

/// Writes the current settings to `dir/graphdiscrim.toml`.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn save_to_file(config: &Config, dir: &Path) -> Result<()> {
    let doc = GraphDiscrimToml {
        input: config.input.clone(),
        stats: config.stats,
        output: config.output.clone(),
    };
    let content = toml::to_string_pretty(&doc)
        .map_err(|e| DiscrimError::Configuration(format!("cannot serialize config: {e}")))?;
    let path = dir.join(CONFIG_FILE);
    fs::write(&path, content).map_err(|e| DiscrimError::io(e, path))?;
    Ok(())
}
