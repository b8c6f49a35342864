// src/cli/handlers.rs
//! Subcommand implementations.

use super::args::{ExportArgs, StatArgs};
use crate::config::Config;
use crate::discrim::DiscrimOptions;
use crate::error::DiscrimError;
use crate::pipeline::{self, Ingestion};
use crate::types::GraphFile;
use crate::{fileset, output, reporting};
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::warn;

/// Loads and ingests one dataset directory.
///
/// # Errors
/// Returns error if the directory cannot be resolved or yields no usable graphs.
pub fn load_dataset(dir: &Path, config: &Config) -> Result<(Vec<GraphFile>, Ingestion)> {
    let files = fileset::resolve(dir, config)
        .with_context(|| format!("Failed to resolve graph files in {}", dir.display()))?;
    if files.is_empty() {
        return Err(DiscrimError::Configuration(format!(
            "no graph files found in {}",
            dir.display()
        ))
        .into());
    }
    let ingestion = pipeline::ingest(&files)
        .with_context(|| format!("Failed to ingest {}", dir.display()))?;
    Ok((files, ingestion))
}

/// Computes and prints the statistic for every dataset.
///
/// With several datasets, one that yields no graphs is skipped with a warning.
///
/// # Errors
/// Returns error if a dataset fails for any other reason, or if nothing could be computed.
pub fn handle_stat(args: &StatArgs, config: &Config) -> Result<()> {
    let ranked = config.stats.pass_to_ranks && !args.no_ptr;
    let opts = DiscrimOptions {
        drop_singletons: config.stats.drop_singletons && !args.keep_singletons,
        ..config.discrim_options()
    };

    let mut computed = 0;
    for dir in &args.dirs {
        let name = fileset::dataset_name(dir);
        let ingestion = match load_dataset(dir, config) {
            Ok((_, ingestion)) => ingestion,
            Err(e) if args.dirs.len() > 1 && is_missing_data(&e) => {
                warn!("Graphs for {} not found. Skipping: {e:#}", dir.display());
                continue;
            }
            Err(e) => return Err(e),
        };
        let report = ingestion
            .discriminability(ranked, &opts)
            .with_context(|| format!("Discriminability undefined for {name}"))?;
        reporting::print_stat(&name, &ingestion, &report, args.detail);
        computed += 1;
    }

    if computed == 0 {
        bail!("No dataset produced a statistic");
    }
    Ok(())
}

/// Writes `<name>_X.csv`, `<name>_Y.csv` and the manifest.
///
/// # Errors
/// Returns error if loading or writing fails.
pub fn handle_export(args: &ExportArgs, config: &Config) -> Result<()> {
    let (files, ingestion) = load_dataset(&args.dir, config)?;
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| fileset::dataset_name(&args.dir));
    let out_dir = args.out.clone().unwrap_or_else(|| Path::new(".").to_path_buf());

    let ranked = config.stats.pass_to_ranks && !args.no_ptr;
    let features = if ranked {
        ingestion.ranked_features()
    } else {
        ingestion.features().clone()
    };

    let saved = output::save_batch(
        &ingestion,
        features.view(),
        &files,
        &out_dir,
        &name,
        &config.output,
    )
    .with_context(|| format!("Failed to write output to {}", out_dir.display()))?;
    reporting::print_saved(&saved);
    Ok(())
}

/// Prints the vertex set summary.
///
/// # Errors
/// Returns error if the dataset cannot be loaded.
pub fn handle_vertices(dir: &Path, config: &Config) -> Result<()> {
    let (_, ingestion) = load_dataset(dir, config)?;
    reporting::print_vertices(&fileset::dataset_name(dir), &ingestion);
    Ok(())
}

fn is_missing_data(err: &anyhow::Error) -> bool {
    err.chain().any(|e| {
        matches!(
            e.downcast_ref::<DiscrimError>(),
            Some(DiscrimError::Configuration(_))
        )
    })
}
