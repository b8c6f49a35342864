// src/reporting.rs
//! Console output for CLI results.

use crate::discrim::DiscrimReport;
use crate::pipeline::Ingestion;
use colored::Colorize;
use std::path::Path;

/// Prints the statistic for one dataset, with per-sample detail if requested.
pub fn print_stat(name: &str, ingestion: &Ingestion, report: &DiscrimReport, detail: bool) {
    println!(
        "{} {} {}",
        name.bold(),
        "discriminability:".cyan(),
        format!("{:.6}", report.statistic).green().bold()
    );
    println!(
        "   {} {} graph(s), {} vertices, {} sample(s) used",
        "=".blue(),
        ingestion.records().len(),
        ingestion.vertices().len(),
        report.retained.len()
    );

    if !report.dropped_labels.is_empty() {
        println!(
            "   {} dropped singleton label(s): {}",
            "=".blue(),
            report.dropped_labels.join(", ").yellow()
        );
    }

    if detail {
        print_detail(ingestion, report);
    }
    println!();
}

fn print_detail(ingestion: &Ingestion, report: &DiscrimReport) {
    let records = ingestion.records();
    for (&row, mean) in report.retained.iter().zip(report.rdf.row_means()) {
        let Some(record) = records.get(row) else {
            continue;
        };
        let value = mean.map_or_else(|| "n/a".dimmed().to_string(), |m| format!("{m:.4}"));
        println!(
            "   {} [{}] {} {}",
            "|".blue(),
            record.label().yellow(),
            value,
            short_name(record.source()).dimmed()
        );
    }
}

/// Prints the canonical vertex count and the isolates of each graph.
pub fn print_vertices(name: &str, ingestion: &Ingestion) {
    let vertices = ingestion.vertices();
    println!(
        "{} {} vertices (ids {}..={})",
        name.bold(),
        vertices.len(),
        vertices.ids().first().copied().unwrap_or(0),
        vertices.ids().last().copied().unwrap_or(0)
    );
    for record in ingestion.records() {
        let isolated = crate::align::isolates(record, vertices);
        let status = if isolated.is_empty() {
            "no isolates".green().to_string()
        } else {
            format!("{} isolate(s)", isolated.len()).yellow().to_string()
        };
        println!(
            "   {} {} {}",
            "|".blue(),
            short_name(record.source()),
            status
        );
    }
}

pub fn print_saved(paths: &crate::output::SavedPaths) {
    println!("{} {}", "wrote".green().bold(), paths.x.display());
    println!("{} {}", "wrote".green().bold(), paths.y.display());
    if let Some(m) = &paths.manifest {
        println!("{} {}", "wrote".green().bold(), m.display());
    }
}

fn short_name(source: &str) -> String {
    Path::new(source)
        .file_name()
        .map_or_else(|| source.to_string(), |n| n.to_string_lossy().into_owned())
}
