// tests/integration_pipeline.rs
//! End-to-end: raw payloads through ingestion to the statistic.

use graphdiscrim_core::discrim::DiscrimOptions;
use graphdiscrim_core::error::DiscrimError;
use graphdiscrim_core::pipeline::{build_from_records, ingest};
use graphdiscrim_core::types::{Edge, GraphFile, GraphRecord};

fn payload(weights: [f64; 3], bump: f64) -> String {
    format!(
        "1 2 {}\n2 3 {}\n3 4 {}\n",
        weights[0] + bump,
        weights[1] + bump,
        weights[2] + bump
    )
}

fn dataset() -> Vec<GraphFile> {
    let subjects = [
        ("0001", [1.0, 2.0, 3.0]),
        ("0002", [3.0, 2.0, 1.0]),
        ("0003", [2.0, 3.0, 1.0]),
    ];
    let mut files = Vec::new();
    for (sub, weights) in subjects {
        for ses in 1..=2 {
            files.push(GraphFile::new(
                format!("sub-{sub}_ses-{ses}_ds_adj.ssv"),
                sub,
                payload(weights, f64::from(ses) * 0.1),
            ));
        }
    }
    files
}

#[test]
fn test_ranked_repeats_are_perfectly_discriminable() {
    let ingestion = ingest(&dataset()).unwrap();
    assert_eq!(ingestion.tensor().shape(), (6, 4, 4));
    assert_eq!(ingestion.features().dim(), (6, 16));
    let report = ingestion
        .discriminability(true, &DiscrimOptions::default())
        .unwrap();
    assert_eq!(report.statistic, 1.0);
}

#[test]
fn test_raw_weights_statistic_in_unit_interval() {
    let ingestion = ingest(&dataset()).unwrap();
    let report = ingestion
        .discriminability(false, &DiscrimOptions::default())
        .unwrap();
    assert!((0.0..=1.0).contains(&report.statistic));
}

#[test]
fn test_records_sorted_by_source_and_labels_aligned() {
    let mut files = dataset();
    files.reverse();
    let ingestion = ingest(&files).unwrap();

    let sources: Vec<&str> = ingestion.records().iter().map(GraphRecord::source).collect();
    let mut sorted = sources.clone();
    sorted.sort_unstable();
    assert_eq!(sources, sorted);
    assert_eq!(ingestion.tensor().sources(), sources.as_slice());

    for (label, source) in ingestion.labels().iter().zip(&sources) {
        assert!(source.contains(&format!("sub-{label}_")));
    }
}

#[test]
fn test_malformed_file_is_skipped() {
    let mut files = dataset();
    files.push(GraphFile::new("sub-0009_ses-1_ds_adj.ssv", "0009", "1 2\n"));
    let ingestion = ingest(&files).unwrap();
    assert_eq!(ingestion.records().len(), 6);
    assert!(ingestion.labels().iter().all(|l| l != "0009"));
}

#[test]
fn test_all_files_malformed_is_configuration_error() {
    let files = vec![
        GraphFile::new("a.ssv", "1", "not an edge list"),
        GraphFile::new("b.ssv", "1", "1 2 x"),
    ];
    assert!(matches!(ingest(&files), Err(DiscrimError::Configuration(_))));
}

#[test]
fn test_empty_batch_is_configuration_error() {
    assert!(matches!(ingest(&[]), Err(DiscrimError::Configuration(_))));
    assert!(matches!(
        build_from_records(Vec::new()),
        Err(DiscrimError::Configuration(_))
    ));
}

#[test]
fn test_edgeless_batch_is_configuration_error() {
    let records = vec![GraphRecord::new("1", "a", Vec::new())];
    assert!(matches!(
        build_from_records(records),
        Err(DiscrimError::Configuration(_))
    ));
}

#[test]
fn test_heterogeneous_vertex_sets_share_one_ordering() {
    let records = vec![
        GraphRecord::new("1", "a", vec![Edge::new(1, 2, 1.0)]),
        GraphRecord::new("1", "b", vec![Edge::new(2, 5, 1.0), Edge::new(5, 7, 2.0)]),
    ];
    let ingestion = build_from_records(records).unwrap();
    assert_eq!(ingestion.vertices().ids(), &[1, 2, 5, 7]);
    let first = ingestion.tensor().matrix(0).unwrap();
    assert!(first.row(3).iter().all(|&w| w == 0.0));
    for m in ingestion.tensor().matrices() {
        assert_eq!(m, m.t());
    }
}

#[test]
fn test_ranked_features_leave_stored_features_untouched() {
    let ingestion = ingest(&dataset()).unwrap();
    let raw = ingestion.features().clone();
    let ranked = ingestion.ranked_features();
    assert_ne!(raw, ranked);
    assert_eq!(ingestion.features(), &raw);
    assert!(ranked.iter().all(|&v| (0.0..1.0).contains(&v)));
}

#[test]
fn test_every_label_unique_refuses_statistic() {
    let files: Vec<GraphFile> = dataset()
        .into_iter()
        .enumerate()
        .map(|(i, f)| GraphFile::new(f.source, format!("u{i}"), f.payload))
        .collect();
    let ingestion = ingest(&files).unwrap();
    assert!(matches!(
        ingestion.discriminability(true, &DiscrimOptions::default()),
        Err(DiscrimError::InsufficientData { .. })
    ));
}
