// tests/unit_discrim.rs
use graphdiscrim_core::discrim::{
    discriminability, discriminability_detailed, pairwise_euclidean, DiscrimOptions,
};
use graphdiscrim_core::error::DiscrimError;
use ndarray::{array, Array2};

const EPS: f64 = 1e-12;

fn labels(ls: &[&str]) -> Vec<String> {
    ls.iter().map(|s| (*s).to_string()).collect()
}

fn precomputed() -> DiscrimOptions {
    DiscrimOptions {
        precomputed: true,
        ..DiscrimOptions::default()
    }
}

#[test]
fn test_two_entities_two_sessions_is_perfect() {
    let x = array![[0.0, 0.0], [0.0, 1.0], [10.0, 0.0], [10.0, 1.0]];
    let y = labels(&["A", "A", "B", "B"]);
    let stat = discriminability(x.view(), &y, &DiscrimOptions::default()).unwrap();
    assert_eq!(stat, 1.0);
}

#[test]
fn test_identical_repeats_give_exactly_one() {
    let x = array![
        [1.0, 2.0, 3.0],
        [1.0, 2.0, 3.0],
        [4.0, 0.0, 1.0],
        [4.0, 0.0, 1.0],
        [9.0, 9.0, 9.0],
        [9.0, 9.0, 9.0],
    ];
    let y = labels(&["s1", "s1", "s2", "s2", "s3", "s3"]);
    let stat = discriminability(x.view(), &y, &DiscrimOptions::default()).unwrap();
    assert_eq!(stat, 1.0);
}

#[test]
fn test_all_unique_labels_refuse() {
    let x = array![[0.0], [1.0], [2.0]];
    let y = labels(&["a", "b", "c"]);
    let err = discriminability(x.view(), &y, &DiscrimOptions::default()).unwrap_err();
    match err {
        DiscrimError::InsufficientData { dropped, .. } => {
            assert_eq!(dropped, labels(&["a", "b", "c"]));
        }
        other => panic!("expected InsufficientData, got {other:?}"),
    }
}

#[test]
fn test_all_unique_labels_refuse_without_dropping() {
    let x = array![[0.0], [1.0]];
    let y = labels(&["a", "b"]);
    let opts = DiscrimOptions {
        drop_singletons: false,
        ..DiscrimOptions::default()
    };
    assert!(matches!(
        discriminability(x.view(), &y, &opts),
        Err(DiscrimError::InsufficientData { .. })
    ));
}

#[test]
fn test_single_label_has_no_between_comparison() {
    let x = array![[0.0], [1.0], [2.0]];
    let y = labels(&["a", "a", "a"]);
    assert!(matches!(
        discriminability(x.view(), &y, &DiscrimOptions::default()),
        Err(DiscrimError::InsufficientData { .. })
    ));
}

#[test]
fn test_length_mismatch_is_validation_error() {
    let x = array![[0.0], [1.0], [2.0]];
    let y = labels(&["a", "a"]);
    assert!(matches!(
        discriminability(x.view(), &y, &DiscrimOptions::default()),
        Err(DiscrimError::Validation(_))
    ));
}

#[test]
fn test_non_square_precomputed_is_validation_error() {
    let d = Array2::<f64>::zeros((4, 3));
    let y = labels(&["a", "a", "b", "b"]);
    assert!(matches!(
        discriminability(d.view(), &y, &precomputed()),
        Err(DiscrimError::Validation(_))
    ));
}

#[test]
fn test_non_finite_input_is_validation_error() {
    let x = array![[0.0], [f64::NAN], [1.0], [2.0]];
    let y = labels(&["a", "a", "b", "b"]);
    assert!(matches!(
        discriminability(x.view(), &y, &DiscrimOptions::default()),
        Err(DiscrimError::Validation(_))
    ));
}

#[test]
fn test_ties_count_half() {
    let d = array![
        [0.0, 1.0, 1.0, 2.0],
        [1.0, 0.0, 0.5, 3.0],
        [1.0, 0.5, 0.0, 1.0],
        [2.0, 3.0, 1.0, 0.0],
    ];
    let y = labels(&["A", "A", "B", "B"]);
    let report = discriminability_detailed(d.view(), &y, &precomputed()).unwrap();
    assert_eq!(report.rdf.rows(), &[vec![0.75], vec![0.5], vec![0.25], vec![1.0]]);
    assert!((report.statistic - 0.625).abs() < EPS);
}

#[test]
fn test_precomputed_matches_feature_path() {
    let x = array![[0.0, 0.0], [0.5, 2.0], [3.0, 1.0], [2.5, 0.0], [1.0, 1.0], [4.0, 4.0]];
    let y = labels(&["A", "A", "B", "B", "C", "C"]);
    let from_features = discriminability(x.view(), &y, &DiscrimOptions::default()).unwrap();
    let d = pairwise_euclidean(x.view());
    let from_distances = discriminability(d.view(), &y, &precomputed()).unwrap();
    assert!((from_features - from_distances).abs() < EPS);
    assert!((0.0..=1.0).contains(&from_features));
}

#[test]
fn test_singletons_dropped_by_default() {
    let x = array![[0.0], [0.1], [5.0], [5.2], [2.0]];
    let y = labels(&["A", "A", "B", "B", "C"]);
    let report = discriminability_detailed(x.view(), &y, &DiscrimOptions::default()).unwrap();
    assert_eq!(report.dropped_labels, labels(&["C"]));
    assert_eq!(report.retained, vec![0, 1, 2, 3]);
    assert_eq!(report.statistic, 1.0);
}

#[test]
fn test_precomputed_drops_singleton_rows_and_columns() {
    let d = array![
        [0.0, 1.0, 4.0, 2.0, 0.5],
        [1.0, 0.0, 3.0, 5.0, 0.5],
        [4.0, 3.0, 0.0, 1.5, 0.5],
        [2.0, 5.0, 1.5, 0.0, 0.5],
        [0.5, 0.5, 0.5, 0.5, 0.0],
    ];
    let y = labels(&["A", "A", "B", "B", "C"]);
    let full = discriminability_detailed(d.view(), &y, &precomputed()).unwrap();
    assert_eq!(full.retained, vec![0, 1, 2, 3]);
    assert_eq!(full.dropped_labels, labels(&["C"]));

    let sub = array![
        [0.0, 1.0, 4.0, 2.0],
        [1.0, 0.0, 3.0, 5.0],
        [4.0, 3.0, 0.0, 1.5],
        [2.0, 5.0, 1.5, 0.0],
    ];
    let reduced =
        discriminability_detailed(sub.view(), &labels(&["A", "A", "B", "B"]), &precomputed())
            .unwrap();
    assert_eq!(full.rdf, reduced.rdf);
    assert!((full.statistic - reduced.statistic).abs() < EPS);
    assert_eq!(full.statistic, 1.0);
}

#[test]
fn test_singletons_kept_when_requested() {
    let x = array![[0.0], [0.1], [5.0], [5.2], [2.0]];
    let y = labels(&["A", "A", "B", "B", "C"]);
    let opts = DiscrimOptions {
        drop_singletons: false,
        ..DiscrimOptions::default()
    };
    let report = discriminability_detailed(x.view(), &y, &opts).unwrap();
    assert!(report.dropped_labels.is_empty());
    assert_eq!(report.retained.len(), 5);
    assert!(report.rdf.rows()[4].is_empty());
    assert_eq!(report.rdf.entry_count(), 4);
}

#[test]
fn test_padded_table_uses_nan() {
    let x = array![[0.0], [0.1], [0.2], [9.0], [9.1]];
    let y = labels(&["A", "A", "A", "B", "B"]);
    let report = discriminability_detailed(x.view(), &y, &DiscrimOptions::default()).unwrap();
    let padded = report.rdf.padded();
    assert_eq!(padded.dim(), (5, 2));
    assert!(padded[[3, 1]].is_nan());
    assert!(padded[[4, 1]].is_nan());
    assert!(!padded[[0, 1]].is_nan());
    assert_eq!(report.rdf.entry_count(), 8);
}

#[test]
fn test_pairwise_euclidean_symmetric_zero_diagonal() {
    let x = array![[0.0, 0.0], [3.0, 4.0], [1.0, 1.0]];
    let d = pairwise_euclidean(x.view());
    assert_eq!(d[[0, 1]], 5.0);
    for i in 0..3 {
        assert_eq!(d[[i, i]], 0.0);
        for j in 0..3 {
            assert_eq!(d[[i, j]], d[[j, i]]);
        }
    }
}

#[test]
fn test_deterministic_and_input_untouched() {
    let x = array![[0.0, 1.0], [0.3, 0.9], [2.0, 2.0], [1.0, 2.5], [0.5, 0.5], [2.2, 1.9]];
    let before = x.clone();
    let y = labels(&["A", "A", "B", "B", "A", "B"]);
    let first = discriminability_detailed(x.view(), &y, &DiscrimOptions::default()).unwrap();
    let second = discriminability_detailed(x.view(), &y, &DiscrimOptions::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(x, before);
}
