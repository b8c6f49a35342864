// tests/unit_align.rs
use graphdiscrim_core::align::{align, isolates};
use graphdiscrim_core::types::{Edge, GraphRecord};

fn record(source: &str, edges: &[(u64, u64, f64)]) -> GraphRecord {
    GraphRecord::new(
        "s",
        source,
        edges.iter().map(|&(u, v, w)| Edge::new(u, v, w)).collect(),
    )
}

#[test]
fn test_union_is_sorted_and_deduplicated() {
    let records = vec![
        record("a", &[(5, 3, 1.0), (3, 1, 1.0)]),
        record("b", &[(2, 5, 1.0), (9, 9, 1.0)]),
    ];
    let vs = align(&records);
    assert_eq!(vs.ids(), &[1, 2, 3, 5, 9]);
    assert!(vs.ids().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_independent_of_record_order() {
    let a = record("a", &[(4, 1, 1.0)]);
    let b = record("b", &[(2, 7, 1.0), (3, 4, 2.0)]);
    let forward = align(&[a.clone(), b.clone()]);
    let backward = align(&[b, a]);
    assert_eq!(forward, backward);
}

#[test]
fn test_size_covers_max_id_for_contiguous_numbering() {
    let records = vec![
        record("a", &[(1, 2, 1.0), (2, 3, 1.0)]),
        record("b", &[(3, 4, 1.0), (4, 1, 1.0)]),
    ];
    let vs = align(&records);
    let max_id = records
        .iter()
        .flat_map(GraphRecord::endpoints)
        .max()
        .unwrap();
    assert!(vs.len() as u64 >= max_id);
}

#[test]
fn test_empty_input_yields_empty_set() {
    assert!(align(&[]).is_empty());
    assert!(align(&[record("a", &[])]).is_empty());
}

#[test]
fn test_index_of() {
    let vs = align(&[record("a", &[(10, 20, 1.0), (30, 10, 1.0)])]);
    assert_eq!(vs.index_of(10), Some(0));
    assert_eq!(vs.index_of(30), Some(2));
    assert_eq!(vs.index_of(15), None);
    assert!(vs.contains(20));
}

#[test]
fn test_isolates_per_record() {
    let a = record("a", &[(1, 2, 1.0)]);
    let b = record("b", &[(2, 3, 1.0), (3, 4, 1.0)]);
    let vs = align(&[a.clone(), b.clone()]);
    assert_eq!(isolates(&a, &vs), vec![3, 4]);
    assert_eq!(isolates(&b, &vs), vec![1]);
}
