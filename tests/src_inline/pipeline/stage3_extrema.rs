use super::*;
use crate::model::matrix::GeneCounts;

fn totals(entries: &[(&str, f64)]) -> Totals {
    entries.iter().map(|&(k, v)| (k, v)).collect()
}

#[test]
fn test_is_close() {
    assert!(is_close(1.0, 1.0 + 1e-10, 1e-9, 1e-12));
    assert!(!is_close(1.0, 1.0 + 1e-6, 1e-9, 1e-12));
    assert!(is_close(0.0, 1e-13, 1e-9, 1e-12));
    assert!(!is_close(0.0, 1e-11, 1e-9, 1e-12));
}

#[test]
fn test_min_max_tolerant_ties() {
    let t = totals(&[("a", 1.0), ("b", 1.0 + 1e-10), ("c", 5.0)]);
    let ext = min_max(&t, &ExtremumParams::default()).unwrap();
    assert_eq!(ext.min.names, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(ext.min.value, 1.0);
    assert_eq!(ext.max.names, vec!["c".to_string()]);
    assert_eq!(ext.max.value, 5.0);
}

#[test]
fn test_min_max_exact_ties_from_summation() {
    let t = totals(&[
        ("tissue1", 1218.2),
        ("tissue2", 115.2),
        ("tissue3", 7.1 + 2.0 + 5.0),
        ("tissue4", 5.0 + 4.5 + 4.6),
    ]);
    let ext = min_max(&t, &ExtremumParams::default()).unwrap();
    assert_eq!(
        ext.min.names,
        vec!["tissue3".to_string(), "tissue4".to_string()]
    );
    assert_eq!(ext.max.names, vec!["tissue1".to_string()]);
}

#[test]
fn test_min_max_cap() {
    let mut entries = Vec::new();
    for i in 0..15 {
        entries.push((format!("g{i:02}"), 0.0));
    }
    entries.push(("top".to_string(), 3.0));
    let t: Totals = entries.into_iter().collect();

    let ext = min_max(&t, &ExtremumParams::default()).unwrap();
    assert_eq!(ext.min.names.len(), 10);
    assert_eq!(ext.min.names[0], "g00");
    assert_eq!(ext.min.names[9], "g09");
    assert_eq!(ext.max.names, vec!["top".to_string()]);

    let small = ExtremumParams {
        cap: 3,
        ..ExtremumParams::default()
    };
    assert_eq!(min_max(&t, &small).unwrap().min.names.len(), 3);
}

#[test]
fn test_min_max_single_entry() {
    let t = totals(&[("only", 4.0)]);
    let ext = min_max(&t, &ExtremumParams::default()).unwrap();
    assert_eq!(ext.min.names, vec!["only".to_string()]);
    assert_eq!(ext.max.names, vec!["only".to_string()]);
}

#[test]
fn test_min_max_empty() {
    let t = Totals::new();
    assert_eq!(
        min_max(&t, &ExtremumParams::default()).unwrap_err(),
        AggregateError::EmptyInput
    );
}

#[test]
fn test_summarize_scenario() {
    let data: GeneCounts = vec![
        ("G1".to_string(), vec![3.0, 7.0]),
        ("G2".to_string(), vec![0.0, 2.0]),
    ]
    .into_iter()
    .collect();
    let matrix = ExpressionMatrix::new(vec!["T1".to_string(), "T2".to_string()], data);

    let out = summarize(&matrix, &ExtremumParams::default()).unwrap();
    assert_eq!(out.totals.gene_totals.get("G1"), Some(10.0));
    assert_eq!(out.totals.tissue_totals.get("T2"), Some(9.0));

    let summary = out.extrema;
    assert_eq!(summary.genes.min.names, vec!["G2".to_string()]);
    assert_eq!(summary.genes.min.value, 2.0);
    assert_eq!(summary.genes.max.names, vec!["G1".to_string()]);
    assert_eq!(summary.genes.max.value, 10.0);
    assert_eq!(summary.tissues.min.names, vec!["T1".to_string()]);
    assert_eq!(summary.tissues.max.names, vec!["T2".to_string()]);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["genes"]["min"]["names"][0], "G2");
    assert_eq!(json["tissues"]["max"]["value"], 9.0);
}

#[test]
fn test_summarize_propagates_dimension_mismatch() {
    let data: GeneCounts = vec![("G1".to_string(), vec![1.0])].into_iter().collect();
    let matrix = ExpressionMatrix::new(vec!["T1".to_string(), "T2".to_string()], data);
    assert!(matches!(
        summarize(&matrix, &ExtremumParams::default()),
        Err(AggregateError::DimensionMismatch { .. })
    ));
}
