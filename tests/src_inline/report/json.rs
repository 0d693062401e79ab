use super::*;
use crate::model::summary::{Extremum, ExtremumSide};

fn side(names: &[&str], value: f64) -> ExtremumSide {
    ExtremumSide {
        names: names.iter().map(|s| s.to_string()).collect(),
        value,
    }
}

#[test]
fn test_summary_json_layout() {
    let summary = MatrixSummary {
        genes: Extremum {
            min: side(&["G2"], 2.0),
            max: side(&["G1"], 10.0),
        },
        tissues: Extremum {
            min: side(&["T1"], 3.0),
            max: side(&["T2"], 9.0),
        },
    };
    let load = LoadReport {
        count_rows: 2,
        dropped_stat_rows: 1,
        ..LoadReport::default()
    };
    let doc = SummaryDocument {
        tool: ToolMeta {
            name: "kira-exprsummary",
            version: "0.0.0",
        },
        input: InputMeta {
            path: "m.tsv",
            n_tissues: 2,
            n_genes: 2,
        },
        load: &load,
        extrema: &summary,
    };
    let json = render_summary_json(&doc).unwrap();
    assert!(json.ends_with('\n'));

    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["tool"]["name"], "kira-exprsummary");
    assert_eq!(v["input"]["n_tissues"], 2);
    assert_eq!(v["load"]["dropped_stat_rows"], 1);
    assert_eq!(v["extrema"]["genes"]["min"]["names"][0], "G2");
    assert_eq!(v["extrema"]["tissues"]["max"]["value"], 9.0);
}
