use super::*;
use crate::model::summary::{Extremum, ExtremumSide};
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_exprsummary_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn side(name: &str, value: f64) -> ExtremumSide {
    ExtremumSide {
        names: vec![name.to_string()],
        value,
    }
}

#[test]
fn test_write_reports_creates_all_files() {
    let dir = make_temp_dir();
    let out_dir = dir.join("nested").join("web_report");

    let gene_totals: Totals = (0..15).map(|i| (format!("G{i}"), i as f64)).collect();
    let tissue_totals: Totals = vec![("T1", 3.0), ("T2", 9.0)].into_iter().collect();
    let summary = MatrixSummary {
        genes: Extremum {
            min: side("G0", 0.0),
            max: side("G14", 14.0),
        },
        tissues: Extremum {
            min: side("T1", 3.0),
            max: side("T2", 9.0),
        },
    };
    let load_report = LoadReport::default();
    let input = Stage4Input {
        input_path: Path::new("data/<odd>.tsv.gz"),
        n_tissues: 2,
        n_genes: 15,
        gene_totals: &gene_totals,
        tissue_totals: &tissue_totals,
        summary: &summary,
        load_report: &load_report,
    };
    let options = ReportOptions {
        top_n: TopN::Limit(10),
        log_scale: true,
    };

    let report_path = write_reports(&input, &out_dir, &options).unwrap();
    assert_eq!(report_path, out_dir.join(REPORT_FILE));

    let genes_svg = std::fs::read_to_string(out_dir.join(GENE_CHART_FILE)).unwrap();
    assert_eq!(genes_svg.matches("<title>").count(), 10);
    assert!(genes_svg.contains("<title>G14</title>"));
    assert!(!genes_svg.contains("<title>G0</title>"));

    let tissues_svg = std::fs::read_to_string(out_dir.join(TISSUE_CHART_FILE)).unwrap();
    assert_eq!(tissues_svg.matches("<title>").count(), 2);

    let html = std::fs::read_to_string(&report_path).unwrap();
    assert!(html.contains("data/&lt;odd&gt;.tsv.gz"));
    assert!(html.contains("Top 10 genes by total read counts"));
    assert!(html.contains("src=\"top_tissues.svg\""));
    assert!(html.contains("<strong>Number of genes:</strong> 15"));

    let json = std::fs::read_to_string(out_dir.join(SUMMARY_FILE)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["extrema"]["genes"]["max"]["names"][0], "G14");
}
