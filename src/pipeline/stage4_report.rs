use std::fs;
use std::path::{Path, PathBuf};

use crate::input::LoadReport;
use crate::model::summary::MatrixSummary;
use crate::model::totals::Totals;
use crate::report::html::{HtmlReport, render_html_report};
use crate::report::json::{InputMeta, SummaryDocument, ToolMeta, render_summary_json};
use crate::report::svg::{ChartOptions, render_bar_chart};
use crate::report::{ReportError, TopN, rank_totals};

pub const TISSUE_CHART_FILE: &str = "top_tissues.svg";
pub const GENE_CHART_FILE: &str = "top_genes.svg";
pub const SUMMARY_FILE: &str = "summary.json";
pub const REPORT_FILE: &str = "report.html";

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub top_n: TopN,
    pub log_scale: bool,
}

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub input_path: &'a Path,
    pub n_tissues: usize,
    pub n_genes: usize,
    pub gene_totals: &'a Totals,
    pub tissue_totals: &'a Totals,
    pub summary: &'a MatrixSummary,
    pub load_report: &'a LoadReport,
}

/// Writes the charts, `summary.json` and `report.html` into `out_dir` and
/// returns the path of the HTML report.
pub fn write_reports(
    input: &Stage4Input<'_>,
    out_dir: &Path,
    options: &ReportOptions,
) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(out_dir).map_err(|source| ReportError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let tissue_chart = render_bar_chart(
        &rank_totals(input.tissue_totals, options.top_n),
        &ChartOptions {
            title: "Top tissues/cells by total count",
            axis_label: "Tissues/Cells",
            log_scale: options.log_scale,
        },
    );
    write_text(&out_dir.join(TISSUE_CHART_FILE), &tissue_chart)?;

    let gene_chart = render_bar_chart(
        &rank_totals(input.gene_totals, options.top_n),
        &ChartOptions {
            title: "Top genes by total count",
            axis_label: "Genes",
            log_scale: options.log_scale,
        },
    );
    write_text(&out_dir.join(GENE_CHART_FILE), &gene_chart)?;

    let input_path = input.input_path.display().to_string();
    let doc = SummaryDocument {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        },
        input: InputMeta {
            path: &input_path,
            n_tissues: input.n_tissues,
            n_genes: input.n_genes,
        },
        load: input.load_report,
        extrema: input.summary,
    };
    write_text(&out_dir.join(SUMMARY_FILE), &render_summary_json(&doc)?)?;

    let top_label = options.top_n.label();
    let html = render_html_report(&HtmlReport {
        input_path: &input_path,
        n_tissues: input.n_tissues,
        n_genes: input.n_genes,
        top_label: &top_label,
        tissue_chart: TISSUE_CHART_FILE,
        gene_chart: GENE_CHART_FILE,
    });
    let report_path = out_dir.join(REPORT_FILE);
    write_text(&report_path, &html)?;

    Ok(report_path)
}

fn write_text(path: &Path, content: &str) -> Result<(), ReportError> {
    fs::write(path, content).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
