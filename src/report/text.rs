use crate::model::summary::{Extremum, MatrixSummary};
use crate::report::format_value;

pub fn render_input_section(path: &str, n_tissues: usize, n_genes: usize) -> String {
    let mut out = String::new();
    out.push_str("Expression matrix - summary report\n");
    out.push_str("==================================\n\n");
    out.push_str("Input data\n");
    out.push_str(&format!("File: {}\n", path));
    out.push_str(&format!("Number of tissues/cells: {}\n", n_tissues));
    out.push_str(&format!("Number of genes: {}\n", n_genes));
    out
}

pub fn render_extrema_section(summary: &MatrixSummary) -> String {
    let mut out = String::new();
    out.push_str("\nGene-level total counts\n");
    push_extremum(&mut out, &summary.genes, "Gene(s)");
    out.push_str("\nTissue / cell-level total counts\n");
    push_extremum(&mut out, &summary.tissues, "Tissue(s)");
    out
}

fn push_extremum(out: &mut String, ext: &Extremum, noun: &str) {
    out.push_str(&format!("Min total counts: {}\n", format_value(ext.min.value)));
    out.push_str(&format!("{}: {}\n", noun, ext.min.names.join(", ")));
    out.push_str(&format!("Max total counts: {}\n", format_value(ext.max.value)));
    out.push_str(&format!("{}: {}\n", noun, ext.max.names.join(", ")));
}
