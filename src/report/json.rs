use serde::Serialize;

use crate::input::LoadReport;
use crate::model::summary::MatrixSummary;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryDocument<'a> {
    pub tool: ToolMeta<'a>,
    pub input: InputMeta<'a>,
    pub load: &'a LoadReport,
    pub extrema: &'a MatrixSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta<'a> {
    pub name: &'a str,
    pub version: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta<'a> {
    pub path: &'a str,
    pub n_tissues: usize,
    pub n_genes: usize,
}

pub fn render_summary_json(doc: &SummaryDocument<'_>) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(doc)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
