use crate::model::matrix::{ExpressionMatrix, GeneCounts};
use crate::model::totals::Totals;
use crate::pipeline::AggregateError;

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub gene_totals: Totals,
    pub tissue_totals: Totals,
}

pub fn run_stage2(matrix: &ExpressionMatrix) -> Result<Stage2Output, AggregateError> {
    let tissue_totals = tissue_totals(&matrix.tissues, &matrix.data)?;
    let gene_totals = gene_totals(&matrix.data);
    tracing::debug!(
        n_gene_totals = gene_totals.len(),
        n_tissue_totals = tissue_totals.len(),
        "totals computed"
    );
    Ok(Stage2Output {
        gene_totals,
        tissue_totals,
    })
}

/// Sum of each gene's counts across all tissues, in gene order.
pub fn gene_totals(data: &GeneCounts) -> Totals {
    let mut out = Totals::with_capacity(data.len());
    for (gene, counts) in data.iter() {
        out.add(gene, counts.iter().sum());
    }
    out
}

/// Sum of each tissue's counts across all genes.
///
/// Repeated tissue names share one bucket. Aborts on the first gene whose row
/// length differs from `tissues.len()`.
pub fn tissue_totals(tissues: &[String], data: &GeneCounts) -> Result<Totals, AggregateError> {
    let mut out = Totals::with_capacity(tissues.len());
    for tissue in tissues {
        out.add(tissue, 0.0);
    }
    for (gene, counts) in data.iter() {
        if counts.len() != tissues.len() {
            return Err(AggregateError::DimensionMismatch {
                gene: gene.to_string(),
                expected: tissues.len(),
                found: counts.len(),
            });
        }
        for (tissue, &value) in tissues.iter().zip(counts) {
            out.add(tissue, value);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_totals.rs"]
mod tests;
