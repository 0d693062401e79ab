use crate::model::matrix::ExpressionMatrix;
use crate::model::summary::{Extremum, ExtremumParams, ExtremumSide, MatrixSummary};
use crate::model::totals::Totals;
use crate::pipeline::AggregateError;
use crate::pipeline::stage2_totals::{Stage2Output, run_stage2};

/// `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`
pub fn is_close(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= (rel_tol * a.abs().max(b.abs())).max(abs_tol)
}

/// Min and max of `totals` with the keys tied to each, in iteration order.
///
/// At most `params.cap` keys are collected per side; the reported values are
/// always the true extrema.
pub fn min_max(totals: &Totals, params: &ExtremumParams) -> Result<Extremum, AggregateError> {
    if totals.is_empty() {
        return Err(AggregateError::EmptyInput);
    }
    let (min_value, max_value) = totals
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, v)| {
            (lo.min(v), hi.max(v))
        });

    let mut min_names = Vec::new();
    let mut max_names = Vec::new();
    for (key, value) in totals.iter() {
        if min_names.len() >= params.cap && max_names.len() >= params.cap {
            break;
        }
        if min_names.len() < params.cap
            && is_close(value, min_value, params.rel_tol, params.abs_tol)
        {
            min_names.push(key.to_string());
        }
        if max_names.len() < params.cap
            && is_close(value, max_value, params.rel_tol, params.abs_tol)
        {
            max_names.push(key.to_string());
        }
    }

    Ok(Extremum {
        min: ExtremumSide {
            names: min_names,
            value: min_value,
        },
        max: ExtremumSide {
            names: max_names,
            value: max_value,
        },
    })
}

pub fn summarize_totals(
    gene_totals: &Totals,
    tissue_totals: &Totals,
    params: &ExtremumParams,
) -> Result<MatrixSummary, AggregateError> {
    Ok(MatrixSummary {
        genes: min_max(gene_totals, params)?,
        tissues: min_max(tissue_totals, params)?,
    })
}

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub totals: Stage2Output,
    pub extrema: MatrixSummary,
}

/// Both totals mappings plus the min/max summary of each axis.
pub fn summarize(
    matrix: &ExpressionMatrix,
    params: &ExtremumParams,
) -> Result<Stage3Output, AggregateError> {
    let totals = run_stage2(matrix)?;
    let extrema = summarize_totals(&totals.gene_totals, &totals.tissue_totals, params)?;
    Ok(Stage3Output { totals, extrema })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_extrema.rs"]
mod tests;
