use thiserror::Error;

pub mod stage2_totals;
pub mod stage3_extrema;
pub mod stage4_report;

#[derive(Debug, Error, PartialEq)]
pub enum AggregateError {
    #[error("gene {gene}: {found} counts but {expected} tissues")]
    DimensionMismatch {
        gene: String,
        expected: usize,
        found: usize,
    },

    #[error("cannot resolve min/max of an empty totals mapping")]
    EmptyInput,
}
