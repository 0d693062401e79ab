use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

pub mod matrix;
pub mod open;
pub mod value;

use crate::model::matrix::ExpressionMatrix;
use matrix::read_count_matrix;
use open::open_maybe_gz;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input not found: {}", .path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("cannot read {}: {source}", .path.display())]
    ResourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "malformed header in {}: expected at least 3 tab-separated fields, found {fields}",
        .path.display()
    )]
    MalformedHeader { path: PathBuf, fields: usize },

    #[error("gene {gene}: count row has {found} values but the header lists {expected} tissues")]
    RowLengthMismatch {
        gene: String,
        expected: usize,
        found: usize,
    },
}

impl InputError {
    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            InputError::ResourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            InputError::ResourceUnreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Reject count rows whose length differs from the tissue axis at load time.
    pub strict_row_length: bool,
}

/// Bookkeeping gathered while reading; never changes the loaded values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub count_rows: usize,
    pub dropped_stat_rows: usize,
    pub skipped_short_rows: usize,
    pub overwritten_genes: usize,
    pub defaulted_cells: usize,
}

#[derive(Debug, Clone)]
pub struct LoadedMatrix {
    pub path: PathBuf,
    pub matrix: ExpressionMatrix,
    pub report: LoadReport,
}

pub fn load_matrix(path: &Path, options: &LoadOptions) -> Result<LoadedMatrix, InputError> {
    tracing::info!("loading expression matrix: {}", path.display());

    let reader = open_maybe_gz(path)?;
    let (matrix, report) = read_count_matrix(reader, path, options)?;

    tracing::info!(
        n_tissues = matrix.n_tissues(),
        n_genes = matrix.n_genes(),
        dropped_stat_rows = report.dropped_stat_rows,
        skipped_short_rows = report.skipped_short_rows,
        "matrix loaded"
    );
    if matrix.data.is_empty() {
        tracing::warn!("no `count` rows found in {}", path.display());
    }
    if report.defaulted_cells > 0 {
        tracing::warn!(
            "{} count cells were missing or non-numeric and were read as 0",
            report.defaulted_cells
        );
    }
    if report.overwritten_genes > 0 {
        tracing::warn!(
            "{} genes had more than one count row; the last row was kept",
            report.overwritten_genes
        );
    }

    Ok(LoadedMatrix {
        path: path.to_path_buf(),
        matrix,
        report,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
