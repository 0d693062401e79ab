use thiserror::Error;

use crate::input::InputError;
use crate::pipeline::AggregateError;
use crate::report::ReportError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--cap must be at least 1")]
    ZeroCap,

    #[error("invalid --top-n: {0}")]
    TopN(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
