use serde::Serialize;

pub const DEFAULT_CAP: usize = 10;
pub const DEFAULT_REL_TOL: f64 = 1e-9;
pub const DEFAULT_ABS_TOL: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremumParams {
    /// Maximum number of tied names kept per side.
    pub cap: usize,
    pub rel_tol: f64,
    pub abs_tol: f64,
}

impl Default for ExtremumParams {
    fn default() -> Self {
        Self {
            cap: DEFAULT_CAP,
            rel_tol: DEFAULT_REL_TOL,
            abs_tol: DEFAULT_ABS_TOL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtremumSide {
    pub names: Vec<String>,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremum {
    pub min: ExtremumSide,
    pub max: ExtremumSide,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixSummary {
    pub genes: Extremum,
    pub tissues: Extremum,
}
