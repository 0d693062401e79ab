pub mod matrix;
pub mod summary;
pub mod totals;
