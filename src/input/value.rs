/// Outcome of reading one count cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    Parsed(f64),
    /// Missing, non-numeric or non-finite; contributes 0.
    Defaulted,
}

impl CellValue {
    pub fn value(self) -> f64 {
        match self {
            CellValue::Parsed(v) => v,
            CellValue::Defaulted => 0.0,
        }
    }

    pub fn is_defaulted(self) -> bool {
        matches!(self, CellValue::Defaulted)
    }
}

pub fn parse_cell(raw: &str) -> CellValue {
    let s = raw.trim();
    if let Ok(v) = s.parse::<i64>() {
        return CellValue::Parsed(v as f64);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => CellValue::Parsed(v),
        _ => CellValue::Defaulted,
    }
}
