use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::model::totals::Totals;

pub mod html;
pub mod json;
pub mod svg;
pub mod text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// How many bars a chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopN {
    Limit(usize),
    All,
}

impl TopN {
    pub fn label(self) -> String {
        match self {
            TopN::Limit(n) => format!("Top {n}"),
            TopN::All => "All".to_string(),
        }
    }
}

impl FromStr for TopN {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(TopN::All);
        }
        match s.parse::<usize>() {
            Ok(0) => Err("top-n must be at least 1 (or \"all\")".to_string()),
            Ok(n) => Ok(TopN::Limit(n)),
            Err(_) => Err(format!("invalid top-n value: {s} (use a number or \"all\")")),
        }
    }
}

/// Entries sorted by value, largest first; ties keep the totals' order.
pub fn rank_totals(totals: &Totals, top_n: TopN) -> Vec<(String, f64)> {
    let mut items = totals
        .iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect::<Vec<_>>();
    items.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    if let TopN::Limit(n) = top_n {
        items.truncate(n);
    }
    items
}

/// Integer part with a space as thousands separator: `1234567.8` -> `1 234 567`.
/// Values outside the `i64` range fall back to scientific notation.
pub fn format_count(v: f64) -> String {
    if !(v.abs() < 9.0e18) {
        return format!("{:e}", v.trunc());
    }
    let int = v.trunc() as i64;
    let digits = int.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if int < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Whole numbers print without a fractional part; everything else as-is.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

pub fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
