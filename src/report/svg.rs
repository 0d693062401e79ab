use std::fmt::Write;

use crate::report::{escape_markup, format_count};

const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const MARGIN_LEFT: f64 = 100.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 70.0;
const MARGIN_BOTTOM: f64 = 150.0;
const PLOT_HEIGHT: f64 = 320.0;
const SLOT_WIDTH: f64 = 64.0;
const MIN_PLOT_WIDTH: f64 = 480.0;
const BAR_FRACTION: f64 = 0.7;
const MAX_LINEAR_TICKS: u32 = 10;

#[derive(Debug, Clone)]
pub struct ChartOptions<'a> {
    pub title: &'a str,
    pub axis_label: &'a str,
    pub log_scale: bool,
}

/// Standalone SVG bar chart of already-ranked entries, one bar per entry.
///
/// With `log_scale` bar heights follow `log10(1 + v)`, so zero totals stay
/// drawable. Overflowed totals are drawn at `f64::MAX`.
pub fn render_bar_chart(ranked: &[(String, f64)], options: &ChartOptions<'_>) -> String {
    let n = ranked.len();
    let plot_width = (n as f64 * SLOT_WIDTH).max(MIN_PLOT_WIDTH);
    let width = MARGIN_LEFT + plot_width + MARGIN_RIGHT;
    let height = MARGIN_TOP + PLOT_HEIGHT + MARGIN_BOTTOM;
    let base_y = MARGIN_TOP + PLOT_HEIGHT;

    let scale = |v: f64| {
        let v = drawable(v);
        if options.log_scale { (1.0 + v).log10() } else { v }
    };
    let max_raw = ranked.iter().map(|(_, v)| drawable(*v)).fold(0.0, f64::max);
    let top = scale(max_raw);
    let y_of = |v: f64| {
        if top > 0.0 {
            base_y - scale(v) / top * PLOT_HEIGHT
        } else {
            base_y
        }
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="Arial, sans-serif">"#
    );
    let _ = writeln!(
        out,
        r#"<rect x="0" y="0" width="{width}" height="{height}" fill="white"/>"#
    );
    let _ = writeln!(
        out,
        r#"<text x="{:.1}" y="36" text-anchor="middle" font-size="16" font-weight="bold">{}</text>"#,
        width / 2.0,
        escape_markup(options.title)
    );

    for tick in ticks(max_raw, options.log_scale) {
        let y = y_of(tick);
        let _ = writeln!(
            out,
            "<line x1=\"{MARGIN_LEFT}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"#e0e0e0\" stroke-width=\"1\"/>",
            MARGIN_LEFT + plot_width
        );
        let _ = writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="10">{}</text>"#,
            MARGIN_LEFT - 8.0,
            y + 3.5,
            tick_label(tick)
        );
    }

    if n == 0 {
        let _ = writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\" fill=\"#7f7f7f\">no data</text>",
            MARGIN_LEFT + plot_width / 2.0,
            MARGIN_TOP + PLOT_HEIGHT / 2.0
        );
    }

    let slot = if n > 0 { plot_width / n as f64 } else { plot_width };
    let bar_width = slot * BAR_FRACTION;
    for (i, (name, value)) in ranked.iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_width) / 2.0;
        let center = x + bar_width / 2.0;
        let y = y_of(*value);
        let _ = writeln!(
            out,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{:.1}" fill="{}"><title>{}</title></rect>"#,
            base_y - y,
            PALETTE[i % PALETTE.len()],
            escape_markup(name)
        );
        let _ = writeln!(
            out,
            r#"<text x="{center:.1}" y="{:.1}" text-anchor="middle" font-size="9" font-weight="bold">{}</text>"#,
            y - 4.0,
            format_count(drawable(*value))
        );
        let label_y = base_y + 14.0;
        let _ = writeln!(
            out,
            r#"<text x="{center:.1}" y="{label_y:.1}" text-anchor="end" font-size="10" transform="rotate(-45 {center:.1} {label_y:.1})">{}</text>"#,
            escape_markup(name)
        );
    }

    let _ = writeln!(
        out,
        "<line x1=\"{MARGIN_LEFT}\" y1=\"{MARGIN_TOP}\" x2=\"{MARGIN_LEFT}\" y2=\"{base_y}\" stroke=\"black\" stroke-width=\"1.2\"/>"
    );
    let _ = writeln!(
        out,
        "<line x1=\"{MARGIN_LEFT}\" y1=\"{base_y}\" x2=\"{:.1}\" y2=\"{base_y}\" stroke=\"black\" stroke-width=\"1.2\"/>",
        MARGIN_LEFT + plot_width
    );

    let y_label = if options.log_scale {
        "Total counts (log scale)"
    } else {
        "Total counts"
    };
    let mid_y = MARGIN_TOP + PLOT_HEIGHT / 2.0;
    let _ = writeln!(
        out,
        r#"<text x="28" y="{mid_y:.1}" text-anchor="middle" font-size="12" font-weight="bold" transform="rotate(-90 28 {mid_y:.1})">{y_label}</text>"#
    );
    let _ = writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" font-weight="bold">{}</text>"#,
        MARGIN_LEFT + plot_width / 2.0,
        height - 16.0,
        escape_markup(options.axis_label)
    );
    out.push_str("</svg>\n");
    out
}

/// Clamps to `[0, f64::MAX]`; NaN maps to 0.
fn drawable(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, f64::MAX) }
}

fn ticks(max_value: f64, log_scale: bool) -> Vec<f64> {
    if !max_value.is_finite() || max_value <= 0.0 {
        return vec![0.0];
    }
    if log_scale {
        let mut out = vec![0.0];
        let mut p = 1.0f64;
        while p.is_finite() && p <= max_value {
            out.push(p);
            p *= 10.0;
        }
        return out;
    }
    let step = nice_step(max_value / 4.0);
    let mut out = Vec::new();
    for i in 0..=MAX_LINEAR_TICKS {
        let v = i as f64 * step;
        if !v.is_finite() || v > max_value * (1.0 + 1e-9) {
            break;
        }
        out.push(v);
    }
    out
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let norm = raw / magnitude;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn tick_label(v: f64) -> String {
    if v.fract() == 0.0 {
        format_count(v)
    } else {
        format!("{v:.2}")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/svg.rs"]
mod tests;
