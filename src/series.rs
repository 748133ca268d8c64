//! Shapes parsed reports into labeled series plus axis metadata.
//!
//! A [`ChartSpec`] is everything a plotting backend needs: titles, tick
//! positions and labels, whether the y axis is logarithmic, and the points of
//! every series. Drawing is left to the consumer.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::schema::{BenchmarkReport, Cell, SieveTimings, WOpTable};

const MARKERS: [&str; 6] = ["o", "s", "d", "^", "v", "x"];

/// Largest exponent accepted by [`complexity_chart`]; 10^300 still fits in `f64`.
pub const MAX_COMPLEXITY_EXP: u32 = 300;

/// Column holding the sieve limit in a write operation table.
pub const LIMIT_COLUMN: &str = "n";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub marker: String,
    pub points: Vec<(f64, f64)>,
}

/// Horizontal guide line across the whole x range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub label: String,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_log: bool,
    pub x_ticks: Vec<f64>,
    pub x_tick_labels: Vec<String>,
    pub series: Vec<Series>,
    pub reference_lines: Vec<ReferenceLine>,
}

fn marker(idx: usize) -> String {
    MARKERS[idx % MARKERS.len()].to_string()
}

fn power_label(exp: u32) -> String {
    format!("10^{exp}")
}

/// One series per section: every timing sample against its run index.
pub fn prime_gen_chart(report: &BenchmarkReport) -> ChartSpec {
    let bit_size = report
        .target_bit_size
        .map_or_else(|| "None".to_string(), |b| b.to_string());

    let series: Vec<Series> = report
        .sections
        .iter()
        .enumerate()
        .map(|(idx, s)| Series {
            label: format!("{} (cores: {})", s.algorithm, s.cores),
            marker: marker(idx),
            points: s
                .times
                .iter()
                .enumerate()
                .map(|(i, t)| ((i + 1) as f64, *t))
                .collect(),
        })
        .collect();

    let rounds = report.sections.iter().map(|s| s.times.len()).max().unwrap_or(0);
    let x_ticks: Vec<f64> = (1..=rounds).map(|r| r as f64).collect();
    let x_tick_labels = (1..=rounds).map(|r| r.to_string()).collect();

    ChartSpec {
        title: format!("Prime Generation Times (Target Bit Size: {bit_size})"),
        x_label: "Test Round".to_string(),
        y_label: "Time (seconds)".to_string(),
        y_log: false,
        x_ticks,
        x_tick_labels,
        series,
        reference_lines: Vec::new(),
    }
}

/// W(n)/n for every algorithm column, plotted over log10(n).
///
/// Rows where `n` or the count is not an integer, or `n` is zero, are left
/// out of the affected series.
pub fn wop_chart(table: &WOpTable) -> Result<ChartSpec> {
    let limits: Vec<Option<u64>> = table
        .column(LIMIT_COLUMN)
        .ok_or_else(|| ReportError::MissingColumn(LIMIT_COLUMN.to_string()))?
        .values
        .iter()
        .map(|c| c.as_int().filter(|n| *n > 0))
        .collect();

    let series = table
        .columns
        .iter()
        .filter(|c| c.name != LIMIT_COLUMN)
        .enumerate()
        .map(|(idx, column)| Series {
            label: column.name.clone(),
            marker: marker(idx),
            points: limits
                .iter()
                .zip(&column.values)
                .filter_map(|(n, w)| match (n, w) {
                    (Some(n), Cell::Int(w)) => Some(((*n as f64).log10(), *w as f64 / *n as f64)),
                    _ => None,
                })
                .collect(),
        })
        .collect();

    let valid: Vec<u64> = limits.iter().flatten().copied().collect();

    Ok(ChartSpec {
        title: "Normalized Mark-Composite Write Operations W(n)/n".to_string(),
        x_label: "limit n".to_string(),
        y_label: "Normalized Write Operations (W(n)/n)".to_string(),
        y_log: false,
        x_ticks: valid.iter().map(|n| (*n as f64).log10()).collect(),
        x_tick_labels: valid.iter().map(|n| power_label(n.ilog10())).collect(),
        series,
        reference_lines: vec![ReferenceLine {
            label: "n/n = 1".to_string(),
            y: 1.0,
        }],
    })
}

/// Execution time per element (`t * 1000 / n`) over log10 of each limit.
pub fn sieve_time_chart(timings: &SieveTimings) -> ChartSpec {
    let limits = timings.limits();
    let x_ticks: Vec<f64> = limits.iter().map(|n| (*n as f64).log10()).collect();

    let series = timings
        .series
        .iter()
        .enumerate()
        .map(|(idx, s)| Series {
            label: s.algorithm.clone(),
            marker: marker(idx),
            points: x_ticks
                .iter()
                .zip(&limits)
                .zip(&s.values)
                .map(|((x, n), t)| (*x, (*t as f64 * 1000.0) / *n as f64))
                .collect(),
        })
        .collect();

    ChartSpec {
        title: "Time-Performance Analysis:\nNormalized execution time over incrementing powers of 10 as limits"
            .to_string(),
        x_label: "N".to_string(),
        y_label: "μs/n * 1000".to_string(),
        y_log: false,
        x_ticks,
        x_tick_labels: timings.exponents().map(power_label).collect(),
        series,
        reference_lines: Vec::new(),
    }
}

/// Growth of common sieve complexity terms for n = 10^1 ..= 10^max_exp.
///
/// `max_exp` is clamped to [`MAX_COMPLEXITY_EXP`].
pub fn complexity_chart(max_exp: u32) -> ChartSpec {
    let exponents: Vec<u32> = (1..=max_exp.min(MAX_COMPLEXITY_EXP)).collect();
    let term = |label: &str, marker: &str, f: fn(f64) -> f64| Series {
        label: label.to_string(),
        marker: marker.to_string(),
        points: exponents
            .iter()
            .map(|e| (*e as f64, f(10f64.powi(*e as i32))))
            .collect(),
    };

    ChartSpec {
        title: "Complexity Functions Growth".to_string(),
        x_label: "n (powers of 10)".to_string(),
        y_label: "Value".to_string(),
        y_log: true,
        x_ticks: exponents.iter().map(|e| *e as f64).collect(),
        x_tick_labels: exponents.iter().copied().map(power_label).collect(),
        series: vec![
            term("n", "o", |n| n),
            term("n log log n", "^", |n| n * n.ln().ln()),
            term("n/log log n", "d", |n| n / n.ln().ln()),
            term("sqrt(n)", "d", f64::sqrt),
            term("log n", "d", f64::ln),
            term("log log n", "s", |n| n.ln().ln()),
        ],
        reference_lines: Vec::new(),
    }
}
