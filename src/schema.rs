use serde::{Deserialize, Serialize};

use crate::ReportKind;

/// One delimited block of a prime generation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub algorithm: String,
    pub cores: u32,
    /// Wall-clock samples in run order, seconds.
    pub times: Vec<f64>,
    /// Mean as reported by the producer; never recomputed from `times`.
    pub average_time: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub target_bit_size: Option<u32>,
    pub sections: Vec<Section>,
}

/// A single table cell: integer when the field is all ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(u64),
    Text(String),
}

impl Cell {
    pub fn as_int(&self) -> Option<u64> {
        match self {
            Cell::Int(v) => Some(*v),
            Cell::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Cell>,
}

/// Column-oriented pipe table, columns kept in header order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WOpTable {
    pub columns: Vec<Column>,
}

impl WOpTable {
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of accepted data rows (equal for every column).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSeries {
    pub algorithm: String,
    pub values: Vec<u64>,
}

/// Sieve execution times over limits `base^min_exp ..= base^max_exp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SieveTimings {
    pub base: u64,
    pub min_exp: u32,
    pub max_exp: u32,
    pub series: Vec<TimingSeries>,
}

impl SieveTimings {
    pub fn exponents(&self) -> impl Iterator<Item = u32> {
        self.min_exp..=self.max_exp
    }

    /// Sieve limits for each exponent; saturates instead of overflowing.
    pub fn limits(&self) -> Vec<u64> {
        self.exponents()
            .map(|e| self.base.checked_pow(e).unwrap_or(u64::MAX))
            .collect()
    }
}

/// Parsed payload of any supported report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParsedReport {
    PrimeGen(BenchmarkReport),
    WriteOps(WOpTable),
    SieveTimes(SieveTimings),
}

impl ParsedReport {
    pub fn kind(&self) -> ReportKind {
        match self {
            ParsedReport::PrimeGen(_) => ReportKind::PrimeGen,
            ParsedReport::WriteOps(_) => ReportKind::WriteOps,
            ParsedReport::SieveTimes(_) => ReportKind::SieveTimes,
        }
    }

    /// Usable record count: sections, rows, or series.
    pub fn record_count(&self) -> usize {
        match self {
            ParsedReport::PrimeGen(r) => r.sections.len(),
            ParsedReport::WriteOps(t) => t.row_count(),
            ParsedReport::SieveTimes(s) => s.series.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub tool_version: String,
    pub source_path: String,
    pub source_sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub meta: ReportMeta,
    pub report: ParsedReport,
}
