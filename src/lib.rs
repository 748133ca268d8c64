use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod batch;
pub mod error;
pub mod prime_gen;
pub mod schema;
pub mod series;
pub mod sieve_times;
pub mod source;
mod text;
pub mod wop_table;

pub use error::{ReportError, Result};
pub use prime_gen::parse_prime_gen_report;
pub use sieve_times::parse_sieve_timings;
pub use wop_table::parse_wop_table;

/// Report format written by the benchmark program.
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Sectioned random prime generation timings (`random_prime_results_*`).
    PrimeGen,
    /// Pipe table of mark-composite write operations (`sieve_w_op*`).
    WriteOps,
    /// Sieve execution times over powers of a base (`sieve_results_*`).
    SieveTimes,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::PrimeGen => "prime_gen",
            ReportKind::WriteOps => "write_ops",
            ReportKind::SieveTimes => "sieve_times",
        }
    }

    /// Infer the kind from a file stem such as `sieve_results_20250327221757`.
    pub fn from_stem(stem: &str) -> Option<Self> {
        if stem.starts_with("random_prime_results") {
            Some(ReportKind::PrimeGen)
        } else if stem.starts_with("sieve_w_op") {
            Some(ReportKind::WriteOps)
        } else if stem.starts_with("sieve_results") {
            Some(ReportKind::SieveTimes)
        } else {
            None
        }
    }
}
