//! Reader for sieve execution time results.
//!
//! ```text
//! Test Range: 10^3:10^9
//! Sieve-Eratosthenes: [4, 38, 412, 4602, 52000, 610000, 7000000]
//! Sieve-iZm: [2, 15, 160, 1700, 19000, 210000, 2400000]
//! ```
//!
//! Values are microseconds, one per power of the base.

use tracing::debug;

use crate::error::{ReportError, Result};
use crate::schema::{SieveTimings, TimingSeries};
use crate::text;

const TEST_RANGE: &str = "Test Range:";

/// Parses `<b>^<e>`.
fn power(s: &str) -> Option<(u64, u32)> {
    let (base, exp) = s.trim().split_once('^')?;
    Some((base.trim().parse().ok()?, exp.trim().parse().ok()?))
}

fn test_range(line: &str) -> Option<(u64, u32, u32)> {
    let (lo, hi) = line.strip_prefix(TEST_RANGE)?.split_once(':')?;
    let (base, min_exp) = power(lo)?;
    let (hi_base, max_exp) = power(hi)?;
    // Every limit base^e must be representable; base 0 or 1 has no log axis.
    let valid = base == hi_base
        && base >= 2
        && min_exp <= max_exp
        && base.checked_pow(max_exp).is_some();
    valid.then_some((base, min_exp, max_exp))
}

/// Parse sieve timing results.
///
/// The leading `Test Range:` line is mandatory. Series lines that cannot be
/// parsed are skipped; a repeated algorithm name replaces the earlier values.
pub fn parse_sieve_timings(input: &str) -> Result<SieveTimings> {
    let mut lines = input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty());

    let (base, min_exp, max_exp) = lines
        .next()
        .and_then(test_range)
        .ok_or(ReportError::MissingTestRange)?;

    let mut series: Vec<TimingSeries> = Vec::new();
    for line in lines {
        let parsed = line.rsplit_once(": ").and_then(|(name, list)| {
            let values = text::bracketed(list).and_then(text::parse_list::<u64>)?;
            Some((name.trim(), values))
        });
        let Some((algorithm, values)) = parsed else {
            debug!(line, "skipping unparsable timing line");
            continue;
        };
        match series.iter_mut().find(|s| s.algorithm == algorithm) {
            Some(existing) => existing.values = values,
            None => series.push(TimingSeries {
                algorithm: algorithm.to_string(),
                values,
            }),
        }
    }

    Ok(SieveTimings {
        base,
        min_exp,
        max_exp,
        series,
    })
}
