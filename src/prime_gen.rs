//! Reader for multi-section prime generation timing reports.
//!
//! ```text
//! Target Bit Size: 512
//!
//! -----
//! Algorithm: iZ: random_iZprime
//! Cores Number: 4
//!
//! Prime Result 1: 1340...
//!
//! Time Results (seconds): [0.010000, 0.020000]
//! Average Time: 0.015000 seconds
//! ```
//!
//! Sections missing any required field are dropped rather than reported.

use tracing::debug;

use crate::schema::{BenchmarkReport, Section};
use crate::text;

/// Lines starting with this prefix delimit sections.
pub const SECTION_SEPARATOR: &str = "-----";

const TARGET_BIT_SIZE: &str = "Target Bit Size:";
const ALGORITHM: &str = "Algorithm:";
const CORES_NUMBER: &str = "Cores Number:";
const TIME_RESULTS: &str = "Time Results (seconds):";
const AVERAGE_TIME: &str = "Average Time:";

/// Parse the full text of a prime generation report.
pub fn parse_prime_gen_report(input: &str) -> BenchmarkReport {
    let lines: Vec<&str> = input.lines().map(str::trim).collect();

    let target_bit_size = lines
        .iter()
        .find_map(|line| line.strip_prefix(TARGET_BIT_SIZE))
        .and_then(|rest| text::leading_digits(rest).parse().ok());

    let mut sections = Vec::new();
    let mut buffered: Vec<&str> = Vec::new();
    let mut index = 0usize;

    let mut flush = |buffered: &mut Vec<&str>, sections: &mut Vec<Section>| {
        if buffered.is_empty() {
            return;
        }
        match SectionFields::collect(buffered).finish() {
            Some(section) => sections.push(section),
            None => debug!(section = index, "dropping incomplete section"),
        }
        index += 1;
        buffered.clear();
    };

    for line in lines {
        if line.starts_with(SECTION_SEPARATOR) {
            flush(&mut buffered, &mut sections);
        } else if !line.is_empty() {
            buffered.push(line);
        }
    }
    flush(&mut buffered, &mut sections);

    BenchmarkReport {
        target_bit_size,
        sections,
    }
}

#[derive(Default)]
struct SectionFields {
    algorithm: Option<String>,
    cores: Option<u32>,
    times: Vec<f64>,
    average_time: Option<f64>,
}

impl SectionFields {
    fn collect(lines: &[&str]) -> Self {
        let mut fields = SectionFields::default();
        for line in lines {
            if let Some(rest) = line.strip_prefix(ALGORITHM) {
                fields.algorithm = Some(rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix(CORES_NUMBER) {
                fields.cores = rest.trim().parse().ok();
            } else if let Some(rest) = line.strip_prefix(TIME_RESULTS) {
                // A line without a bracketed list leaves earlier samples alone.
                if let Some(list) = text::bracketed(rest) {
                    fields.times = text::parse_list::<f64>(list).unwrap_or_default();
                }
            } else if let Some(rest) = line.strip_prefix(AVERAGE_TIME) {
                if let Some(number) = text::first_number(rest) {
                    fields.average_time = number.parse().ok();
                }
            }
        }
        fields
    }

    fn finish(self) -> Option<Section> {
        if self.times.is_empty() {
            return None;
        }
        Some(Section {
            algorithm: self.algorithm?,
            cores: self.cores?,
            times: self.times,
            average_time: self.average_time?,
        })
    }
}
