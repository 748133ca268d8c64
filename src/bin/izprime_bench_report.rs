use clap::{Parser, Subcommand};
use izprime_bench_report::batch::{self, ScanSummary};
use izprime_bench_report::schema::ParsedReport;
use izprime_bench_report::series::{self, ChartSpec, MAX_COMPLEXITY_EXP};
use izprime_bench_report::source::{ReportSource, DEFAULT_DIR, DEFAULT_EXTENSION};
use izprime_bench_report::{ReportError, ReportKind, Result};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Subcommand, Debug)]
enum Command {
    /// Sectioned prime generation timings (Target Bit Size / Algorithm / Cores Number ...).
    PrimeGen {
        /// Report name without extension, e.g. random_prime_results_20250226114627.
        name: String,
    },

    /// Pipe table of mark-composite write operations W(n).
    WOp {
        #[arg(default_value = "sieve_w_op")]
        name: String,
    },

    /// Sieve execution times over a `Test Range:` of powers.
    SieveTimes { name: String },

    /// Emit chart series (labels, points, ticks) for a report instead of the raw parse.
    Chart {
        name: String,

        /// Report kind; inferred from the name when omitted.
        #[arg(long, value_enum)]
        kind: Option<ReportKind>,
    },

    /// Emit growth curves of n, n log log n, sqrt(n), log n ... over powers of 10.
    Complexity {
        #[arg(
            long,
            default_value_t = 9,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_COMPLEXITY_EXP))
        )]
        max_exp: u32,
    },

    /// Parse every recognised report in --dir and print a summary.
    Scan {
        /// How deep to descend below --dir.
        #[arg(long, default_value_t = 1)]
        depth: usize,
    },
}

#[derive(Parser, Debug)]
#[command(name = "izprime-bench-report")]
#[command(about = "Parse iZprime benchmark logs into JSON reports and chart series")]
struct Args {
    /// Directory holding the benchmark result files.
    #[arg(long, default_value = DEFAULT_DIR, global = true)]
    dir: PathBuf,

    /// Result file extension (without the dot).
    #[arg(long, default_value = DEFAULT_EXTENSION, global = true)]
    ext: String,

    /// Where to write the JSON output. If omitted, prints to stdout.
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

fn chart_for(report: &ParsedReport) -> Result<ChartSpec> {
    match report {
        ParsedReport::PrimeGen(r) => Ok(series::prime_gen_chart(r)),
        ParsedReport::WriteOps(t) => series::wop_chart(t),
        ParsedReport::SieveTimes(s) => Ok(series::sieve_time_chart(s)),
    }
}

fn emit<T: Serialize>(value: &T, out: Option<&PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            fs::write(path, json).map_err(|source| ReportError::Io {
                path: path.clone(),
                source,
            })?;
            eprintln!("Output saved as {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let src = ReportSource::new(&args.dir, &args.ext);
    let out = args.out.as_ref();

    match &args.cmd {
        Command::PrimeGen { name } => emit(&src.load(name, Some(ReportKind::PrimeGen))?, out),
        Command::WOp { name } => emit(&src.load(name, Some(ReportKind::WriteOps))?, out),
        Command::SieveTimes { name } => emit(&src.load(name, Some(ReportKind::SieveTimes))?, out),
        Command::Chart { name, kind } => {
            let doc = src.load(name, *kind)?;
            emit(&chart_for(&doc.report)?, out)
        }
        Command::Complexity { max_exp } => emit(&series::complexity_chart(*max_exp), out),
        Command::Scan { depth } => {
            let entries = batch::scan_directory(&src, *depth);
            if entries.is_empty() {
                eprintln!("No reports found in {}", src.dir.display());
            }
            let summary: Vec<ScanSummary> = entries.iter().map(ScanSummary::from).collect();
            emit(&summary, out)
        }
    }
}
