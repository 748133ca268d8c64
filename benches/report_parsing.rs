//! Report parsing benchmark suite
//!
//! Throughput of the three readers over synthetic reports of growing size,
//! plus the full file load path (read + SHA-256 + parse).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use izprime_bench_report::source::{self, ReportSource};
use izprime_bench_report::{parse_prime_gen_report, parse_sieve_timings, parse_wop_table, ReportKind};
use std::fs;
use tempfile::TempDir;

fn prime_gen_text(sections: usize, rounds: usize) -> String {
    let mut out = String::from("Target Bit Size: 1024\n");
    for s in 0..sections {
        out.push_str("\n-----\n");
        out.push_str(&format!("Algorithm: algo-{s}\nCores Number: {}\n\n", 1 << (s % 4)));
        for r in 0..rounds {
            out.push_str(&format!("Prime Result {}: 17976931348623157{r:04}\n", r + 1));
        }
        let times: Vec<String> = (0..rounds).map(|r| format!("{:.6}", 0.001 * (r + 1) as f64)).collect();
        out.push_str(&format!("\nTime Results (seconds): [{}]\n", times.join(", ")));
        out.push_str("Average Time: 0.005000 seconds\n");
    }
    out
}

fn wop_text(rows: usize) -> String {
    let mut out = format!("| {:<24}| {:<24}| {:<24}| {:<24}\n", "n", "Sieve-Eratosthenes", "Sieve-iZ", "Sieve-iZm");
    for r in 0..rows {
        let n = 1000u64 * (r as u64 + 1);
        out.push_str(&format!("| {:<24}| {:<24}| {:<24}| {:<24}\n", n, n * 2, n / 3, n / 6));
    }
    out
}

fn sieve_text(series: usize) -> String {
    let mut out = String::from("Test Range: 10^3:10^9\n");
    for s in 0..series {
        out.push_str(&format!("Sieve-{s}: [4, 38, 412, 4602, 52000, 610000, 7000000]\n"));
    }
    out
}

/// Benchmark each reader at several input sizes
fn bench_readers(c: &mut Criterion) {
    let mut group = c.benchmark_group("readers");

    for sections in [4usize, 64, 512] {
        let text = prime_gen_text(sections, 10);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("prime_gen", sections), &text, |b, text| {
            b.iter(|| black_box(parse_prime_gen_report(black_box(text))))
        });
    }

    for rows in [10usize, 1_000, 10_000] {
        let text = wop_text(rows);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("wop_table", rows), &text, |b, text| {
            b.iter(|| black_box(parse_wop_table(black_box(text)).unwrap()))
        });
    }

    for series in [3usize, 300] {
        let text = sieve_text(series);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("sieve_times", series), &text, |b, text| {
            b.iter(|| black_box(parse_sieve_timings(black_box(text)).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark loading from disk, including hashing
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    group.sample_size(20);

    let temp_dir = TempDir::new().unwrap();
    let src = ReportSource::new(temp_dir.path(), "txt");
    fs::write(src.path_for("sieve_w_op"), wop_text(5_000)).unwrap();
    let path = src.path_for("sieve_w_op");

    group.bench_function("wop_table_5000_rows", |b| {
        b.iter(|| black_box(source::load(black_box(&path), ReportKind::WriteOps).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_readers, bench_load);
criterion_main!(benches);
