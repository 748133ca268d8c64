//! Locating, reading and parsing report files.
//!
//! The benchmark program writes its results as `<dir>/<name>.<ext>`; both
//! the directory and the extension are explicit here rather than global.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{ReportError, Result};
use crate::schema::{ParsedReport, ReportDocument, ReportMeta};
use crate::{parse_prime_gen_report, parse_sieve_timings, parse_wop_table, ReportKind};

/// Version of the JSON document layout emitted by [`load`].
pub const SCHEMA_VERSION: u32 = 1;

pub const DEFAULT_DIR: &str = "./output";
pub const DEFAULT_EXTENSION: &str = "txt";

/// Where report files live and how they are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSource {
    pub dir: PathBuf,
    /// File extension without the leading dot.
    pub extension: String,
}

impl Default for ReportSource {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ReportSource {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// `<dir>/<name>.<extension>`
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{}", self.extension))
    }

    pub fn has_extension(&self, path: &Path) -> bool {
        path.extension().is_some_and(|e| e == self.extension.as_str())
    }

    /// Load report `name`, inferring its kind from the name when `kind` is `None`.
    pub fn load(&self, name: &str, kind: Option<ReportKind>) -> Result<ReportDocument> {
        let path = self.path_for(name);
        let kind = match kind {
            Some(k) => k,
            None => detect_kind(&path)?,
        };
        load(&path, kind)
    }
}

/// Infer the report kind from the file name.
pub fn detect_kind(path: &Path) -> Result<ReportKind> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(ReportKind::from_stem)
        .ok_or_else(|| ReportError::UnknownKind(path.to_path_buf()))
}

/// Read the whole file; the handle is closed before returning.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| ReportError::io(path, e))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(64);
    for b in Sha256::digest(bytes).iter() {
        s.push_str(&format!("{:02x}", b));
    }
    s
}

/// Parse report text of a known kind.
pub fn parse(kind: ReportKind, input: &str) -> Result<ParsedReport> {
    Ok(match kind {
        ReportKind::PrimeGen => ParsedReport::PrimeGen(parse_prime_gen_report(input)),
        ReportKind::WriteOps => ParsedReport::WriteOps(parse_wop_table(input)?),
        ReportKind::SieveTimes => ParsedReport::SieveTimes(parse_sieve_timings(input)?),
    })
}

/// Read and parse one report file into a JSON-ready document.
pub fn load(path: &Path, kind: ReportKind) -> Result<ReportDocument> {
    let bytes = read_bytes(path)?;
    let digest = sha256_hex(&bytes);
    let input = String::from_utf8_lossy(&bytes);
    debug!(path = %path.display(), kind = kind.as_str(), bytes = bytes.len(), "parsing report");

    let report = parse(kind, &input)?;
    info!(
        path = %path.display(),
        kind = kind.as_str(),
        records = report.record_count(),
        "loaded report"
    );

    Ok(ReportDocument {
        meta: ReportMeta {
            schema_version: SCHEMA_VERSION,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            source_path: path.to_string_lossy().to_string(),
            source_sha256: digest,
        },
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_path_for_uses_dir_and_extension() {
        let src = ReportSource::new("/tmp/results", "log");
        assert_eq!(
            src.path_for("sieve_w_op"),
            PathBuf::from("/tmp/results/sieve_w_op.log")
        );
        assert_eq!(
            ReportSource::default().path_for("x"),
            PathBuf::from("./output/x.txt")
        );
    }

    #[test]
    fn test_detect_kind() {
        let cases = [
            ("random_prime_results_20250226114627.txt", ReportKind::PrimeGen),
            ("sieve_w_op.txt", ReportKind::WriteOps),
            ("sieve_results_20250327221757.txt", ReportKind::SieveTimes),
        ];
        for (name, kind) in cases {
            assert_eq!(detect_kind(Path::new(name)).unwrap(), kind);
        }
        assert!(matches!(
            detect_kind(Path::new("notes.txt")),
            Err(ReportError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let src = ReportSource::new(dir.path(), "txt");
        let err = src.load("sieve_w_op", None).unwrap_err();
        match err {
            ReportError::Io { path, .. } => assert_eq!(path, dir.path().join("sieve_w_op.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_builds_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sieve_w_op.txt");
        fs::write(&path, "| n | Sieve-iZ |\n| 1000 | 197 |\n").unwrap();

        let doc = ReportSource::new(dir.path(), "txt")
            .load("sieve_w_op", None)
            .unwrap();
        assert_eq!(doc.meta.schema_version, SCHEMA_VERSION);
        assert_eq!(doc.meta.source_sha256.len(), 64);
        assert_eq!(doc.report.kind(), ReportKind::WriteOps);
        assert_eq!(doc.report.record_count(), 1);

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["report"]["kind"], "write_ops");
        assert_eq!(json["report"]["columns"][1]["values"][0], 197);
    }

    #[test]
    fn test_source_digest_is_lowercase_hex() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sieve_results_1.txt");
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );

        fs::write(&path, "Test Range: 10^1:10^2\nA: [1, 2]\n").unwrap();
        let doc = load(&path, ReportKind::SieveTimes).unwrap();
        assert_eq!(doc.meta.source_sha256, sha256_hex(&fs::read(&path).unwrap()));
        assert!(doc
            .meta
            .source_sha256
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_explicit_kind_overrides_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latest.txt");
        fs::write(&path, "Target Bit Size: 32\n").unwrap();

        let doc = ReportSource::new(dir.path(), "txt")
            .load("latest", Some(ReportKind::PrimeGen))
            .unwrap();
        match doc.report {
            ParsedReport::PrimeGen(r) => assert_eq!(r.target_bit_size, Some(32)),
            other => panic!("unexpected report: {other:?}"),
        }
    }
}
