//! Parse every recognised report in a results directory.

use std::path::PathBuf;

use rayon::prelude::*;
use serde::Serialize;
use tracing::warn;
use walkdir::WalkDir;

use crate::error::Result;
use crate::schema::ReportDocument;
use crate::source::{self, ReportSource};
use crate::ReportKind;

#[derive(Debug)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub kind: ReportKind,
    pub result: Result<ReportDocument>,
}

/// One line of a scan summary.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub path: String,
    pub kind: ReportKind,
    pub records: Option<usize>,
    pub error: Option<String>,
}

impl From<&ScanEntry> for ScanSummary {
    fn from(entry: &ScanEntry) -> Self {
        let (records, error) = match &entry.result {
            Ok(doc) => (Some(doc.report.record_count()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        ScanSummary {
            path: entry.path.to_string_lossy().to_string(),
            kind: entry.kind,
            records,
            error,
        }
    }
}

/// Walk `source.dir` down to `max_depth` and parse recognised reports in parallel.
///
/// Files with another extension or an unrecognised name are ignored. A file
/// that fails to load is reported in its own entry. Entries are sorted by path.
pub fn scan_directory(source: &ReportSource, max_depth: usize) -> Vec<ScanEntry> {
    let candidates: Vec<(PathBuf, ReportKind)> = WalkDir::new(&source.dir)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file() && source.has_extension(e.path()))
        .filter_map(|e| {
            let kind = source::detect_kind(e.path()).ok()?;
            Some((e.into_path(), kind))
        })
        .collect();

    candidates
        .into_par_iter()
        .map(|(path, kind)| {
            let result = source::load(&path, kind);
            if let Err(err) = &result {
                warn!(path = %path.display(), error = %err, "failed to load report");
            }
            ScanEntry { path, kind, result }
        })
        .collect()
}
