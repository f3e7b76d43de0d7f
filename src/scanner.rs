// SPDX-License-Identifier: PMPL-1.0-or-later
//! Directory scanner for running the checker across a project.
//!
//! Walks directory trees, picks out markup files, and checks each one.

use crate::checker::AccessibilityChecker;
use crate::error::{Error, Result};
use crate::issue::CheckResult;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// File extensions to scan
const SCANNABLE_EXTENSIONS: &[&str] = &["html", "htm", "xhtml"];

/// Check result for one file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,
    pub result: CheckResult,
}

/// Check results for every file scanned, in walk order
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub files: Vec<FileReport>,
}

impl ScanReport {
    /// True iff every file passed
    pub fn passed(&self) -> bool {
        self.files.iter().all(|f| f.result.passed)
    }

    /// Issues across all files
    pub fn total_issues(&self) -> usize {
        self.files.iter().map(|f| f.result.total_issues).sum()
    }

    /// Errors across all files
    pub fn total_errors(&self) -> usize {
        self.files.iter().map(|f| f.result.errors.len()).sum()
    }
}

/// Scan a file or a directory tree. A path that does not exist is an error.
pub fn scan_path(path: &Path, checker: &AccessibilityChecker, exclude: &[String]) -> Result<ScanReport> {
    if !path.exists() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("path not found: {}", path.display()),
        )));
    }
    if path.is_file() {
        return Ok(ScanReport {
            files: vec![scan_file(path, checker)?],
        });
    }
    scan_directory(path, checker, exclude)
}

/// Scan a directory for markup files and check each one.
///
/// Unreadable files are logged and skipped.
pub fn scan_directory(dir: &Path, checker: &AccessibilityChecker, exclude: &[String]) -> Result<ScanReport> {
    let mut report = ScanReport::default();

    info!("Scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Skip hidden and excluded directories below the root
            let name = e.file_name().to_str().unwrap_or("");
            if e.depth() > 0 && e.file_type().is_dir() {
                return !exclude.iter().any(|x| x == name) && !name.starts_with('.');
            }
            true
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if !SCANNABLE_EXTENSIONS.contains(&ext.as_str()) {
            continue;
        }

        match scan_file(path, checker) {
            Ok(file_report) => report.files.push(file_report),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    info!(
        "Scanned {} files, found {} issues",
        report.files.len(),
        report.total_issues()
    );

    Ok(report)
}

/// Check a single file
pub fn scan_file(path: &Path, checker: &AccessibilityChecker) -> Result<FileReport> {
    let content = std::fs::read_to_string(path)?;
    Ok(FileReport {
        path: path.to_path_buf(),
        result: checker.check_html(&content),
    })
}
