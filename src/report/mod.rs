// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for check results.
//!
//! Supports two output formats:
//! - Text: human-readable issues with WCAG criterion references
//! - JSON: the check results as structured data

use crate::contrast::ColorContrastResult;
use crate::issue::Issue;
use crate::scanner::{FileReport, ScanReport};
use serde::Serialize;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// One measured color pair, labelled for display
#[derive(Debug, Clone, Serialize)]
pub struct ContrastEntry {
    pub name: String,
    pub foreground: String,
    pub background: String,
    #[serde(flatten)]
    pub result: ColorContrastResult,
    /// Minimum and enhanced ratios for the text size checked
    pub recommendation: String,
}

const RULE: &str = "=======================================================";

/// Generate a report from scan results
pub fn generate_report(report: &ScanReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(report),
        OutputFormat::Json => to_json(report),
    }
}

/// Generate a report for measured color pairs
pub fn generate_contrast_report(entries: &[ContrastEntry], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_contrast_text(entries),
        OutputFormat::Json => to_json(&entries),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize report: {}\"}}", e))
}

/// Generate human-readable text report
fn generate_text_report(report: &ScanReport) -> String {
    let mut output = String::new();

    output.push_str("=== WCAG Accessibility Report ===\n\n");

    if report.files.is_empty() {
        output.push_str("No markup files found.\n");
        return output;
    }

    for file in &report.files {
        write_file_section(&mut output, file);
    }

    output.push_str(RULE);
    output.push('\n');
    output.push_str(&format!(
        "Checked {} file(s): {} issue(s), {} error(s)\n",
        report.files.len(),
        report.total_issues(),
        report.total_errors()
    ));

    if report.passed() {
        output.push_str("RESULT: PASS\n");
    } else {
        output.push_str("RESULT: FAIL (errors found)\n");
    }

    output
}

fn write_file_section(output: &mut String, file: &FileReport) {
    let result = &file.result;

    output.push_str(RULE);
    output.push('\n');
    output.push_str(&format!("File: {} (WCAG Level {})\n", file.path.display(), result.level));

    if result.passed {
        output.push_str("All accessibility checks passed.\n\n");
    } else {
        output.push_str("Accessibility issues found.\n\n");
    }

    output.push_str("Summary:\n");
    output.push_str(&format!("  Total Issues: {}\n", result.total_issues));
    output.push_str(&format!("  Errors: {}\n", result.errors.len()));
    output.push_str(&format!("  Warnings: {}\n", result.warnings.len()));
    output.push_str(&format!("  Info: {}\n\n", result.info.len()));

    output.push_str("By Severity:\n");
    output.push_str(&format!("  Critical: {}\n", result.summary.critical));
    output.push_str(&format!("  Serious: {}\n", result.summary.serious));
    output.push_str(&format!("  Moderate: {}\n", result.summary.moderate));
    output.push_str(&format!("  Minor: {}\n\n", result.summary.minor));

    for (title, issues) in [
        ("Errors", &result.errors),
        ("Warnings", &result.warnings),
        ("Info", &result.info),
    ] {
        if issues.is_empty() {
            continue;
        }

        output.push_str(&format!("--- {} ({}) ---\n", title, issues.len()));
        for (index, issue) in issues.iter().enumerate() {
            write_issue(output, index + 1, issue, file);
        }
    }
}

fn write_issue(output: &mut String, number: usize, issue: &Issue, file: &FileReport) {
    output.push_str(&format!(
        "{}. [{}] {}\n",
        number,
        issue.severity.to_string().to_uppercase(),
        issue.message
    ));

    match issue.line {
        Some(line) => output.push_str(&format!("   Location: {}:{}\n", file.path.display(), line)),
        None => output.push_str(&format!("   Location: {}\n", file.path.display())),
    }

    output.push_str(&format!(
        "   WCAG: {} (Level {}) [{}]\n",
        issue.wcag_criteria, issue.wcag_level, issue.id
    ));

    if let Some(ref element) = issue.element {
        output.push_str(&format!("   Element: {}\n", element));
    }

    if let Some(ref suggestion) = issue.suggestion {
        output.push_str(&format!("   Fix: {}\n", suggestion));
    }

    if let Some(ref url) = issue.help_url {
        output.push_str(&format!("   Learn more: {}\n", url));
    }

    output.push('\n');
}

fn generate_contrast_text(entries: &[ContrastEntry]) -> String {
    let mut output = String::new();

    output.push_str("=== Color Contrast ===\n\n");

    for entry in entries {
        let mark = |pass: bool| if pass { "PASS" } else { "FAIL" };
        output.push_str(&format!(
            "{} ({} on {}):\n",
            entry.name, entry.foreground, entry.background
        ));
        output.push_str(&format!("  Ratio: {}:1\n", entry.result.ratio));
        output.push_str(&format!("  WCAG AA:  {}\n", mark(entry.result.passes_aa)));
        output.push_str(&format!("  WCAG AAA: {}\n", mark(entry.result.passes_aaa)));
        output.push_str(&format!("  Level: {}\n", entry.result.wcag_level));
        output.push_str(&format!("  {}\n\n", entry.recommendation));
    }

    output
}
