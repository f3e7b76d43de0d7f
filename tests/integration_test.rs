// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for wcag-engine

use std::path::Path;
use tempfile::TempDir;
use wcag_engine::config::CheckerConfig;
use wcag_engine::report::{generate_report, OutputFormat};
use wcag_engine::scanner;
use wcag_engine::{AccessibilityChecker, CheckResult, Severity, WcagLevel};

fn check_fixture(name: &str, level: WcagLevel) -> CheckResult {
    let report = scanner::scan_file(
        &Path::new("tests/fixtures").join(name),
        &AccessibilityChecker::new(level),
    )
    .expect("scan should succeed");
    report.result
}

fn ids(issues: &[wcag_engine::Issue]) -> Vec<&str> {
    issues.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn test_scan_accessible_fixture() {
    let result = check_fixture("accessible.html", WcagLevel::AAA);

    assert!(
        result.passed,
        "Accessible fixture should have no errors, got {} errors: {:?}",
        result.errors.len(),
        ids(&result.errors)
    );
    assert_eq!(
        result.total_issues, 0,
        "Accessible fixture should be clean, got: {:?}",
        result.issues().map(|i| &i.id).collect::<Vec<_>>()
    );
}

#[test]
fn test_scan_inaccessible_fixture() {
    let result = check_fixture("inaccessible.html", WcagLevel::AA);

    assert!(!result.passed, "Inaccessible fixture should have errors");
    assert_eq!(result.errors.len(), 10, "errors: {:?}", ids(&result.errors));
    assert_eq!(result.warnings.len(), 7, "warnings: {:?}", ids(&result.warnings));
    assert!(result.info.is_empty());
    assert_eq!(result.total_issues, 17);
    assert_eq!(result.summary.critical, 2);

    for id in [
        "img-alt-missing",
        "input-label-missing",
        "link-text-missing",
        "no-lang",
        "aria-invalid",
        "color-contrast",
    ] {
        assert!(ids(&result.errors).contains(&id), "missing error {}", id);
    }
    for id in [
        "img-empty-alt",
        "first-heading-not-h1",
        "heading-skip",
        "link-vague-text",
        "no-main-landmark",
        "tabindex-positive",
        "aria-hidden-focusable",
    ] {
        assert!(ids(&result.warnings).contains(&id), "missing warning {}", id);
    }
}

#[test]
fn test_inaccessible_fixture_issue_details() {
    let result = check_fixture("inaccessible.html", WcagLevel::AA);

    let missing_alt = result.by_id("img-alt-missing");
    assert_eq!(missing_alt.len(), 1);
    assert_eq!(missing_alt[0].line, Some(8));
    assert_eq!(missing_alt[0].element.as_deref(), Some(r#"<img src="banner.jpg">"#));

    let invalid_role = result.by_id("aria-invalid");
    assert_eq!(invalid_role.len(), 4);
    assert!(invalid_role[0].message.contains("Invalid ARIA role: \"buton\""));

    let critical = result.by_severity(Severity::Critical);
    assert!(critical.iter().any(|i| i.id == "no-lang"));
}

#[test]
fn test_scan_partial_fixture() {
    let result = check_fixture("partial.html", WcagLevel::AA);

    assert!(result.passed, "Partial fixture has only advisory issues: {:?}", ids(&result.errors));
    assert_eq!(ids(&result.warnings), vec!["img-empty-alt", "heading-skip", "link-vague-text"]);
    assert_eq!(ids(&result.info), vec!["color-contrast-enhanced"]);
}

#[test]
fn test_partial_fixture_at_aaa() {
    let result = check_fixture("partial.html", WcagLevel::AAA);

    assert!(result.passed);
    assert_eq!(result.warnings.len(), 4);
    assert!(result.info.is_empty());
    assert_eq!(result.level, WcagLevel::AAA);
}

#[test]
fn test_scan_fixture_directory() {
    let checker = AccessibilityChecker::default();
    let report = scanner::scan_path(Path::new("tests/fixtures"), &checker, &CheckerConfig::default().exclude)
        .expect("scan should succeed");

    assert_eq!(report.files.len(), 3);
    assert!(!report.passed());
    assert_eq!(report.total_errors(), 10);
}

#[test]
fn test_scan_copied_tree_respects_config_exclude() {
    let dir = TempDir::new().unwrap();
    let site = dir.path().join("site");
    let legacy = site.join("legacy");
    std::fs::create_dir_all(&legacy).unwrap();
    std::fs::copy("tests/fixtures/accessible.html", site.join("index.html")).unwrap();
    std::fs::copy("tests/fixtures/inaccessible.html", legacy.join("old.html")).unwrap();

    let config = CheckerConfig::from_toml_str("level = \"AAA\"\nexclude = [\"legacy\"]\n").unwrap();
    let checker = AccessibilityChecker::with_config(&config);
    let report = scanner::scan_path(&site, &checker, &config.exclude).unwrap();

    assert_eq!(report.files.len(), 1);
    assert!(report.passed());
}

#[test]
fn test_json_report_for_fixture() {
    let checker = AccessibilityChecker::default();
    let report = scanner::scan_path(Path::new("tests/fixtures/inaccessible.html"), &checker, &[])
        .expect("scan should succeed");
    let json = generate_report(&report, OutputFormat::Json);

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    let result = &value["files"][0]["result"];
    assert_eq!(result["passed"], false);
    assert_eq!(result["totalIssues"], 17);
    assert_eq!(result["summary"]["critical"], 2);
    assert_eq!(result["errors"].as_array().map(Vec::len), Some(10));

    let first = &result["errors"][0];
    for key in ["id", "severity", "message", "wcagLevel", "wcagCriteria", "element", "line", "suggestion", "helpUrl"] {
        assert!(first.get(key).is_some(), "issue JSON missing {}", key);
    }
}

#[test]
fn test_text_report_for_fixture() {
    let checker = AccessibilityChecker::default();
    let report = scanner::scan_path(Path::new("tests/fixtures/partial.html"), &checker, &[])
        .expect("scan should succeed");
    let text = generate_report(&report, OutputFormat::Text);

    assert!(text.contains("partial.html (WCAG Level AA)"));
    assert!(text.contains("--- Warnings (3) ---"));
    assert!(text.contains("--- Info (1) ---"));
    assert!(text.contains("Vague link text"));
    assert!(text.contains("RESULT: PASS"));
}

#[test]
fn test_scan_missing_path_is_an_error() {
    let checker = AccessibilityChecker::default();
    let err = scanner::scan_path(Path::new("tests/fixtures/missing.html"), &checker, &[]).unwrap_err();

    assert!(matches!(err, wcag_engine::Error::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    assert!(err.to_string().contains("missing.html"));
}
