// SPDX-License-Identifier: PMPL-1.0-or-later
//! The structural checker: runs the rule battery over a document.
//!
//! A checker holds its target level and its analyzers and nothing else, so
//! one instance can check any number of documents. Checking takes `&self`;
//! changing the level takes `&mut self`, so the borrow checker enforces a
//! single writer while checks run.

use crate::analyzers::{default_analyzers, Analyzer};
use crate::config::CheckerConfig;
use crate::issue::{CheckResult, IssueSet, WcagLevel};
use crate::markup::Markup;
use tracing::debug;

/// Rule-based WCAG checker for HTML markup
pub struct AccessibilityChecker {
    level: WcagLevel,
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl AccessibilityChecker {
    /// Create a checker targeting `level`
    pub fn new(level: WcagLevel) -> Self {
        Self {
            level,
            analyzers: default_analyzers(),
        }
    }

    /// Create a checker from configuration
    pub fn with_config(config: &CheckerConfig) -> Self {
        Self::new(config.level)
    }

    /// Target conformance level
    pub fn wcag_level(&self) -> WcagLevel {
        self.level
    }

    /// Change the target level for subsequent checks.
    ///
    /// Parse user input with `str::parse::<WcagLevel>()` first; unknown
    /// levels are rejected there.
    pub fn set_wcag_level(&mut self, level: WcagLevel) {
        self.level = level;
    }

    /// Check a document or fragment.
    ///
    /// Never fails: malformed or non-HTML input yields whatever the rules
    /// can find in it.
    pub fn check_html(&self, markup: &str) -> CheckResult {
        let document = Markup::new(markup);
        let mut issues = IssueSet::new();

        for analyzer in &self.analyzers {
            let before = issues.len();
            analyzer.analyze(&document, &mut issues);
            debug!(
                analyzer = analyzer.name(),
                issues = issues.len() - before,
                "Rule complete"
            );
        }

        let result = CheckResult::from_issues(issues, self.level);
        debug!(
            level = %self.level,
            passed = result.passed,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            info = result.info.len(),
            "Check complete"
        );
        result
    }
}

impl Default for AccessibilityChecker {
    fn default() -> Self {
        Self::new(WcagLevel::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Severity;

    const ACCESSIBLE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><title>Home</title></head>
<body>
  <main>
    <h1>Welcome</h1>
    <img src="logo.png" alt="Company logo">
    <h2>Contact</h2>
    <form>
      <label for="email">Email</label>
      <input type="email" id="email">
      <button type="submit">Send</button>
    </form>
    <a href="/about">About our company</a>
  </main>
</body>
</html>"#;

    #[test]
    fn test_accessible_document_passes() {
        let result = AccessibilityChecker::default().check_html(ACCESSIBLE);
        assert!(result.passed, "Unexpected errors: {:?}", result.errors);
        assert!(result.errors.is_empty());
        assert_eq!(result.total_issues, 0, "Unexpected issues: {:?}", result.issues().collect::<Vec<_>>());
    }

    #[test]
    fn test_image_without_alt_is_critical_error() {
        let result = AccessibilityChecker::default().check_html(r#"<img src="test.jpg">"#);
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].id, "img-alt-missing");
        assert_eq!(result.errors[0].severity, Severity::Critical);
        assert!(result.errors[0].message.contains("alt"));
        assert!(result.summary.critical > 0);
    }

    #[test]
    fn test_label_for_satisfies_input() {
        let checker = AccessibilityChecker::default();
        let labelled = checker.check_html(r#"<label for="n">Name</label><input type="text" id="n">"#);
        assert!(labelled.by_id("input-label-missing").is_empty());
        let bare = checker.check_html(r#"<input type="text">"#);
        assert_eq!(bare.by_id("input-label-missing").len(), 1);
        assert!(!bare.passed);
    }

    #[test]
    fn test_heading_skip_is_warning() {
        let result = AccessibilityChecker::default().check_html("<main><h1>A</h1><h3>B</h3></main>");
        assert!(result.passed);
        assert_eq!(result.warnings.iter().filter(|i| i.id == "heading-skip").count(), 1);
    }

    #[test]
    fn test_lang_attribute() {
        let checker = AccessibilityChecker::default();
        let missing = checker.check_html("<html><body><main><h1>x</h1></main></body></html>");
        assert_eq!(missing.errors.len(), 1);
        assert_eq!(missing.errors[0].id, "no-lang");
        let present = checker.check_html(r#"<html lang="en"><body><main><h1>x</h1></main></body></html>"#);
        assert!(present.by_id("no-lang").is_empty());
    }

    #[test]
    fn test_tabindex() {
        let checker = AccessibilityChecker::default();
        let positive = checker.check_html(r#"<button tabindex="5">Go</button>"#);
        assert_eq!(positive.by_id("tabindex-positive").len(), 1);
        let zero = checker.check_html(r#"<button tabindex="0">Go</button>"#);
        assert!(zero.by_id("tabindex-positive").is_empty());
    }

    #[test]
    fn test_main_landmark() {
        let checker = AccessibilityChecker::default();
        assert_eq!(checker.check_html("<div><h1>x</h1></div>").by_id("no-main-landmark").len(), 1);
        assert!(checker.check_html("<main><h1>x</h1></main>").by_id("no-main-landmark").is_empty());
    }

    #[test]
    fn test_links() {
        let checker = AccessibilityChecker::default();
        let empty = checker.check_html(r#"<a href="/page"></a>"#);
        assert_eq!(empty.errors.iter().filter(|i| i.id == "link-text-missing").count(), 1);
        assert!(empty.errors[0].message.contains("no accessible text"));
        let vague = checker.check_html(r#"<a href="/page">click here</a>"#);
        assert!(vague.passed);
        assert!(vague.warnings.iter().any(|i| i.message.contains("Vague link text")));
    }

    #[test]
    fn test_invalid_aria_role_is_error() {
        let result = AccessibilityChecker::default().check_html(r#"<main><h1>x</h1><div role="bogus">y</div></main>"#);
        assert!(!result.passed);
        assert_eq!(result.by_id("aria-invalid").len(), 1);
    }

    #[test]
    fn test_unquoted_aria_values() {
        let checker = AccessibilityChecker::default();
        let ok = checker.check_html(r#"<main><h1>x</h1><div role="checkbox" aria-checked=true tabindex="0">Accept</div></main>"#);
        assert!(ok.passed, "Unexpected errors: {:?}", ok.errors);

        let bad = checker.check_html("<main><h1>x</h1><div role=bogus>x</div></main>");
        assert_eq!(bad.by_id("aria-invalid").len(), 1);
        assert!(!bad.passed);
    }

    #[test]
    fn test_summary_counts_every_issue() {
        let html = r#"<html><body><img src="a.jpg"><input type="text"><a href="/">here</a></body></html>"#;
        let result = AccessibilityChecker::default().check_html(html);
        let s = result.summary;
        assert_eq!(s.critical + s.serious + s.moderate + s.minor, result.total_issues);
        assert_eq!(result.total_issues, result.errors.len() + result.warnings.len() + result.info.len());
        assert!(s.critical >= 2);
    }

    #[test]
    fn test_level_gating_moves_stricter_issues_to_info() {
        let html = r#"<main><h1>x</h1><p style="color:#767676;background:#ffffff">muted</p></main>"#;
        let mut checker = AccessibilityChecker::new(WcagLevel::AA);
        let aa = checker.check_html(html);
        assert!(aa.warnings.iter().all(|i| i.id != "color-contrast-enhanced"));
        assert_eq!(aa.info.iter().filter(|i| i.id == "color-contrast-enhanced").count(), 1);

        checker.set_wcag_level(WcagLevel::AAA);
        assert_eq!(checker.wcag_level(), WcagLevel::AAA);
        let aaa = checker.check_html(html);
        assert_eq!(aaa.warnings.iter().filter(|i| i.id == "color-contrast-enhanced").count(), 1);
        assert!(aaa.info.is_empty());
        assert_eq!(aaa.level, WcagLevel::AAA);
    }

    #[test]
    fn test_level_a_does_not_fail_on_aa_contrast() {
        let html = r#"<main><h1>x</h1><p style="color:#aaaaaa;background:#cccccc">faint</p></main>"#;
        assert!(!AccessibilityChecker::new(WcagLevel::AA).check_html(html).passed);
        let level_a = AccessibilityChecker::new(WcagLevel::A).check_html(html);
        assert!(level_a.passed);
        assert_eq!(level_a.info.len(), 1);
    }

    #[test]
    fn test_malformed_input_never_fails() {
        let checker = AccessibilityChecker::default();
        for input in ["", "plain text", "<<<>>>", "<div", "<img src=\"x.png\" alt=\"unterminated>", "</p></p>"] {
            let result = checker.check_html(input);
            assert_eq!(result.total_issues, result.errors.len() + result.warnings.len() + result.info.len());
            assert_eq!(result.passed, result.errors.is_empty());
        }
    }

    #[test]
    fn test_with_config() {
        let config = CheckerConfig {
            level: WcagLevel::A,
            ..CheckerConfig::default()
        };
        assert_eq!(AccessibilityChecker::with_config(&config).wcag_level(), WcagLevel::A);
    }
}
