// SPDX-License-Identifier: PMPL-1.0-or-later
//! Main landmark analyzer - WCAG 1.3.1 Info and Relationships (Level A)

use crate::analyzers::Analyzer;
use crate::issue::{Issue, IssueSet, Severity, WcagLevel};
use crate::markup::Markup;

/// Analyzer for the main landmark
pub struct LandmarkAnalyzer;

impl Analyzer for LandmarkAnalyzer {
    fn name(&self) -> &str {
        "Landmark Analyzer"
    }

    fn description(&self) -> &str {
        "Checks for a <main> element or role=\"main\" (WCAG 1.3.1)"
    }

    fn analyze(&self, markup: &Markup, issues: &mut IssueSet) {
        let has_main = markup.elements().iter().any(|e| {
            e.name == "main"
                || e.attr("role")
                    .is_some_and(|r| r.trim().eq_ignore_ascii_case("main"))
        });

        if !has_main {
            issues.warning(
                Issue::new(
                    "no-main-landmark",
                    Severity::Moderate,
                    "Document has no main landmark. Screen reader users cannot skip straight to the content.",
                )
                .with_wcag("1.3.1", WcagLevel::A)
                .with_suggestion("Wrap the primary content in <main> or add role=\"main\""),
            );
        }
    }
}
