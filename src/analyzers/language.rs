// SPDX-License-Identifier: PMPL-1.0-or-later
//! Language of page analyzer - WCAG 3.1.1 Language of Page (Level A)
//!
//! The `<html>` element must carry a non-empty `lang` attribute so screen
//! readers pick the right pronunciation. Fragments without an `<html>`
//! element are not checked.

use crate::analyzers::{snippet, Analyzer};
use crate::issue::{Issue, IssueSet, Severity, WcagLevel};
use crate::markup::Markup;

/// Analyzer for the page language
pub struct LanguageAnalyzer;

impl Analyzer for LanguageAnalyzer {
    fn name(&self) -> &str {
        "Language Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that <html> declares a lang attribute (WCAG 3.1.1)"
    }

    fn analyze(&self, markup: &Markup, issues: &mut IssueSet) {
        let Some(html) = markup.elements_named("html").into_iter().next() else {
            return;
        };

        let message = match html.attr("lang") {
            Some(lang) if !lang.trim().is_empty() => return,
            Some(_) => "The <html> element has an empty lang attribute.",
            None => "The <html> element is missing a lang attribute.",
        };

        issues.error(
            Issue::new("no-lang", Severity::Critical, message)
                .with_wcag("3.1.1", WcagLevel::A)
                .with_element(&snippet(&html.raw))
                .with_line(markup.line_of(html.offset))
                .with_suggestion("Declare the page language, e.g. <html lang=\"en\">"),
        );
    }
}
