// SPDX-License-Identifier: PMPL-1.0-or-later
//! Tab order analyzer - WCAG 2.4.3 Focus Order (Level A)
//!
//! A positive `tabindex` pulls an element ahead of the natural document
//! order. `tabindex="0"` and negative values are fine.

use crate::analyzers::{snippet, Analyzer};
use crate::issue::{Issue, IssueSet, Severity, WcagLevel};
use crate::markup::Markup;

/// Analyzer for focus order
pub struct TabOrderAnalyzer;

impl Analyzer for TabOrderAnalyzer {
    fn name(&self) -> &str {
        "Tab Order Analyzer"
    }

    fn description(&self) -> &str {
        "Checks for positive tabindex values (WCAG 2.4.3)"
    }

    fn analyze(&self, markup: &Markup, issues: &mut IssueSet) {
        for element in markup.elements() {
            let Some(value) = element.attr("tabindex") else {
                continue;
            };
            let Ok(index) = value.trim().parse::<i32>() else {
                continue;
            };
            if index <= 0 {
                continue;
            }

            issues.warning(
                Issue::new(
                    "tabindex-positive",
                    Severity::Serious,
                    &format!(
                        "Element has tabindex=\"{}\". Positive tabindex overrides the natural focus order.",
                        index
                    ),
                )
                .with_wcag("2.4.3", WcagLevel::A)
                .with_element(&snippet(&element.raw))
                .with_line(markup.line_of(element.offset))
                .with_suggestion(
                    "Use tabindex=\"0\" and arrange elements in the DOM in the order they should receive focus",
                ),
            );
        }
    }
}
