// SPDX-License-Identifier: PMPL-1.0-or-later
//! ARIA usage analyzer - WCAG 4.1.2 Name, Role, Value (Level A)
//!
//! Routes every element that declares a `role` through the ARIA validator.
//! Validator errors become `aria-invalid` errors; validator warnings
//! (focusable content hidden with `aria-hidden`) become
//! `aria-hidden-focusable` warnings.

use crate::analyzers::{snippet, Analyzer};
use crate::aria;
use crate::issue::{Issue, IssueSet, Severity, WcagLevel};
use crate::markup::Markup;
use tracing::debug;

/// Analyzer for ARIA roles and attributes
pub struct AriaUsageAnalyzer;

impl Analyzer for AriaUsageAnalyzer {
    fn name(&self) -> &str {
        "ARIA Usage Analyzer"
    }

    fn description(&self) -> &str {
        "Validates ARIA roles and required properties (WCAG 4.1.2)"
    }

    fn analyze(&self, markup: &Markup, issues: &mut IssueSet) {
        for element in markup.elements().into_iter().filter(|e| e.has_attr("role")) {
            let result = aria::validate_element(&element.raw);
            if result.errors.is_empty() && result.warnings.is_empty() {
                continue;
            }

            debug!(
                element = %element.name,
                errors = result.errors.len(),
                warnings = result.warnings.len(),
                "ARIA validation findings"
            );

            let fragment = snippet(&element.raw);
            let line = markup.line_of(element.offset);

            for message in &result.errors {
                issues.error(
                    Issue::new("aria-invalid", Severity::Serious, message)
                        .with_wcag("4.1.2", WcagLevel::A)
                        .with_element(&fragment)
                        .with_line(line)
                        .with_suggestion(
                            "Use a valid WAI-ARIA role and supply every state and property it requires",
                        ),
                );
            }

            for message in &result.warnings {
                issues.warning(
                    Issue::new("aria-hidden-focusable", Severity::Serious, message)
                        .with_wcag("4.1.2", WcagLevel::A)
                        .with_element(&fragment)
                        .with_line(line)
                        .with_suggestion(
                            "Remove aria-hidden, or take the element out of the tab order with tabindex=\"-1\"",
                        ),
                );
            }
        }
    }
}
