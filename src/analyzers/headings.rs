// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading structure analyzer - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Headings come from `<h1>`-`<h6>` and from elements with `role="heading"`,
//! whose level is taken from `aria-level` (2 when absent or out of range).
//! The document outline must:
//! - contain at least one heading
//! - start at level 1
//! - never increase by more than one level at a time

use crate::analyzers::{snippet, Analyzer};
use crate::issue::{Issue, IssueSet, Severity, WcagLevel};
use crate::markup::{Element, Markup};
use tracing::debug;

/// Level assumed for `role="heading"` without a usable `aria-level`
const DEFAULT_ARIA_HEADING_LEVEL: u8 = 2;

/// Analyzer for heading hierarchy
pub struct HeadingAnalyzer;

/// A heading in document order
struct Heading {
    level: u8,
    element: Element,
}

impl Analyzer for HeadingAnalyzer {
    fn name(&self) -> &str {
        "Heading Structure Analyzer"
    }

    fn description(&self) -> &str {
        "Checks heading presence and hierarchy (WCAG 1.3.1)"
    }

    fn analyze(&self, markup: &Markup, issues: &mut IssueSet) {
        let headings: Vec<Heading> = markup
            .elements()
            .into_iter()
            .filter_map(|element| heading_level(&element).map(|level| Heading { level, element }))
            .collect();

        debug!(count = headings.len(), "Collected headings");

        let Some(first) = headings.first() else {
            issues.warning(
                Issue::new(
                    "no-headings",
                    Severity::Moderate,
                    "Document has no headings. Headings give the page a navigable structure.",
                )
                .with_wcag("1.3.1", WcagLevel::A)
                .with_suggestion("Add an <h1> describing the page, with <h2>-<h6> for sections"),
            );
            return;
        };

        if first.level != 1 {
            issues.warning(
                Issue::new(
                    "first-heading-not-h1",
                    Severity::Moderate,
                    &format!(
                        "First heading is level {} but should be <h1>.",
                        first.level
                    ),
                )
                .with_wcag("1.3.1", WcagLevel::A)
                .with_element(&snippet(&first.element.raw))
                .with_line(markup.line_of(first.element.offset))
                .with_suggestion("Start the document outline with an <h1>"),
            );
        }

        for pair in headings.windows(2) {
            let (prev, curr) = (&pair[0], &pair[1]);
            if curr.level > prev.level + 1 {
                issues.warning(
                    Issue::new(
                        "heading-skip",
                        Severity::Moderate,
                        &format!(
                            "Heading level skipped: h{} follows h{}. Headings should not skip levels.",
                            curr.level, prev.level
                        ),
                    )
                    .with_wcag("1.3.1", WcagLevel::A)
                    .with_element(&snippet(&curr.element.raw))
                    .with_line(markup.line_of(curr.element.offset))
                    .with_suggestion(&format!(
                        "Use h{} instead, or add the missing intermediate heading",
                        prev.level + 1
                    )),
                );
            }
        }
    }
}

/// Outline level of an element, if it is a heading
fn heading_level(element: &Element) -> Option<u8> {
    if let Some(digit) = element.name.strip_prefix('h') {
        if let Ok(level @ 1..=6) = digit.parse::<u8>() {
            return Some(level);
        }
    }

    let is_heading_role = element
        .attr("role")
        .is_some_and(|r| r.trim().eq_ignore_ascii_case("heading"));
    if !is_heading_role {
        return None;
    }

    let level = element
        .attr("aria-level")
        .and_then(|v| v.trim().parse::<u8>().ok())
        .filter(|l| (1..=6).contains(l))
        .unwrap_or(DEFAULT_ARIA_HEADING_LEVEL);
    Some(level)
}
