// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form label analyzer - WCAG 3.3.2 Labels or Instructions (Level A)
//!
//! Every `<input>`, `<select>` and `<textarea>` needs an accessible name:
//! a `<label for>` pointing at its `id`, a wrapping `<label>`, or a
//! non-empty `aria-label`/`aria-labelledby`.

use crate::analyzers::{snippet, Analyzer};
use crate::issue::{Issue, IssueSet, Severity, WcagLevel};
use crate::markup::{Element, Markup};
use std::collections::HashSet;
use std::ops::Range;

/// Elements that need a label
const FORM_CONTROLS: &[&str] = &["input", "select", "textarea"];

/// Input types that are never presented to the user
const HIDDEN_INPUT_TYPES: &[&str] = &["hidden"];

/// Button-like input types, named by their value or a browser default
const BUTTON_INPUT_TYPES: &[&str] = &["submit", "reset", "button"];

/// Analyzer for form control labels
pub struct FormAnalyzer;

impl Analyzer for FormAnalyzer {
    fn name(&self) -> &str {
        "Form Label Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that form controls have labels (WCAG 3.3.2)"
    }

    fn analyze(&self, markup: &Markup, issues: &mut IssueSet) {
        let label_targets: HashSet<String> = markup
            .elements_named("label")
            .iter()
            .filter_map(|label| label.attr("for"))
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();

        let wrapping_labels: Vec<Range<usize>> = markup
            .paired_elements("label")
            .iter()
            .map(|label| {
                let inner_len = label.inner.as_ref().map_or(0, String::len);
                label.offset..label.offset + label.raw.len() + inner_len
            })
            .collect();

        for control in markup.elements() {
            if !FORM_CONTROLS.contains(&control.name.as_str()) {
                continue;
            }

            let input_type = control
                .attr("type")
                .map(|t| t.trim().to_lowercase())
                .unwrap_or_default();
            if control.name == "input" && exempt_input_type(&control, &input_type) {
                continue;
            }

            let labelled_by_for = control
                .attr("id")
                .map(str::trim)
                .is_some_and(|id| label_targets.contains(id));
            let wrapped = wrapping_labels.iter().any(|r| r.contains(&control.offset));
            let aria_named =
                control.has_non_empty_attr("aria-label") || control.has_non_empty_attr("aria-labelledby");

            if labelled_by_for || wrapped || aria_named {
                continue;
            }

            let kind = if control.name == "input" && !input_type.is_empty() {
                format!("<input type=\"{}\">", input_type)
            } else {
                format!("<{}>", control.name)
            };

            issues.error(
                Issue::new(
                    "input-label-missing",
                    Severity::Serious,
                    &format!(
                        "Form control {} has no associated label. Users of assistive technology cannot tell what to enter.",
                        kind
                    ),
                )
                .with_wcag("3.3.2", WcagLevel::A)
                .with_element(&snippet(&control.raw))
                .with_line(markup.line_of(control.offset))
                .with_suggestion(
                    "Add <label for=\"id\">, wrap the control in a <label>, or use aria-label/aria-labelledby",
                ),
            );
        }
    }
}

/// Input types that carry their own name or are not shown
fn exempt_input_type(control: &Element, input_type: &str) -> bool {
    if HIDDEN_INPUT_TYPES.contains(&input_type) {
        return true;
    }
    if BUTTON_INPUT_TYPES.contains(&input_type) {
        // A button input with no value still gets a browser default name,
        // except type="button" which has none
        return input_type != "button" || control.has_non_empty_attr("value");
    }
    if input_type == "image" {
        return control.has_non_empty_attr("alt");
    }
    false
}
