// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text analyzer - WCAG 1.1.1 Non-text Content (Level A)
//!
//! Checks that all `<img>` elements have appropriate alt attributes:
//! - Every `<img>` must have an `alt` attribute (not missing)
//! - `alt=""` is only correct for decorative images, which must say so
//!   with `role="presentation"` or `role="none"`

use crate::analyzers::{snippet, Analyzer};
use crate::issue::{Issue, IssueSet, Severity, WcagLevel};
use crate::markup::{Element, Markup};

/// Roles that mark an image as decorative
const DECORATIVE_ROLES: &[&str] = &["presentation", "none"];

/// Analyzer for image alt text compliance
pub struct ImageAnalyzer;

impl Analyzer for ImageAnalyzer {
    fn name(&self) -> &str {
        "Image Alt Text Analyzer"
    }

    fn description(&self) -> &str {
        "Checks <img> elements for alt text (WCAG 1.1.1)"
    }

    fn analyze(&self, markup: &Markup, issues: &mut IssueSet) {
        for img in markup.elements_named("img") {
            let line = markup.line_of(img.offset);
            let element = snippet(&img.raw);

            match img.attr("alt") {
                None => {
                    issues.error(
                        Issue::new(
                            "img-alt-missing",
                            Severity::Critical,
                            "Image is missing alt attribute. Every <img> must have an alt attribute.",
                        )
                        .with_wcag("1.1.1", WcagLevel::A)
                        .with_element(&element)
                        .with_line(line)
                        .with_suggestion(
                            "Add alt=\"description\" for informative images, or alt=\"\" with role=\"presentation\" for decorative images",
                        ),
                    );
                }
                Some(alt) if alt.trim().is_empty() && !is_decorative(&img) => {
                    issues.warning(
                        Issue::new(
                            "img-empty-alt",
                            Severity::Minor,
                            "Image has empty alt text but is not marked decorative. Empty alt is only correct for decorative images.",
                        )
                        .with_wcag("1.1.1", WcagLevel::A)
                        .with_element(&element)
                        .with_line(line)
                        .with_suggestion(
                            "Describe the image in alt, or add role=\"presentation\" if it is purely decorative",
                        ),
                    );
                }
                Some(_) => {}
            }
        }
    }
}

fn is_decorative(img: &Element) -> bool {
    img.attr("role")
        .map(|r| r.trim().to_lowercase())
        .is_some_and(|r| DECORATIVE_ROLES.contains(&r.as_str()))
}
