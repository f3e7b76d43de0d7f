// SPDX-License-Identifier: PMPL-1.0-or-later
//! Structural accessibility rules.
//!
//! Each analyzer module implements one rule of the battery: a specific WCAG
//! criterion or group of related criteria. Analyzers read the extracted
//! markup and record issues into an [`IssueSet`], choosing the bucket each
//! issue belongs in. They never fail: a rule that finds nothing to flag
//! records nothing.

pub mod aria_usage;
pub mod forms;
pub mod headings;
pub mod images;
pub mod inline_contrast;
pub mod keyboard;
pub mod landmarks;
pub mod language;
pub mod links;

use crate::issue::IssueSet;
use crate::markup::Markup;

/// Longest element fragment carried on an issue
const MAX_SNIPPET_CHARS: usize = 160;

/// Trait implemented by all analyzers
pub trait Analyzer: Send + Sync {
    /// Human-readable name of this analyzer
    fn name(&self) -> &str;

    /// Short description of what this analyzer checks
    fn description(&self) -> &str;

    /// Analyze a document and record issues
    fn analyze(&self, markup: &Markup, issues: &mut IssueSet);
}

/// The full rule battery, in report order
pub fn default_analyzers() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(images::ImageAnalyzer),
        Box::new(headings::HeadingAnalyzer),
        Box::new(forms::FormAnalyzer),
        Box::new(links::LinkAnalyzer),
        Box::new(landmarks::LandmarkAnalyzer),
        Box::new(language::LanguageAnalyzer),
        Box::new(keyboard::TabOrderAnalyzer),
        Box::new(aria_usage::AriaUsageAnalyzer),
        Box::new(inline_contrast::InlineContrastAnalyzer),
    ]
}

/// Shorten an element fragment for display on an issue
pub(crate) fn snippet(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_SNIPPET_CHARS {
        collapsed
    } else {
        let cut: String = collapsed.chars().take(MAX_SNIPPET_CHARS).collect();
        format!("{}...", cut)
    }
}
