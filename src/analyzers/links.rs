// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link purpose analyzer - WCAG 2.4.4 Link Purpose (In Context) (Level A)
//!
//! A link's accessible name comes from `aria-label`, `aria-labelledby`,
//! its text content, the alt text of images inside it, or `title`.
//! Links with no name are errors; links whose name is a generic phrase
//! ("click here", "read more") are warnings.

use crate::analyzers::{snippet, Analyzer};
use crate::issue::{Issue, IssueSet, Severity, WcagLevel};
use crate::markup::{Element, Markup};

/// Phrases that say nothing about the link destination
const VAGUE_LINK_TEXT: &[&str] = &[
    "click here",
    "click",
    "here",
    "read more",
    "more",
    "learn more",
    "more info",
    "info",
    "link",
    "this link",
    "this",
    "details",
    "go",
    "continue",
];

/// Analyzer for link text
pub struct LinkAnalyzer;

/// Where a link's accessible name came from
enum LinkName {
    /// Referenced elsewhere via aria-labelledby; not resolved here
    Referenced,
    Text(String),
    None,
}

impl Analyzer for LinkAnalyzer {
    fn name(&self) -> &str {
        "Link Purpose Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that links have descriptive accessible names (WCAG 2.4.4)"
    }

    fn analyze(&self, markup: &Markup, issues: &mut IssueSet) {
        for link in markup.paired_elements("a") {
            let element = snippet(&link.raw);
            let line = markup.line_of(link.offset);

            match accessible_name(&link) {
                LinkName::Referenced => {}
                LinkName::None => {
                    issues.error(
                        Issue::new(
                            "link-text-missing",
                            Severity::Serious,
                            "Link has no accessible text. Screen readers cannot announce where it goes.",
                        )
                        .with_wcag("2.4.4", WcagLevel::A)
                        .with_element(&element)
                        .with_line(line)
                        .with_suggestion(
                            "Add link text, an aria-label, or alt text on the image inside the link",
                        ),
                    );
                }
                LinkName::Text(name) if is_vague(&name) => {
                    issues.warning(
                        Issue::new(
                            "link-vague-text",
                            Severity::Minor,
                            &format!(
                                "Vague link text \"{}\" does not describe the link destination.",
                                name
                            ),
                        )
                        .with_wcag("2.4.4", WcagLevel::A)
                        .with_element(&element)
                        .with_line(line)
                        .with_suggestion(
                            "Use text that makes sense out of context, e.g. \"Read the accessibility guide\"",
                        ),
                    );
                }
                LinkName::Text(_) => {}
            }
        }
    }
}

fn accessible_name(link: &Element) -> LinkName {
    if let Some(label) = link.attr("aria-label").map(str::trim).filter(|l| !l.is_empty()) {
        return LinkName::Text(label.to_string());
    }
    if link.has_non_empty_attr("aria-labelledby") {
        return LinkName::Referenced;
    }

    let text = link.text();
    if !text.is_empty() {
        return LinkName::Text(text);
    }

    let inner = Markup::new(link.inner.as_deref().unwrap_or_default());
    let alt_text: Vec<String> = inner
        .elements_named("img")
        .iter()
        .filter_map(|img| img.attr("alt"))
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .map(str::to_string)
        .collect();
    if !alt_text.is_empty() {
        return LinkName::Text(alt_text.join(" "));
    }

    match link.attr("title").map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => LinkName::Text(title.to_string()),
        None => LinkName::None,
    }
}

fn is_vague(name: &str) -> bool {
    let normalized = name
        .trim()
        .trim_end_matches(['.', '!', ':', '\u{2026}', '>', '\u{bb}'])
        .trim()
        .to_lowercase();
    VAGUE_LINK_TEXT.contains(&normalized.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<(crate::issue::Bucket, Issue)> {
        let mut issues = IssueSet::new();
        LinkAnalyzer.analyze(&Markup::new(html), &mut issues);
        issues.iter().cloned().collect()
    }

    #[test]
    fn test_descriptive_links() {
        let html = r#"
            <a href="/guide">Read the accessibility guide</a>
            <a href="/home" aria-label="Home page"><svg></svg></a>
            <a href="/logo"><img src="logo.png" alt="Company home"></a>
            <a href="/x" aria-labelledby="x-label"></a>
        "#;
        let found = run(html);
        assert!(found.is_empty(), "Expected no issues, got: {:?}", found);
    }

    #[test]
    fn test_empty_link() {
        let found = run(r#"<a href="/page"></a>"#);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, crate::issue::Bucket::Error);
        assert_eq!(found[0].1.id, "link-text-missing");
        assert!(found[0].1.message.contains("no accessible text"));
    }

    #[test]
    fn test_whitespace_only_link_is_empty() {
        let found = run("<a href=\"/page\">  &nbsp; <span> </span></a>");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].1.id, "link-text-missing");
    }

    #[test]
    fn test_image_link_without_alt() {
        let found = run(r#"<a href="/"><img src="logo.png" alt=""></a>"#);
        assert_eq!(found[0].1.id, "link-text-missing");
    }

    #[test]
    fn test_vague_link_text() {
        let found = run(r#"<a href="/page">click here</a>"#);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, crate::issue::Bucket::Warning);
        assert_eq!(found[0].1.id, "link-vague-text");
        assert!(found[0].1.message.contains("Vague link text"));
    }

    #[test]
    fn test_vague_text_normalized() {
        for text in ["Read More", "here.", "Learn more...", "MORE \u{bb}"] {
            let found = run(&format!("<a href=\"/p\">{}</a>", text));
            assert_eq!(found.len(), 1, "{} should be vague", text);
        }
    }

    #[test]
    fn test_aria_label_overrides_vague_text() {
        let html = r#"<a href="/pricing" aria-label="Read more about pricing">Read more</a>"#;
        assert!(run(html).is_empty());
    }

    #[test]
    fn test_title_as_last_resort() {
        assert!(run(r#"<a href="/x" title="Download the report"></a>"#).is_empty());
    }

    #[test]
    fn test_custom_element_with_a_prefix_is_not_a_link() {
        let html = r#"<a-card><p>Plans</p></a-card><a href="/pricing">See pricing plans</a>"#;
        assert!(run(html).is_empty());
    }

    #[test]
    fn test_custom_element_does_not_swallow_empty_link() {
        let found = run(r#"<a-card>Card</a-card><a href="/x"></a>"#);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].1.id, "link-text-missing");
        assert_eq!(found[0].1.element.as_deref(), Some(r#"<a href="/x">"#));
    }
}
