// SPDX-License-Identifier: PMPL-1.0-or-later
//! Inline style contrast analyzer - WCAG 1.4.3 Contrast (Minimum, AA) and
//! 1.4.6 Contrast (Enhanced, AAA)
//!
//! Elements whose `style` attribute sets both `color` and a background
//! color are measured with the contrast calculator. Size and weight come
//! from `font-size` (px or pt) and `font-weight` in the same attribute.
//! Colors that cannot be resolved (variables, `inherit`, gradients) are
//! skipped rather than guessed.

use crate::analyzers::{snippet, Analyzer};
use crate::contrast;
use crate::issue::{Issue, IssueSet, Severity, WcagLevel};
use crate::markup::Markup;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})").expect("valid regex")
});

static FONT_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?)\s*(px|pt)$").expect("valid regex"));

/// Analyzer for inline style color contrast
pub struct InlineContrastAnalyzer;

/// Color-relevant declarations of one style attribute
#[derive(Debug, Default, PartialEq)]
struct InlineStyle {
    color: Option<String>,
    background: Option<String>,
    font_size_pt: Option<f64>,
    bold: bool,
}

impl Analyzer for InlineContrastAnalyzer {
    fn name(&self) -> &str {
        "Inline Contrast Analyzer"
    }

    fn description(&self) -> &str {
        "Checks color contrast of inline styles (WCAG 1.4.3, 1.4.6)"
    }

    fn analyze(&self, markup: &Markup, issues: &mut IssueSet) {
        for element in markup.elements() {
            let Some(style) = element.attr("style") else {
                continue;
            };
            let parsed = parse_style(style);
            let (Some(fg), Some(bg)) = (&parsed.color, &parsed.background) else {
                continue;
            };

            let font_size = parsed.font_size_pt.unwrap_or(contrast::DEFAULT_FONT_SIZE);
            let result = match contrast::check_contrast(fg, bg, font_size, parsed.bold) {
                Ok(result) => result,
                Err(e) => {
                    debug!(error = %e, "Skipping unmeasurable inline style");
                    continue;
                }
            };

            let fragment = snippet(&element.raw);
            let line = markup.line_of(element.offset);
            let recommendation = contrast::recommended_ratio(font_size, parsed.bold);

            if !result.passes_aa {
                issues.error(
                    Issue::new(
                        "color-contrast",
                        Severity::Serious,
                        &format!(
                            "Insufficient color contrast {}:1 between {} and {}.",
                            result.ratio, fg, bg
                        ),
                    )
                    .with_wcag("1.4.3", WcagLevel::AA)
                    .with_element(&fragment)
                    .with_line(line)
                    .with_suggestion(&recommendation),
                );
            } else if !result.passes_aaa {
                issues.warning(
                    Issue::new(
                        "color-contrast-enhanced",
                        Severity::Minor,
                        &format!(
                            "Color contrast {}:1 between {} and {} meets AA but not AAA.",
                            result.ratio, fg, bg
                        ),
                    )
                    .with_wcag("1.4.6", WcagLevel::AAA)
                    .with_element(&fragment)
                    .with_line(line)
                    .with_suggestion(&recommendation),
                );
            }
        }
    }
}

fn parse_style(style: &str) -> InlineStyle {
    let mut parsed = InlineStyle::default();

    for declaration in style.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim().to_lowercase();
        let value = value.trim().trim_end_matches("!important").trim().to_lowercase();

        match property.as_str() {
            "color" => parsed.color = parse_color(&value),
            "background-color" => parsed.background = parse_color(&value),
            "background" => {
                if let Some(color) = parse_color(&value).or_else(|| {
                    value.split_whitespace().find_map(parse_color)
                }) {
                    parsed.background = Some(color);
                }
            }
            "font-size" => parsed.font_size_pt = parse_font_size(&value),
            "font-weight" => parsed.bold = is_bold(&value),
            _ => {}
        }
    }

    parsed
}

/// Resolve a CSS color to `#rrggbb`
fn parse_color(value: &str) -> Option<String> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        return match hex.len() {
            3 => Some(format!("#{}", hex.chars().flat_map(|c| [c, c]).collect::<String>())),
            6 => Some(format!("#{}", hex)),
            _ => None,
        };
    }

    if let Some(caps) = RGB_RE.captures(value) {
        let r: u8 = caps[1].parse().ok()?;
        let g: u8 = caps[2].parse().ok()?;
        let b: u8 = caps[3].parse().ok()?;
        return Some(format!("#{:02x}{:02x}{:02x}", r, g, b));
    }

    named_color(value).map(str::to_string)
}

fn named_color(name: &str) -> Option<&'static str> {
    match name {
        "white" => Some("#ffffff"),
        "black" => Some("#000000"),
        "red" => Some("#ff0000"),
        "green" => Some("#008000"),
        "blue" => Some("#0000ff"),
        "yellow" => Some("#ffff00"),
        "gray" | "grey" => Some("#808080"),
        "silver" => Some("#c0c0c0"),
        "maroon" => Some("#800000"),
        "olive" => Some("#808000"),
        "lime" => Some("#00ff00"),
        "aqua" | "cyan" => Some("#00ffff"),
        "teal" => Some("#008080"),
        "navy" => Some("#000080"),
        "fuchsia" | "magenta" => Some("#ff00ff"),
        "purple" => Some("#800080"),
        "orange" => Some("#ffa500"),
        _ => None,
    }
}

/// Font size in points; other units are not resolved
fn parse_font_size(value: &str) -> Option<f64> {
    let caps = FONT_SIZE_RE.captures(value)?;
    let size: f64 = caps[1].parse().ok()?;
    match &caps[2] {
        "px" => Some(size * 0.75),
        _ => Some(size),
    }
}

fn is_bold(value: &str) -> bool {
    match value {
        "bold" | "bolder" => true,
        other => other.parse::<u16>().is_ok_and(|w| w >= 700),
    }
}
