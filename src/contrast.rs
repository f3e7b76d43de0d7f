// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast calculator - WCAG 1.4.3 Contrast (Minimum, AA) and 1.4.6 Contrast (Enhanced, AAA)
//!
//! Pure WCAG 2.x luminance math over 6-digit hex colors.
//! - AA: 4.5:1 for normal text, 3:1 for large text
//! - AAA: 7:1 for normal text, 4.5:1 for large text
//!
//! Text is large at 18pt, or at 14pt when bold.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const AA_NORMAL: f64 = 4.5;
pub const AA_LARGE: f64 = 3.0;
pub const AAA_NORMAL: f64 = 7.0;
pub const AAA_LARGE: f64 = 4.5;

/// Default font size (pt) when the caller gives none
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Best level a color pair reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContrastLevel {
    AAA,
    AA,
    Fail,
}

impl std::fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContrastLevel::AAA => write!(f, "AAA"),
            ContrastLevel::AA => write!(f, "AA"),
            ContrastLevel::Fail => write!(f, "Fail"),
        }
    }
}

/// Contrast verdict for one foreground/background pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorContrastResult {
    /// Contrast ratio rounded to 2 decimal places
    pub ratio: f64,
    #[serde(rename = "passesAA")]
    pub passes_aa: bool,
    #[serde(rename = "passesAAA")]
    pub passes_aaa: bool,
    #[serde(rename = "wcagLevel")]
    pub wcag_level: ContrastLevel,
}

/// Parse a 6-digit hex color, with or without a leading `#`, any case
pub fn parse_hex(color: &str) -> Result<Rgb> {
    let trimmed = color.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidColorFormat(color.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidColorFormat(color.to_string()))
    };

    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Calculate relative luminance per WCAG 2.x
/// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let srgb = [rgb.r, rgb.g, rgb.b].map(|c| {
        let v = c as f64 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    });
    0.2126 * srgb[0] + 0.7152 * srgb[1] + 0.0722 * srgb[2]
}

/// Unrounded contrast ratio between two colors, in 1.0..=21.0
pub fn contrast_ratio(fg: Rgb, bg: Rgb) -> f64 {
    let l1 = relative_luminance(fg);
    let l2 = relative_luminance(bg);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Contrast ratio between two hex colors, rounded to 2 decimal places.
///
/// Symmetric in its arguments; identical colors give 1, black and white 21.
pub fn calculate_contrast_ratio(fg: &str, bg: &str) -> Result<f64> {
    Ok(round2(contrast_ratio(parse_hex(fg)?, parse_hex(bg)?)))
}

/// Whether text of this size (pt) and weight counts as large
pub fn is_large_text(font_size: f64, bold: bool) -> bool {
    font_size >= 18.0 || (font_size >= 14.0 && bold)
}

/// (AA, AAA) thresholds for text of this size and weight
pub fn thresholds(font_size: f64, bold: bool) -> (f64, f64) {
    if is_large_text(font_size, bold) {
        (AA_LARGE, AAA_LARGE)
    } else {
        (AA_NORMAL, AAA_NORMAL)
    }
}

/// Check a color pair against the AA and AAA thresholds for the text size.
///
/// The pass flags compare the unrounded ratio. Only the reported ratio is
/// rounded, so a pair at 4.499:1 reports 4.5 and still fails 4.5:1.
pub fn check_contrast(fg: &str, bg: &str, font_size: f64, bold: bool) -> Result<ColorContrastResult> {
    let exact = contrast_ratio(parse_hex(fg)?, parse_hex(bg)?);
    let (aa, aaa) = thresholds(font_size, bold);

    let passes_aa = exact >= aa;
    let passes_aaa = exact >= aaa;
    let wcag_level = if passes_aaa {
        ContrastLevel::AAA
    } else if passes_aa {
        ContrastLevel::AA
    } else {
        ContrastLevel::Fail
    };

    Ok(ColorContrastResult {
        ratio: round2(exact),
        passes_aa,
        passes_aaa,
        wcag_level,
    })
}

/// [`check_contrast`] for 16pt regular text
pub fn check_contrast_default(fg: &str, bg: &str) -> Result<ColorContrastResult> {
    check_contrast(fg, bg, DEFAULT_FONT_SIZE, false)
}

/// Human-readable minimum and enhanced ratios for the text size and weight
pub fn recommended_ratio(font_size: f64, bold: bool) -> String {
    let (aa, aaa) = thresholds(font_size, bold);
    let kind = if is_large_text(font_size, bold) { "large" } else { "normal" };
    format!(
        "Minimum {}:1 (AA), enhanced {}:1 (AAA) for {} text",
        aa, aaa, kind
    )
}
