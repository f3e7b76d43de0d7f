// SPDX-License-Identifier: PMPL-1.0-or-later
//! wcag-engine - rule-based WCAG accessibility analysis
//!
//! Three independent parts:
//!
//! - **Structural checker** ([`AccessibilityChecker`]): runs a battery of
//!   rules over HTML markup and produces a [`CheckResult`] with issues
//!   bucketed as errors, warnings and info, plus a severity summary.
//! - **ARIA validator** ([`aria`]): stateless validation of roles and
//!   `aria-*` attributes against the WAI-ARIA role set.
//! - **Contrast calculator** ([`contrast`]): WCAG 2.x luminance math and
//!   AA/AAA pass flags for foreground/background hex color pairs.
//!
//! ## Rules
//!
//! - **Images** (1.1.1): alt attribute present; empty alt only when decorative
//! - **Headings** (1.3.1): present, starting at h1, no skipped levels
//! - **Forms** (3.3.2): every control has a label
//! - **Links** (2.4.4): accessible name present and descriptive
//! - **Landmarks** (1.3.1): a main landmark exists
//! - **Language** (3.1.1): `<html>` declares `lang`
//! - **Tab order** (2.4.3): no positive tabindex
//! - **ARIA** (4.1.2): roles and required properties are valid
//! - **Inline contrast** (1.4.3/1.4.6): inline style colors meet the ratios
//!
//! ```
//! use wcag_engine::{AccessibilityChecker, WcagLevel};
//!
//! let checker = AccessibilityChecker::new(WcagLevel::AA);
//! let result = checker.check_html(r#"<img src="chart.png">"#);
//! assert!(!result.passed);
//! assert_eq!(result.errors[0].id, "img-alt-missing");
//! ```

pub mod analyzers;
pub mod aria;
pub mod checker;
pub mod config;
pub mod contrast;
pub mod error;
pub mod issue;
pub mod markup;
pub mod report;
pub mod scanner;

pub use checker::AccessibilityChecker;
pub use config::CheckerConfig;
pub use contrast::{calculate_contrast_ratio, check_contrast, check_contrast_default, ColorContrastResult};
pub use error::{Error, Result};
pub use issue::{CheckResult, Issue, Severity, Summary, WcagLevel};
