// SPDX-License-Identifier: PMPL-1.0-or-later
//! Issue and report types produced by the accessibility checker.
//!
//! An [`Issue`] is one detected defect. Rules collect issues into an
//! [`IssueSet`], tagging each with the [`Bucket`] its rule definition puts it
//! in; the checker then folds the set into an immutable [`CheckResult`].

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Severity of an issue, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Content is unusable for some users
    Critical,
    /// Content is very hard to use for some users
    Serious,
    /// Content is harder to use than it should be
    Moderate,
    /// Annoyance or best-practice deviation
    Minor,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::Serious => write!(f, "serious"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Minor => write!(f, "minor"),
        }
    }
}

/// WCAG conformance level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Level A - minimum conformance
    A,
    /// Level AA - standard conformance
    #[default]
    AA,
    /// Level AAA - enhanced conformance
    AAA,
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::A => write!(f, "A"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

impl FromStr for WcagLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(WcagLevel::A),
            "AA" => Ok(WcagLevel::AA),
            "AAA" => Ok(WcagLevel::AAA),
            _ => Err(Error::UnknownWcagLevel(s.to_string())),
        }
    }
}

/// Which part of the report an issue lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    /// Conformance-blocking
    Error,
    /// Advisory
    Warning,
    /// Informational, outside the targeted conformance level
    Info,
}

/// Understanding-document slugs for the success criteria the rules cite
const CRITERION_SLUGS: &[(&str, &str)] = &[
    ("1.1.1", "non-text-content"),
    ("1.3.1", "info-and-relationships"),
    ("1.4.3", "contrast-minimum"),
    ("1.4.6", "contrast-enhanced"),
    ("2.4.3", "focus-order"),
    ("2.4.4", "link-purpose-in-context"),
    ("3.1.1", "language-of-page"),
    ("3.3.2", "labels-or-instructions"),
    ("4.1.2", "name-role-value"),
];

fn help_url_for(criterion: &str) -> Option<String> {
    CRITERION_SLUGS
        .iter()
        .find(|(c, _)| *c == criterion)
        .map(|(_, slug)| format!("https://www.w3.org/WAI/WCAG21/Understanding/{}.html", slug))
}

/// One detected (or potential) accessibility defect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Stable rule identifier (e.g., "img-alt-missing")
    pub id: String,
    /// Severity tier
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Level of the cited success criterion
    pub wcag_level: WcagLevel,
    /// Success criterion reference (e.g., "1.1.1")
    pub wcag_criteria: String,
    /// Offending markup fragment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    /// 1-indexed line of the fragment in the checked markup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Remediation text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Reference link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
}

impl Issue {
    /// Create a new issue citing no criterion yet
    pub fn new(id: &str, severity: Severity, message: &str) -> Self {
        Self {
            id: id.to_string(),
            severity,
            message: message.to_string(),
            wcag_level: WcagLevel::A,
            wcag_criteria: String::new(),
            element: None,
            line: None,
            suggestion: None,
            help_url: None,
        }
    }

    /// Set the WCAG criterion and level; fills in the help URL when known
    pub fn with_wcag(mut self, criterion: &str, level: WcagLevel) -> Self {
        self.wcag_criteria = criterion.to_string();
        self.wcag_level = level;
        self.help_url = help_url_for(criterion);
        self
    }

    /// Set the offending element
    pub fn with_element(mut self, element: &str) -> Self {
        self.element = Some(element.to_string());
        self
    }

    /// Set line number
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Set suggestion
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

/// Issues collected by the rules, each tagged with its bucket
#[derive(Debug, Clone, Default)]
pub struct IssueSet {
    entries: Vec<(Bucket, Issue)>,
}

impl IssueSet {
    /// Create empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a conformance-blocking issue
    pub fn error(&mut self, issue: Issue) {
        self.entries.push((Bucket::Error, issue));
    }

    /// Record an advisory issue
    pub fn warning(&mut self, issue: Issue) {
        self.entries.push((Bucket::Warning, issue));
    }

    /// Record an informational issue
    pub fn info(&mut self, issue: Issue) {
        self.entries.push((Bucket::Info, issue));
    }

    /// Total count
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over bucketed issues in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(Bucket, Issue)> {
        self.entries.iter()
    }
}

/// Issue counts per severity across all buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub critical: usize,
    pub serious: usize,
    pub moderate: usize,
    pub minor: usize,
}

impl Summary {
    fn count(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::Serious => self.serious += 1,
            Severity::Moderate => self.moderate += 1,
            Severity::Minor => self.minor += 1,
        }
    }
}

/// Aggregate report for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// True iff there are no errors
    pub passed: bool,
    /// WCAG level the document was checked against
    pub level: WcagLevel,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub info: Vec<Issue>,
    /// errors + warnings + info
    pub total_issues: usize,
    pub summary: Summary,
}

impl CheckResult {
    /// Fold a set of bucketed issues into a report for `level`.
    ///
    /// Issues citing a criterion stricter than `level` are moved to the
    /// info bucket: they are reported, but do not affect conformance at
    /// the targeted level.
    pub fn from_issues(issues: IssueSet, level: WcagLevel) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut info = Vec::new();
        let mut summary = Summary::default();

        for (bucket, issue) in issues.entries {
            summary.count(issue.severity);
            let bucket = if issue.wcag_level > level { Bucket::Info } else { bucket };
            match bucket {
                Bucket::Error => errors.push(issue),
                Bucket::Warning => warnings.push(issue),
                Bucket::Info => info.push(issue),
            }
        }

        let total_issues = errors.len() + warnings.len() + info.len();

        Self {
            passed: errors.is_empty(),
            level,
            errors,
            warnings,
            info,
            total_issues,
            summary,
        }
    }

    /// Iterate over every issue in report order (errors, warnings, info)
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.errors.iter().chain(&self.warnings).chain(&self.info)
    }

    /// Find issues by rule id across all buckets
    pub fn by_id(&self, id: &str) -> Vec<&Issue> {
        self.issues().filter(|i| i.id == id).collect()
    }

    /// Get issues by severity across all buckets
    pub fn by_severity(&self, severity: Severity) -> Vec<&Issue> {
        self.issues().filter(|i| i.severity == severity).collect()
    }
}
