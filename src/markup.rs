// SPDX-License-Identifier: PMPL-1.0-or-later
//! Targeted markup extraction for rule evaluation.
//!
//! This is not an HTML parser. It finds opening tags, their attributes and,
//! for paired elements, their inner content using regular expressions. That
//! is enough for every structural rule; a conformant parser could replace
//! this module without changing the rules that call it.
//!
//! Comments and the bodies of `<script>`/`<style>` blocks are blanked out
//! before matching. Blanking keeps byte offsets intact, so line numbers
//! computed against the masked text hold for the original input.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>(.*?)</script\s*>").expect("valid regex"));

static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>(.*?)</style\s*>").expect("valid regex"));

/// An opening tag: name, then attribute text with quoted values skipped whole
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<([a-zA-Z][a-zA-Z0-9-]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#).expect("valid regex")
});

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z_:@][-a-zA-Z0-9_:.@]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>=`]+)))?"#)
        .expect("valid regex")
});

static INNER_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// An element found in markup, described by its opening tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lower-cased tag name
    pub name: String,
    /// Attributes with lower-cased names; valueless attributes map to ""
    pub attrs: BTreeMap<String, String>,
    /// The opening tag exactly as written
    pub raw: String,
    /// Byte offset of the opening tag in the input
    pub offset: usize,
    /// Content between the opening and closing tag, for paired lookups
    pub inner: Option<String>,
}

impl Element {
    /// Attribute value, if the attribute is present
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whether the attribute is present, with any value
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Whether the attribute is present with a non-blank value
    pub fn has_non_empty_attr(&self, name: &str) -> bool {
        self.attr(name).is_some_and(|v| !v.trim().is_empty())
    }

    /// Visible text of the inner content, tags stripped and whitespace collapsed
    pub fn text(&self) -> String {
        self.inner.as_deref().map(text_content).unwrap_or_default()
    }
}

/// Markup prepared for extraction
#[derive(Debug, Clone)]
pub struct Markup {
    masked: String,
}

impl Markup {
    /// Prepare markup text for extraction
    pub fn new(source: &str) -> Self {
        let mut masked = source.to_string();
        blank_matches(&mut masked, &COMMENT_RE, 0);
        blank_matches(&mut masked, &SCRIPT_RE, 1);
        blank_matches(&mut masked, &STYLE_RE, 1);
        Self { masked }
    }

    /// Every opening tag in document order
    pub fn elements(&self) -> Vec<Element> {
        TAG_RE
            .captures_iter(&self.masked)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(Element {
                    name: caps[1].to_lowercase(),
                    attrs: parse_attributes(&caps[2]),
                    raw: whole.as_str().to_string(),
                    offset: whole.start(),
                    inner: None,
                })
            })
            .collect()
    }

    /// Opening tags with the given name, in document order
    pub fn elements_named(&self, name: &str) -> Vec<Element> {
        let name = name.to_lowercase();
        self.elements().into_iter().filter(|e| e.name == name).collect()
    }

    /// Paired elements with the given name, with their inner content.
    ///
    /// The name must be followed by whitespace or `>`, so `a` does not match
    /// `<abbr>` or a custom element such as `<a-card>`.
    ///
    /// Nesting of the same element is not tracked: the inner content runs to
    /// the first matching closing tag.
    pub fn paired_elements(&self, name: &str) -> Vec<Element> {
        let pattern = format!(
            r#"(?is)<{0}((?:\s(?:[^>"']|"[^"]*"|'[^']*')*)?)>(.*?)</{0}\s*>"#,
            regex::escape(name)
        );
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(_) => return Vec::new(),
        };

        re.captures_iter(&self.masked)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let open_end = caps.get(1)?.end() + 1;
                Some(Element {
                    name: name.to_lowercase(),
                    attrs: parse_attributes(&caps[1]),
                    raw: self.masked[whole.start()..open_end].to_string(),
                    offset: whole.start(),
                    inner: Some(caps[2].to_string()),
                })
            })
            .collect()
    }

    /// 1-indexed line containing the byte offset
    pub fn line_of(&self, offset: usize) -> usize {
        let end = offset.min(self.masked.len());
        self.masked.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
    }
}

/// Parse the attribute text of an opening tag
pub fn parse_attributes(text: &str) -> BTreeMap<String, String> {
    let mut attrs = BTreeMap::new();
    for caps in ATTR_RE.captures_iter(text) {
        let name = caps[1].to_lowercase();
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        // First occurrence wins, as in HTML
        attrs.entry(name).or_insert(value);
    }
    attrs
}

/// Strip tags from a fragment and collapse whitespace
pub fn text_content(fragment: &str) -> String {
    let stripped = INNER_TAG_RE.replace_all(fragment, " ");
    let decoded = stripped.replace("&nbsp;", " ");
    WHITESPACE_RE.replace_all(decoded.trim(), " ").into_owned()
}

/// Replace every character of the chosen capture group with spaces,
/// preserving newlines and byte length
fn blank_matches(text: &mut String, re: &Regex, group: usize) {
    let ranges: Vec<(usize, usize)> = re
        .captures_iter(text)
        .filter_map(|caps| caps.get(group).map(|m| (m.start(), m.end())))
        .collect();

    for (start, end) in ranges {
        let blanked: String = text[start..end]
            .chars()
            .map(|c| if c == '\n' { "\n".to_string() } else { " ".repeat(c.len_utf8()) })
            .collect();
        text.replace_range(start..end, &blanked);
    }
}
