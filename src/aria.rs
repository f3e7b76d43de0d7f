// SPDX-License-Identifier: PMPL-1.0-or-later
//! ARIA validator - WCAG 4.1.2 Name, Role, Value (Level A)
//!
//! Stateless validation of ARIA roles and attributes, independent of any
//! document. The role taxonomy and the required-attribute matrix are plain
//! lookup tables; adding a role or a requirement is a table edit.
//!
//! - Roles must belong to the WAI-ARIA role set
//! - Roles with required states/properties must carry them
//! - `aria-checked` and `aria-expanded` must hold allowed tokens
//! - `aria-hidden="true"` must not be combined with `tabindex="0"`

use crate::markup::{self, Markup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ARIA attributes keyed by lower-cased attribute name
pub type AriaAttributes = BTreeMap<String, String>;

/// WAI-ARIA role names
const VALID_ROLES: &[&str] = &[
    "alert", "alertdialog", "application", "article", "banner", "button",
    "checkbox", "columnheader", "combobox", "complementary", "contentinfo",
    "definition", "dialog", "directory", "document", "feed", "figure", "form",
    "grid", "gridcell", "group", "heading", "img", "link", "list", "listbox",
    "listitem", "log", "main", "marquee", "math", "menu", "menubar", "menuitem",
    "menuitemcheckbox", "menuitemradio", "navigation", "none", "note",
    "option", "presentation", "progressbar", "radio", "radiogroup", "region",
    "row", "rowgroup", "rowheader", "scrollbar", "search", "searchbox",
    "separator", "slider", "spinbutton", "status", "switch", "tab", "table",
    "tablist", "tabpanel", "term", "textbox", "timer", "toolbar", "tooltip",
    "tree", "treegrid", "treeitem",
];

/// Required states and properties per role
const REQUIRED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("checkbox", &["aria-checked"]),
    ("combobox", &["aria-expanded", "aria-controls"]),
    ("radio", &["aria-checked"]),
    ("scrollbar", &["aria-valuenow", "aria-valuemin", "aria-valuemax"]),
    ("slider", &["aria-valuenow", "aria-valuemin", "aria-valuemax"]),
    ("spinbutton", &["aria-valuenow", "aria-valuemin", "aria-valuemax"]),
    ("switch", &["aria-checked"]),
    ("tab", &["aria-selected"]),
    ("tabpanel", &["aria-labelledby"]),
];

/// Allowed tokens for attributes with a closed value domain
const VALUE_DOMAINS: &[(&str, &[&str])] = &[
    ("aria-checked", &["true", "false", "mixed"]),
    ("aria-expanded", &["true", "false"]),
];

/// Outcome of validating a role, an attribute set or an element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AriaValidationResult {
    /// True iff `errors` is empty
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl AriaValidationResult {
    fn from_parts(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    fn merge(&mut self, other: AriaValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.is_valid = self.errors.is_empty();
    }
}

/// Whether `role` names a WAI-ARIA role (case-insensitive)
pub fn is_valid_role(role: &str) -> bool {
    let role = role.trim().to_lowercase();
    VALID_ROLES.contains(&role.as_str())
}

/// Required states and properties for `role`; empty for roles with none
pub fn required_attributes(role: &str) -> &'static [&'static str] {
    let role = role.trim().to_lowercase();
    REQUIRED_ATTRIBUTES
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, attrs)| *attrs)
        .unwrap_or(&[])
}

/// Validate a role attribute value
pub fn validate_role(role: &str) -> AriaValidationResult {
    if role.trim().is_empty() {
        return AriaValidationResult::from_parts(
            vec!["Role attribute is empty".to_string()],
            Vec::new(),
        );
    }

    if !is_valid_role(role) {
        return AriaValidationResult::from_parts(
            vec![format!("Invalid ARIA role: \"{}\"", role)],
            Vec::new(),
        );
    }

    AriaValidationResult::from_parts(Vec::new(), Vec::new())
}

/// Validate ARIA attributes against the requirements of `role`.
///
/// `attributes` may also carry non-ARIA attributes such as `tabindex`; they
/// take part in the cross-attribute checks.
pub fn validate_aria_attributes(role: &str, attributes: &AriaAttributes) -> AriaValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for attr in required_attributes(role) {
        if non_empty(attributes, attr).is_none() {
            errors.push(format!(
                "Missing required ARIA property \"{}\" for role \"{}\"",
                attr, role
            ));
        }
    }

    for (attr, allowed) in VALUE_DOMAINS {
        if let Some(value) = non_empty(attributes, attr) {
            if !allowed.contains(&value.as_str()) {
                errors.push(format!(
                    "Invalid {} value: \"{}\". Must be one of: {}",
                    attr,
                    value,
                    allowed.iter().map(|v| format!("\"{}\"", v)).collect::<Vec<_>>().join(", ")
                ));
            }
        }
    }

    let hidden = attributes.get("aria-hidden").is_some_and(|v| v == "true");
    let focusable = attributes.get("tabindex").is_some_and(|v| v.trim() == "0");
    if hidden && focusable {
        warnings.push(
            "Element with aria-hidden=\"true\" should not be focusable (tabindex=\"0\")".to_string(),
        );
    }

    AriaValidationResult::from_parts(errors, warnings)
}

fn non_empty<'a>(attributes: &'a AriaAttributes, name: &str) -> Option<&'a String> {
    attributes.get(name).filter(|v| !v.is_empty())
}

/// Attributes of the first opening tag in `element`; a bare attribute
/// list such as `role="tab" aria-selected="true"` is parsed as-is
fn element_attributes(element: &str) -> BTreeMap<String, String> {
    match Markup::new(element).elements().into_iter().next() {
        Some(tag) => tag.attrs,
        None => markup::parse_attributes(element),
    }
}

/// Pull every `aria-*` attribute out of a raw element string
pub fn extract_aria_attributes(element: &str) -> AriaAttributes {
    element_attributes(element)
        .into_iter()
        .filter(|(name, _)| name.starts_with("aria-"))
        .collect()
}

/// Pull the `role` attribute value out of a raw element string
pub fn extract_role(element: &str) -> Option<String> {
    element_attributes(element).remove("role")
}

/// Validate the ARIA usage of a raw element string.
///
/// An element without a `role` attribute makes no role claim and is valid.
pub fn validate_element(element: &str) -> AriaValidationResult {
    let mut result = AriaValidationResult::from_parts(Vec::new(), Vec::new());

    let mut attributes = element_attributes(element);
    let Some(role) = attributes.remove("role") else {
        return result;
    };

    let role_result = validate_role(&role);
    let role_ok = role_result.is_valid;
    result.merge(role_result);

    if role_ok {
        attributes.retain(|name, _| name.starts_with("aria-") || name == "tabindex");
        result.merge(validate_aria_attributes(&role, &attributes));
    }

    result
}
