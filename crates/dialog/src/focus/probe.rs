//! Focusability predicate.
//!
//! Mirrors the classic interactive-content selector union:
//! `a[href], area[href], input:not([disabled]), select:not([disabled]),
//! textarea:not([disabled]), button:not([disabled]), iframe, object, embed,
//! [tabindex="0"], [contenteditable]`.
//!
//! The clauses are a disjunction, exactly like a selector list: an element
//! counts as focusable when any single clause matches it, so e.g. a disabled
//! input carrying `tabindex="0"` still qualifies through the tabindex clause.

/// Attribute snapshot of one candidate element.
pub struct FocusProbe<'a> {
    /// Lowercased element name.
    pub tag: &'a str,
    pub has_href: bool,
    pub disabled: bool,
    /// Raw `tabindex` attribute value, if present.
    pub tab_index: Option<&'a str>,
    /// `contenteditable` attribute presence (any value).
    pub content_editable: bool,
}

pub fn is_focusable(probe: &FocusProbe<'_>) -> bool {
    let anchor = matches!(probe.tag, "a" | "area") && probe.has_href;
    let form_control =
        matches!(probe.tag, "input" | "select" | "textarea" | "button") && !probe.disabled;
    let embedded = matches!(probe.tag, "iframe" | "object" | "embed");

    anchor || form_control || embedded || probe.tab_index == Some("0") || probe.content_editable
}
