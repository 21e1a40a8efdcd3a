//! DOM side of the focus trap: candidate collection and the live-focus
//! target type.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::probe::{is_focusable, FocusProbe};
use super::FocusTarget;

/// A live DOM element participating in the focus cycle.
///
/// Equality is element identity, so boundary checks compare against
/// `document.activeElement` correctly.
#[derive(Clone, PartialEq)]
pub struct DomStop(HtmlElement);

impl DomStop {
    pub fn new(el: HtmlElement) -> Self {
        Self(el)
    }

    pub fn element(&self) -> &HtmlElement {
        &self.0
    }
}

impl FocusTarget for DomStop {
    fn focus(&self) {
        let _ = self.0.focus();
    }
}

/// The element currently holding focus, if it is an HTML element.
pub fn active_stop(document: &Document) -> Option<DomStop> {
    document
        .active_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(DomStop)
}

/// Collect the focusable descendants of `root` in document order
/// (depth-first, source order, as `querySelectorAll` yields them).
pub fn focusable_descendants(root: &Element) -> Vec<DomStop> {
    let Ok(all) = root.query_selector_all("*") else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for i in 0..all.length() {
        let Some(node) = all.get(i) else { continue };
        let Some(el) = node.dyn_ref::<Element>() else {
            continue;
        };

        let tag = el.tag_name().to_ascii_lowercase();
        let tab_index = el.get_attribute("tabindex");
        let candidate = FocusProbe {
            tag: &tag,
            has_href: el.has_attribute("href"),
            disabled: el.has_attribute("disabled"),
            tab_index: tab_index.as_deref(),
            content_editable: el.has_attribute("contenteditable"),
        };

        if is_focusable(&candidate) {
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                out.push(DomStop(html.clone()));
            }
        }
    }
    out
}
