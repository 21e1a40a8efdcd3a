//! Backdrop element lifecycle.
//!
//! One backdrop per dialog instance: created when the dialog mounts,
//! appended to `document.body`, reused across every open/close, removed
//! when the dialog unmounts.

use wasm_bindgen::JsCast;
use web_sys::{Animation, Document, HtmlElement, Window};

use crate::animate;

pub struct Backdrop {
    el: HtmlElement,
    fade: Option<Animation>,
}

impl Backdrop {
    /// Create the backdrop element and attach it to `document.body`.
    pub fn mount(document: &Document) -> Option<Self> {
        let el: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
        el.set_class_name("alert-dialog-backdrop");

        let style = el.style();
        let _ = style.set_property("visibility", "hidden");
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("top", "0");
        let _ = style.set_property("left", "0");
        let _ = style.set_property("background-color", "#000000aa");
        let _ = style.set_property("z-index", "1000");

        document.body()?.append_child(&el).ok()?;
        Some(Self { el, fade: None })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.el
    }

    /// Size to the current viewport, make visible, and start the fade-in.
    pub fn reveal(&mut self, window: &Window, duration_ms: f64) {
        if let Some(prev) = self.fade.take() {
            prev.cancel();
        }

        let style = self.el.style();
        if let Some(width) = window.inner_width().ok().and_then(|v| v.as_f64()) {
            let _ = style.set_property("width", &format!("{width}px"));
        }
        if let Some(height) = window.inner_height().ok().and_then(|v| v.as_f64()) {
            let _ = style.set_property("height", &format!("{height}px"));
        }
        let _ = style.set_property("visibility", "visible");

        self.fade = Some(animate::fade(&self.el, 0.0, 1.0, duration_ms));
    }

    /// Start the fade-out. The backdrop stays visible until [`conceal`]
    /// is called once the exit transition has completed.
    ///
    /// [`conceal`]: Backdrop::conceal
    pub fn begin_conceal(&mut self, duration_ms: f64) {
        if let Some(prev) = self.fade.take() {
            prev.cancel();
        }
        self.fade = Some(animate::fade(&self.el, 1.0, 0.0, duration_ms));
    }

    pub fn conceal(&self) {
        let _ = self.el.style().set_property("visibility", "hidden");
    }

    pub fn unmount(&mut self) {
        if let Some(fade) = self.fade.take() {
            fade.cancel();
        }
        self.el.remove();
    }
}
