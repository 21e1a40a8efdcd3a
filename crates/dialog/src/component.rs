//! The dialog component and its controller handle.

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Animation, HtmlElement, MouseEvent};

use crate::animate;
use crate::focus::scan::{active_stop, focusable_descendants, DomStop};
use crate::focus::FocusTrap;
use crate::focus::FocusTarget;
use crate::keyboard::{classify, KeyIntent};
use crate::overlay::Backdrop;
use crate::visibility::{Phase, VisibilityMachine};

/// Handle for driving an [`AlertDialog`] from the embedding page.
///
/// Cheap to copy; can be passed as a prop, cloned into event handlers, or
/// provided via context.
#[derive(Clone, Copy)]
pub struct DialogController {
    machine: RwSignal<VisibilityMachine>,
}

impl DialogController {
    pub fn new() -> Self {
        Self {
            machine: RwSignal::new(VisibilityMachine::new()),
        }
    }

    /// Begin the show sequence. Coalesced while already opening or open;
    /// supersedes a still-running close.
    pub fn open(&self) {
        self.machine.update(|m| {
            m.request_open();
        });
    }

    /// Begin the hide sequence. Coalesced while already closing or closed;
    /// supersedes a still-running open.
    pub fn close(&self) {
        self.machine.update(|m| {
            m.request_close();
        });
    }

    /// Reactive: true from the moment opening starts until the exit
    /// transition has fully completed.
    pub fn is_open(&self) -> bool {
        self.machine.get().phase().is_visible()
    }

    pub fn phase(&self) -> Phase {
        self.machine.get().phase()
    }

    fn settle(&self, epoch: u64) -> bool {
        self.machine
            .try_update(|m| m.settle(epoch))
            .unwrap_or(false)
    }
}

/// Per-instance DOM state shared between the lifecycle effects and the
/// keydown handler. Lives in a local-storage arena slot so the `Copy`
/// handle can cross the `Send` bounds of `on_cleanup` while the contents
/// stay thread-local.
struct DialogParts {
    backdrop: Option<Backdrop>,
    backdrop_click: Option<Closure<dyn FnMut(MouseEvent)>>,
    trap: FocusTrap<DomStop>,
    slide: Option<Animation>,
    /// Epoch of the last sequence this instance actually started; filters
    /// the coalesced (no-epoch-change) signal notifications out.
    seen_epoch: u64,
}

const BASE_STYLE: &str = "display: none; position: fixed; top: 0; left: 0; width: 90%; \
    padding: 1em 5%; z-index: 1001; flex-direction: column; align-items: center; \
    background-color: #000000cc; color: white; text-align: center;";

/// Modal alert dialog: slides in over a darkened backdrop and keeps
/// keyboard focus inside its content until closed.
///
/// The projected children are rendered unchanged; whatever focusable
/// elements they contain become the Tab-cycling bounds while the dialog is
/// open. Escape closes it from anywhere inside.
#[component]
pub fn AlertDialog(
    /// Controller driving this dialog's open/close sequences.
    controller: DialogController,
    /// Accessible name stamped as `aria-label` (defaulted when absent).
    #[prop(optional, into)]
    label: String,
    /// Transition length in ms for the slide and the backdrop fade.
    #[prop(optional)]
    transition_ms: Option<f64>,
    /// Close when the backdrop is clicked (off by default).
    #[prop(optional)]
    close_on_backdrop: Option<bool>,
    /// Extra class for the dialog surface.
    #[prop(optional, into)]
    class: String,
    /// Extra inline style for the dialog surface (appended, so it can
    /// override the baseline).
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let duration = transition_ms.unwrap_or(animate::DEFAULT_TRANSITION_MS);
    let close_on_backdrop = close_on_backdrop.unwrap_or(false);
    let label = if label.is_empty() {
        "Alert dialog".to_string()
    } else {
        label
    };
    let surface_class = if class.is_empty() {
        "alert-dialog".to_string()
    } else {
        format!("alert-dialog {class}")
    };
    let surface_style = if style.is_empty() {
        BASE_STYLE.to_string()
    } else {
        format!("{BASE_STYLE} {style}")
    };

    let surface = NodeRef::<html::Div>::new();
    let parts = StoredValue::new_local(DialogParts {
        backdrop: None,
        backdrop_click: None,
        trap: FocusTrap::new(),
        slide: None,
        seen_epoch: 0,
    });

    // Mount: create the backdrop once, next to the app content on `body`.
    Effect::new(move |_| {
        if parts.with_value(|p| p.backdrop.is_some()) {
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(backdrop) = Backdrop::mount(&document) else {
            return;
        };

        let click = close_on_backdrop.then(|| {
            let closure = Closure::wrap(Box::new(move |_: MouseEvent| {
                // Defer to the next tick: closing synchronously during the
                // backdrop's own click dispatch would start tearing the
                // overlay down out from under the event.
                spawn_local(async move {
                    TimeoutFuture::new(0).await;
                    controller.close();
                });
            }) as Box<dyn FnMut(_)>);
            let _ = backdrop
                .element()
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure
        });

        parts.update_value(|p| {
            p.backdrop = Some(backdrop);
            p.backdrop_click = click;
        });
    });

    // React to open/close requests. Each accepted request carries a fresh
    // epoch; tracking it here keeps coalesced calls from restarting an
    // in-flight sequence.
    Effect::new(move |_| {
        let Some(el) = surface.get() else { return };
        let machine = controller.machine.get();
        let duplicate = parts
            .try_update_value(|p| {
                if p.seen_epoch == machine.epoch() {
                    true
                } else {
                    p.seen_epoch = machine.epoch();
                    false
                }
            })
            .unwrap_or(true);
        if duplicate {
            return;
        }

        match machine.phase() {
            Phase::Opening => begin_open(&el, parts, controller, duration, machine.epoch()),
            Phase::Closing => begin_close(&el, parts, controller, duration, machine.epoch()),
            Phase::Open | Phase::Closed => {}
        }
    });

    on_cleanup(move || {
        let _ = parts.try_update_value(|p| {
            if let Some(slide) = p.slide.take() {
                slide.cancel();
            }
            if let Some(mut backdrop) = p.backdrop.take() {
                if let Some(closure) = p.backdrop_click.take() {
                    let _ = backdrop
                        .element()
                        .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                }
                backdrop.unmount();
            }
        });
    });

    // Bound to the surface itself, not the window: with focus trapped
    // inside, every relevant keydown bubbles through here, and keys pressed
    // elsewhere on the page are none of our business.
    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let intent = classify(&ev.key(), ev.shift_key());
        match intent {
            KeyIntent::Dismiss => controller.close(),
            KeyIntent::CycleForward | KeyIntent::CycleBackward => {
                let Some(active) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| active_stop(&d))
                else {
                    return;
                };
                let target = parts.with_value(|p| match intent {
                    KeyIntent::CycleForward => p.trap.wrap_forward(&active),
                    _ => p.trap.wrap_backward(&active),
                });
                if let Some(target) = target {
                    ev.prevent_default();
                    target.focus();
                }
            }
            KeyIntent::Pass => {}
        }
    };

    view! {
        <div
            class=surface_class
            node_ref=surface
            role="alertdialog"
            aria-modal="true"
            aria-label=label
            style=surface_style
            on:keydown=handle_keydown
        >
            {children()}
        </div>
    }
}

fn begin_open(
    el: &HtmlElement,
    parts: StoredValue<DialogParts, LocalStorage>,
    controller: DialogController,
    duration: f64,
    epoch: u64,
) {
    // Visible first, so the height below reflects the laid-out content.
    let _ = el.style().set_property("display", "flex");

    // Slide in from just past the top edge; recomputed per open so it
    // clears the surface whatever the current content height.
    let offset = -(el.client_height() + animate::SLIDE_CLEARANCE_PX);

    // Capture what held focus before we steal it, then hand it to the trap.
    let prior = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| active_stop(&d));
    let candidates = focusable_descendants(el);

    let anim = animate::slide(el, offset, 0, duration);

    parts.update_value(|p| {
        if let Some(prev) = p.slide.take() {
            prev.cancel();
        }
        if let Some(backdrop) = p.backdrop.as_mut() {
            if let Some(window) = web_sys::window() {
                backdrop.reveal(&window, duration);
            }
        }
        p.trap.engage(prior, &candidates);
        p.slide = Some(anim.clone());
    });

    spawn_local(async move {
        if animate::finished(&anim).await {
            controller.settle(epoch);
        }
    });
}

fn begin_close(
    el: &HtmlElement,
    parts: StoredValue<DialogParts, LocalStorage>,
    controller: DialogController,
    duration: f64,
    epoch: u64,
) {
    let offset = -(el.client_height() + animate::SLIDE_CLEARANCE_PX);
    let anim = animate::slide(el, 0, offset, duration);

    parts.update_value(|p| {
        if let Some(prev) = p.slide.take() {
            prev.cancel();
        }
        p.trap.release();
        if let Some(backdrop) = p.backdrop.as_mut() {
            backdrop.begin_conceal(duration);
        }
        p.slide = Some(anim.clone());
    });

    let el = el.clone();
    spawn_local(async move {
        if !animate::finished(&anim).await {
            return;
        }
        if !controller.settle(epoch) {
            return;
        }
        // Hidden only now, once the exit transition has fully run.
        let _ = el.style().set_property("display", "none");
        let _ = parts.try_with_value(|p| {
            if let Some(backdrop) = p.backdrop.as_ref() {
                backdrop.conceal();
            }
        });
    });
}
