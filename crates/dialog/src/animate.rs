//! Web Animations API glue.
//!
//! The dialog surface slides vertically and the backdrop fades; both run
//! through `Element.animate`. Sequencing is keyed off each animation's own
//! `finished` promise; there is deliberately no parallel timer carrying a
//! copy of the duration.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Animation, Element, FillMode, KeyframeAnimationOptions};

/// Extra distance added to the slide so the surface fully clears its resting
/// box whatever the content height.
pub const SLIDE_CLEARANCE_PX: i32 = 10;

/// Transition length when the embedder does not override it.
pub const DEFAULT_TRANSITION_MS: f64 = 1000.0;

fn options(duration_ms: f64) -> KeyframeAnimationOptions {
    let opts = KeyframeAnimationOptions::new();
    opts.set_duration(duration_ms);
    opts.set_easing("ease-in-out");
    opts.set_fill(FillMode::Forwards);
    opts
}

fn keyframes(frames: serde_json::Value) -> Option<js_sys::Object> {
    // On the (unserializable-value) failure path the animation still runs,
    // just with no keyframes: an empty transition of the same duration, so
    // completion sequencing is unaffected.
    serde_wasm_bindgen::to_value(&frames)
        .ok()
        .map(|v| v.unchecked_into())
}

/// Vertical slide between two `top` offsets, in px.
pub fn slide(el: &Element, from_px: i32, to_px: i32, duration_ms: f64) -> Animation {
    let frames = keyframes(serde_json::json!([
        { "top": format!("{from_px}px") },
        { "top": format!("{to_px}px") },
    ]));
    el.animate_with_keyframe_animation_options(frames.as_ref(), &options(duration_ms))
}

/// Opacity fade between two values.
pub fn fade(el: &Element, from: f64, to: f64, duration_ms: f64) -> Animation {
    let frames = keyframes(serde_json::json!([
        { "opacity": from },
        { "opacity": to },
    ]));
    el.animate_with_keyframe_animation_options(frames.as_ref(), &options(duration_ms))
}

/// Wait for `anim` to complete. Returns `false` when the animation was
/// cancelled (superseded by a newer sequence), in which case the caller
/// must discard its pending side effects.
pub async fn finished(anim: &Animation) -> bool {
    match anim.finished() {
        Ok(promise) => JsFuture::from(promise).await.is_ok(),
        // No promise to wait on; treat the transition as already settled.
        Err(_) => true,
    }
}
