//! Animated, focus-trapping alert dialog for Leptos (CSR).
//!
//! One component, [`AlertDialog`], plus the [`DialogController`] handle that
//! drives it. Opening slides the surface in over a darkened backdrop and
//! moves keyboard focus to the first focusable child; Tab cycles within the
//! dialog, Escape closes it, and closing restores focus to wherever it was
//! before.
//!
//! ```ignore
//! let alert = DialogController::new();
//!
//! view! {
//!     <button on:click=move |_| alert.open()>"Show alert"</button>
//!
//!     <AlertDialog controller=alert label="Session expiry warning">
//!         <p>"Your session is about to expire."</p>
//!         <button on:click=move |_| alert.close()>"Stay signed in"</button>
//!     </AlertDialog>
//! }
//! ```

pub mod animate;
pub mod component;
pub mod focus;
pub mod keyboard;
pub mod overlay;
pub mod visibility;

pub use component::{AlertDialog, AlertDialogProps, DialogController};
pub use visibility::Phase;
