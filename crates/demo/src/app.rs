use dialog::{AlertDialog, DialogController};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let alert = DialogController::new();

    view! {
        <main style="padding: 40px; font-family: sans-serif;">
            <h1>"Alert dialog demo"</h1>
            <p>"Open the dialog, then Tab / Shift+Tab around; Escape closes it."</p>
            <button on:click=move |_| alert.open()>"Show alert"</button>

            <AlertDialog controller=alert label="Session expiry warning">
                <p>"Your session is about to expire."</p>
                <button on:click=move |_| alert.close()>"Stay signed in"</button>
                <a href="/login">"Sign in again"</a>
                <button on:click=move |_| alert.close()>"Dismiss"</button>
            </AlertDialog>
        </main>
    }
}
