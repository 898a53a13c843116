//! WASM entry point for the Leptos CSR app
//!
//! Trunk compiles this to WASM and mounts the App component onto the
//! document body.

use leptos::prelude::*;
use crf_ui::App;

fn main() {
    // Panic messages go to the browser console instead of vanishing.
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! {
            <App />
        }
    })
}
