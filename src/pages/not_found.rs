//! Fallback page for unknown routes

use leptos::prelude::*;

use crate::components::style;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div style=format!("{} text-align: center; padding-top: 160px;", style::SECTION)>
            <h1 style="font-size: 48px; font-weight: bold; margin-bottom: 16px;">"404"</h1>
            <p style=style::MUTED_TEXT>"This page does not exist."</p>
            <a href="/" style="color: #A78BFA;">"Back to the pitch"</a>
        </div>
    }
}
