//! Router configuration
//!
//! The site is a single page, so the route table is one entry plus the
//! fallback. Section navigation happens with in-page anchors, not routes.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::demo::DemoController;
use crate::pages::{Home, NotFound};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
}

/// Main router component wrapping the page
#[component]
pub fn AppRouter(controller: DemoController) -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route
                    path=StaticSegment("")
                    view=move || view! { <Home controller=controller /> }
                />
            </Routes>
        </Router>
    }
}
