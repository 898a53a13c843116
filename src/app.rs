//! Main application component
//!
//! Creates the one [`DemoController`] instance and hands it to everything
//! that can start, drive, or render the walkthrough: the header button, the
//! routed page (inline panel included), and the modal overlay.

use leptos::prelude::*;

use crate::components::DemoModal;
use crate::components::style;
use crate::demo::DemoController;
use crate::router::AppRouter;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let controller = DemoController::new();
    let on_demo = move |_| controller.start();

    view! {
        <div style="position: relative; min-height: 100vh;">
            <header style="position: sticky; top: 0; z-index: 100; background-color: rgba(17, 24, 39, 0.9); border-bottom: 1px solid rgba(55, 65, 81, 1);">
                <div style="max-width: 1280px; margin: 0 auto; padding: 16px 24px; display: flex; align-items: center; justify-content: space-between;">
                    <div style="display: flex; align-items: center; gap: 12px;">
                        <span style="font-size: 20px; font-weight: bold; color: #A78BFA;">"CRF"</span>
                        <span style="background-color: rgba(124, 58, 237, 0.2); color: #C4B5FD; border-radius: 9999px; padding: 2px 10px; font-size: 12px;">
                            "GenHeads"
                        </span>
                    </div>
                    <nav>
                        <button style=style::PRIMARY_BUTTON on:click=on_demo>
                            "Live Demo \u{2192}"
                        </button>
                    </nav>
                </div>
            </header>

            <main>
                <AppRouter controller=controller />
            </main>

            <footer style="border-top: 1px solid rgba(55, 65, 81, 1); padding: 48px 24px; text-align: center;">
                <div style="font-size: 20px; font-weight: bold; margin-bottom: 16px;">
                    "Cognitive Requirement Fabric"
                </div>
                <div style=format!("{} margin-bottom: 16px;", style::MUTED_TEXT)>
                    <p style="margin: 0;">"Barclays Hack-O-Hire 2025 Submission"</p>
                    <p style="margin: 8px 0 0 0;">"Team GenHeads from PICT"</p>
                </div>
                <div style=style::CAPTION_TEXT>
                    <p style="margin: 0;">"\u{00a9} 2025 GenHeads. All rights reserved."</p>
                    <p style="margin: 8px 0 0 0;">
                        "The future of requirements engineering starts here."
                    </p>
                </div>
            </footer>

            <DemoModal controller=controller />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_exists() {
        let _component = App;
    }
}
