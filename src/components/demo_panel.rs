//! Inline demo section
//!
//! A window-chrome frame that shows the idle prompt until the walkthrough
//! starts, then the shared step view.

use leptos::prelude::*;

use crate::components::demo_step_view::DemoStepView;
use crate::components::style;
use crate::demo::DemoController;

/// Idle prompt shown before the walkthrough starts
#[component]
fn IdlePrompt() -> impl IntoView {
    view! {
        <div style="text-align: center; padding: 48px 24px;">
            <div style="width: 80px; height: 80px; background-color: rgba(59, 130, 246, 0.2); border-radius: 9999px; margin: 0 auto 24px auto; display: flex; align-items: center; justify-content: center; font-size: 32px;">
                "\u{26a1}"
            </div>
            <h3 style="font-size: 24px; font-weight: bold; margin: 0 0 12px 0;">
                "Ready to Experience CRF?"
            </h3>
            <p style=format!("{} margin: 0;", style::MUTED_TEXT)>
                "Click \"Live Demo\" present on the nav bar to see how CRF transforms requirements engineering"
            </p>
        </div>
    }
}

/// The inline demo panel
#[component]
pub fn DemoPanel(controller: DemoController) -> impl IntoView {
    let machine = controller.machine();
    let active = move || machine.get().is_active();

    view! {
        <section id="demo" style=style::SECTION>
            <div style="max-width: 896px; margin: 0 auto;">
                <h2 style=style::SECTION_TITLE>"Experience CRF in Action"</h2>
                <p style=style::SECTION_SUBTITLE>
                    "See how CRF transforms chaotic requirements into structured, compliant specifications."
                </p>

                <div style=format!("{} padding: 0; overflow: hidden;", style::CARD)>
                    <div style="display: flex; align-items: center; padding: 12px 16px; border-bottom: 1px solid rgba(55, 65, 81, 1);">
                        <div style=style::window_dot("#EF4444")></div>
                        <div style=style::window_dot("#F59E0B")></div>
                        <div style=style::window_dot("#10B981")></div>
                        <div style=format!("{} margin-left: 12px;", style::CAPTION_TEXT)>
                            "CRF Interactive Demo"
                        </div>
                    </div>
                    <div style="padding: 24px; min-height: 320px;">
                        <Show when=active fallback=|| view! { <IdlePrompt /> }>
                            <DemoStepView controller=controller />
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}
