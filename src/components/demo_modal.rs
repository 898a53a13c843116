//! Demo modal overlay
//!
//! Shown while the walkthrough is active. The body is the same shared step
//! view as the inline panel; closing the modal (backdrop click or the close
//! button) stops the walkthrough and cancels its timer.

use leptos::prelude::*;

use crate::components::demo_step_view::DemoStepView;
use crate::demo::DemoController;

/// Full-screen walkthrough overlay
#[component]
pub fn DemoModal(controller: DemoController) -> impl IntoView {
    let machine = controller.machine();
    let active = move || machine.get().is_active();

    view! {
        <Show when=active>
            <div
                style="position: fixed; inset: 0; background-color: rgba(0, 0, 0, 0.7); display: flex; align-items: center; justify-content: center; z-index: 1000; padding: 24px;"
                on:click=move |_| controller.stop()
            >
                <div
                    style="background-color: #1F2937; border: 1px solid rgba(55, 65, 81, 1); border-radius: 12px; max-width: 640px; width: 100%; max-height: 90vh; overflow-y: auto;"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div style="display: flex; align-items: center; justify-content: space-between; padding: 16px 24px; border-bottom: 1px solid rgba(55, 65, 81, 1);">
                        <h3 style="font-size: 18px; font-weight: bold; margin: 0;">
                            "CRF Interactive Demo"
                        </h3>
                        <button
                            style="background: none; border: none; color: #9CA3AF; font-size: 20px; padding: 4px;"
                            on:click=move |_| controller.stop()
                        >
                            "\u{2715}"
                        </button>
                    </div>
                    <div style="padding: 24px;">
                        <DemoStepView controller=controller />
                    </div>
                </div>
            </div>
        </Show>
    }
}
