//! Hero section with the dashboard preview

use leptos::prelude::*;

use crate::components::style;
use crate::demo::DemoController;
use crate::models::content::{StatCard, hero_stats};
use crate::models::tone_color;

/// One stat card inside the dashboard preview
#[component]
fn PreviewStat(card: StatCard) -> impl IntoView {
    let accent = tone_color(card.tone);
    view! {
        <div style=format!("{} text-align: left;", style::CARD)>
            <h3 style="font-size: 14px; font-weight: 500; color: #D1D5DB; margin: 0 0 12px 0;">
                {card.title}
            </h3>
            <div style=format!("font-size: 28px; font-weight: bold; color: {};", accent.to_css())>
                {card.value}
            </div>
            <div style=style::CAPTION_TEXT>{card.caption}</div>
        </div>
    }
}

/// Hero section: badge, headline, call-to-action buttons, and the fake
/// dashboard frame with its three stat cards
#[component]
pub fn Hero(controller: DemoController) -> impl IntoView {
    let on_demo = move |_| controller.start();

    view! {
        <section style=format!("{} text-align: center; padding-top: 128px;", style::SECTION)>
            <div style="max-width: 896px; margin: 0 auto;">
                <div style="display: inline-block; background-color: rgba(124, 58, 237, 0.2); color: #C4B5FD; border: 1px solid rgba(124, 58, 237, 0.4); border-radius: 9999px; padding: 6px 16px; font-size: 14px; margin-bottom: 24px;">
                    "Barclays Hack-O-Hire 2025"
                </div>
                <h1 style="font-size: 56px; font-weight: bold; margin: 0 0 24px 0; line-height: 1.1;">
                    "Cognitive Requirement Fabric"
                </h1>
                <p style=format!("{} font-size: 20px; margin-bottom: 32px;", style::MUTED_TEXT)>
                    "The AI that thinks like a Business Analyst. Zero ambiguity, full compliance, autonomous refinement."
                </p>
                <div style="display: flex; gap: 16px; justify-content: center; margin-bottom: 64px;">
                    <button style=style::PRIMARY_BUTTON>"Explore CRF \u{2192}"</button>
                    <button style=style::SECONDARY_BUTTON on:click=on_demo>
                        "Live Demo \u{26a1}"
                    </button>
                </div>
            </div>

            // Fake application frame previewing the (aspirational) product
            <div style="max-width: 1024px; margin: 0 auto;">
                <div style=format!("{} padding: 0; overflow: hidden;", style::CARD)>
                    <div style="display: flex; align-items: center; padding: 12px 16px; border-bottom: 1px solid rgba(55, 65, 81, 1);">
                        <div style=style::window_dot("#EF4444")></div>
                        <div style=style::window_dot("#F59E0B")></div>
                        <div style=style::window_dot("#10B981")></div>
                        <div style=format!("{} margin-left: 12px;", style::CAPTION_TEXT)>
                            "CRF Future Dashboard (Figures Given Are Not Real, Only for Visual Purposes)"
                        </div>
                    </div>
                    <div style=format!("{} padding: 24px;", style::GRID_3)>
                        {hero_stats()
                            .into_iter()
                            .map(|card| view! { <PreviewStat card=card /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_component_exists() {
        let _component = Hero;
    }
}
