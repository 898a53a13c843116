//! Overview section: the three headline capabilities

use leptos::prelude::*;

use crate::components::style;
use crate::models::content::overview_features;
use crate::models::tone_color;

/// Overview feature grid
#[component]
pub fn Overview() -> impl IntoView {
    view! {
        <section id="overview" style=style::SECTION>
            <h2 style=style::SECTION_TITLE>"Revolutionizing Requirements Engineering"</h2>
            <p style=style::SECTION_SUBTITLE>
                "CRF combines quantum-inspired AI with autonomous business analysis to transform how organizations capture, refine, and manage requirements."
            </p>
            <div style=style::GRID_3>
                {overview_features()
                    .into_iter()
                    .map(|feature| {
                        let accent = tone_color(feature.tone);
                        view! {
                            <div style=style::CARD>
                                <div style=format!(
                                    "width: 48px; height: 48px; border-radius: 8px; background-color: {}; margin-bottom: 16px;",
                                    accent.to_css_alpha(0.2),
                                )></div>
                                <h3 style="font-size: 20px; font-weight: bold; margin: 0 0 12px 0;">
                                    {feature.title}
                                </h3>
                                <p style=style::MUTED_TEXT>{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_component_exists() {
        let _component = Overview;
    }
}
