//! Solution section: before/after comparison and the superpower cards

use leptos::prelude::*;

use crate::components::style;
use crate::models::content::{ComparisonSide, comparison_after, comparison_before, superpowers};
use crate::models::{Tone, tone_color};

/// One side of the before/after comparison
#[component]
fn ComparisonBox(side: ComparisonSide, label: &'static str) -> impl IntoView {
    let ComparisonSide {
        heading,
        verdict,
        approved,
        items,
    } = side;
    let verdict_tone = if approved { Tone::Success } else { Tone::Danger };
    let verdict_color = tone_color(verdict_tone).to_css();
    let border = if approved {
        format!("{} border-color: rgba(16, 185, 129, 0.4);", style::CARD)
    } else {
        style::CARD.to_string()
    };

    view! {
        <div>
            <h3 style="font-size: 24px; font-weight: bold; margin-bottom: 24px;">{label}</h3>
            <div style=border>
                <h4 style="font-weight: 500; margin: 0 0 16px 0;">{heading}</h4>
                <div style="display: flex; flex-direction: column; gap: 12px;">
                    {items
                        .into_iter()
                        .map(|item| {
                            let note_color = if approved { "#6EE7B7" } else { "#FCA5A5" };
                            view! {
                                <div style="background-color: rgba(55, 65, 81, 0.4); border-radius: 8px; padding: 12px;">
                                    <p style="margin: 0; color: #D1D5DB;">{item.text}</p>
                                    {item.note.map(|note| view! {
                                        <p style=format!(
                                            "margin: 8px 0 0 0; font-size: 14px; color: {note_color};"
                                        )>
                                            {note}
                                        </p>
                                    })}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div style="margin-top: 24px; padding-top: 16px; border-top: 1px solid rgba(55, 65, 81, 1); text-align: center;">
                    <span style=format!("color: {verdict_color}; font-weight: 500;")>
                        {verdict}
                    </span>
                </div>
            </div>
        </div>
    }
}

/// Solution section
#[component]
pub fn SolutionSection() -> impl IntoView {
    view! {
        <section id="solution" style=style::SECTION>
            <h2 style=style::SECTION_TITLE>"The CRF Solution"</h2>
            <p style=style::SECTION_SUBTITLE>
                "From chaos to clarity in seconds with our Cognitive Requirement Fabric."
            </p>

            <div style=format!("{} margin-bottom: 80px;", style::GRID_2)>
                <ComparisonBox side=comparison_before() label="Before CRF" />
                <ComparisonBox side=comparison_after() label="With CRF" />
            </div>

            <div style="max-width: 896px; margin: 0 auto;">
                <h3 style=format!("{} font-size: 32px;", style::SECTION_TITLE)>
                    "CRF's 3 Superpowers"
                </h3>
                <div style="display: flex; flex-direction: column; gap: 24px;">
                    {superpowers()
                        .into_iter()
                        .map(|power| {
                            let accent = tone_color(power.tone);
                            view! {
                                <div style=style::CARD>
                                    <div style="display: flex; align-items: flex-start; margin-bottom: 16px;">
                                        <div style=format!(
                                            "width: 48px; height: 48px; border-radius: 9999px; background-color: {}; margin-right: 16px; flex-shrink: 0;",
                                            accent.to_css_alpha(0.2),
                                        )></div>
                                        <div>
                                            <h3 style="font-size: 22px; font-weight: bold; margin: 0 0 4px 0;">
                                                {power.title}
                                            </h3>
                                            <p style=format!("{} margin: 0;", style::MUTED_TEXT)>
                                                {power.description}
                                            </p>
                                        </div>
                                    </div>
                                    <ul style="list-style: none; margin: 0; padding: 0; display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 8px;">
                                        {power
                                            .features
                                            .into_iter()
                                            .map(|feature| view! {
                                                <li style="display: flex; align-items: center;">
                                                    <div style=format!(
                                                        "width: 6px; height: 6px; border-radius: 9999px; background-color: {}; margin-right: 10px;",
                                                        accent.to_css(),
                                                    )></div>
                                                    <span style="color: #D1D5DB; font-size: 14px;">{feature}</span>
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_component_exists() {
        let _component = SolutionSection;
    }

    #[test]
    fn test_comparison_box_component_exists() {
        let _component = ComparisonBox;
    }
}
