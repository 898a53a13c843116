//! Problem section: the pain-point cards

use leptos::prelude::*;

use crate::components::style;
use crate::models::content::pain_points;
use crate::models::tone_color;

/// Pain-point grid with headline statistics
#[component]
pub fn ProblemSection() -> impl IntoView {
    view! {
        <section
            id="problem"
            style="background-color: rgba(31, 41, 55, 0.3);"
        >
            <div style=style::SECTION>
                <h2 style=style::SECTION_TITLE>"The Pain Points We Solve"</h2>
                <p style=style::SECTION_SUBTITLE>
                    "68% of project failures trace back to poor requirements. CRF fixes this at the root."
                </p>
                <div style=style::GRID_2>
                    {pain_points()
                        .into_iter()
                        .map(|problem| {
                            let accent = tone_color(problem.tone);
                            view! {
                                <div style=style::CARD>
                                    <div style="display: flex; align-items: flex-start; margin-bottom: 16px;">
                                        <div style=format!(
                                            "width: 40px; height: 40px; border-radius: 8px; background-color: {}; margin-right: 16px; flex-shrink: 0;",
                                            accent.to_css_alpha(0.2),
                                        )></div>
                                        <div>
                                            <h3 style="font-size: 18px; font-weight: bold; margin: 0 0 8px 0;">
                                                {problem.title}
                                            </h3>
                                            <p style=format!("{} margin: 0;", style::MUTED_TEXT)>
                                                {problem.description}
                                            </p>
                                        </div>
                                    </div>
                                    <div style="display: flex; align-items: baseline; gap: 12px; border-top: 1px solid rgba(55, 65, 81, 1); padding-top: 16px;">
                                        <span style=format!(
                                            "font-size: 28px; font-weight: bold; color: {};",
                                            accent.to_css(),
                                        )>
                                            {problem.stat}
                                        </span>
                                        <span style=style::CAPTION_TEXT>{problem.stat_text}</span>
                                    </div>
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
    fn test_problem_component_exists() {
        let _component = ProblemSection;
    }
}
