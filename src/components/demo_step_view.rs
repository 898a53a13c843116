//! Shared step view for the scripted walkthrough
//!
//! Both the inline demo panel and the modal overlay render this component,
//! so the step header, detail block, progress dots, and footer controls
//! exist exactly once and always agree on the walkthrough position.

use leptos::prelude::*;

use crate::components::style;
use crate::demo::DemoController;
use crate::models::steps::{StepDetail, demo_steps};
use crate::models::{STEP_COUNT, tone_color};

/// Render the hardcoded detail block for a step
fn detail_view(detail: &StepDetail) -> AnyView {
    match detail {
        StepDetail::FileDrop { prompt, button } => view! {
            <div style="border: 2px dashed rgba(75, 85, 99, 1); border-radius: 8px; padding: 32px; text-align: center;">
                <p style=format!("{} margin: 0 0 16px 0;", style::MUTED_TEXT)>{*prompt}</p>
                <button style=style::SECONDARY_BUTTON>{*button}</button>
            </div>
        }
        .into_any(),
        StepDetail::Console { lines } => view! {
            <div style="background-color: #111827; border-radius: 8px; padding: 16px; font-family: monospace; font-size: 14px;">
                {lines
                    .iter()
                    .map(|line| {
                        let color = tone_color(line.tone).to_css();
                        view! {
                            <div style=format!("color: {color}; margin-bottom: 4px;")>
                                {line.text}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        StepDetail::Resolution {
            requirement,
            flag,
            explanation,
            suggestion,
            badges,
        } => view! {
            <div style="background-color: rgba(55, 65, 81, 0.4); border-radius: 8px; padding: 16px;">
                <p style="margin: 0 0 12px 0; color: #D1D5DB;">{*requirement}</p>
                <div style="display: flex; align-items: center; color: #FBBF24; margin-bottom: 8px;">
                    <span>{*flag}</span>
                </div>
                <p style=format!("{} margin: 0;", style::MUTED_TEXT)>{*explanation}</p>
                <p style="color: #D1D5DB; margin: 8px 0 12px 0; font-weight: 500;">{*suggestion}</p>
                <div style="display: flex; gap: 8px;">
                    {badges
                        .iter()
                        .map(|badge| view! {
                            <span style="background-color: rgba(124, 58, 237, 0.2); color: #C4B5FD; border-radius: 9999px; padding: 4px 12px; font-size: 12px;">
                                {*badge}
                            </span>
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
        StepDetail::Suggestion {
            heading,
            question,
            options,
        } => view! {
            <div style="background-color: rgba(59, 130, 246, 0.1); border: 1px solid rgba(59, 130, 246, 0.3); border-radius: 8px; padding: 16px;">
                <div style="font-weight: 500; margin-bottom: 8px;">{*heading}</div>
                <p style=format!("{} margin: 0 0 16px 0;", style::MUTED_TEXT)>{*question}</p>
                <div style="display: flex; gap: 8px; flex-wrap: wrap;">
                    {options
                        .iter()
                        .map(|option| view! {
                            <button style="background-color: rgba(59, 130, 246, 0.2); color: #93C5FD; border: none; border-radius: 8px; padding: 8px 16px; font-size: 14px;">
                                {*option}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
        StepDetail::Compliance {
            heading,
            summary,
            passed,
            warning,
        } => view! {
            <div style="background-color: rgba(16, 185, 129, 0.1); border: 1px solid rgba(16, 185, 129, 0.3); border-radius: 8px; padding: 16px;">
                <div style="font-weight: 500; margin-bottom: 8px;">{*heading}</div>
                <p style=format!("{} margin: 0 0 16px 0;", style::MUTED_TEXT)>{*summary}</p>
                <div style="display: flex; flex-direction: column; gap: 8px;">
                    <div style="display: flex; align-items: center; gap: 12px;">
                        <span style="background-color: rgba(16, 185, 129, 0.2); color: #6EE7B7; border-radius: 4px; padding: 2px 8px; font-size: 12px; font-weight: bold;">
                            "PASSED"
                        </span>
                        <span style="font-size: 14px;">{*passed}</span>
                    </div>
                    <div style="display: flex; align-items: center; gap: 12px;">
                        <span style="background-color: rgba(245, 158, 11, 0.2); color: #FCD34D; border-radius: 4px; padding: 2px 8px; font-size: 12px; font-weight: bold;">
                            "WARNING"
                        </span>
                        <span style="font-size: 14px;">{*warning}</span>
                    </div>
                </div>
            </div>
        }
        .into_any(),
        StepDetail::Output { heading, artifacts } => view! {
            <div style="background-color: rgba(55, 65, 81, 0.4); border-radius: 8px; padding: 16px;">
                <div style="font-weight: 500; margin-bottom: 16px;">{*heading}</div>
                <div style=style::GRID_3>
                    {artifacts
                        .iter()
                        .map(|artifact| {
                            let accent = tone_color(artifact.tone);
                            view! {
                                <div style="text-align: center;">
                                    <div style=format!(
                                        "width: 40px; height: 40px; border-radius: 8px; background-color: {}; margin: 0 auto 8px auto;",
                                        accent.to_css_alpha(0.2),
                                    )></div>
                                    <span style="font-size: 14px; color: #D1D5DB;">
                                        {artifact.label}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
    }
}

/// The current walkthrough step: header, summary, detail block, progress
/// dots, and the Next / Finish control
#[component]
pub fn DemoStepView(controller: DemoController) -> impl IntoView {
    let machine = controller.machine();
    let step_index = move || machine.get().step().min(STEP_COUNT - 1);

    let steps_for_header = demo_steps();
    let header = move || {
        let index = step_index();
        steps_for_header.get(index).map(|step| {
            view! {
                <div style="display: flex; align-items: center; margin-bottom: 16px;">
                    <div style="width: 36px; height: 36px; border-radius: 9999px; background-color: rgba(168, 85, 247, 0.2); display: flex; align-items: center; justify-content: center; margin-right: 12px;">
                        <span style="color: #A855F7; font-weight: bold;">
                            {(index + 1).to_string()}
                        </span>
                    </div>
                    <h3 style="font-size: 20px; font-weight: bold; margin: 0;">{step.title}</h3>
                </div>
                <p style=format!("{} margin: 0 0 24px 0;", style::MUTED_TEXT)>{step.content}</p>
            }
        })
    };

    let steps_for_detail = demo_steps();
    let detail = move || {
        let index = step_index();
        steps_for_detail
            .get(index)
            .map(|step| detail_view(&step.detail))
    };

    let dots = move || {
        let current = step_index();
        (0..STEP_COUNT)
            .map(|i| {
                let background = if i <= current { "#A855F7" } else { "#374151" };
                view! {
                    <button
                        style=format!(
                            "width: 12px; height: 12px; border-radius: 9999px; border: none; padding: 0; background-color: {background};"
                        )
                        on:click=move |_| controller.jump_to(i)
                    ></button>
                }
            })
            .collect_view()
    };

    let is_last = move || machine.get().is_last_step();

    view! {
        <div>
            {header}
            {detail}
            <div style="display: flex; align-items: center; justify-content: space-between; margin-top: 24px;">
                <div style="display: flex; gap: 8px;">{dots}</div>
                <button
                    style=style::PRIMARY_BUTTON
                    on:click=move |_| controller.next()
                >
                    {move || if is_last() { "Finish Demo" } else { "Next \u{2192}" }}
                </button>
            </div>
        </div>
    }
}
