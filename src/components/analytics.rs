//! Analytics section: canvas charts backed by the hardcoded datasets

use leptos::html::Canvas;
use leptos::prelude::*;

use crate::components::canvas::chart::{draw_bar_chart, draw_donut_chart};
use crate::components::canvas::get_2d_context;
use crate::components::style;
use crate::models::charts::{accuracy_slices, time_savings, total_hours_saved};
use crate::models::tone_color;

/// Canvas size shared by both charts
const CHART_WIDTH: f64 = 420.0;
const CHART_HEIGHT: f64 = 260.0;

/// Accuracy-comparison donut with the stat row underneath
#[component]
fn AccuracyChart() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let slices = accuracy_slices();
        let result = get_2d_context(&canvas)
            .and_then(|ctx| draw_donut_chart(&ctx, &slices, CHART_WIDTH, CHART_HEIGHT));
        if let Err(e) = result {
            web_sys::console::error_1(&format!("accuracy chart render failed: {e}").into());
        }
    });

    view! {
        <div style=style::CARD>
            <h3 style="font-size: 20px; font-weight: bold; margin: 0 0 16px 0;">
                "Requirement Accuracy Comparison"
            </h3>
            <canvas
                node_ref=canvas_ref
                width=CHART_WIDTH.to_string()
                height=CHART_HEIGHT.to_string()
                style="width: 100%; border-radius: 8px;"
            ></canvas>
            <div style=format!("{} margin-top: 16px; text-align: center;", style::GRID_3)>
                {accuracy_slices()
                    .into_iter()
                    .map(|slice| {
                        let color = tone_color(slice.tone).to_css();
                        view! {
                            <div>
                                <div style=format!("font-size: 24px; font-weight: bold; color: {color};")>
                                    {format!("{}%", slice.value)}
                                </div>
                                <div style=style::CAPTION_TEXT>{slice.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Time-savings bar chart with the total-savings bar underneath
#[component]
fn SavingsChart() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let entries = time_savings();
        let result = get_2d_context(&canvas)
            .and_then(|ctx| draw_bar_chart(&ctx, &entries, CHART_WIDTH, CHART_HEIGHT));
        if let Err(e) = result {
            web_sys::console::error_1(&format!("savings chart render failed: {e}").into());
        }
    });

    view! {
        <div style=style::CARD>
            <h3 style="font-size: 20px; font-weight: bold; margin: 0 0 16px 0;">
                "Time Savings by Phase"
            </h3>
            <canvas
                node_ref=canvas_ref
                width=CHART_WIDTH.to_string()
                height=CHART_HEIGHT.to_string()
                style="width: 100%; border-radius: 8px;"
            ></canvas>
            <div style="margin-top: 16px;">
                <div style="display: flex; justify-content: space-between; margin-bottom: 8px;">
                    <span style=style::MUTED_TEXT>"Total Savings per Project"</span>
                    <span style="color: #10B981; font-weight: bold;">
                        {format!("{} hours", total_hours_saved())}
                    </span>
                </div>
                <div style="height: 8px; background-color: rgba(55, 65, 81, 1); border-radius: 9999px; overflow: hidden;">
                    <div style="height: 100%; width: 100%; background-color: #10B981;"></div>
                </div>
            </div>
        </div>
    }
}

/// Measurable-impact section
#[component]
pub fn AnalyticsSection() -> impl IntoView {
    view! {
        <section style="background-color: rgba(31, 41, 55, 0.3);">
            <div style=style::SECTION>
                <h2 style=style::SECTION_TITLE>"Measurable Impact"</h2>
                <p style=style::SECTION_SUBTITLE>
                    "CRF delivers quantifiable improvements across all requirement engineering metrics."
                </p>
                <div style=style::GRID_2>
                    <AccuracyChart />
                    <SavingsChart />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_component_exists() {
        let _component = AnalyticsSection;
    }

    #[test]
    fn test_chart_components_exist() {
        let _accuracy = AccuracyChart;
        let _savings = SavingsChart;
    }
}
