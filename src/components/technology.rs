//! Technology section: architecture, process flow, stack, database, use cases

use leptos::html::Canvas;
use leptos::prelude::*;

use crate::components::canvas::diagram::draw_flow_diagram;
use crate::components::canvas::get_2d_context;
use crate::components::style;
use crate::models::content::{
    architecture_layers, database_schema, database_technologies, tech_stack, use_cases,
};
use crate::models::flow::process_flow;
use crate::models::tone_color;

/// Canvas size for the process-flow diagram
const FLOW_WIDTH: f64 = 960.0;
const FLOW_HEIGHT: f64 = 340.0;

/// Process-flow diagram drawn on canvas once the element mounts
#[component]
fn FlowDiagram() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let (nodes, edges) = process_flow();
        let result = get_2d_context(&canvas)
            .and_then(|ctx| draw_flow_diagram(&ctx, &nodes, &edges, FLOW_WIDTH, FLOW_HEIGHT));
        if let Err(e) = result {
            web_sys::console::error_1(&format!("flow diagram render failed: {e}").into());
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width=FLOW_WIDTH.to_string()
            height=FLOW_HEIGHT.to_string()
            style="width: 100%; max-width: 960px; border-radius: 8px;"
        >
            "Your browser does not support the canvas element."
        </canvas>
    }
}

/// Technology deep-dive section
#[component]
pub fn TechnologySection() -> impl IntoView {
    view! {
        <section id="technology" style="background-color: rgba(31, 41, 55, 0.3);">
            <div style=style::SECTION>
                <h2 style=style::SECTION_TITLE>"Technology Deep Dive"</h2>
                <p style=style::SECTION_SUBTITLE>
                    "Cutting-edge AI meets quantum-inspired algorithms in our Cognitive Requirement Fabric."
                </p>

                // System architecture layers
                <div style="margin-bottom: 80px;">
                    <h3 style=format!("{} font-size: 32px;", style::SECTION_TITLE)>
                        "System Architecture"
                    </h3>
                    <div style="display: flex; flex-direction: column; gap: 24px; max-width: 896px; margin: 0 auto;">
                        {architecture_layers()
                            .into_iter()
                            .map(|layer| {
                                let accent = tone_color(layer.tone);
                                view! {
                                    <div style=style::CARD>
                                        <div style="display: flex; align-items: center; margin-bottom: 12px;">
                                            <div style=format!(
                                                "width: 10px; height: 10px; border-radius: 9999px; background-color: {}; margin-right: 12px;",
                                                accent.to_css(),
                                            )></div>
                                            <h4 style="font-weight: 500; margin: 0;">{layer.title}</h4>
                                        </div>
                                        <p style=format!("{} margin: 0;", style::CAPTION_TEXT)>
                                            {layer.description}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                // Process flow
                <div style="margin-bottom: 80px; text-align: center;">
                    <h3 style=format!("{} font-size: 32px;", style::SECTION_TITLE)>
                        "Process Flow"
                    </h3>
                    <FlowDiagram />
                </div>

                // Technology stack
                <div style="margin-bottom: 80px;">
                    <h3 style=format!("{} font-size: 32px;", style::SECTION_TITLE)>
                        "Technology Stack"
                    </h3>
                    <div style=style::GRID_3>
                        {tech_stack()
                            .into_iter()
                            .map(|category| view! {
                                <div style=style::CARD>
                                    <h4 style="font-weight: 500; margin: 0 0 16px 0; text-transform: capitalize;">
                                        {category.name}
                                    </h4>
                                    <ul style="list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 8px;">
                                        {category
                                            .items
                                            .into_iter()
                                            .map(|item| view! {
                                                <li style="display: flex; align-items: center;">
                                                    <div style="width: 6px; height: 6px; border-radius: 9999px; background-color: #7C3AED; margin-right: 10px;"></div>
                                                    <span style="color: #D1D5DB; font-size: 14px;">{item}</span>
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                // Database implementation
                <div style="margin-bottom: 80px;">
                    <h3 style=format!("{} font-size: 32px;", style::SECTION_TITLE)>
                        "Database Implementation"
                    </h3>
                    <div style=style::GRID_2>
                        <div>
                            <h4 style="font-size: 18px; font-weight: 500; margin: 0 0 16px 0;">
                                "Schema Design"
                            </h4>
                            <div style=style::CARD>
                                {database_schema()
                                    .into_iter()
                                    .map(|table| view! {
                                        <div style="margin-bottom: 24px;">
                                            <div style="font-family: monospace; color: #A78BFA; margin-bottom: 4px;">
                                                {table.name}
                                            </div>
                                            <div style=format!("{} margin-bottom: 8px;", style::CAPTION_TEXT)>
                                                {table.description}
                                            </div>
                                            <div style="font-family: monospace; font-size: 13px; color: #6B7280;">
                                                {table.fields.join(", ")}
                                            </div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div>
                            <h4 style="font-size: 18px; font-weight: 500; margin: 0 0 16px 0;">
                                "Technologies"
                            </h4>
                            <div style="display: flex; flex-direction: column; gap: 16px;">
                                {database_technologies()
                                    .into_iter()
                                    .map(|tech| view! {
                                        <div style=style::CARD>
                                            <div style="font-weight: 500; margin-bottom: 4px;">{tech.name}</div>
                                            <div style=format!("{} margin-bottom: 12px;", style::CAPTION_TEXT)>
                                                {tech.use_case}
                                            </div>
                                            <div style="display: flex; flex-wrap: wrap; gap: 8px;">
                                                {tech
                                                    .features
                                                    .into_iter()
                                                    .map(|feature| view! {
                                                        <span style="background-color: rgba(55, 65, 81, 0.6); border-radius: 9999px; padding: 4px 12px; font-size: 12px; color: #D1D5DB;">
                                                            {feature}
                                                        </span>
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>

                // Use cases
                <div>
                    <h3 style=format!("{} font-size: 32px;", style::SECTION_TITLE)>
                        "Use Cases"
                    </h3>
                    <div style=style::GRID_2>
                        {use_cases()
                            .into_iter()
                            .map(|use_case| view! {
                                <div style=style::CARD>
                                    <h4 style="font-weight: 500; margin: 0 0 8px 0;">{use_case.title}</h4>
                                    <p style=format!("{} margin: 0;", style::CAPTION_TEXT)>
                                        {use_case.description}
                                    </p>
                                </div>
                            })
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
    fn test_technology_component_exists() {
        let _component = TechnologySection;
    }

    #[test]
    fn test_flow_diagram_component_exists() {
        let _component = FlowDiagram;
    }
}
