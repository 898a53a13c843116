//! Home page: every section of the single-page pitch, in order

use leptos::prelude::*;

use crate::components::{
    AnalyticsSection, DemoPanel, Hero, Overview, ProblemSection, SolutionSection, TeamSection,
    TechnologySection,
};
use crate::components::style;
use crate::demo::DemoController;

/// The full pitch page
#[component]
pub fn Home(controller: DemoController) -> impl IntoView {
    view! {
        <div>
            <Hero controller=controller />
            <Overview />
            <ProblemSection />
            <SolutionSection />
            <TechnologySection />
            <DemoPanel controller=controller />
            <AnalyticsSection />
            <TeamSection />

            // Call to action
            <section style="background: linear-gradient(to right, rgba(124, 58, 237, 0.2), rgba(59, 130, 246, 0.2));">
                <div style=format!("{} text-align: center;", style::SECTION)>
                    <h2 style=style::SECTION_TITLE>
                        "Ready to Transform Requirements Engineering?"
                    </h2>
                    <p style=style::SECTION_SUBTITLE>
                        "CRF isn't just another AI tool\u{2014}it's the future of how organizations define, refine, and deliver software."
                    </p>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_component_exists() {
        let _component = Home;
    }
}
