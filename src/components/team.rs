//! Team section

use leptos::prelude::*;

use crate::components::style;
use crate::models::content::team_members;

/// The GenHeads team grid
#[component]
pub fn TeamSection() -> impl IntoView {
    view! {
        <section id="team" style=style::SECTION>
            <h2 style=style::SECTION_TITLE>"The GenHeads Team"</h2>
            <p style=style::SECTION_SUBTITLE>
                "From PICT, bringing together AI expertise and quantum computing innovation."
            </p>
            <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 24px;">
                {team_members()
                    .into_iter()
                    .map(|member| {
                        let initials = member.initials();
                        view! {
                            <div style=format!("{} text-align: center;", style::CARD)>
                                <div style="width: 64px; height: 64px; border-radius: 9999px; background-color: rgba(124, 58, 237, 0.3); color: #C4B5FD; display: flex; align-items: center; justify-content: center; font-weight: bold; font-size: 20px; margin: 0 auto 16px auto;">
                                    {initials}
                                </div>
                                <h3 style="font-size: 18px; font-weight: bold; margin: 0 0 4px 0;">
                                    {member.name}
                                </h3>
                                <p style=format!("{} margin: 0;", style::CAPTION_TEXT)>{member.role}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
