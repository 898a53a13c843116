//! UI components for the pitch site
//!
//! One file per page section, plus the shared walkthrough step view and the
//! canvas helpers behind the charts and the flow diagram.

pub mod analytics;
pub mod canvas;
pub mod demo_modal;
pub mod demo_panel;
pub mod demo_step_view;
pub mod hero;
pub mod overview;
pub mod problem;
pub mod solution;
pub mod style;
pub mod team;
pub mod technology;

pub use analytics::AnalyticsSection;
pub use demo_modal::DemoModal;
pub use demo_panel::DemoPanel;
pub use demo_step_view::DemoStepView;
pub use hero::Hero;
pub use overview::Overview;
pub use problem::ProblemSection;
pub use solution::SolutionSection;
pub use team::TeamSection;
pub use technology::TechnologySection;
