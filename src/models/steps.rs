//! Scripted walkthrough step catalog
//!
//! The live demo is a fixed six-step narrative. Every step carries a title,
//! a one-line summary, and a hardcoded detail block that the step view
//! renders below the summary. Nothing here is computed at runtime; the demo
//! is a script, not a pipeline.

use serde::Serialize;

use super::colors::Tone;

/// Number of steps in the scripted walkthrough
pub const STEP_COUNT: usize = 6;

/// One line of simulated terminal output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsoleLine {
    pub tone: Tone,
    pub text: &'static str,
}

/// A downloadable artifact shown on the final step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifact {
    pub label: &'static str,
    pub tone: Tone,
}

/// Hardcoded content block rendered under a step's summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepDetail {
    /// Drag-and-drop upload zone
    FileDrop {
        prompt: &'static str,
        button: &'static str,
    },
    /// Simulated analysis console
    Console { lines: Vec<ConsoleLine> },
    /// Conflict resolution card with confidence badges
    Resolution {
        requirement: &'static str,
        flag: &'static str,
        explanation: &'static str,
        suggestion: &'static str,
        badges: Vec<&'static str>,
    },
    /// Virtual BA clarification prompt with quick-reply options
    Suggestion {
        heading: &'static str,
        question: &'static str,
        options: Vec<&'static str>,
    },
    /// Regulatory scan results
    Compliance {
        heading: &'static str,
        summary: &'static str,
        passed: &'static str,
        warning: &'static str,
    },
    /// Generated output artifacts
    Output {
        heading: &'static str,
        artifacts: Vec<Artifact>,
    },
}

/// A single step of the scripted walkthrough
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoStep {
    pub title: &'static str,
    pub content: &'static str,
    pub detail: StepDetail,
}

/// The fixed, ordered walkthrough script
///
/// Always returns exactly [`STEP_COUNT`] entries, in narrative order.
pub fn demo_steps() -> Vec<DemoStep> {
    vec![
        DemoStep {
            title: "Upload Requirements",
            content: "Drag and drop your documents, sketches, or meeting transcripts",
            detail: StepDetail::FileDrop {
                prompt: "Drag and drop your files here",
                button: "Browse Files",
            },
        },
        DemoStep {
            title: "AI Processing",
            content: "CRF analyzes content with multi-sensory input engine",
            detail: StepDetail::Console {
                lines: vec![
                    ConsoleLine {
                        tone: Tone::Success,
                        text: "$ Analyzing document: requirements.docx",
                    },
                    ConsoleLine {
                        tone: Tone::Success,
                        text: "$ Detected 12 requirements",
                    },
                    ConsoleLine {
                        tone: Tone::Warning,
                        text: "$ Found 3 potential ambiguities",
                    },
                    ConsoleLine {
                        tone: Tone::Accent,
                        text: "$ Quantum resolver engaged",
                    },
                    ConsoleLine {
                        tone: Tone::Info,
                        text: "$ Confidence scores calculated",
                    },
                ],
            },
        },
        DemoStep {
            title: "Ambiguity Resolution",
            content: "Quantum-inspired algorithms detect and resolve conflicts",
            detail: StepDetail::Resolution {
                requirement: "\"The system should be fast and responsive (but must use cheap hardware)\"",
                flag: "Potential Conflict Detected",
                explanation: "\"Fast\" and \"cheap hardware\" may conflict. Suggested resolution:",
                suggestion: "\"System response time < 2s on $500 hardware (trade-off accepted)\"",
                badges: vec!["Confidence: 92%", "Quantum Resolver Applied"],
            },
        },
        DemoStep {
            title: "AutoBA Suggestions",
            content: "Virtual BA suggests improvements and trade-offs",
            detail: StepDetail::Suggestion {
                heading: "AutoBA Suggestion",
                question: "\"You said 'user-friendly'\u{2014}do you mean < 2 clicks or < 5 sec load time?\"",
                options: vec!["< 2 clicks", "< 5 sec load", "Something else"],
            },
        },
        DemoStep {
            title: "Compliance Check",
            content: "Real-time regulatory scanning completes",
            detail: StepDetail::Compliance {
                heading: "Compliance Check Complete",
                summary: "Scanned against 12,843 regulatory rules from 17 jurisdictions",
                passed: "GDPR, HIPAA, ISO 27001",
                warning: "1 minor issue with California CCPA",
            },
        },
        DemoStep {
            title: "Output Ready",
            content: "Download tailored requirements package",
            detail: StepDetail::Output {
                heading: "Output Generated Successfully",
                artifacts: vec![
                    Artifact {
                        label: "Jira Integration",
                        tone: Tone::Info,
                    },
                    Artifact {
                        label: "Audit Report",
                        tone: Tone::Accent,
                    },
                    Artifact {
                        label: "Executive Summary",
                        tone: Tone::Success,
                    },
                ],
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_step_count_matches_constant() {
        assert_eq!(demo_steps().len(), STEP_COUNT);
    }

    #[test]
    fn test_step_titles_in_narrative_order() {
        let titles: Vec<&str> = demo_steps().iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Upload Requirements",
                "AI Processing",
                "Ambiguity Resolution",
                "AutoBA Suggestions",
                "Compliance Check",
                "Output Ready",
            ]
        );
    }

    #[test]
    fn test_every_step_has_content() {
        for step in demo_steps() {
            assert!(!step.title.is_empty());
            assert!(!step.content.is_empty());
        }
    }

    #[test]
    fn test_console_step_has_five_lines() {
        let steps = demo_steps();
        let step = steps.get(1).expect("step 1 exists");
        match &step.detail {
            StepDetail::Console { lines } => assert_eq!(lines.len(), 5),
            other => unreachable_detail(other),
        }
    }

    #[test]
    fn test_suggestion_step_offers_three_options() {
        let steps = demo_steps();
        let step = steps.get(3).expect("step 3 exists");
        match &step.detail {
            StepDetail::Suggestion { options, .. } => assert_eq!(options.len(), 3),
            other => unreachable_detail(other),
        }
    }

    #[test]
    fn test_output_step_lists_three_artifacts() {
        let steps = demo_steps();
        let step = steps.last().expect("steps non-empty");
        match &step.detail {
            StepDetail::Output { artifacts, .. } => assert_eq!(artifacts.len(), 3),
            other => unreachable_detail(other),
        }
    }

    #[test]
    fn test_steps_serialize_with_kind_tag() {
        let steps = demo_steps();
        let json = serde_json::to_value(&steps).expect("steps serialize");
        let first = json.get(0).expect("serialized steps non-empty");
        assert_eq!(
            first.get("detail").and_then(|d| d.get("kind")),
            Some(&serde_json::Value::String("file_drop".to_string()))
        );
    }

    fn unreachable_detail(detail: &StepDetail) {
        panic!("unexpected detail variant: {detail:?}");
    }
}
