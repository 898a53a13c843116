//! Static page copy
//!
//! Every section of the page renders from the catalogs below. The figures are
//! pitch material and deliberately hardcoded; nothing is fetched or computed.

use serde::Serialize;

use super::colors::Tone;

/// A stat card in the hero dashboard preview
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
    pub tone: Tone,
}

/// A feature card in the overview grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

/// A pain-point card with its headline statistic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PainPoint {
    pub title: &'static str,
    pub description: &'static str,
    pub stat: &'static str,
    pub stat_text: &'static str,
    pub tone: Tone,
}

/// One line inside a before/after comparison box
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonItem {
    pub text: &'static str,
    pub note: Option<&'static str>,
}

/// One side of the before/after comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSide {
    pub heading: &'static str,
    pub verdict: &'static str,
    pub approved: bool,
    pub items: Vec<ComparisonItem>,
}

/// A "superpower" card: headline plus its four feature bullets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Superpower {
    pub title: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub tone: Tone,
}

/// An architecture layer card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchLayer {
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

/// A technology stack category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechCategory {
    pub name: &'static str,
    pub items: Vec<&'static str>,
}

/// A table in the proposed database schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaTable {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: Vec<&'static str>,
}

/// A storage technology with its role and feature tags
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DbTechnology {
    pub name: &'static str,
    pub use_case: &'static str,
    pub features: Vec<&'static str>,
}

/// A use-case card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseCase {
    pub title: &'static str,
    pub description: &'static str,
}

/// A team member card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

impl TeamMember {
    /// Initials for the avatar badge, e.g. "Raj Patle" -> "RP"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// Hero dashboard preview stats
pub fn hero_stats() -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Requirements Processed",
            value: "1,248",
            caption: "+24% from last week",
            tone: Tone::Info,
        },
        StatCard {
            title: "Ambiguities Resolved",
            value: "89%",
            caption: "Industry avg: 62%",
            tone: Tone::Accent,
        },
        StatCard {
            title: "Compliance Pass",
            value: "100%",
            caption: "0 regulatory risks",
            tone: Tone::Success,
        },
    ]
}

/// Overview feature grid
pub fn overview_features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Quantum-Inspired AI",
            description: "Uses QNN-inspired algorithms to handle vague, conflicting, or incomplete requirements better than standard LLMs.",
            tone: Tone::Accent,
        },
        Feature {
            title: "Self-Learning Knowledge Mesh",
            description: "Dynamically evolves based on new regulations, industry trends, and user feedback.",
            tone: Tone::Info,
        },
        Feature {
            title: "Requirement DNA Fingerprinting",
            description: "Each requirement is tagged with a unique signature for traceability and impact analysis.",
            tone: Tone::Success,
        },
    ]
}

/// Pain-point cards
pub fn pain_points() -> Vec<PainPoint> {
    vec![
        PainPoint {
            title: "Ambiguity & Conflict",
            description: "Vague, conflicting statements lead to misinterpretation and rework.",
            stat: "42%",
            stat_text: "of requirements have hidden conflicts",
            tone: Tone::Danger,
        },
        PainPoint {
            title: "Manual Effort",
            description: "Hours wasted in meetings and documentation instead of real analysis.",
            stat: "60+",
            stat_text: "hours spent per project on requirement refinement",
            tone: Tone::Warning,
        },
        PainPoint {
            title: "Compliance Risks",
            description: "Missed regulatory checks result in costly violations.",
            stat: "$3.2M",
            stat_text: "average GDPR violation fine in 2024",
            tone: Tone::Accent,
        },
        PainPoint {
            title: "Traceability Gaps",
            description: "Changes become untrackable across complex systems.",
            stat: "35%",
            stat_text: "of requirements lack proper traceability",
            tone: Tone::Info,
        },
    ]
}

/// Left side of the comparison: the raw requirements document
pub fn comparison_before() -> ComparisonSide {
    ComparisonSide {
        heading: "Requirements Document",
        verdict: "REJECTED",
        approved: false,
        items: vec![
            ComparisonItem {
                text: "\"The system should be fast and responsive (but must use cheap hardware)\"",
                note: None,
            },
            ComparisonItem {
                text: "\"All user data should be stored indefinitely for analytics\"",
                note: Some("\u{26a0}\u{fe0f} Conflicts with GDPR Article 17"),
            },
            ComparisonItem {
                text: "\"UI should be intuitive\"",
                note: Some("No measurable criteria"),
            },
        ],
    }
}

/// Right side of the comparison: the refined output
pub fn comparison_after() -> ComparisonSide {
    ComparisonSide {
        heading: "Refined Requirements",
        verdict: "APPROVED",
        approved: true,
        items: vec![
            ComparisonItem {
                text: "\"System response time < 2s on $500 hardware (trade-off accepted)\"",
                note: Some("\u{2705} Conflict resolved with 92% confidence"),
            },
            ComparisonItem {
                text: "\"User data retention: 30 days (GDPR compliant) + anonymized analytics option\"",
                note: Some("\u{2705} Compliance check passed"),
            },
            ComparisonItem {
                text: "\"UI goal: 90% task completion rate in usability testing with < 2 support requests\"",
                note: Some("\u{2705} Quantifiable metric added"),
            },
        ],
    }
}

/// The three superpower cards
pub fn superpowers() -> Vec<Superpower> {
    vec![
        Superpower {
            title: "Hears",
            description: "Multi-sensory input (text, sketches, voice, tone analysis)",
            features: vec![
                "Document parsing",
                "Sketch recognition",
                "Voice transcription",
                "Tone detection",
            ],
            tone: Tone::Accent,
        },
        Superpower {
            title: "Thinks",
            description: "Resolves ambiguity like a human using quantum-inspired AI",
            features: vec![
                "Conflict detection",
                "Trade-off analysis",
                "Confidence scoring",
                "Context linking",
            ],
            tone: Tone::Info,
        },
        Superpower {
            title: "Speaks",
            description: "Generates compliant, prioritized outputs for all stakeholders",
            features: vec![
                "Jira integration",
                "Audit reports",
                "Exec summaries",
                "Regulatory docs",
            ],
            tone: Tone::Success,
        },
    ]
}

/// Architecture layer cards
pub fn architecture_layers() -> Vec<ArchLayer> {
    vec![
        ArchLayer {
            title: "Input Layer",
            description: "Multi-sensory input processing for documents, sketches, and voice",
            tone: Tone::Info,
        },
        ArchLayer {
            title: "Processing Core",
            description: "Quantum-inspired AI with transformer models and knowledge mesh",
            tone: Tone::Accent,
        },
        ArchLayer {
            title: "Output Layer",
            description: "Tailored generation for different stakeholders and systems",
            tone: Tone::Success,
        },
    ]
}

/// Technology stack by category
pub fn tech_stack() -> Vec<TechCategory> {
    vec![
        TechCategory {
            name: "frontend",
            items: vec!["React", "Next.js", "Tailwind CSS", "Framer Motion"],
        },
        TechCategory {
            name: "backend",
            items: vec!["Node.js", "Express", "FastAPI"],
        },
        TechCategory {
            name: "ai",
            items: vec!["PyTorch", "TensorFlow", "HuggingFace", "Qiskit (Quantum)"],
        },
        TechCategory {
            name: "database",
            items: vec!["MongoDB", "Neo4j", "PostgreSQL"],
        },
        TechCategory {
            name: "devops",
            items: vec!["Docker", "Kubernetes", "AWS", "CI/CD Pipelines"],
        },
    ]
}

/// Proposed database schema
pub fn database_schema() -> Vec<SchemaTable> {
    vec![
        SchemaTable {
            name: "requirements",
            description: "Core requirements table storing all extracted requirements with their metadata",
            fields: vec![
                "id",
                "text",
                "confidence_score",
                "dna_fingerprint",
                "source",
                "created_at",
                "updated_at",
            ],
        },
        SchemaTable {
            name: "knowledge_mesh",
            description: "Graph-based knowledge representation that evolves over time",
            fields: vec!["id", "concept", "relationships", "last_updated", "source"],
        },
        SchemaTable {
            name: "compliance_rules",
            description: "Regulatory rules and standards for real-time compliance checking",
            fields: vec![
                "id",
                "regulation_id",
                "description",
                "jurisdiction",
                "last_updated",
            ],
        },
        SchemaTable {
            name: "projects",
            description: "Project management and organization",
            fields: vec!["id", "name", "description", "team_id", "created_at"],
        },
    ]
}

/// Storage technologies and their roles
pub fn database_technologies() -> Vec<DbTechnology> {
    vec![
        DbTechnology {
            name: "MongoDB",
            use_case: "Primary document store for requirements and project data",
            features: vec![
                "Flexible schema",
                "Horizontal scaling",
                "Aggregation pipeline",
            ],
        },
        DbTechnology {
            name: "Neo4j",
            use_case: "Knowledge graph implementation for the self-learning mesh",
            features: vec![
                "Cypher query language",
                "Graph algorithms",
                "ACID compliance",
            ],
        },
        DbTechnology {
            name: "PostgreSQL",
            use_case: "Structured data storage for compliance rules and user management",
            features: vec!["SQL compliance", "JSON support", "Relational integrity"],
        },
    ]
}

/// Use-case cards
pub fn use_cases() -> Vec<UseCase> {
    vec![
        UseCase {
            title: "Requirement Extraction",
            description: "Extract requirements from multiple input sources including documents, sketches, and voice recordings",
        },
        UseCase {
            title: "Ambiguity Resolution",
            description: "Detect and resolve conflicting or vague requirements using quantum-inspired algorithms",
        },
        UseCase {
            title: "Compliance Checking",
            description: "Automatically flag requirements that violate regulatory standards",
        },
        UseCase {
            title: "Trade-off Analysis",
            description: "Suggest optimal trade-offs between competing requirements",
        },
        UseCase {
            title: "Document Generation",
            description: "Produce tailored outputs for different stakeholders (developers, executives, auditors)",
        },
    ]
}

/// The team roster
pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Pranisha Pol",
            role: "AI/ML Lead",
        },
        TeamMember {
            name: "Ayush Bhagwatkar",
            role: "Frontend Architect",
        },
        TeamMember {
            name: "Rudra Chintalwar",
            role: "Backend & AI/ML",
        },
        TeamMember {
            name: "Shivpratap Mithapalli",
            role: "Backend Engineer",
        },
        TeamMember {
            name: "Raj Patle",
            role: "Backend & Database Handling",
        },
    ]
}
