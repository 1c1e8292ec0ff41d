//! Narrative steps of the demo sequence.

use crate::state::demo::STEP_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoStep {
    /// Text glyph shown while the step is pending.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Extra line shown once the step completes.
    pub detail: &'static str,
}

pub const DEMO_STEPS: [DemoStep; STEP_COUNT] = [
    DemoStep {
        icon: "📄",
        title: "Medical Report Loaded",
        description: "Patient: Michael Johnson, 29M - Chest pain, palpitations, shortness of breath",
        detail: "Report parsed into structured findings for each specialist.",
    },
    DemoStep {
        icon: "❤",
        title: "Cardiologist Analysis",
        description: "Normal ECG, cardiac enzymes within limits. Ruling out structural heart disease.",
        detail: "Cardiac causes excluded with high confidence.",
    },
    DemoStep {
        icon: "🧠",
        title: "Psychology Assessment",
        description: "History of anxiety disorder. Symptoms consistent with panic attacks.",
        detail: "Panic attack criteria met.",
    },
    DemoStep {
        icon: "🫁",
        title: "Pulmonology Review",
        description: "Clear breath sounds. Anxiety-induced hyperventilation suspected.",
        detail: "No primary pulmonary pathology.",
    },
    DemoStep {
        icon: "👥",
        title: "Team Synthesis",
        description: "Final diagnosis: Panic Disorder with GERD contribution.",
        detail: "Multidisciplinary report ready for download.",
    },
];
