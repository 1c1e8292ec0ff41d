//! Copy for the landing page sections.

use crate::util::scroll::SectionId;

/// Header navigation, in display order.
pub const NAV_ITEMS: [SectionId; 5] = [
    SectionId::Features,
    SectionId::HowItWorks,
    SectionId::Upload,
    SectionId::Demo,
    SectionId::About,
];

// =============================================================================
// HERO
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specialty {
    pub icon: &'static str,
    pub label: &'static str,
    /// Accent modifier class, e.g. `accent-red`.
    pub accent: &'static str,
}

pub const HERO_SPECIALTIES: [Specialty; 4] = [
    Specialty { icon: "❤", label: "Cardiology", accent: "accent-red" },
    Specialty { icon: "🧠", label: "Psychology", accent: "accent-blue" },
    Specialty { icon: "🫁", label: "Pulmonology", accent: "accent-green" },
    Specialty { icon: "👥", label: "Team Analysis", accent: "accent-purple" },
];

// =============================================================================
// FEATURES / HOW IT WORKS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🧠",
        title: "Multi-Agent Intelligence",
        description: "Specialized AI agents for cardiology, psychology, and pulmonology working in harmony.",
    },
    Feature {
        icon: "⚡",
        title: "Lightning Fast",
        description: "Concurrent processing delivers comprehensive diagnoses in seconds, not hours.",
    },
    Feature {
        icon: "🛡",
        title: "Medical Grade Accuracy",
        description: "Built on proven medical knowledge bases with continuous learning capabilities.",
    },
    Feature {
        icon: "🎯",
        title: "Precision Diagnostics",
        description: "Advanced pattern recognition identifies subtle symptoms others might miss.",
    },
    Feature {
        icon: "⏱",
        title: "Real-time Analysis",
        description: "Instant processing of medical reports with immediate actionable insights.",
    },
    Feature {
        icon: "🔗",
        title: "Collaborative Intelligence",
        description: "Team-based approach mirrors real-world medical consultation practices.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    /// Two-digit ordinal shown on the card.
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        number: "01",
        icon: "⬆",
        title: "Upload Medical Report",
        description: "Securely upload patient medical reports and diagnostic data to our platform.",
    },
    ProcessStep {
        number: "02",
        icon: "🧠",
        title: "AI Agent Analysis",
        description: "Specialized agents analyze the data from cardiology, psychology, and pulmonology perspectives.",
    },
    ProcessStep {
        number: "03",
        icon: "👥",
        title: "Team Collaboration",
        description: "Multi-disciplinary team agent synthesizes individual analyses for comprehensive insights.",
    },
    ProcessStep {
        number: "04",
        icon: "📄",
        title: "Generate Diagnosis",
        description: "Receive detailed diagnostic report with treatment recommendations and next steps.",
    },
];

// =============================================================================
// UPLOAD
// =============================================================================

pub const UPLOAD_INFO_CARDS: [Feature; 3] = [
    Feature {
        icon: "✔",
        title: "Secure Upload",
        description: "All files are encrypted and processed securely with HIPAA compliance",
    },
    Feature {
        icon: "⬆",
        title: "Multiple Formats",
        description: "Support for PDF, Word documents, and plain text medical reports",
    },
    Feature {
        icon: "📄",
        title: "Instant Processing",
        description: "AI agents begin analysis immediately after successful upload",
    },
];

// =============================================================================
// FOOTER
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_GROUPS: [LinkGroup; 2] = [
    LinkGroup { heading: "Product", links: &["Features", "How It Works", "Demo", "Pricing"] },
    LinkGroup { heading: "Company", links: &["About", "Blog", "Careers", "Contact"] },
];

/// Social links as (label, glyph).
pub const SOCIAL_LINKS: [(&str, &str); 3] = [("GitHub", "GH"), ("Email", "✉"), ("Website", "🌐")];

pub const BRAND_BLURB: &str = "Revolutionizing medical diagnostics through advanced AI technology and \
                               multi-agent collaboration for better patient outcomes.";

pub const COPYRIGHT: &str = "© 2024 MedAI Diagnostics. All rights reserved. Built with advanced AI technology.";
