//! Mock data for the dashboard page.

/// Colour family of a card or icon badge; maps to a `tone-*` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Green,
    Purple,
    Orange,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "tone-blue",
            Self::Green => "tone-green",
            Self::Purple => "tone-purple",
            Self::Orange => "tone-orange",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemMetric {
    pub label: &'static str,
    pub value: &'static str,
    /// Month-over-month change with explicit sign, e.g. `+12%`.
    pub change: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
}

pub const SYSTEM_METRICS: [SystemMetric; 4] = [
    SystemMetric { label: "Total Diagnoses Today", value: "47", change: "+12%", icon: "🩺", tone: Tone::Blue },
    SystemMetric { label: "AI Model Accuracy", value: "94.2%", change: "+1.3%", icon: "🧠", tone: Tone::Green },
    SystemMetric { label: "Active Patients", value: "23", change: "-4%", icon: "👥", tone: Tone::Purple },
    SystemMetric { label: "System Uptime", value: "99.9%", change: "+0.1%", icon: "📈", tone: Tone::Orange },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
    pub path: &'static str,
    pub features: &'static [&'static str],
}

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        title: "Symptom Checker",
        description: "Analyze patient symptoms using AI-powered diagnostic algorithms",
        icon: "🩺",
        tone: Tone::Blue,
        path: "/symptom-checker",
        features: &["Multi-symptom analysis", "Probability scoring", "Treatment recommendations"],
    },
    QuickAction {
        title: "Diagnosis Explainer",
        description: "Get detailed explanations of medical conditions and diagnoses",
        icon: "🧠",
        tone: Tone::Green,
        path: "/diagnosis-explainer",
        features: &["Condition definitions", "Symptom mapping", "Treatment options"],
    },
    QuickAction {
        title: "Patient Data Management",
        description: "Access and manage comprehensive patient records and history",
        icon: "🗄",
        tone: Tone::Purple,
        path: "/patient-data",
        features: &["Patient records", "Medical history", "Data analytics"],
    },
];

/// Target of the "View All" link on the recent-diagnoses panel.
pub const ALL_DIAGNOSES_PATH: &str = "/patient-data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentDiagnosis {
    pub id: &'static str,
    pub patient: &'static str,
    pub condition: &'static str,
    pub confidence: u8,
    pub status: &'static str,
    pub timestamp: &'static str,
}

pub const RECENT_DIAGNOSES: [RecentDiagnosis; 3] = [
    RecentDiagnosis {
        id: "12345",
        patient: "John Doe",
        condition: "Common Cold",
        confidence: 92,
        status: "completed",
        timestamp: "2 min ago",
    },
    RecentDiagnosis {
        id: "12346",
        patient: "Jane Smith",
        condition: "Flu",
        confidence: 87,
        status: "completed",
        timestamp: "15 min ago",
    },
    RecentDiagnosis {
        id: "12347",
        patient: "Mike Johnson",
        condition: "Allergic Rhinitis",
        confidence: 94,
        status: "completed",
        timestamp: "1 hour ago",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Online,
    Updated,
    Active,
}

impl ServiceState {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Updated => "Updated",
            Self::Active => "Active",
        }
    }

    /// Healthy-and-idle states render green; work in flight renders blue.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Online | Self::Updated => Tone::Green,
            Self::Active => Tone::Blue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceStatus {
    pub name: &'static str,
    pub detail: &'static str,
    pub state: ServiceState,
}

pub const SYSTEM_STATUS: [ServiceStatus; 3] = [
    ServiceStatus { name: "AI Models", detail: "All diagnostic models operational", state: ServiceState::Online },
    ServiceStatus { name: "Knowledge Base", detail: "Medical data synchronized", state: ServiceState::Updated },
    ServiceStatus { name: "Processing Queue", detail: "2 diagnoses in progress", state: ServiceState::Active },
];

/// Status pills in the dashboard banner.
pub const BANNER_INDICATORS: [(&str, Tone); 3] = [
    ("System Online", Tone::Green),
    ("AI Models Active", Tone::Blue),
    ("Knowledge Base Updated", Tone::Purple),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeStat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
}

pub const KNOWLEDGE_STATS: [KnowledgeStat; 3] = [
    KnowledgeStat { label: "Medical Conditions", value: "2,847", icon: "🗄", tone: Tone::Blue },
    KnowledgeStat { label: "Symptom Patterns", value: "15,692", icon: "🧠", tone: Tone::Green },
    KnowledgeStat { label: "Accuracy Rate", value: "94.2%", icon: "📈", tone: Tone::Purple },
];
