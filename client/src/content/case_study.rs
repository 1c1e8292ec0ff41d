//! The canned multidisciplinary case shown by the demo.
//!
//! The demo never computes anything: these records are the "analysis" the
//! sequencer reveals and the report renderer serializes.

/// Patient header of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatientInfo {
    pub name: &'static str,
    pub age: u8,
    pub sex: &'static str,
    pub presenting_complaints: &'static [&'static str],
    pub history: &'static str,
}

/// One specialist's contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialistReport {
    /// Upper-case discipline used in report headers, e.g. `CARDIOLOGIST`.
    pub specialist: &'static str,
    pub findings: &'static [&'static str],
    pub assessment: &'static str,
    pub recommendations: &'static [&'static str],
}

/// A final diagnosis with the team's confidence in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnosis {
    pub condition: &'static str,
    pub confidence: u8,
}

/// Team synthesis of the specialist reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalDiagnosis {
    pub diagnoses: &'static [Diagnosis],
    pub contributing_factors: &'static [&'static str],
    pub treatment_plan: &'static [&'static str],
    pub prognosis: &'static str,
}

/// A full case: patient, three specialist reports, team synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub patient: PatientInfo,
    pub cardiologist: SpecialistReport,
    pub psychologist: SpecialistReport,
    pub pulmonologist: SpecialistReport,
    pub final_diagnosis: FinalDiagnosis,
}

impl CaseStudy {
    /// Specialist reports in sequencer order (steps 1, 2, 3).
    #[must_use]
    pub fn specialists(&self) -> [&SpecialistReport; 3] {
        [&self.cardiologist, &self.psychologist, &self.pulmonologist]
    }
}

pub static DEMO_CASE: CaseStudy = CaseStudy {
    patient: PatientInfo {
        name: "Michael Johnson",
        age: 29,
        sex: "Male",
        presenting_complaints: &[
            "Recurrent episodes of chest pain",
            "Heart palpitations",
            "Shortness of breath during episodes",
        ],
        history: "Generalized anxiety disorder diagnosed at 24. No prior cardiac events. Non-smoker.",
    },
    cardiologist: SpecialistReport {
        specialist: "CARDIOLOGIST",
        findings: &[
            "Resting ECG shows normal sinus rhythm with no ST-segment changes",
            "Cardiac enzymes (troponin I, CK-MB) within normal limits",
            "Echocardiogram: normal ventricular function, no structural abnormality",
            "Blood pressure elevated during episodes (142/90), normal at rest",
        ],
        assessment: "No evidence of structural heart disease or acute coronary syndrome. \
                     Palpitations are consistent with sinus tachycardia triggered by sympathetic activation.",
        recommendations: &[
            "24-hour Holter monitoring to capture an episode",
            "No cardiac medication indicated at this time",
            "Repeat cardiology review only if symptoms change in character",
        ],
    },
    psychologist: SpecialistReport {
        specialist: "PSYCHOLOGIST",
        findings: &[
            "Documented history of generalized anxiety disorder",
            "Episodes begin abruptly and peak within ten minutes",
            "Reports intense fear of dying during episodes",
            "Increased workload and sleep disruption over the past three months",
        ],
        assessment: "Presentation meets criteria for panic attacks on a background of anxiety disorder. \
                     Anticipatory worry about new episodes is reinforcing symptom frequency.",
        recommendations: &[
            "Cognitive behavioral therapy, weekly sessions for 12 weeks",
            "Psychoeducation on the panic cycle and interoceptive exposure",
            "Consider an SSRI if symptoms persist after 6 weeks of therapy",
        ],
    },
    pulmonologist: SpecialistReport {
        specialist: "PULMONOLOGIST",
        findings: &[
            "Clear breath sounds bilaterally",
            "Spirometry within normal limits, no obstructive pattern",
            "Oxygen saturation 99% on room air",
            "Rapid shallow breathing observed during a reported episode",
        ],
        assessment: "No primary pulmonary pathology. Dyspnea is attributable to anxiety-induced hyperventilation.",
        recommendations: &[
            "Diaphragmatic breathing training",
            "Paced breathing exercises during early symptoms",
            "No pulmonary imaging required",
        ],
    },
    final_diagnosis: FinalDiagnosis {
        diagnoses: &[
            Diagnosis { condition: "Panic Disorder/Anxiety-Related Episodes", confidence: 89 },
            Diagnosis { condition: "Gastroesophageal Reflux Disease (GERD)", confidence: 64 },
            Diagnosis { condition: "Anxiety-Induced Hyperventilation", confidence: 82 },
        ],
        contributing_factors: &[
            "Pre-existing generalized anxiety disorder",
            "Occupational stress and irregular sleep",
            "Late evening meals and high caffeine intake aggravating reflux",
        ],
        treatment_plan: &[
            "Begin cognitive behavioral therapy focused on panic disorder",
            "Trial of a proton pump inhibitor for 8 weeks",
            "Daily breathing retraining exercises",
            "Reduce caffeine and avoid meals within 3 hours of sleep",
            "Follow-up with the care team in 6 weeks",
        ],
        prognosis: "Good. With therapy and lifestyle adjustments, a marked reduction in episode \
                    frequency is expected within three months.",
    },
};
