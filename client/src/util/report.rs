//! Plain-text rendering of a case study.
//!
//! DESIGN
//! ======
//! The report is a pure function of a `CaseStudy` and a date string, so the
//! same input always yields the same bytes. Section order is fixed:
//!
//! ```text
//! banner, date, PATIENT INFORMATION,
//! CARDIOLOGIST / PSYCHOLOGIST / PULMONOLOGIST ANALYSIS,
//! FINAL MULTIDISCIPLINARY DIAGNOSIS, CONTRIBUTING FACTORS,
//! TREATMENT PLAN, PROGNOSIS, disclaimer
//! ```

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use crate::content::case_study::{CaseStudy, SpecialistReport};

const RULE_WIDTH: usize = 60;

pub const REPORT_TITLE: &str = "MULTIDISCIPLINARY MEDICAL DIAGNOSIS REPORT";
pub const REPORT_ISSUER: &str = "MedAI Diagnostics";
pub const DISCLAIMER: &str = "DISCLAIMER: This report was produced by a demonstration system for \
                              illustrative purposes only. It is not medical advice and must not be \
                              used for diagnosis or treatment.";

/// Line-oriented text builder.
#[derive(Default)]
struct ReportWriter {
    out: String,
}

impl ReportWriter {
    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn heading(&mut self, title: &str) {
        self.blank();
        self.line(title);
        self.line(&"-".repeat(title.chars().count()));
    }

    fn bullets(&mut self, items: &[&str]) {
        for item in items {
            self.line(&format!("  - {item}"));
        }
    }

    fn numbered<'a>(&mut self, items: impl IntoIterator<Item = &'a str>) {
        for (i, item) in items.into_iter().enumerate() {
            self.line(&format!("  {}. {item}", i + 1));
        }
    }

    fn specialist(&mut self, report: &SpecialistReport) {
        self.heading(&format!("{} ANALYSIS", report.specialist));
        self.line("Findings:");
        self.bullets(report.findings);
        self.line(&format!("Assessment: {}", report.assessment));
        self.line("Recommendations:");
        self.bullets(report.recommendations);
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Render the full report for `case`, stamped with `generated_on`.
#[must_use]
pub fn render_report(case: &CaseStudy, generated_on: &str) -> String {
    let mut w = ReportWriter::default();
    let rule = "=".repeat(RULE_WIDTH);

    w.line(&rule);
    w.line(REPORT_TITLE);
    w.line(REPORT_ISSUER);
    w.line(&rule);
    w.blank();
    w.line(&format!("Generated: {generated_on}"));

    let patient = &case.patient;
    w.heading("PATIENT INFORMATION");
    w.line(&format!("Name: {}", patient.name));
    w.line(&format!("Age: {}", patient.age));
    w.line(&format!("Sex: {}", patient.sex));
    w.line("Presenting Complaints:");
    w.bullets(patient.presenting_complaints);
    w.line(&format!("Medical History: {}", patient.history));

    for report in case.specialists() {
        w.specialist(report);
    }

    let summary = &case.final_diagnosis;
    w.heading("FINAL MULTIDISCIPLINARY DIAGNOSIS");
    for (i, diagnosis) in summary.diagnoses.iter().enumerate() {
        w.line(&format!("  {}. {} (confidence: {}%)", i + 1, diagnosis.condition, diagnosis.confidence));
    }

    w.heading("CONTRIBUTING FACTORS");
    w.bullets(summary.contributing_factors);

    w.heading("TREATMENT PLAN");
    w.numbered(summary.treatment_plan.iter().copied());

    w.heading("PROGNOSIS");
    w.line(summary.prognosis);

    w.blank();
    w.line(&rule);
    w.line(DISCLAIMER);
    w.line(&rule);
    w.finish()
}

/// `Medical_Diagnosis_Report_<name>.txt` with whitespace runs turned into `_`.
#[must_use]
pub fn report_file_name(patient_name: &str) -> String {
    let slug = patient_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("Medical_Diagnosis_Report_{slug}.txt")
}

/// Today's date (UTC) as `M/D/YYYY`.
#[must_use]
pub fn today() -> String {
    format_date(time::OffsetDateTime::now_utc().date())
}

#[must_use]
pub fn format_date(date: time::Date) -> String {
    format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
}
