use time::{Date, Month};

use super::*;
use crate::content::case_study::DEMO_CASE;

fn rendered() -> String {
    render_report(&DEMO_CASE, "3/14/2025")
}

fn position(text: &str, needle: &str) -> usize {
    text.find(needle).unwrap_or_else(|| panic!("missing {needle:?}"))
}

#[test]
fn report_names_patient_and_final_section() {
    let text = rendered();
    assert!(text.contains("FINAL MULTIDISCIPLINARY DIAGNOSIS"));
    assert!(text.contains("Michael Johnson"));
}

#[test]
fn sections_appear_in_fixed_order() {
    let text = rendered();
    let order = [
        REPORT_TITLE,
        "Generated: 3/14/2025",
        "PATIENT INFORMATION",
        "CARDIOLOGIST ANALYSIS",
        "PSYCHOLOGIST ANALYSIS",
        "PULMONOLOGIST ANALYSIS",
        "FINAL MULTIDISCIPLINARY DIAGNOSIS",
        "CONTRIBUTING FACTORS",
        "TREATMENT PLAN",
        "PROGNOSIS",
        "DISCLAIMER:",
    ];
    let positions: Vec<_> = order.iter().map(|needle| position(&text, needle)).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "out of order: {positions:?}");
}

#[test]
fn each_specialist_block_has_findings_and_recommendations() {
    let text = rendered();
    assert_eq!(text.matches("Findings:").count(), 3);
    assert_eq!(text.matches("Assessment:").count(), 3);
    assert_eq!(text.matches("Recommendations:").count(), 3);
}

#[test]
fn diagnoses_are_numbered_with_confidence() {
    let text = rendered();
    assert!(text.contains("  1. Panic Disorder/Anxiety-Related Episodes (confidence: 89%)"));
    assert!(text.contains("Gastroesophageal Reflux Disease (GERD)"));
    assert!(text.contains("Anxiety-Induced Hyperventilation"));
}

#[test]
fn headings_are_underlined_to_their_width() {
    let text = rendered();
    assert!(text.contains("PROGNOSIS\n---------\n"));
}

#[test]
fn rendering_is_deterministic_for_a_date() {
    assert_eq!(rendered(), rendered());
    assert_ne!(rendered(), render_report(&DEMO_CASE, "3/15/2025"));
}

#[test]
fn file_name_replaces_whitespace() {
    assert_eq!(report_file_name("Michael Johnson"), "Medical_Diagnosis_Report_Michael_Johnson.txt");
    assert_eq!(report_file_name("  Ana  María\tLópez "), "Medical_Diagnosis_Report_Ana_María_López.txt");
}

#[test]
fn dates_render_without_padding() {
    let date = Date::from_calendar_date(2025, Month::March, 4).unwrap();
    assert_eq!(format_date(date), "3/4/2025");
    let date = Date::from_calendar_date(2024, Month::December, 31).unwrap();
    assert_eq!(format_date(date), "12/31/2024");
}

#[test]
fn today_has_three_parts() {
    assert_eq!(today().split('/').count(), 3);
}
