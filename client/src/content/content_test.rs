use std::collections::HashSet;

use super::case_study::DEMO_CASE;
use super::dashboard::*;
use super::demo::DEMO_STEPS;
use super::landing::*;

#[test]
fn demo_steps_follow_specialist_order() {
    let titles: Vec<_> = DEMO_STEPS.iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        vec![
            "Medical Report Loaded",
            "Cardiologist Analysis",
            "Psychology Assessment",
            "Pulmonology Review",
            "Team Synthesis",
        ]
    );
}

#[test]
fn first_step_names_the_demo_patient() {
    assert!(DEMO_STEPS[0].description.contains(DEMO_CASE.patient.name));
}

#[test]
fn case_specialists_are_in_sequencer_order() {
    let names: Vec<_> = DEMO_CASE.specialists().iter().map(|s| s.specialist).collect();
    assert_eq!(names, vec!["CARDIOLOGIST", "PSYCHOLOGIST", "PULMONOLOGIST"]);
}

#[test]
fn every_specialist_report_is_filled_in() {
    for report in DEMO_CASE.specialists() {
        assert!(!report.findings.is_empty(), "{} findings", report.specialist);
        assert!(!report.assessment.is_empty(), "{} assessment", report.specialist);
        assert!(!report.recommendations.is_empty(), "{} recommendations", report.specialist);
    }
}

#[test]
fn final_diagnoses_have_valid_confidence() {
    let diagnoses = DEMO_CASE.final_diagnosis.diagnoses;
    assert_eq!(diagnoses.len(), 3);
    assert_eq!(diagnoses[0].condition, "Panic Disorder/Anxiety-Related Episodes");
    assert!(diagnoses.iter().all(|d| d.confidence <= 100));
}

#[test]
fn line_continuations_collapse_whitespace() {
    assert!(!DEMO_CASE.final_diagnosis.prognosis.contains("  "));
    assert!(!BRAND_BLURB.contains("  "));
}

#[test]
fn landing_tables_have_expected_sizes() {
    assert_eq!(NAV_ITEMS.len(), 5);
    assert_eq!(FEATURES.len(), 6);
    assert_eq!(PROCESS_STEPS.len(), 4);
    assert_eq!(UPLOAD_INFO_CARDS.len(), 3);
    assert_eq!(HERO_SPECIALTIES.len(), 4);
}

#[test]
fn process_steps_are_numbered_sequentially() {
    let numbers: Vec<_> = PROCESS_STEPS.iter().map(|s| s.number).collect();
    assert_eq!(numbers, vec!["01", "02", "03", "04"]);
}

#[test]
fn footer_groups_match_brand_layout() {
    assert_eq!(FOOTER_GROUPS[0].heading, "Product");
    assert_eq!(FOOTER_GROUPS[0].links, &["Features", "How It Works", "Demo", "Pricing"]);
    assert_eq!(FOOTER_GROUPS[1].heading, "Company");
    assert!(COPYRIGHT.starts_with("© 2024 MedAI Diagnostics"));
}

#[test]
fn quick_actions_route_to_distinct_paths() {
    let paths: HashSet<_> = QUICK_ACTIONS.iter().map(|a| a.path).collect();
    assert_eq!(paths.len(), QUICK_ACTIONS.len());
    assert!(paths.iter().all(|p| p.starts_with('/')));
    assert!(paths.contains(ALL_DIAGNOSES_PATH));
}

#[test]
fn recent_diagnosis_ids_are_unique() {
    let ids: HashSet<_> = RECENT_DIAGNOSES.iter().map(|d| d.id).collect();
    assert_eq!(ids.len(), RECENT_DIAGNOSES.len());
}

#[test]
fn metric_changes_carry_a_sign() {
    assert!(SYSTEM_METRICS.iter().all(|m| m.change.starts_with('+') || m.change.starts_with('-')));
}

#[test]
fn service_state_labels_and_tones() {
    assert_eq!(SYSTEM_STATUS[2].detail, "2 diagnoses in progress");
    assert_eq!(ServiceState::Active.label(), "Active");
    assert_eq!(ServiceState::Active.tone(), Tone::Blue);
    assert_eq!(ServiceState::Online.tone(), Tone::Green);
    assert_eq!(Tone::Orange.class(), "tone-orange");
}
