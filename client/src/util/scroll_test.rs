use super::*;

#[test]
fn anchors_match_rendered_section_ids() {
    let anchors: Vec<_> = SectionId::ALL.iter().map(|id| id.anchor()).collect();
    assert_eq!(anchors, vec!["features", "how-it-works", "upload", "demo", "about"]);
}

#[test]
fn href_prefixes_hash() {
    assert_eq!(SectionId::HowItWorks.href(), "#how-it-works");
    assert_eq!(SectionId::Upload.href(), "#upload");
}

#[test]
fn labels_round_trip_through_from_label() {
    for id in SectionId::ALL {
        assert_eq!(SectionId::from_label(id.label()), Some(id));
    }
}

#[test]
fn unknown_labels_have_no_section() {
    assert_eq!(SectionId::from_label("Pricing"), None);
    assert_eq!(SectionId::from_label("features"), None);
}
