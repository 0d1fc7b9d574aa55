use crate::phase::{PhaseId, Remnant};

#[test]
fn remnant_thresholds_are_exact() {
    assert_eq!(Remnant::from_mass(7.99), Remnant::Wd);
    assert_eq!(Remnant::from_mass(8.0), Remnant::Ns);
    assert_eq!(Remnant::from_mass(24.99), Remnant::Ns);
    assert_eq!(Remnant::from_mass(25.0), Remnant::Bh);
}

#[test]
fn remnant_maps_to_matching_terminal_phase() {
    assert_eq!(Remnant::Wd.final_phase(), PhaseId::WdFinal);
    assert_eq!(Remnant::Ns.final_phase(), PhaseId::NsFinal);
    assert_eq!(Remnant::Bh.final_phase(), PhaseId::BhFinal);

    assert!(PhaseId::WdFinal.is_terminal());
    assert!(PhaseId::NsFinal.is_terminal());
    assert!(PhaseId::BhFinal.is_terminal());
    assert!(!PhaseId::Ms.is_terminal());
    assert!(!PhaseId::Agb.is_terminal());
}

#[test]
fn identifiers_display_as_camel_case_ids() {
    assert_eq!(PhaseId::Ms.to_string(), "ms");
    assert_eq!(PhaseId::Rgb.to_string(), "rgb");
    assert_eq!(PhaseId::WdFinal.to_string(), "wdFinal");
    assert_eq!(Remnant::Wd.to_string(), "wd");
    assert_eq!(Remnant::Bh.to_string(), "bh");
}

#[test]
fn identifiers_serialize_as_camel_case_ids() {
    assert_eq!(serde_json::to_string(&PhaseId::Subgiant).unwrap(), "\"subgiant\"");
    assert_eq!(serde_json::to_string(&PhaseId::NsFinal).unwrap(), "\"nsFinal\"");
    assert_eq!(serde_json::to_string(&Remnant::Ns).unwrap(), "\"ns\"");

    let back: PhaseId = serde_json::from_str("\"bhFinal\"").unwrap();
    assert_eq!(back, PhaseId::BhFinal);
}

#[test]
fn labels_are_human_readable() {
    assert_eq!(PhaseId::Ms.label(), "Main Sequence");
    assert_eq!(PhaseId::Agb.label(), "Asymptotic Giant Branch");
    assert_eq!(PhaseId::WdFinal.label(), "White Dwarf Cooling");
    assert_eq!(Remnant::Bh.label(), "Black Hole");
}
