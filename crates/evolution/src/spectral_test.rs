use crate::spectral::{spectral_subtype, SpectralType};

#[test]
fn spectral_type_boundaries() {
    assert_eq!(SpectralType::from_temperature(35_000.0), SpectralType::O);
    assert_eq!(SpectralType::from_temperature(15_000.0), SpectralType::B);
    assert_eq!(SpectralType::from_temperature(8500.0), SpectralType::A);
    assert_eq!(SpectralType::from_temperature(6500.0), SpectralType::F);
    assert_eq!(SpectralType::from_temperature(5772.0), SpectralType::G);
    assert_eq!(SpectralType::from_temperature(4500.0), SpectralType::K);
    assert_eq!(SpectralType::from_temperature(3000.0), SpectralType::M);
}

#[test]
fn very_cool_objects_classify_as_late_m() {
    assert_eq!(SpectralType::from_temperature(1000.0), SpectralType::M);
    assert_eq!(spectral_subtype(1000.0), 9);
}

#[test]
fn subtype_is_always_in_range() {
    for temp in [90_000.0, 35_000.0, 15_000.0, 8000.0, 6000.0, 5000.0, 4000.0, 3000.0, 500.0] {
        let subtype = spectral_subtype(temp);
        assert!(subtype <= 9, "Subtype {} should be <= 9", subtype);
    }
}

#[test]
fn solar_temperature_is_an_early_g() {
    assert_eq!(SpectralType::from_temperature(5772.0), SpectralType::G);
    assert!(spectral_subtype(5772.0) <= 4);
}

#[test]
fn display_matches_harvard_letters() {
    assert_eq!(SpectralType::O.to_string(), "O");
    assert_eq!(SpectralType::G.to_string(), "G");
    assert_eq!(SpectralType::M.to_string(), "M");
}
