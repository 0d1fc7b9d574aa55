mod tests {
    use approx::assert_relative_eq;

    use crate::mass::{Mass, SOLAR_MASS_G};

    #[test]
    fn test_mass_conversions() {
        let sun = Mass::from_solar_masses(1.0);
        assert_relative_eq!(sun.to_grams(), SOLAR_MASS_G);
        assert_relative_eq!(sun.to_kg(), SOLAR_MASS_G / 1000.0);

        let from_grams = Mass::from_grams(SOLAR_MASS_G);
        assert_relative_eq!(from_grams.to_solar_masses(), 1.0);

        let from_kg = Mass::from_kg(SOLAR_MASS_G / 1000.0);
        assert_relative_eq!(from_kg.to_solar_masses(), 1.0);
    }

    #[test]
    fn test_mass_arithmetic() {
        let a = Mass::from_solar_masses(2.0);
        let b = Mass::from_solar_masses(0.5);

        assert_relative_eq!((a + b).to_solar_masses(), 2.5);
        assert_relative_eq!((a - b).to_solar_masses(), 1.5);
        assert_relative_eq!((a * 3.0).to_solar_masses(), 6.0);
        assert_relative_eq!((a / 4.0).to_solar_masses(), 0.5);

        // Mass / Mass is a dimensionless ratio
        assert_relative_eq!(a / b, 4.0);
    }

    #[test]
    fn test_mass_powf() {
        let m = Mass::from_solar_masses(2.0);
        assert_relative_eq!(m.powf(3.5), 2.0_f64.powf(3.5));
        assert_relative_eq!(m.log10(), 2.0_f64.log10());
    }
}
