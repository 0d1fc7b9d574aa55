mod tests {
    use approx::assert_relative_eq;

    use crate::length::{Length, AU_TO_KM, AU_TO_SOLAR_RADIUS};

    #[test]
    fn test_length_conversions() {
        let au = Length::from_au(1.0);
        assert_relative_eq!(au.to_km(), AU_TO_KM);
        assert_relative_eq!(au.to_solar_radii(), AU_TO_SOLAR_RADIUS);

        let solar = Length::from_solar_radii(1.0);
        assert_relative_eq!(solar.to_solar_radii(), 1.0);
        // 1 R☉ ≈ 695,700 km
        assert_relative_eq!(solar.to_km(), 695_700.0, max_relative = 0.01);

        let km = Length::from_km(AU_TO_KM);
        assert_relative_eq!(km.to_au(), 1.0);
    }

    #[test]
    fn test_length_arithmetic() {
        let a = Length::from_solar_radii(10.0);
        let b = Length::from_solar_radii(5.0);

        assert_relative_eq!((a + b).to_solar_radii(), 15.0);
        assert_relative_eq!((a - b).to_solar_radii(), 5.0);
        assert_relative_eq!((a * 2.0).to_solar_radii(), 20.0);
        assert_relative_eq!((a / 2.0).to_solar_radii(), 5.0);
        assert_relative_eq!(a / b, 2.0);
    }
}
