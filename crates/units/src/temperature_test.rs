mod tests {
    use approx::assert_relative_eq;

    use crate::temperature::Temperature;

    #[test]
    fn test_temperature_kelvin() {
        let solar = Temperature::from_kelvin(5772.0);
        assert_relative_eq!(solar.to_kelvin(), 5772.0);
    }

    #[test]
    fn test_temperature_arithmetic() {
        let a = Temperature::from_kelvin(6000.0);
        let b = Temperature::from_kelvin(3000.0);

        assert_relative_eq!((a + b).to_kelvin(), 9000.0);
        assert_relative_eq!((a - b).to_kelvin(), 3000.0);
        assert_relative_eq!((a * 0.5).to_kelvin(), 3000.0);
        assert_relative_eq!((a / 2.0).to_kelvin(), 3000.0);
        assert_relative_eq!(a / b, 2.0);
    }

    #[test]
    fn test_temperature_powf_and_log() {
        let t = Temperature::from_kelvin(10_000.0);
        assert_relative_eq!(t.powf(4.0), 1.0e16);
        assert_relative_eq!(t.log10(), 4.0);
    }
}
