mod tests {
    use approx::assert_relative_eq;

    use crate::velocity::Velocity;

    #[test]
    fn test_velocity_conversions() {
        let v = Velocity::from_meters_per_sec(23.4);
        assert_relative_eq!(v.to_meters_per_sec(), 23.4);
        assert_relative_eq!(Velocity::zero().to_meters_per_sec(), 0.0);
    }

    #[test]
    fn test_velocity_operations() {
        let a = Velocity::from_meters_per_sec(10.0);
        let b = Velocity::from_meters_per_sec(4.0);

        assert_relative_eq!((a + b).to_meters_per_sec(), 14.0);
        assert_relative_eq!((a - b).to_meters_per_sec(), 6.0);
        assert_relative_eq!((a * 2.0).to_meters_per_sec(), 20.0);
        assert_relative_eq!((a / 4.0).to_meters_per_sec(), 2.5);
    }

    #[test]
    fn test_velocity_clamp() {
        assert_relative_eq!(
            Velocity::from_meters_per_sec(200.0).clamp(5.0, 60.0).to_meters_per_sec(),
            60.0
        );
        assert_relative_eq!(
            Velocity::from_meters_per_sec(1.0).clamp(5.0, 60.0).to_meters_per_sec(),
            5.0
        );
    }
}
