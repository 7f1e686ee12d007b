mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    use crate::angle::Angle;

    #[test]
    fn test_angle_conversions() {
        assert_relative_eq!(Angle::from_degrees(180.0).to_radians(), PI);
        assert_relative_eq!(Angle::from_radians(PI / 2.0).to_degrees(), 90.0);
    }

    #[test]
    fn test_angle_trig() {
        assert_relative_eq!(Angle::from_degrees(90.0).sin(), 1.0);
        assert_relative_eq!(Angle::from_degrees(60.0).cos(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(Angle::from_degrees(-30.0).abs().to_degrees(), 30.0);
    }

    #[test]
    fn test_angle_clamp_and_arithmetic() {
        let alpha = Angle::from_degrees(999.0).clamp(-15.0, 20.0);
        assert_relative_eq!(alpha.to_degrees(), 20.0);

        let beta = Angle::from_degrees(5.0) + Angle::from_degrees(3.0) * 2.0;
        assert_relative_eq!(beta.to_degrees(), 11.0);
        assert_relative_eq!((-beta).to_degrees(), -11.0);
        assert_relative_eq!((beta - Angle::from_degrees(1.0)).to_degrees(), 10.0);
    }
}
