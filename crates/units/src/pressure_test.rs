mod tests {
    use approx::assert_relative_eq;

    use crate::{Area, Density, Force, Length, Pressure, Velocity};

    #[test]
    fn test_dynamic_pressure() {
        let q = Pressure::dynamic(
            Density::from_kg_per_m3(1.225),
            Velocity::from_meters_per_sec(20.0),
        );
        assert_relative_eq!(q.to_pascals(), 245.0, epsilon = 1e-9);
        assert_relative_eq!(q.to_kilopascals(), 0.245, epsilon = 1e-12);
    }

    #[test]
    fn test_pressure_times_area_is_force() {
        let q = Pressure::from_pascals(245.0);
        let force = q * Area::from_square_meters(0.5);
        assert_relative_eq!(force.to_newtons(), 122.5);
        assert_relative_eq!((force * 2.0).to_newtons(), 245.0);
    }

    #[test]
    fn test_planform_area_from_lengths() {
        let area = Length::from_meters(1.5) * Length::from_cm(40.0);
        assert_relative_eq!(area.to_square_meters(), 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_kilogram_force() {
        let weight = Force::from_newtons(9.806_65);
        assert_relative_eq!(weight.to_kilogram_force(), 1.0);
        assert_relative_eq!(Force::zero().to_newtons(), 0.0);
    }
}
