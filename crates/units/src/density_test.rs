mod tests {
    use approx::assert_relative_eq;

    use crate::density::{Density, SEA_LEVEL_AIR_DENSITY};

    #[test]
    fn test_density_conversions() {
        let water = Density::from_grams_per_cm3(1.0);
        assert_relative_eq!(water.to_kg_per_m3(), 1000.0);
        assert_relative_eq!(water.to_grams_per_cm3(), 1.0);
    }

    #[test]
    fn test_sea_level_air() {
        assert_relative_eq!(Density::sea_level_air().to_kg_per_m3(), SEA_LEVEL_AIR_DENSITY);
    }
}
