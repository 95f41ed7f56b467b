//! Property tests for AOI generation and risk classification

use proptest::prelude::*;
use radisense_core::models::{Aoi, RiskCategory, RiskLevel};
use radisense_core::{generate_aoi, generate_aoi_with_margin, DEFAULT_MARGIN_DEGREES};

proptest! {
    #[test]
    fn prop_generated_ring_is_closed_square(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
        let aoi = generate_aoi(lat, lon);
        let ring = aoi.ring();
        let d = DEFAULT_MARGIN_DEGREES;

        prop_assert_eq!(ring.len(), 5);
        prop_assert_eq!(ring[0], ring[4]);

        prop_assert_eq!((ring[0].lon, ring[0].lat), (lon - d, lat - d));
        prop_assert_eq!((ring[1].lon, ring[1].lat), (lon + d, lat - d));
        prop_assert_eq!((ring[2].lon, ring[2].lat), (lon + d, lat + d));
        prop_assert_eq!((ring[3].lon, ring[3].lat), (lon - d, lat + d));
    }

    #[test]
    fn prop_generated_ring_passes_validation(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
        let aoi = generate_aoi(lat, lon);
        prop_assert!(aoi.area() > 0.0);
        prop_assert!(Aoi::from_ring(aoi.ring().to_vec()).is_ok());
    }

    #[test]
    fn prop_generation_is_deterministic(lat in -1e6f64..1e6, lon in -1e6f64..1e6) {
        prop_assert_eq!(generate_aoi(lat, lon), generate_aoi(lat, lon));
    }

    #[test]
    fn prop_margin_controls_extent(
        lat in -80.0f64..80.0,
        lon in -170.0f64..170.0,
        margin in 0.001f64..5.0,
    ) {
        let bounds = generate_aoi_with_margin(lat, lon, margin).unwrap().bounds();
        prop_assert!((bounds.width() - 2.0 * margin).abs() < 1e-9);
        prop_assert!((bounds.height() - 2.0 * margin).abs() < 1e-9);
    }

    #[test]
    fn prop_unknown_levels_classify_as_low(level in "\\PC*") {
        let parsed = RiskLevel::parse(&level);
        let expected = match level.as_str() {
            "MODERATE" => RiskCategory::Moderate,
            "HIGH" => RiskCategory::High,
            _ => RiskCategory::Low,
        };
        prop_assert_eq!(parsed.category(), expected);
        prop_assert_eq!(parsed.as_str(), level.as_str());
    }
}
