//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{GeoPoint, Route, format_route_point, parse_route_point};
use proptest::prelude::*;

// ============================================================================
// GeoPoint Property Tests
// ============================================================================

mod geo_point_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_point(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoPoint::new(lat, lon);
            prop_assert!(result.is_ok());

            let point = result.unwrap();
            prop_assert!((point.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((point.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoPoint::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoPoint::new(lat, lon).is_err());
        }

        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..=90.0f64,
            lon1 in -180.0f64..=180.0f64,
            lat2 in -90.0f64..=90.0f64,
            lon2 in -180.0f64..=180.0f64
        ) {
            let a = GeoPoint::new_unchecked(lat1, lon1);
            let b = GeoPoint::new_unchecked(lat2, lon2);
            prop_assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 0.001);
        }
    }
}

// ============================================================================
// Route Point Parsing Property Tests
// ============================================================================

mod route_point_tests {
    use super::*;

    proptest! {
        #[test]
        fn formatted_points_parse_back(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let point = GeoPoint::new_unchecked(lat, lon);
            let parsed = parse_route_point(&format_route_point(&point));
            prop_assert_eq!(parsed.ok(), Some(point));
        }

        #[test]
        fn parsing_never_panics(text in ".*") {
            let _ = parse_route_point(&text);
        }

        #[test]
        fn text_without_separator_is_malformed(text in "[^;]*") {
            prop_assert!(parse_route_point(&text).is_err());
        }

        #[test]
        fn route_keeps_one_entry_per_line(lines in prop::collection::vec(".*", 0..20)) {
            let route = Route::parse_lines(&lines);
            prop_assert_eq!(route.len(), lines.len());
            prop_assert_eq!(route.points().count() + route.malformed_count(), lines.len());
        }
    }
}
