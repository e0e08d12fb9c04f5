//! Unit tests for courier-core primitives.

#[cfg(test)]
mod coord {
    use crate::GeoCoord;

    #[test]
    fn text_is_identity() {
        let a = GeoCoord::new("34.0547000", "-118.4794734").unwrap();
        let b = GeoCoord::new("34.0547000", "-118.4794734").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn numerically_equal_text_forms_differ() {
        // 34.05 and 34.0500000 parse to the same f64 but are different
        // coordinates as far as the network is concerned.
        let a = GeoCoord::new("34.05", "-118.47").unwrap();
        let b = GeoCoord::new("34.0500000", "-118.47").unwrap();
        assert_eq!(a.latitude(), b.latitude());
        assert_ne!(a, b);
    }

    #[test]
    fn from_degrees_canonical_text() {
        let c = GeoCoord::from_degrees(34.0547, -118.4794734);
        assert_eq!(c.latitude_text(), "34.0547000");
        assert_eq!(c.longitude_text(), "-118.4794734");
        assert_eq!(c, GeoCoord::new("34.0547000", "-118.4794734").unwrap());
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        assert!(GeoCoord::new("north", "-118.47").is_err());
        assert!(GeoCoord::new("34.05", "west").is_err());
    }

    #[test]
    fn ordering_is_textual() {
        let a = GeoCoord::new("34.05", "-118.47").unwrap();
        let b = GeoCoord::new("34.06", "-118.47").unwrap();
        assert!(a < b);
    }

    #[test]
    fn display() {
        let c = GeoCoord::new("34.05", "-118.47").unwrap();
        assert_eq!(c.to_string(), "(34.05, -118.47)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoCoord;

    #[test]
    fn zero_distance() {
        let p = GeoCoord::from_degrees(34.0547, -118.4794);
        assert!(p.distance_miles(&p) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 69.09 miles
        let a = GeoCoord::from_degrees(34.0, -118.0);
        let b = GeoCoord::from_degrees(35.0, -118.0);
        let d = a.distance_miles(&b);
        assert!((d - 69.09).abs() < 0.05, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoCoord::from_degrees(34.0, -118.0);
        let b = GeoCoord::from_degrees(34.3, -118.5);
        assert!((a.distance_miles(&b) - b.distance_miles(&a)).abs() < 1e-12);
    }
}

#[cfg(test)]
mod segment {
    use crate::{GeoCoord, StreetSegment};

    fn seg(from: (f64, f64), to: (f64, f64)) -> StreetSegment {
        StreetSegment::new(
            GeoCoord::from_degrees(from.0, from.1),
            GeoCoord::from_degrees(to.0, to.1),
            "Test St",
        )
    }

    #[test]
    fn cardinal_angles() {
        assert!((seg((0.0, 0.0), (0.0, 1.0)).angle() - 0.0).abs() < 1e-9); // east
        assert!((seg((0.0, 0.0), (1.0, 0.0)).angle() - 90.0).abs() < 1e-9); // north
        assert!((seg((0.0, 0.0), (0.0, -1.0)).angle() - 180.0).abs() < 1e-9); // west
        assert!((seg((0.0, 0.0), (-1.0, 0.0)).angle() - 270.0).abs() < 1e-9); // south
    }

    #[test]
    fn angle_between_left_turn() {
        // East then north: 90° sweep.
        let first = seg((0.0, 0.0), (0.0, 1.0));
        let second = seg((0.0, 1.0), (1.0, 1.0));
        assert!((first.angle_to(&second) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn angle_between_right_turn() {
        // East then south: 270° sweep.
        let first = seg((0.0, 0.0), (0.0, 1.0));
        let second = seg((0.0, 1.0), (-1.0, 1.0));
        assert!((first.angle_to(&second) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn angle_between_straight() {
        let first = seg((0.0, 0.0), (0.0, 1.0));
        let second = seg((0.0, 1.0), (0.0, 2.0));
        assert!(first.angle_to(&second).abs() < 1e-9);
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let s = seg((0.0, 0.0), (1.0, 1.0));
        let r = s.reversed();
        assert_eq!(r.start, s.end);
        assert_eq!(r.end, s.start);
        assert_eq!(r.name, s.name);
    }
}

#[cfg(test)]
mod compass {
    use crate::CompassDirection;

    #[test]
    fn principal_directions() {
        assert_eq!(CompassDirection::from_degrees(0.0), CompassDirection::East);
        assert_eq!(CompassDirection::from_degrees(45.0), CompassDirection::Northeast);
        assert_eq!(CompassDirection::from_degrees(90.0), CompassDirection::North);
        assert_eq!(CompassDirection::from_degrees(180.0), CompassDirection::West);
        assert_eq!(CompassDirection::from_degrees(270.0), CompassDirection::South);
    }

    #[test]
    fn wraps_back_to_east() {
        assert_eq!(CompassDirection::from_degrees(337.6), CompassDirection::East);
        assert_eq!(CompassDirection::from_degrees(359.9), CompassDirection::East);
    }

    #[test]
    fn boundary_resolves_to_upper_bucket() {
        assert_eq!(CompassDirection::from_degrees(22.5), CompassDirection::Northeast);
        assert_eq!(CompassDirection::from_degrees(67.5), CompassDirection::North);
        assert_eq!(CompassDirection::from_degrees(337.5), CompassDirection::East);
    }

    #[test]
    fn out_of_range_input_is_wrapped() {
        assert_eq!(CompassDirection::from_degrees(360.0), CompassDirection::East);
        assert_eq!(CompassDirection::from_degrees(-45.0), CompassDirection::Southeast);
    }

    #[test]
    fn display() {
        assert_eq!(CompassDirection::Northeast.to_string(), "northeast");
        assert_eq!(CompassDirection::South.to_string(), "south");
    }
}

#[cfg(test)]
mod rng {
    use crate::PlanRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = PlanRng::new(12345);
        let mut r2 = PlanRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = PlanRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0usize..7);
            assert!(v < 7);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = PlanRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
