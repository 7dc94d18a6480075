#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use georegion::geometry::enclosing_circle;
    use georegion::geometry::geo_enums::GeoPosition;
    use georegion::geometry::geo_traits::{DistanceTo, Encloses, SeparationDistance};
    use georegion::geometry::primitives::{GeoCircle, GeoPoint};
    use georegion::regions::RegionDescriptor;
    use georegion::util::assertions;

    #[test]
    fn two_point_set_yields_a_diameter_circle() {
        let a = GeoPoint { lat: 45.0, lon: 9.0 };
        let b = GeoPoint { lat: 45.0, lon: 9.2 };
        let circle = enclosing_circle(&[a, b]);

        assert!(circle.encloses(&a));
        assert!(circle.encloses(&b));
        assert!(approx_eq!(
            f64,
            circle.radius,
            a.distance(&b) / 2.0,
            epsilon = 0.1
        ));
    }

    #[test]
    fn collinear_points_along_a_meridian_yield_a_tight_circle() {
        let a = GeoPoint { lat: 10.0, lon: 20.0 };
        let m = GeoPoint { lat: 10.1, lon: 20.0 };
        let b = GeoPoint { lat: 10.2, lon: 20.0 };
        let circle = enclosing_circle(&[a, m, b]);

        assert!(approx_eq!(
            f64,
            circle.radius,
            a.distance(&b) / 2.0,
            epsilon = 0.1
        ));
    }

    #[test]
    fn square_bounding_circle_is_tight() {
        let corners = [
            GeoPoint { lat: 49.9, lon: 9.9 },
            GeoPoint { lat: 49.9, lon: 10.1 },
            GeoPoint { lat: 50.1, lon: 10.1 },
            GeoPoint { lat: 50.1, lon: 9.9 },
        ];
        let circle = enclosing_circle(&corners);
        let diagonal = corners[0].distance(&corners[2]);

        assert!(assertions::circle_encloses_vertices(&circle, &corners));
        //barely larger than half the diagonal
        assert!(circle.radius <= diagonal / 2.0 + 5.0);
    }

    #[test]
    fn interior_vertices_do_not_grow_the_circle() {
        let hull = vec![
            GeoPoint { lat: 50.0, lon: 10.0 },
            GeoPoint { lat: 50.2, lon: 10.0 },
            GeoPoint { lat: 50.1, lon: 10.3 },
        ];
        let mut with_interior = hull.clone();
        with_interior.push(GeoPoint { lat: 50.1, lon: 10.1 });

        let c1 = enclosing_circle(&hull);
        let c2 = enclosing_circle(&with_interior);
        assert!(approx_eq!(f64, c1.radius, c2.radius, epsilon = 1.0));
    }

    #[test]
    fn antimeridian_spanning_vertices_yield_a_compact_circle() {
        let vertices = [
            GeoPoint { lat: 0.0, lon: 179.9 },
            GeoPoint { lat: 0.1, lon: -179.9 },
            GeoPoint { lat: -0.1, lon: -179.95 },
        ];
        let circle = enclosing_circle(&vertices);

        assert!((-180.0..=180.0).contains(&circle.center.lon));
        assert!(assertions::circle_encloses_vertices(&circle, &vertices));
        //a projection oblivious to wrapping would span half the globe here
        assert!(circle.radius < 100_000.0);
    }

    #[test]
    fn random_polygons_are_enclosed_by_their_bounding_circle() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..100 {
            let center_lat = rng.random_range(-60.0..60.0);
            let center_lon = rng.random_range(-170.0..170.0);
            let n_vertices: usize = rng.random_range(3..20);
            let vertices = (0..n_vertices)
                .map(|_| GeoPoint {
                    lat: center_lat + rng.random_range(-0.5..0.5),
                    lon: center_lon + rng.random_range(-0.5..0.5),
                })
                .collect::<Vec<_>>();

            let region = RegionDescriptor::from_polygon(vertices).unwrap();
            let mc = region.monitored_circle();
            assert!(assertions::circle_encloses_vertices(
                &mc.circle,
                region.polygon_vertices().unwrap()
            ));
            assert!(assertions::region_is_valid(&region));
        }
    }

    #[test]
    fn circle_distance_and_separation_semantics() {
        let center = GeoPoint { lat: 45.0, lon: 9.0 };
        let circle = GeoCircle::new(center, 1000.0);
        let inside = GeoPoint { lat: 45.001, lon: 9.0 };
        let outside = GeoPoint { lat: 45.1, lon: 9.0 };

        assert_eq!(circle.distance(&inside), 0.0);

        let (pos, d) = circle.separation_distance(&inside);
        assert_eq!(pos, GeoPosition::Interior);
        assert!(d > 0.0 && d < 1000.0);

        let (pos, d) = circle.separation_distance(&outside);
        assert_eq!(pos, GeoPosition::Exterior);
        assert!(approx_eq!(
            f64,
            d,
            center.distance(&outside) - 1000.0,
            epsilon = 1e-6
        ));
    }

    #[test]
    fn haversine_distance_matches_known_value() {
        //one degree of latitude along a meridian is ~111.2 km
        let a = GeoPoint { lat: 45.0, lon: 9.0 };
        let b = GeoPoint { lat: 46.0, lon: 9.0 };
        let d = a.distance(&b);
        assert!((111_000.0..112_000.0).contains(&d));
        //symmetric, zero on itself
        assert!(approx_eq!(f64, d, b.distance(&a), epsilon = 1e-9));
        assert_eq!(a.distance(&a), 0.0);
    }
}
