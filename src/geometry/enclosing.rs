use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::EARTH_RADIUS_M;
use crate::geometry::primitives::{GeoCircle, GeoPoint};

/// Returns the smallest circle enclosing all `vertices`.
///
/// The circle is searched on a local equirectangular projection of the vertices.
/// Its radius is then re-derived from great-circle distances to the found center,
/// which guarantees the enclosure also holds on the sphere, independent of
/// projection distortion.
pub fn enclosing_circle(vertices: &[GeoPoint]) -> GeoCircle {
    assert!(!vertices.is_empty(), "no vertices provided");

    let proj = Projection::spanning(vertices);
    let planar = vertices.iter().map(|v| proj.project(v)).collect_vec();

    let center = proj.unproject(&enclosing_circle_planar(&planar).center);
    let radius = vertices
        .iter()
        .map(|v| center.distance(v))
        .max_by_key(|d| OrderedFloat(*d))
        .expect("no vertices provided");

    GeoCircle::new(center, radius)
}

/// Equirectangular projection onto the plane tangent at `origin`, in meters.
struct Projection {
    origin: GeoPoint,
    /// Scale factor for longitude, which shrinks with latitude
    k_lon: f64,
}

impl Projection {
    fn spanning(vertices: &[GeoPoint]) -> Self {
        let mean_lat = vertices.iter().map(|v| v.lat).sum::<f64>() / vertices.len() as f64;
        let mean_lon = vertices.iter().map(|v| v.lon).sum::<f64>() / vertices.len() as f64;
        let origin = GeoPoint {
            lat: mean_lat,
            lon: mean_lon,
        };
        //lower bound keeps the projection invertible when the origin sits on a pole
        let k_lon = origin.lat.to_radians().cos().max(1e-12);

        Projection { origin, k_lon }
    }

    fn project(&self, p: &GeoPoint) -> PlanarPoint {
        //wrapping the difference keeps vertex sets spanning the antimeridian contiguous
        let d_lon = wrap_degrees(p.lon - self.origin.lon);
        let x = d_lon.to_radians() * self.k_lon * EARTH_RADIUS_M;
        let y = (p.lat - self.origin.lat).to_radians() * EARTH_RADIUS_M;
        PlanarPoint(x, y)
    }

    fn unproject(&self, p: &PlanarPoint) -> GeoPoint {
        let lat = self.origin.lat + (p.1 / EARTH_RADIUS_M).to_degrees();
        let lon = wrap_degrees(self.origin.lon + (p.0 / (self.k_lon * EARTH_RADIUS_M)).to_degrees());
        GeoPoint {
            lat: lat.clamp(-90.0, 90.0),
            lon,
        }
    }
}

/// Wraps a longitude (difference) into [-180, 180] degrees
fn wrap_degrees(d: f64) -> f64 {
    if d > 180.0 {
        d - 360.0
    } else if d < -180.0 {
        d + 360.0
    } else {
        d
    }
}

/// Smallest circle enclosing a set of planar points.
/// Incremental construction: <https://en.wikipedia.org/wiki/Smallest-circle_problem>
fn enclosing_circle_planar(points: &[PlanarPoint]) -> PlanarCircle {
    let mut circle = PlanarCircle {
        center: points[0],
        radius: 0.0,
    };
    for (i, &p) in points.iter().enumerate().skip(1) {
        if circle.contains(&p) {
            continue;
        }
        //p must lie on the boundary of the new circle
        circle = PlanarCircle {
            center: p,
            radius: 0.0,
        };
        for (j, &q) in points[..i].iter().enumerate() {
            if circle.contains(&q) {
                continue;
            }
            //q must also lie on the boundary
            circle = PlanarCircle::from_two(p, q);
            for &r in &points[..j] {
                if !circle.contains(&r) {
                    circle = PlanarCircle::from_three(p, q, r);
                }
            }
        }
    }
    circle
}

/// Absolute slack (in meters) for planar containment checks
const CONTAINS_MARGIN: f64 = 1e-7;

#[derive(Clone, Copy, Debug, PartialEq)]
struct PlanarPoint(f64, f64);

impl PlanarPoint {
    fn sq_distance(&self, other: &PlanarPoint) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }

    fn distance(&self, other: &PlanarPoint) -> f64 {
        self.sq_distance(other).sqrt()
    }
}

#[derive(Clone, Copy, Debug)]
struct PlanarCircle {
    center: PlanarPoint,
    radius: f64,
}

impl PlanarCircle {
    fn contains(&self, p: &PlanarPoint) -> bool {
        self.center.distance(p) <= self.radius + CONTAINS_MARGIN
    }

    /// Circle with the segment between `a` and `b` as diameter
    fn from_two(a: PlanarPoint, b: PlanarPoint) -> Self {
        let center = PlanarPoint((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);
        PlanarCircle {
            center,
            radius: a.distance(&b) / 2.0,
        }
    }

    /// Circumcircle of `a`, `b` and `c`.
    /// Falls back to the widest two-point circle when the points are (nearly) collinear.
    fn from_three(a: PlanarPoint, b: PlanarPoint, c: PlanarPoint) -> Self {
        let d = 2.0 * (a.0 * (b.1 - c.1) + b.0 * (c.1 - a.1) + c.0 * (a.1 - b.1));
        let sq_scale = a
            .sq_distance(&b)
            .max(b.sq_distance(&c))
            .max(c.sq_distance(&a));

        if d.abs() <= sq_scale * 1e-12 {
            //(nearly) collinear, the widest pair's circle covers the third point
            return [
                PlanarCircle::from_two(a, b),
                PlanarCircle::from_two(b, c),
                PlanarCircle::from_two(a, c),
            ]
            .into_iter()
            .max_by_key(|circle| OrderedFloat(circle.radius))
            .unwrap();
        }

        let sq_a = a.0 * a.0 + a.1 * a.1;
        let sq_b = b.0 * b.0 + b.1 * b.1;
        let sq_c = c.0 * c.0 + c.1 * c.1;
        let center = PlanarPoint(
            (sq_a * (b.1 - c.1) + sq_b * (c.1 - a.1) + sq_c * (a.1 - b.1)) / d,
            (sq_a * (c.0 - b.0) + sq_b * (a.0 - c.0) + sq_c * (b.0 - a.0)) / d,
        );
        PlanarCircle {
            center,
            radius: center.distance(&a),
        }
    }
}
