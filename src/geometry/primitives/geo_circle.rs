use std::cmp::Ordering;

use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::{DistanceTo, Encloses, SeparationDistance};
use crate::geometry::primitives::GeoPoint;

/// Geographic circle: a center coordinate with a radius in meters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoCircle {
    pub center: GeoPoint,
    pub radius: f64,
}

impl GeoCircle {
    pub fn new(center: GeoPoint, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {}",
            radius
        );
        debug_assert!(center.in_bounds(), "invalid circle center: {:?}", center);

        Self { center, radius }
    }
}

impl Encloses<GeoPoint> for GeoCircle {
    fn encloses(&self, point: &GeoPoint) -> bool {
        self.center.distance(point) <= self.radius
    }
}

impl DistanceTo<GeoPoint> for GeoCircle {
    fn distance(&self, point: &GeoPoint) -> f64 {
        let d_center = self.center.distance(point);
        if d_center < self.radius {
            0.0 //point is inside circle
        } else {
            //point is outside circle
            d_center - self.radius
        }
    }
}

impl SeparationDistance<GeoPoint> for GeoCircle {
    fn separation_distance(&self, point: &GeoPoint) -> (GeoPosition, f64) {
        let d_center = self.center.distance(point);
        match d_center.partial_cmp(&self.radius).unwrap() {
            Ordering::Less | Ordering::Equal => (GeoPosition::Interior, self.radius - d_center),
            Ordering::Greater => (GeoPosition::Exterior, d_center - self.radius),
        }
    }
}
