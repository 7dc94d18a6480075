use crate::geometry::geo_traits::Encloses;
use crate::geometry::primitives::{GeoCircle, GeoPoint};
use crate::regions::RegionDescriptor;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

pub fn circle_encloses_vertices(circle: &GeoCircle, vertices: &[GeoPoint]) -> bool {
    vertices.iter().all(|v| circle.encloses(v))
}

pub fn region_is_valid(region: &RegionDescriptor) -> bool {
    let mc = region.monitored_circle();
    let geometry_valid =
        mc.circle.radius.is_finite() && mc.circle.radius >= 0.0 && mc.circle.center.in_bounds();
    let identifier_valid = !mc.identifier.is_empty();
    let polygon_valid = match region.polygon_vertices() {
        Some(vertices) => {
            vertices.len() >= 3 && circle_encloses_vertices(&mc.circle, vertices)
        }
        None => true,
    };

    geometry_valid && identifier_valid && polygon_valid
}
