use itertools::Itertools;

use crate::io::ext_repr::{ExtGeoPoint, ExtRegion, KIND_CIRCLE, KIND_POLYGON};
use crate::regions::RegionDescriptor;

/// Converts a [`RegionDescriptor`] into its external representation.
pub fn export_region(region: &RegionDescriptor) -> ExtRegion {
    let mc = region.monitored_circle();
    let kind = match region {
        RegionDescriptor::Circle(_) => KIND_CIRCLE,
        RegionDescriptor::Polygon { .. } => KIND_POLYGON,
    };

    ExtRegion {
        kind,
        center: mc.circle.center.into(),
        radius: mc.circle.radius,
        identifier: mc.identifier.clone(),
        polygon_coordinates: region
            .polygon_vertices()
            .map(|vertices| vertices.iter().map(|&v| ExtGeoPoint::from(v)).collect_vec()),
        notify_on_entry: mc.notify_on_entry,
        notify_on_exit: mc.notify_on_exit,
    }
}
