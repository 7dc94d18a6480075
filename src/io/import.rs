use anyhow::{Result, bail, ensure};
use itertools::Itertools;
use log::warn;

use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::SeparationDistance;
use crate::geometry::primitives::{GeoCircle, GeoPoint};
use crate::io::ext_repr::{ExtRegion, KIND_CIRCLE, KIND_POLYGON};
use crate::regions::{MonitoredCircle, RegionDescriptor};

/// Reconstructs a [`RegionDescriptor`] from its external representation.
///
/// Circles are rebuilt from center/radius/identifier; polygons additionally
/// require `polygonCoordinates` and reuse the persisted circle as their bounding
/// circle. Any other `kind` is a decode error.
pub fn import_region(ext: &ExtRegion) -> Result<RegionDescriptor> {
    ensure!(
        ext.radius.is_finite() && ext.radius >= 0.0,
        "invalid region radius: {}",
        ext.radius
    );
    let center = GeoPoint::from(ext.center);
    ensure!(center.in_bounds(), "region center out of bounds: {center:?}");
    ensure!(!ext.identifier.is_empty(), "region identifier is empty");

    let monitored = MonitoredCircle {
        circle: GeoCircle::new(center, ext.radius),
        identifier: ext.identifier.clone(),
        notify_on_entry: ext.notify_on_entry,
        notify_on_exit: ext.notify_on_exit,
    };

    match ext.kind {
        KIND_CIRCLE => {
            if ext.polygon_coordinates.is_some() {
                warn!("[IMPORT] circular region carries polygon coordinates, ignoring them");
            }
            Ok(RegionDescriptor::Circle(monitored))
        }
        KIND_POLYGON => {
            let Some(ext_vertices) = &ext.polygon_coordinates else {
                bail!("polygonal region without polygonCoordinates");
            };
            let vertices = ext_vertices.iter().map(|&v| GeoPoint::from(v)).collect_vec();
            ensure!(
                vertices.len() >= 3,
                "polygon requires at least 3 vertices, got {}",
                vertices.len()
            );
            ensure!(
                vertices.iter().all(|v| v.in_bounds()),
                "polygon vertex out of bounds: {vertices:?}"
            );

            //persisted bounding circles are expected to enclose their vertices,
            //flag drifted data but leave the monitored geometry as stored
            for v in &vertices {
                if let (GeoPosition::Exterior, d) = monitored.circle.separation_distance(v) {
                    warn!(
                        "[IMPORT] polygon vertex {v:?} lies {d:.1}m outside the stored bounding circle"
                    );
                }
            }

            Ok(RegionDescriptor::Polygon {
                vertices,
                bounding: monitored,
            })
        }
        kind => bail!("unrecognized region kind: {kind}"),
    }
}
